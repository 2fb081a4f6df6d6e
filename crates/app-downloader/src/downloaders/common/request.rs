use anyhow::Context;
use app_config::HttpConfig;
use reqwest::blocking::{Client as ReqwestClient, ClientBuilder as ReqwestClientBuilder};

pub struct Client;

impl Client {
    pub fn from_config(config: &HttpConfig) -> anyhow::Result<ReqwestClient> {
        Self::builder(config)
            .build()
            .context("Failed to create HTTP client")
    }

    pub fn builder(config: &HttpConfig) -> ReqwestClientBuilder {
        let builder = ReqwestClient::builder().user_agent(config.user_agent());

        match config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }
}
