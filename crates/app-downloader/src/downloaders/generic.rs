use std::{fs::File, path::Path};

use anyhow::anyhow;
use app_logger::{debug, info};
use reqwest::blocking::Client;
use url::Url;

use super::FileDownloader;

/// Downloads a URL into a file with a single blocking GET.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl FileDownloader for HttpDownloader {
    fn download(&self, url: &str, destination: &Path) -> anyhow::Result<()> {
        info!("Downloading {:?} to {:?}", url, destination);

        let url = Url::parse(url).map_err(|e| anyhow!("Invalid URL {url:?}: {e}"))?;

        let mut res = self
            .client
            .get(url)
            .send()
            .map_err(|e| anyhow!("Failed to send request: {e}"))?
            .error_for_status()
            .map_err(|e| anyhow!("Failed to get response: {e}"))?;

        debug!("Writing to file: {:?}", destination);
        let mut out_file = File::create(destination)
            .map_err(|e| anyhow!("Failed to create file {destination:?}: {e}"))?;

        let written = res
            .copy_to(&mut out_file)
            .map_err(|e| anyhow!("Failed to copy response to file: {e}"))?;
        debug!("Wrote {} bytes to {:?}", written, destination);

        Ok(())
    }
}
