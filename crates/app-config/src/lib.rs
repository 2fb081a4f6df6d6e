use std::ffi::OsString;

use clap::Parser;
use cli::CliArgs;
use lazy_static::lazy_static;

pub use crate::common::{HttpConfig, LogConfig, RunConfig, DEFAULT_USER_AGENT};

mod cli;
mod common;

pub static APPLICATION_NAME: &str = "instagram-import";

lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub run: RunConfig,

    pub http: HttpConfig,

    pub log: LogConfig,
}

impl Config {
    /// Parses the process arguments, exiting with a usage error if they are invalid.
    fn new() -> Self {
        CliArgs::parse().into_config()
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CliArgs::try_parse_from(args).map(CliArgs::into_config)
    }
}
