use clap::Parser;

use crate::{
    common::{HttpConfig, LogConfig, RunConfig},
    Config,
};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    #[command(flatten)]
    pub run: RunConfig,

    #[command(flatten, next_help_heading = Some("HTTP"))]
    pub http: HttpConfig,

    #[command(flatten, next_help_heading = Some("Logging"))]
    pub log: LogConfig,
}

impl CliArgs {
    pub(crate) fn into_config(self) -> Config {
        Config {
            run: self.run,
            http: self.http,
            log: self.log,
        }
    }
}
