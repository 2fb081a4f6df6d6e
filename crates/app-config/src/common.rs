use std::{path::PathBuf, time::Duration};

use app_logger::LevelFilter;
use clap::{ArgAction, Args, ValueHint};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, \
                                      like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Args)]
pub struct RunConfig {
    #[arg(long, value_hint = ValueHint::Url)]
    /// The Instagram post, reel or TV URL to import.
    pub url: String,

    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    /// Directory to write downloaded media into.
    ///
    /// Created (with parents) if it does not exist yet.
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default, Args)]
pub struct HttpConfig {
    #[arg(long, default_value = None, value_hint = ValueHint::Other)]
    /// The user agent sent with every request.
    ///
    /// Defaults to a desktop Chrome user agent
    pub(crate) user_agent: Option<String>,

    #[arg(long = "timeout", default_value = None, value_name = "SECONDS")]
    /// Per-request timeout in seconds.
    ///
    /// If not provided, the HTTP client default is used
    pub(crate) timeout_secs: Option<u64>,
}

impl HttpConfig {
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct LogConfig {
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    /// Log more to stderr. Can be repeated.
    pub verbose: u8,

    #[arg(short, long)]
    /// Don't log anything to stderr.
    pub quiet: bool,

    #[arg(long)]
    /// Also write a debug log into the system temp directory.
    pub log_file: bool,
}

impl LogConfig {
    #[must_use]
    pub const fn stderr_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    #[must_use]
    pub const fn file_level(&self) -> LevelFilter {
        if self.verbose > 2 {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        }
    }
}
