use std::{env, fs, path::PathBuf};

pub use log::{debug, error, info, trace, warn, LevelFilter};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Logger, Root},
    filter::threshold::ThresholdFilter,
};
use sanitize_filename::sanitize_with_options;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerConfigBuilder<'a> {
    config: LoggerConfig<'a>,
}

impl<'a> LoggerConfigBuilder<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name_suffix(mut self, name_suffix: &'a str) -> Self {
        self.config.name_suffix = Some(name_suffix);
        self
    }

    #[must_use]
    pub fn program_name(mut self, program_name: &'a str) -> Self {
        self.config.program_name = Some(program_name);
        self
    }

    /// Enables the log file. Without a level no file is written.
    #[must_use]
    pub fn file_log_level(mut self, log_level: LevelFilter) -> Self {
        self.config.file_log_level = Some(log_level);
        self
    }

    #[must_use]
    pub fn stderr_log_level(mut self, log_level: LevelFilter) -> Self {
        self.config.stderr_log_level = Some(log_level);
        self
    }

    #[must_use]
    pub fn build(self) -> LoggerConfig<'a> {
        self.config
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerConfig<'a> {
    pub(crate) name_suffix: Option<&'a str>,
    pub(crate) program_name: Option<&'a str>,
    pub(crate) file_log_level: Option<LevelFilter>,
    pub(crate) stderr_log_level: Option<LevelFilter>,
}

impl<'a> From<LoggerConfigBuilder<'a>> for LoggerConfig<'a> {
    fn from(builder: LoggerConfigBuilder<'a>) -> Self {
        builder.build()
    }
}

impl LoggerConfig<'_> {
    #[must_use]
    pub fn builder() -> LoggerConfigBuilder<'static> {
        LoggerConfigBuilder::new()
    }
}

/// Installs the global logger.
///
/// Console output always goes to stderr, stdout belongs to the program's result.
pub fn init<'a, T: Into<LoggerConfig<'a>>>(cfg: T) -> anyhow::Result<log4rs::Handle> {
    let cfg: LoggerConfig = cfg.into();

    let config = Config::builder();
    let mut root = Root::builder();

    let config = {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let log_level = cfg.stderr_log_level.unwrap_or(LevelFilter::Warn);
        root = root.appender("stderr");
        config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr)),
        )
    };

    let log_file = match cfg.file_log_level {
        Some(log_level) => {
            let log_file = get_tmp_file(&cfg);
            fs::create_dir_all(log_file.parent().ok_or_else(|| {
                anyhow::anyhow!(
                    "Failed to get parent directory of log file path: {:?}",
                    &log_file
                )
            })?)?;

            Some((log_file, log_level))
        }
        None => None,
    };

    let config = match &log_file {
        Some((log_file, log_level)) => {
            let log = FileAppender::builder().build(log_file)?;
            root = root.appender("logfile");
            config.appender(
                Appender::builder()
                    .filter(Box::new(ThresholdFilter::new(*log_level)))
                    .build("logfile", Box::new(log)),
            )
        }
        None => config,
    };

    let config = config
        .logger(Logger::builder().build("hyper", LevelFilter::Error))
        .logger(Logger::builder().build("mio", LevelFilter::Error))
        .logger(Logger::builder().build("reqwest", LevelFilter::Warn))
        .logger(Logger::builder().build("rustls", LevelFilter::Error))
        .logger(Logger::builder().build("want", LevelFilter::Error))
        .build(root.build(LevelFilter::Trace))?;

    let handle = log4rs::init_config(config)?;

    if let Some((log_file, _)) = &log_file {
        debug!("Logging to {:?}", log_file);
    }

    Ok(handle)
}

fn get_tmp_file(config: &LoggerConfig) -> PathBuf {
    env::temp_dir().join(log_file_name(config))
}

fn log_file_name(config: &LoggerConfig) -> String {
    let program_name = config
        .program_name
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_string();

    let mut file_name = program_name;

    if let Some(suffix) = config.name_suffix {
        file_name = format!("{file_name}_{suffix}");
    }

    if cfg!(target_os = "windows") {
        file_name = format!("{file_name}.txt");
    }

    sanitize_with_options(
        file_name,
        sanitize_filename::Options {
            truncate: true,
            replacement: "^",
            ..Default::default()
        },
    )
}
