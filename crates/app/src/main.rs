use std::{
    io::{self, Write},
    process::exit,
};

use app_config::{APPLICATION_NAME, CONFIG};
use app_downloader::{
    downloaders::{
        common::request::Client, generic::HttpDownloader, instagram::InstagramFetcher,
    },
    ImportError, ImportResult,
};
use app_helpers::json::to_ascii_line;
use app_logger::{error, info, trace, LoggerConfig};

fn main() {
    let logger = LoggerConfig::builder()
        .program_name(APPLICATION_NAME)
        .name_suffix(&CONFIG.run.url)
        .stderr_log_level(CONFIG.log.stderr_level());
    let logger = if CONFIG.log.log_file {
        logger.file_log_level(CONFIG.log.file_level())
    } else {
        logger
    };

    if app_logger::init(logger).is_err() {
        eprintln!("Failed to initialize logger.");
        exit(1);
    }

    trace!("Config: {:?}", *CONFIG);

    let client = Client::from_config(&CONFIG.http).unwrap_or_else(|e| {
        error!("{e:#}");
        exit(1);
    });
    let fetcher = InstagramFetcher::new(client.clone());
    let downloader = HttpDownloader::new(client);

    let outcome = app_downloader::import(&CONFIG.run.url, &CONFIG.run.output, &fetcher, &downloader);

    exit(emit(&outcome, &mut io::stdout().lock()));
}

/// Writes the outcome's JSON line to `out` and returns the exit code.
fn emit(outcome: &Result<ImportResult, ImportError>, out: &mut impl Write) -> i32 {
    let (line, code) = match outcome {
        Ok(result) => {
            info!("Imported {:?}", &result.shortcode);
            (to_ascii_line(result), 0)
        }
        Err(e) => match e.report() {
            Some(report) => {
                info!("Import failed: {}", e);
                (to_ascii_line(&report), e.exit_code())
            }
            None => {
                eprintln!("{e}");
                return e.exit_code();
            }
        },
    };

    let line = match line {
        Ok(line) => line,
        Err(e) => {
            error!("Failed to serialize result: {e}");
            return 1;
        }
    };

    match writeln!(out, "{line}").and_then(|()| out.flush()) {
        Ok(()) => code,
        Err(e) => {
            error!("Failed to write result: {e}");
            1
        }
    }
}
