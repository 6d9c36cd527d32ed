//! Some utilities

use std::path::Path;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Configures the logger.
///
/// With a `log_path`, `Info` and higher go to that file, rotated daily, and
/// records from `ftlog::appender` itself go to a sibling `*.err.log` file.
/// Without one, `Warn` and higher go to stderr.
///
/// # Errors
///
/// - If the logger could not be initialized.
pub fn configure_logger(log_path: Option<&Path>) -> Result<LoggerGuard, String> {
    let builder = match log_path {
        Some(log_path) => {
            let writer = FileAppender::builder().path(log_path).rotate(Period::Day).build();
            let err_path = log_path.with_extension("err.log");

            ftlog::Builder::new()
                // global max log level
                .max_log_level(LevelFilter::Info)
                .root(writer)
                // write `Warn` and `Error` logs in ftlog::appender to `err_path` instead of `log_path`
                .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
                .appender("ftlog-appender", FileAppender::new(err_path))
        }
        None => ftlog::Builder::new()
            .max_log_level(LevelFilter::Warn)
            .root(std::io::stderr()),
    };

    builder.try_init().map_err(|e| e.to_string())
}
