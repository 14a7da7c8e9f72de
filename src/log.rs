// RetroPixel
// copyright zipxing@hotmail.com 2022～2025


//! Log module sets up a file logger, reference
//! https://docs.rs/log4rs
//!
//! The rest of the crate only uses the `log` macros, so callers may install
//! any other logger instead.

use crate::{config::LogConfig, error::Result};
#[cfg(feature = "log4rs")]
use crate::error::PixelError;
use log::LevelFilter;

#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
#[cfg(feature = "log4rs")]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| PixelError::Config(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| PixelError::Config(e.to_string()))?;
    Ok(())
}

/// Without log4rs there is nothing to install; records go to whatever
/// logger the host application set up.
#[cfg(not(feature = "log4rs"))]
pub fn init_log(level: LevelFilter, _file_path: &str) -> Result<()> {
    log::set_max_level(level);
    Ok(())
}

/// init logs from the `[log]` table of a RenderConfig
pub fn init_log_from(cfg: &LogConfig) -> Result<()> {
    init_log(cfg.level_filter()?, &cfg.file)
}
