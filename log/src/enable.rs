use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use std::io::{Error, ErrorKind, Result};
use std::path::PathBuf;

pub use elog;

#[macro_export]
macro_rules! debug{
    ($($arg:tt)+) => ($crate::elog::debug!($($arg)+))
}
#[macro_export]
macro_rules! info{
    ($($arg:tt)+) => ($crate::elog::info!($($arg)+))
}

#[macro_export]
macro_rules! _warn{
    ($($arg:tt)+) => ($crate::elog::warn!($($arg)+));
}

/// 日志写入 {path}/sharding.log，level取值 trace|debug|info|warn|error。
/// 同一进程内只能初始化一次，重复初始化返回AlreadyExists。
pub fn init(path: &str, l: &str) -> Result<()> {
    std::fs::create_dir_all(path)?;
    let mut file = PathBuf::new();
    file.push(path);
    file.push(crate::LOG_FILE);

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "[sharding] {d} - {l} - {t} - {m}{n}",
        )))
        .build(file)?;

    let level = crate::level_of(l);
    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("build log config:{:?}", e)))?;

    let _handle = log4rs::init_config(config)
        .map_err(|e| Error::new(ErrorKind::AlreadyExists, format!("init log failed:{:?}", e)))?;

    Ok(())
}
