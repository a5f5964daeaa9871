use ::elog::LevelFilter;

#[cfg(feature = "enable-log")]
mod enable;
#[cfg(feature = "enable-log")]
pub use enable::*;

#[cfg(not(feature = "enable-log"))]
mod disable;
#[cfg(not(feature = "enable-log"))]
pub use disable::*;

// warn与内置的#[warn]属性同名，只能通过re-export提供
pub use crate::_warn as warn;

pub(crate) const LOG_FILE: &str = "sharding.log";

// 未知的level按info处理
pub(crate) fn level_of(l: &str) -> LevelFilter {
    match l.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" | "fatal" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}
