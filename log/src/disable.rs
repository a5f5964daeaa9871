#[macro_export]
macro_rules! noop{
    ($($arg:tt)+) => {
        {
            let _ = format_args!($($arg)+);
            ()
        }
    };
}
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::noop!($($arg)+)
    };
}
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::noop!($($arg)+)
    };
}

#[macro_export]
macro_rules! _warn {
    ($($arg:tt)+) => {
        $crate::noop!($($arg)+)
    };
}

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

// 日志关闭时只留一个提示，level参数仅做校验
pub fn init(path: &str, l: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(path)?;
    let mut log = std::fs::File::create(format!("{}/{}", path, crate::LOG_FILE))?;
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let hint = format!(
        "===> log disabled: {} secs, level {} ignored <===",
        secs,
        crate::level_of(l)
    );
    log.write_all(hint.as_bytes())?;
    Ok(())
}
