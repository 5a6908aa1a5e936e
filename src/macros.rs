/// Writes one timestamped, leveled line to stderr; stdout only carries the confirmation line.
/// With `Some(start)` the seconds elapsed since `start` are appended.
/// Use `info_time!` / `warn_time!` rather than calling this directly.
#[doc(hidden)]
#[macro_export]
macro_rules! log_time {
    ($level:literal, $since:expr, $($fmt:tt)+) => {{
        let local_now = ::chrono::Local::now();
        let since: Option<::chrono::DateTime<::chrono::Local>> = $since;
        let msg = format!($($fmt)+);
        match since.and_then(|t| (local_now - t).num_microseconds()) {
            Some(us) => eprintln!(
                "{:<30} {:<5} {} ({} sec)",
                local_now,
                $level,
                msg,
                us as f64 / 1_000_000.0
            ),
            None => eprintln!("{:<30} {:<5} {}", local_now, $level, msg),
        }
    }};
}

/// Progress line, optionally timed from a starting `DateTime<Local>`.
/// ```ignore
/// info_time!("fetched {} bytes", len);
/// let start = Local::now();
/// info_time!(start, "parsed {} categories", n);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $($rest:tt)*) => {
        $crate::log_time!("INFO", None, $strfm $($rest)*)
    };
    ($time:expr, $strfm:literal $($rest:tt)*) => {
        $crate::log_time!("INFO", Some($time), $strfm $($rest)*)
    };
}

/// Same as `info_time!`, marked `WARN`.
#[macro_export]
macro_rules! warn_time {
    ($strfm:literal $($rest:tt)*) => {
        $crate::log_time!("WARN", None, $strfm $($rest)*)
    };
    ($time:expr, $strfm:literal $($rest:tt)*) => {
        $crate::log_time!("WARN", Some($time), $strfm $($rest)*)
    };
}
