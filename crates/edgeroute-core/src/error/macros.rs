//! Error macros for edgeroute

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a malformed edge record
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::RouteError::malformed($line, format!($($arg)*)))
    };
}
