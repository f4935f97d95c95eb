//! Error macros for anscore

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AnscoreError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::AnscoreError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid config errors
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::AnscoreError::invalid_config(format!($($arg)*)))
    };
}
