//! Thin wrappers over `tracing` used for user-facing status lines.
//!
//! `success!` is emitted at INFO level under [`SUCCESS_TARGET`] so the CLI
//! formatter can render it with its own symbol.

pub const SUCCESS_TARGET: &str = "domscout::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__tracing::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__tracing::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__tracing::error!($($arg)+)
    };
}
