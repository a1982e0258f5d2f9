//! Cross-platform diagnostics.
//!
//! The `log_*!` macros write to `web_sys::console` in the browser and to
//! the `tracing` subscriber on native builds.

#[cfg(target_arch = "wasm32")]
mod backend {
    pub fn info(msg: &str) {
        web_sys::console::log_1(&msg.into());
    }

    pub fn warn(msg: &str) {
        web_sys::console::warn_1(&msg.into());
    }

    pub fn error(msg: &str) {
        web_sys::console::error_1(&msg.into());
    }

    pub fn debug(msg: &str) {
        web_sys::console::debug_1(&msg.into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    pub fn info(msg: &str) {
        tracing::info!("{msg}");
    }

    pub fn warn(msg: &str) {
        tracing::warn!("{msg}");
    }

    pub fn error(msg: &str) {
        tracing::error!("{msg}");
    }

    pub fn debug(msg: &str) {
        tracing::debug!("{msg}");
    }
}

pub fn log_info_impl(msg: &str) {
    backend::info(msg);
}

pub fn log_warn_impl(msg: &str) {
    backend::warn(msg);
}

pub fn log_error_impl(msg: &str) {
    backend::error(msg);
}

pub fn log_debug_impl(msg: &str) {
    backend::debug(msg);
}

/// Log an info message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_info_impl(&format!($($arg)*))
    };
}

/// Log a warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log_warn_impl(&format!($($arg)*))
    };
}

/// Log an error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_error_impl(&format!($($arg)*))
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_debug_impl(&format!($($arg)*))
    };
}
