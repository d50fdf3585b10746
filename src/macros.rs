//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console in **debug** builds only.
///
/// Release builds compile the arguments away entirely, so it is safe to use
/// inside hot paths such as the scroll handlers.
///
/// ```rust,ignore
/// debug_log!("section {} active: {}", id, active);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// Shorthand for `web_sys::console::warn_1(&format!(..).into())`.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}
