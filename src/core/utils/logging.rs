//! Console Logging Macros
//!
//! On wasm32 these forward to the browser console via `web_sys::console`,
//! reached through the crate's own re-export so callers need no `web-sys`
//! dependency of their own.
//! Native builds (tests, benches) compile them to nothing, since the
//! console bindings are only callable inside a JS host.
//!
//! Usage:
//! ```rust
//! use gravwell_engine::console_log;
//!
//! let n = 3;
//! console_log!("stepped {} rounds", n);
//! ```

/// Log a formatted message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a formatted warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
