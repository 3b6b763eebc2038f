//! Console logging macros
//!
//! On wasm32 the message goes to the browser console through `web_sys`.
//! Native builds (tests, tools) compile the arguments but print nothing,
//! since the JS imports do not exist there.
//!
//! Usage:
//! ```rust
//! use hillride_engine::console_log;
//!
//! let gap = 5.0;
//! console_log!("frame gap {}s", gap);
//! ```

/// Log an informational message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_are_silent_natively() {
        let gap = 5.0f64;
        console_log!("frame gap {}s", gap);
        console_warn!("rejected settings: {}", "friction");
    }
}
