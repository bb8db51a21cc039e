//! Console logging
//!
//! On wasm32 everything goes to the browser console through `web_sys`.
//! Native builds print to stderr in debug builds only, so tests and
//! embedding hosts stay quiet in release.

#[doc(hidden)]
pub fn emit_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
    {
        eprintln!("[pbd-kernel] {}", message);
    }
    #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
    {
        let _ = message;
    }
}

#[doc(hidden)]
pub fn emit_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
    {
        eprintln!("[pbd-kernel] WARN {}", message);
    }
    #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
    {
        let _ = message;
    }
}

/// `kernel_log!("...", args)` - informational console line
#[macro_export]
macro_rules! kernel_log {
    ($($arg:tt)*) => {
        $crate::core::logging::emit_log(&format!($($arg)*))
    };
}

/// `kernel_warn!("...", args)` - rejected commands, suspicious config
#[macro_export]
macro_rules! kernel_warn {
    ($($arg:tt)*) => {
        $crate::core::logging::emit_warn(&format!($($arg)*))
    };
}
