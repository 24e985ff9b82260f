//! Lightweight debug logging gated by QUADRATIC_DEBUG=1 (or `--debug`).
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("QUADRATIC_DEBUG").ok().as_deref() == Some("1"))
}

/// Turn logging on for the rest of the process. Has no effect once
/// `is_enabled` has already been consulted.
pub fn force_enable() {
    let _ = ENABLED.set(true);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[debug] {}", format!($($arg)*)); }
    }};
}
