//! Logging utilities with colored output.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "{} sidebar sections", count);
//! debug!("config"; "loaded from {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Only `check` reports go to stdout. Everything else goes to stderr so
/// `query` and `render` output stays machine-readable.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if module_lower != "check" {
        let mut err = stderr().lock();
        writeln!(err, "{prefix} {message}").ok();
        err.flush().ok();
        return;
    }

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "check" => prefix.bright_green().bold().to_string(),
        "render" | "query" => prefix.bright_blue().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "hint" => prefix.bright_cyan().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}
