//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/signpost.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
