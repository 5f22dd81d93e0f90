//! Global config handle.
//!
//! The configuration is loaded once before the first render and only read
//! afterwards. `arc-swap` keeps reads lock-free from any render context.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
