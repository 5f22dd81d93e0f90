//! Utility modules.

pub use plural::plural_count;

mod plural;
