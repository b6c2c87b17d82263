//! UI Components
pub mod navigation;

// Re-exports
pub use navigation::{NavigationPill, PillItem, PillKey};
