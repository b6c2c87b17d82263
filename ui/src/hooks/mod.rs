//! Custom hooks.
pub mod animated_rect;

// Re-exports
pub use animated_rect::use_animated_rect;
