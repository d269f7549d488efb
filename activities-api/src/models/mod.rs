pub mod activity;

// Re-export models for easier access
pub use activity::*;
