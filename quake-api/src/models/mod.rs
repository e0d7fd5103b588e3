pub mod earthquake;
pub mod message;

// Re-export models for easier access
pub use earthquake::*;
pub use message::*;
