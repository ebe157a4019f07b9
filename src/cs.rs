pub mod dynamic;
pub mod number;

// Re-export all modules
pub use dynamic::*;
pub use number::*;
