pub mod regular;

// Re-export number sequence generators
pub use regular::{is_regular, nth_regular, nth_regular_big, regular_numbers, RegularNumbers};
