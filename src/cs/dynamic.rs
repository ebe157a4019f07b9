pub mod kadane;

// Re-export dynamic programming algorithms with descriptive names
pub use kadane::{max_nonempty_subarray_sum, max_subarray, max_subarray_sum, Subarray};
