pub mod cs;
pub mod error;

pub use cs::{dynamic, number};
pub use error::{Error, Result};
