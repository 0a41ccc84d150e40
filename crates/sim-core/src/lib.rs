pub mod document;
pub mod error;
pub mod hash;

pub use document::*;
pub use error::*;
pub use hash::*;
