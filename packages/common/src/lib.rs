pub mod span;
pub mod words;

pub use span::*;
pub use words::*;
