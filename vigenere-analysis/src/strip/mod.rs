//! Per-key-position analysis: splitting, frequency profiling and candidate ranking

pub mod splitter;
pub mod frequency;
pub mod ranking;

pub use splitter::*;
pub use frequency::*;
pub use ranking::*;
