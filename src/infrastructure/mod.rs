//! Infrastructure layer: line sources feeding the tree builder
//!
//! This layer owns file and stdin handles and turns I/O failures into errors.

pub mod error;
pub mod source;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use source::{load_from_path, load_from_reader, load_from_stdin, load_tree};
pub use traits::{FileSource, LineSource, StdinSource, StringSource};
