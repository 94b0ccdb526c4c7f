//! I/O layer for reading whitespace-separated number files.
pub mod text;
pub use text::read_numbers;
