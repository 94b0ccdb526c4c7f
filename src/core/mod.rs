//! Core computation building blocks: numeric token parsing and the weighted
//! average-of-squares calculator. These are the primitives consumed by the
//! high-level `api` module.
pub mod parse;
pub mod stats;
