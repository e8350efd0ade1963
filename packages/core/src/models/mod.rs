//! Data Structures
//!
//! The host editor owns and mutates these; this crate only reads them
//! during a single command invocation.

mod block;

pub use block::ContentBlock;
