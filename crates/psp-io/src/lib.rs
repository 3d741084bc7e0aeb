//! psp-io - Data input for psp
//!
//! This crate reads samples from plain text:
//!
//! - **Scanner**: whitespace-separated numeric tokens
//! - **Reader**: scalar and paired sample loaders
//! - **Probe**: discovery of `test0001.txt`, `test0002.txt`, ... inputs
//!
//! # Design
//!
//! Reading mirrors formatted-scan semantics: the first token that is not a
//! number ends the read without an error. Only genuine I/O failures are
//! reported as [`IoError`].

pub mod error;
pub mod probe;
pub mod reader;
pub mod scan;

pub use error::*;
pub use probe::*;
pub use reader::*;
pub use scan::*;
