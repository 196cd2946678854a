#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod constants;
pub mod greeting;
pub mod log;
pub mod program;

pub use constants::{COUNT, PI};
