//! Process-wide constants.

/// An approximation of π.
///
/// Exported for callers that want it. Nothing in this crate reads it, and it
/// never shows up in the program's output.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f32 = 3.1415926;

/// The value substituted into the second greeting line.
pub const COUNT: i32 = 16;
