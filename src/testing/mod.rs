//! Test helpers: render output as plain strings.
//!
//! These helpers turn painted surfaces into newline-joined strings with
//! trailing blanks trimmed, which keeps assertions and snapshot tests
//! readable. They are part of the public API so downstream crates can test
//! their own components the same way.

mod snapshot;

pub use snapshot::{render_to_string, screen_to_string, surface_to_string};
