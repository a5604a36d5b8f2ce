//! Rendering pipeline: compositor passes and the terminal output driver.

mod compositor;
mod driver;

pub use compositor::Compositor;
pub use driver::{parse_color, Driver};
