//! Runtime-boundary errors.
//!
//! Nothing inside the core fails: geometry clamps, focus rejections are
//! boolean results, unsupported glyphs get substitutes. Errors only exist at
//! the terminal boundary, where I/O genuinely can fail.

use thiserror::Error;

/// Errors surfaced by the application runtime and terminal driver.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal I/O failed (raw mode, alternate screen, or writes).
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for runtime results.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: Error = io.into();
        assert!(err.to_string().contains("boom"));
    }
}
