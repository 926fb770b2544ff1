use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Capture device or color conversion failure reported by OpenCV.
    #[error("capture device error: {0}")]
    Capture(#[from] opencv::Error),
    /// Serial device enumeration failure.
    #[error("device listing failed: {0}")]
    Io(#[from] io::Error),
}
