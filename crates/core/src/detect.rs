//! Detector boundary.
//!
//! The detection engine itself is an external collaborator; this module
//! owns only its contract: the in-memory image representation handed to
//! it, validation of that representation, and the trait implementations
//! plug into. Detection runs as an opaque blocking call that completes
//! before any grouping starts.

use crate::error::{GrabError, Result};
use crate::layout::Detection;

/// A decoded raster frame in the coordinate space the detector reports
/// boxes in.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFrame {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl ImageFrame {
    /// Creates a frame, validating that the buffer matches the declared
    /// geometry. A mismatched or empty frame is rejected up front so the
    /// failure surfaces before detection or grouping is attempted.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(GrabError::InvalidImage(format!(
                "dimensions must be nonzero, got {}x{}x{}",
                width, height, channels
            )));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(GrabError::InvalidImage(format!(
                "buffer holds {} bytes, {}x{}x{} needs {}",
                data.len(),
                width,
                height,
                channels,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A text detection engine.
///
/// Implementations must emit quads with corners in winding order
/// (top-left, top-right, bottom-right, bottom-left); the grouping core
/// does not validate this.
pub trait Detector {
    /// Runs detection over the frame, returning one [`Detection`] per
    /// recognized fragment.
    fn detect(&self, frame: &ImageFrame) -> Result<Vec<Detection>>;
}

/// Detector backed by a fixed list of detections.
///
/// Stands in for the external engine in tests and fixtures; `detect`
/// hands back clones of the stored list regardless of the frame.
#[derive(Debug, Clone, Default)]
pub struct StaticDetector {
    detections: Vec<Detection>,
}

impl StaticDetector {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }
}

impl Detector for StaticDetector {
    fn detect(&self, _frame: &ImageFrame) -> Result<Vec<Detection>> {
        Ok(self.detections.clone())
    }
}
