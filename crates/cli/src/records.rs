//! Serde records for the detector-output interchange format.
//!
//! The external engine serializes one JSON object per fragment:
//! `{"box": [[x,y],[x,y],[x,y],[x,y]], "text": "...", "confidence": c}`.
//! The core stays serde-free; these records convert at the CLI boundary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textgrab_core::error::{GrabError, Result};
use textgrab_core::layout::{Detection, TextGroup};
use textgrab_core::utils::{Point, Quad};

/// One detection as serialized by the external engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Corner points, expected in winding order.
    #[serde(rename = "box")]
    pub corners: Vec<Point>,
    pub text: String,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

impl DetectionRecord {
    /// Converts into a core detection, rejecting malformed corner lists.
    pub fn into_detection(self) -> Result<Detection> {
        let quad = Quad::try_from(self.corners)?;
        Ok(Detection {
            quad,
            text: self.text,
            confidence: self.confidence,
        })
    }
}

impl From<&Detection> for DetectionRecord {
    fn from(det: &Detection) -> Self {
        Self {
            corners: det.quad.corners().to_vec(),
            text: det.text.clone(),
            confidence: det.confidence,
        }
    }
}

/// One output group with its merged extent.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRecord {
    #[serde(rename = "box")]
    pub corners: [Point; 4],
    pub text: String,
}

impl From<&TextGroup> for GroupRecord {
    fn from(group: &TextGroup) -> Self {
        Self {
            corners: group.quad().corners(),
            text: group.text().to_string(),
        }
    }
}

/// Reads detector output from a JSON file.
pub fn load_detections(path: &Path) -> Result<Vec<Detection>> {
    let data = fs::read_to_string(path)?;
    let records: Vec<DetectionRecord> = serde_json::from_str(&data)
        .map_err(|e| GrabError::MalformedInput(format!("{}: {}", path.display(), e)))?;
    records
        .into_iter()
        .map(DetectionRecord::into_detection)
        .collect()
}
