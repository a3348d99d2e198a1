//! OCR engine boundary
//!
//! The extraction pipeline treats optical character recognition as an
//! external collaborator behind the [`OcrEngine`] trait: given an image
//! path, produce raw text or fail. The field extractor is never invoked
//! with a failed recognition in hand.
//!
//! The production implementation shells out to the `tesseract` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Characters the recognizer is allowed to emit
///
/// ASCII alphanumerics, common currency symbols, and the punctuation the
/// field patterns care about. Anything else is noise on a receipt.
const CHAR_WHITELIST: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ$€£.,- ";

/// Page segmentation mode 6: assume a single uniform block of text.
/// Receipts are one narrow column; letting tesseract hunt for layout
/// fragments them badly.
const PAGE_SEG_MODE: &str = "6";

/// Raw text recovered from a receipt image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
}

/// An optical character recognition backend
pub trait OcrEngine {
    /// Recognize text in the image at `image`
    ///
    /// May be slow (seconds). Unreadable images or engine failures surface
    /// as [`Error::Ocr`].
    fn recognize(&self, image: &Path) -> Result<RecognizedText>;
}

/// OCR engine that drives the `tesseract` command-line binary
pub struct TesseractEngine {
    binary: PathBuf,
}

impl TesseractEngine {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
        }
    }

    /// Use a specific tesseract binary instead of the one on PATH
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Arguments passed to tesseract for a given image
    fn command_args(image: &Path) -> Vec<String> {
        vec![
            image.display().to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            "eng".to_string(),
            "--psm".to_string(),
            PAGE_SEG_MODE.to_string(),
            "-c".to_string(),
            format!("tessedit_char_whitelist={}", CHAR_WHITELIST),
            "-c".to_string(),
            "preserve_interword_spaces=1".to_string(),
        ]
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &Path) -> Result<RecognizedText> {
        debug!(image = %image.display(), "running tesseract");

        let output = Command::new(&self.binary)
            .args(Self::command_args(image))
            .output()
            .map_err(|e| {
                Error::Ocr(format!(
                    "failed to run {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| Error::Ocr(format!("tesseract produced non-UTF-8 output: {}", e)))?;

        debug!(bytes = text.len(), "tesseract finished");
        Ok(RecognizedText { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args_carry_tuning() {
        let args = TesseractEngine::command_args(Path::new("receipt.jpg"));
        assert_eq!(args[0], "receipt.jpg");
        assert_eq!(args[1], "stdout");
        assert!(args.contains(&"--psm".to_string()));
        assert!(args.contains(&"6".to_string()));
        assert!(args
            .iter()
            .any(|a| a.starts_with("tessedit_char_whitelist=") && a.contains("$€£")));
        assert!(args.contains(&"preserve_interword_spaces=1".to_string()));
    }

    #[test]
    fn test_missing_binary_maps_to_ocr_error() {
        let engine = TesseractEngine::new().with_binary("/nonexistent/tesseract-bin");
        let err = engine.recognize(Path::new("receipt.jpg")).unwrap_err();
        assert!(matches!(err, Error::Ocr(_)));
    }
}
