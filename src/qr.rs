//! QR code rendering for payment tokens

use crate::error::{Error, Result};
use image::{DynamicImage, Luma};
use qrcode::{EcLevel, QrCode};

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    ec_level: EcLevel,
    /// Minimum rendered dimensions in pixels
    min_dimensions: u32,
}

/// Minimum size for reliable scanning
const DEFAULT_MIN_DIMENSIONS: u32 = 400;

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC, 400px minimum)
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::M,
            min_dimensions: DEFAULT_MIN_DIMENSIONS,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ec_level(ec_level: EcLevel) -> Self {
        Self {
            ec_level,
            min_dimensions: DEFAULT_MIN_DIMENSIONS,
        }
    }

    /// Override the minimum rendered dimensions.
    pub fn min_dimensions(mut self, pixels: u32) -> Self {
        self.min_dimensions = pixels.max(1);
        self
    }

    /// Encode a string into a QR code image
    pub fn encode_string(&self, data: &str) -> Result<DynamicImage> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ec_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimensions, self.min_dimensions)
            .build();

        Ok(DynamicImage::ImageLuma8(image))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an error correction level identifier (case-insensitive) from a string slice.
pub fn parse_ec_level(value: &str) -> Option<EcLevel> {
    match value.to_ascii_lowercase().as_str() {
        "l" | "low" => Some(EcLevel::L),
        "m" | "medium" => Some(EcLevel::M),
        "q" | "quartile" => Some(EcLevel::Q),
        "h" | "high" => Some(EcLevel::H),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_creation() {
        let _encoder = QrEncoder::new();
    }

    #[test]
    fn test_encode_string() {
        let encoder = QrEncoder::new();
        let result = encoder.encode_string("hash_payment_test");
        assert!(result.is_ok());
    }

    #[test]
    fn test_encode_respects_min_dimensions() {
        let encoder = QrEncoder::new().min_dimensions(200);
        let image = encoder.encode_string("sized payload").unwrap();
        assert!(image.width() >= 200);
        assert!(image.height() >= 200);
    }

    #[test]
    fn test_parse_ec_level() {
        assert_eq!(parse_ec_level("L"), Some(EcLevel::L));
        assert_eq!(parse_ec_level("quartile"), Some(EcLevel::Q));
        assert_eq!(parse_ec_level("banana"), None);
    }

    #[test]
    fn test_round_trip() {
        let encoder = QrEncoder::new();

        let original = "hash_payment_round-trip";
        let qr_image = encoder.encode_string(original).unwrap();

        let mut prepared = rqrr::PreparedImage::prepare(qr_image.to_luma8());
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (_meta, content) = grids[0].decode().unwrap();
        assert_eq!(content, original);
    }
}
