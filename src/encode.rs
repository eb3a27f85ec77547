//! Encoding requests and the operations that turn text into an image.

use image::GrayImage;
use qrcode::{types::QrError, EcLevel, QrCode};

use crate::error::EncodeError;
use crate::raster;

/// Default edge length of the produced raster, in pixels.
pub const DEFAULT_SIZE: u32 = 512;

/// Default quiet zone width, in modules, per the QR specification.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Error correction level of a QR symbol.
///
/// Levels trade data capacity for resilience to partial damage, in
/// increasing correction strength: `Low` < `Medium` < `Quartile` < `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    #[default]
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl ErrorCorrection {
    fn to_ec_level(self) -> EcLevel {
        match self {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// A single encoding request: the text to encode plus rendering parameters.
///
/// Constructed with [`EncodeRequest::new`], which fills in the defaults
/// (512x512 pixels, medium error correction, 4-module quiet zone), then
/// adjusted with the chainable setters. A request is passed once to
/// [`encode`](EncodeRequest::encode) and discarded; the returned image is
/// owned solely by the caller.
///
/// # Example
///
/// ```rust
/// use qrimage::{EncodeRequest, ErrorCorrection};
///
/// let img = EncodeRequest::new("Hello, World!")
///     .size(256, 256)
///     .error_correction(ErrorCorrection::High)
///     .encode()
///     .unwrap();
/// assert_eq!(img.dimensions(), (256, 256));
/// ```
#[derive(Debug, Clone)]
pub struct EncodeRequest<'a> {
    text: &'a str,
    width: u32,
    height: u32,
    level: ErrorCorrection,
    quiet_zone: u32,
}

impl<'a> EncodeRequest<'a> {
    /// Creates a request for `text` with default rendering parameters.
    pub fn new(text: &'a str) -> Self {
        EncodeRequest {
            text,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            level: ErrorCorrection::default(),
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }

    /// Sets the dimensions of the produced raster, in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the error correction level.
    pub fn error_correction(mut self, level: ErrorCorrection) -> Self {
        self.level = level;
        self
    }

    /// Sets the quiet zone width, in modules.
    pub fn quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Encodes the request into a monochrome image of exactly the requested
    /// dimensions.
    ///
    /// The text is encoded as UTF-8 bytes into a module matrix, which is
    /// then scaled, centered, and drawn dark-on-light. Every pixel of the
    /// result is either black or white, and identical requests produce
    /// pixel-identical images.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] naming the cause: zero dimensions, a
    /// raster too small for the symbol, a payload beyond the capacity of
    /// the chosen error correction level, or an internal encoder fault.
    pub fn encode(self) -> Result<GrayImage, EncodeError> {
        if self.width == 0 || self.height == 0 {
            return Err(EncodeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let code = QrCode::with_error_correction_level(
            self.text.as_bytes(),
            self.level.to_ec_level(),
        )
        .map_err(|err| match err {
            QrError::DataTooLong => EncodeError::CapacityExceeded {
                len: self.text.len(),
                level: self.level,
            },
            other => EncodeError::Encoder(other),
        })?;
        raster::rasterize(&code, self.width, self.height, self.quiet_zone)
    }
}

/// Encodes `text` into a `width` x `height` monochrome QR image.
///
/// Shorthand for building an [`EncodeRequest`] with the default quiet zone.
///
/// # Errors
///
/// See [`EncodeRequest::encode`].
///
/// # Example
///
/// ```rust
/// use qrimage::{encode, ErrorCorrection};
///
/// let img = encode("https://example.org/r/42", 512, 512, ErrorCorrection::Medium).unwrap();
/// assert_eq!(img.dimensions(), (512, 512));
/// ```
pub fn encode(
    text: &str,
    width: u32,
    height: u32,
    level: ErrorCorrection,
) -> Result<GrayImage, EncodeError> {
    EncodeRequest::new(text)
        .size(width, height)
        .error_correction(level)
        .encode()
}

/// Encodes `text` with default parameters, collapsing any failure to `None`.
///
/// For callers that only present "could not generate code" and have no use
/// for the cause. The cause is logged at warn level; prefer
/// [`EncodeRequest::encode`] when the caller can act on it.
pub fn encode_or_none(text: &str) -> Option<GrayImage> {
    match EncodeRequest::new(text).encode() {
        Ok(img) => Some(img),
        Err(err) => {
            log::warn!("QR encoding failed for {} byte payload: {err}", text.len());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_512() {
        let img = EncodeRequest::new("Hello, World!").encode().unwrap();
        assert_eq!(img.dimensions(), (512, 512));
    }

    #[test]
    fn test_pixels_are_binary() {
        let img = encode("Hello, World!", 512, 512, ErrorCorrection::Medium).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_identical_requests_are_pixel_identical() {
        let a = encode("determinism", 400, 400, ErrorCorrection::Quartile).unwrap();
        let b = encode("determinism", 400, 400, ErrorCorrection::Quartile).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let err = encode("x", 0, 512, ErrorCorrection::Low).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidDimensions { width: 0, height: 512 }));
    }

    #[test]
    fn test_one_by_one_fails_cleanly() {
        let err = encode("x", 1, 1, ErrorCorrection::Low).unwrap_err();
        assert!(matches!(err, EncodeError::RasterTooSmall { .. }));
    }

    #[test]
    fn test_quiet_zone_setter_is_honored() {
        let img = EncodeRequest::new("Hello, World!").quiet_zone(8).encode().unwrap();
        assert_eq!(img.dimensions(), (512, 512));

        // A 21-module symbol framed by 40 modules needs more than 64 pixels.
        let err = EncodeRequest::new("Hello, World!")
            .size(64, 64)
            .quiet_zone(40)
            .encode()
            .unwrap_err();
        assert!(matches!(err, EncodeError::RasterTooSmall { .. }));
    }

    #[test]
    fn test_huge_quiet_zone_fails_cleanly() {
        let err = EncodeRequest::new("x").quiet_zone(u32::MAX).encode().unwrap_err();
        assert!(matches!(err, EncodeError::RasterTooSmall { .. }));
    }

    #[test]
    fn test_oversized_payload_is_capacity_error() {
        // Version 40 at High holds at most 1273 bytes.
        let text = "a".repeat(4096);
        let err = encode(&text, 512, 512, ErrorCorrection::High).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::CapacityExceeded { len: 4096, level: ErrorCorrection::High }
        ));
    }

    #[test]
    fn test_reservation_url_round() {
        let url = "https://example.org/r/42";
        let first = encode(url, 512, 512, ErrorCorrection::Medium).unwrap();
        assert_eq!(first.dimensions(), (512, 512));
        assert!(first.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));

        let second = encode(url, 512, 512, ErrorCorrection::Medium).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_encode_or_none_absorbs_failure() {
        assert!(encode_or_none("Hello, World!").is_some());
        assert!(encode_or_none(&"a".repeat(4096)).is_none());
    }
}
