//! Failure taxonomy for QR raster encoding.

use thiserror::Error;

use crate::encode::ErrorCorrection;

/// Errors that can occur while encoding text into a raster image.
///
/// Each variant names a distinct cause, so callers can tell an oversized
/// payload apart from bad geometry. Callers that only care about
/// presence or absence of an image can use
/// [`encode_or_none`](crate::encode_or_none) instead.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height was zero.
    #[error("raster dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The requested raster is too small to hold one pixel per module.
    #[error("{width}x{height} raster cannot fit a {modules}x{modules} module grid")]
    RasterTooSmall {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// Symbol width in modules, quiet zone included.
        modules: u32,
    },

    /// The payload does not fit a version 40 symbol at the chosen level.
    #[error("payload of {len} bytes exceeds capacity at level {level:?}")]
    CapacityExceeded {
        /// Payload length in bytes.
        len: usize,
        /// Error correction level the capacity was computed for.
        level: ErrorCorrection,
    },

    /// Any other fault reported by the underlying QR library.
    #[error("QR encoding failed: {0}")]
    Encoder(qrcode::types::QrError),
}
