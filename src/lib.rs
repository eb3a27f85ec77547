//! # qrimage
//!
//! A Rust library for rendering QR codes into fixed-size monochrome raster
//! images.
//!
//! `qrimage` wraps the [`qrcode`] matrix encoder: text goes in, and an
//! [`image::GrayImage`] of exactly the requested dimensions comes out, with
//! every pixel either black or white. The module grid is scaled by a whole
//! number of pixels per module, centered, and framed by a quiet zone, so the
//! result stays scannable at any requested size that fits the symbol.
//! Encoding is a pure transformation: no state is shared between calls, and
//! identical inputs always produce pixel-identical images.
//!
//! ## Features
//!
//! - Encode arbitrary UTF-8 text at any of the four error correction levels.
//! - Exact output geometry: the image is always `width` x `height` pixels.
//! - Explicit failure causes: oversized payload, bad geometry, and internal
//!   encoder faults are distinct [`EncodeError`] variants.
//! - An absence-style shim, [`encode_or_none`], for callers that only need
//!   image-or-nothing.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrimage = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Encode a reservation URL with the defaults (512x512, medium error
//! correction):
//!
//! ```rust
//! use qrimage::EncodeRequest;
//!
//! let img = EncodeRequest::new("https://example.org/r/42").encode().unwrap();
//! assert_eq!(img.dimensions(), (512, 512));
//! ```
//!
//! ## Modules
//!
//! - [`encode`]: Request construction and the encoding operations.
//! - [`error`]: The failure taxonomy.

#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
mod raster;

pub use encode::{encode, encode_or_none, EncodeRequest, ErrorCorrection};
pub use error::EncodeError;
