//! RGBA raster buffer with per-pixel access, whole-buffer transforms,
//! resizing, and anchor-based placement math.
//!
//! This crate defines one core entity and its collaborator seams:
//!
//! - [`RasterBuffer`] — owned RGBA8 pixel grid with validated construction,
//!   coordinate-addressed get/set, and row-major traversal transforms
//! - [`Anchor`] — nine named placement modes mapping a caller coordinate to
//!   the buffer's top-left corner
//! - [`RasterSource`] / [`Surface`] — the loader and renderer boundaries;
//!   decoding bytes into a raster and blitting a raster onto a display
//!   surface both live behind these traits, not in this crate
//!
//! Resizing resamples with a nearest-neighbor kernel (documented on the
//! resize methods). There is no codec, filter, or color-management layer
//! here — pixels go in as RGBA8 and come out as RGBA8.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod anchor;
mod buffer;
mod resize;
mod traits;

pub use anchor::{Anchor, ParseAnchorError};
pub use buffer::{BufferError, RasterBuffer, quantize_channel};
pub use traits::{RasterSource, Surface};

// Re-exports for callers and collaborator implementations.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::Rgba;
