//! Owned RGBA pixel buffer.
//!
//! [`RasterBuffer`] stores a width, a height, and one flat `Vec<u8>` of
//! interleaved [R, G, B, A] channel bytes, row-major, origin top-left.
//! Construction validates the layout invariant once; every operation
//! preserves it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

/// Channels per pixel (R, G, B, A).
const CHANNELS: usize = 4;

// ---------------------------------------------------------------------------
// BufferError
// ---------------------------------------------------------------------------

/// Errors from raster buffer construction and resizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
    /// Width or height is zero, or the pixel count overflows.
    InvalidDimensions,
    /// Data length does not equal `width * height * 4`.
    LengthMismatch,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "width or height is zero or causes overflow"),
            Self::LengthMismatch => write!(f, "data length does not match width * height * 4"),
        }
    }
}

impl core::error::Error for BufferError {}

// ---------------------------------------------------------------------------
// Channel quantization
// ---------------------------------------------------------------------------

/// Coerce an untyped channel value to its stored `u8` form.
///
/// Applies fixed-width byte storage semantics: the fractional part is
/// truncated toward zero, then the integer wraps modulo 256. So
/// `256.0` → 0, `3.9` → 3, `-1.0` → 255. Non-finite inputs are saturated
/// by the integer cast before wrapping (NaN → 0).
///
/// [`RasterBuffer::set_pixel`] takes `Rgba<u8>` and cannot receive
/// out-of-range values; this is the one place the coercion rule lives for
/// callers bridging from wider arithmetic.
#[inline]
pub fn quantize_channel(value: f64) -> u8 {
    ((value as i64) & 0xFF) as u8
}

// ---------------------------------------------------------------------------
// RasterBuffer
// ---------------------------------------------------------------------------

/// Owned RGBA8 pixel grid.
///
/// For all valid (x, y) with `x < width` and `y < height`, the 4 bytes at
/// offset `(y * width + x) * 4` are that pixel's [R, G, B, A] values; no
/// other layout is valid.
///
/// `Clone` produces an independent deep copy — mutating the clone never
/// changes the original.
#[derive(Clone)]
pub struct RasterBuffer {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

impl RasterBuffer {
    /// Allocate a zero-filled (transparent black) buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if `width` or `height`
    /// is zero or the byte count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let total = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; total],
        })
    }

    /// Construct from caller-supplied dimensions and channel bytes.
    ///
    /// `data` is interpreted as interleaved [R, G, B, A] bytes, row-major.
    /// No validation beyond the dimension and length checks is performed —
    /// the bytes are taken as-is.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if `width` or `height`
    /// is zero (or the byte count overflows), and
    /// [`BufferError::LengthMismatch`] if `data.len() != width * height * 4`.
    pub fn from_raster(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let total = byte_len(width, height)?;
        if data.len() != total {
            return Err(BufferError::LengthMismatch);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte length of the pixel data (`width * height * 4`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes. Always false for a constructed
    /// buffer (dimensions are non-zero), kept for slice-like symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the channel bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the channel bytes.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the backing `Vec<u8>`.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    // Indexing ----------------------------------------------------------------

    /// Byte offset of pixel (x, y): `(y * width + x) * 4`.
    ///
    /// Pure arithmetic — performs no bounds check. Out-of-range coordinates
    /// yield offsets at or past the end of the pixel region; the checked
    /// accessors are [`get_pixel`](Self::get_pixel) and
    /// [`set_pixel`](Self::set_pixel).
    #[inline]
    pub const fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Read the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds ({}x{})",
            self.width,
            self.height
        );
        let i = self.pixel_offset(x, y);
        Rgba {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Write the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba<u8>) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds ({}x{})",
            self.width,
            self.height
        );
        let i = self.pixel_offset(x, y);
        self.data[i] = pixel.r;
        self.data[i + 1] = pixel.g;
        self.data[i + 2] = pixel.b;
        self.data[i + 3] = pixel.a;
    }

    // Traversal ---------------------------------------------------------------

    /// Rewrite every pixel through `f`, in place.
    ///
    /// Visits (x, y) in row-major order — y from 0 to height-1 outer, x from
    /// 0 to width-1 inner — and stores `f(current, x, y)` back at (x, y).
    /// One monotonic left-to-right, top-to-bottom pass: a pixel already
    /// rewritten is never re-read by a later step. The visitation order is
    /// part of the contract; callers may rely on it for reproducibility.
    pub fn transform_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(Rgba<u8>, u32, u32) -> Rgba<u8>,
    {
        for y in 0..self.height {
            for x in 0..self.width {
                let pixel = f(self.get_pixel(x, y), x, y);
                self.set_pixel(x, y, pixel);
            }
        }
    }

    /// Collect `f(pixel, x, y)` over every pixel, without mutating.
    ///
    /// Same row-major visitation order as
    /// [`transform_pixels`](Self::transform_pixels); the result has length
    /// exactly `width * height`, indexed by visitation order.
    pub fn map_pixels<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(Rgba<u8>, u32, u32) -> T,
    {
        let mut values = Vec::with_capacity(self.data.len() / CHANNELS);
        for y in 0..self.height {
            for x in 0..self.width {
                values.push(f(self.get_pixel(x, y), x, y));
            }
        }
        values
    }

    // Typed views -------------------------------------------------------------

    /// Copy into a typed `imgref` buffer.
    pub fn to_imgvec(&self) -> ImgVec<Rgba<u8>> {
        let pixels: Vec<Rgba<u8>> = self
            .data
            .chunks_exact(CHANNELS)
            .map(|c| Rgba {
                r: c[0],
                g: c[1],
                b: c[2],
                a: c[3],
            })
            .collect();
        ImgVec::new(pixels, self.width as usize, self.height as usize)
    }
}

impl fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RasterBuffer({}x{})", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// imgref → RasterBuffer (TryFrom, always copies)
// ---------------------------------------------------------------------------

impl TryFrom<ImgRef<'_, Rgba<u8>>> for RasterBuffer {
    type Error = BufferError;

    fn try_from(img: ImgRef<'_, Rgba<u8>>) -> Result<Self, BufferError> {
        use rgb::ComponentBytes;
        let (buf, w, h) = img.to_contiguous_buf();
        Self::from_raster(w as u32, h as u32, buf.as_bytes().to_vec())
    }
}

impl TryFrom<ImgVec<Rgba<u8>>> for RasterBuffer {
    type Error = BufferError;

    fn try_from(img: ImgVec<Rgba<u8>>) -> Result<Self, BufferError> {
        Self::try_from(img.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Validated byte count for the given dimensions.
fn byte_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::InvalidDimensions);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(BufferError::InvalidDimensions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
