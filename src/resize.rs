//! Resize, scale, and fit operations.
//!
//! All three resample with the same nearest-neighbor kernel: destination
//! pixel (dx, dy) reads source pixel
//! `(dx * width / new_width, dy * height / new_height)` in integer (floor)
//! arithmetic. Every destination pixel is filled deterministically, and a
//! same-size resize is byte-identical to the source.
//!
//! Each operation comes in two forms: the owned form returns a new
//! independent buffer and leaves the receiver untouched; the `_in_place`
//! form replaces the receiver's width, height, and bytes in one step. In
//! both forms the destination pixels are fully computed before anything is
//! handed over, so a failed operation never leaves a partially-resized
//! buffer.

use alloc::vec::Vec;

use crate::buffer::{BufferError, RasterBuffer};

impl RasterBuffer {
    /// Resample into a new buffer of exactly `new_width` × `new_height`.
    ///
    /// Nearest-neighbor (see module docs). The receiver is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is
    /// zero or the byte count overflows.
    pub fn resize(&self, new_width: u32, new_height: u32) -> Result<RasterBuffer, BufferError> {
        let data = self.sample_nearest(new_width, new_height)?;
        Ok(RasterBuffer {
            width: new_width,
            height: new_height,
            data,
        })
    }

    /// Resample in place to exactly `new_width` × `new_height`.
    ///
    /// Width, height, and bytes are replaced together after the new pixels
    /// are fully computed; on error the receiver is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is
    /// zero or the byte count overflows.
    pub fn resize_in_place(&mut self, new_width: u32, new_height: u32) -> Result<(), BufferError> {
        let data = self.sample_nearest(new_width, new_height)?;
        self.width = new_width;
        self.height = new_height;
        self.data = data;
        Ok(())
    }

    /// Resample into a new buffer scaled by independent per-axis ratios.
    ///
    /// Equivalent to `resize(round(width * width_ratio),
    /// round(height * height_ratio))`; each dimension rounds half up.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if a ratio is non-finite
    /// or rounds a dimension to zero.
    pub fn scale(&self, width_ratio: f64, height_ratio: f64) -> Result<RasterBuffer, BufferError> {
        let (w, h) = self.scaled_dimensions(width_ratio, height_ratio)?;
        self.resize(w, h)
    }

    /// In-place form of [`scale`](Self::scale).
    ///
    /// # Errors
    ///
    /// Same conditions as [`scale`](Self::scale); on error the receiver is
    /// untouched.
    pub fn scale_in_place(&mut self, width_ratio: f64, height_ratio: f64) -> Result<(), BufferError> {
        let (w, h) = self.scaled_dimensions(width_ratio, height_ratio)?;
        self.resize_in_place(w, h)
    }

    /// Aspect-preserving scale toward the given bounds.
    ///
    /// Computes the two decrease ratios `width / max_width` and
    /// `height / max_height` and scales both axes by the **smaller** of the
    /// two, applied directly as the scale factor. Aspect ratio is always
    /// preserved; the result is not guaranteed to lie within the bounds. In
    /// particular a raster that exceeds only one bound keeps its size (the
    /// other axis's ratio, ≤ 1, is the minimum), and a raster exceeding
    /// both bounds scales *by* the smaller overshoot. Shrink-only use is
    /// the intended case.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if `max_width` or
    /// `max_height` is zero, or the chosen ratio rounds a dimension to
    /// zero.
    pub fn fit(&self, max_width: u32, max_height: u32) -> Result<RasterBuffer, BufferError> {
        let ratio = self.fit_ratio(max_width, max_height)?;
        self.scale(ratio, ratio)
    }

    /// In-place form of [`fit`](Self::fit).
    ///
    /// # Errors
    ///
    /// Same conditions as [`fit`](Self::fit); on error the receiver is
    /// untouched.
    pub fn fit_in_place(&mut self, max_width: u32, max_height: u32) -> Result<(), BufferError> {
        let ratio = self.fit_ratio(max_width, max_height)?;
        self.scale_in_place(ratio, ratio)
    }

    // Internals ---------------------------------------------------------------

    /// Nearest-neighbor sample of the whole buffer at the new dimensions.
    fn sample_nearest(&self, new_width: u32, new_height: u32) -> Result<Vec<u8>, BufferError> {
        if new_width == 0 || new_height == 0 {
            return Err(BufferError::InvalidDimensions);
        }
        let total = (new_width as usize)
            .checked_mul(new_height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(BufferError::InvalidDimensions)?;

        let mut data = Vec::with_capacity(total);
        for dy in 0..new_height {
            let sy = (u64::from(dy) * u64::from(self.height) / u64::from(new_height)) as u32;
            for dx in 0..new_width {
                let sx = (u64::from(dx) * u64::from(self.width) / u64::from(new_width)) as u32;
                let i = self.pixel_offset(sx, sy);
                data.extend_from_slice(&self.data[i..i + 4]);
            }
        }
        Ok(data)
    }

    /// Rounded target dimensions for the given per-axis ratios.
    fn scaled_dimensions(
        &self,
        width_ratio: f64,
        height_ratio: f64,
    ) -> Result<(u32, u32), BufferError> {
        let w = f64::from(self.width) * width_ratio;
        let h = f64::from(self.height) * height_ratio;
        // Anything below 0.5 rounds to zero; non-finite products are invalid
        // outright.
        if !w.is_finite() || !h.is_finite() || w < 0.5 || h < 0.5 {
            return Err(BufferError::InvalidDimensions);
        }
        Ok(((w + 0.5) as u32, (h + 0.5) as u32))
    }

    /// The smaller of the two decrease ratios toward the bounds.
    fn fit_ratio(&self, max_width: u32, max_height: u32) -> Result<f64, BufferError> {
        if max_width == 0 || max_height == 0 {
            return Err(BufferError::InvalidDimensions);
        }
        let width_decrease = f64::from(self.width) / f64::from(max_width);
        let height_decrease = f64::from(self.height) / f64::from(max_height);
        Ok(width_decrease.min(height_decrease))
    }
}
