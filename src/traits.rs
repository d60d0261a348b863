//! Collaborator seams: raster loading and surface rendering.
//!
//! The buffer core neither fetches nor displays anything. A
//! [`RasterSource`] turns a locator into a decoded [`RasterBuffer`]
//! (network, file, test fixture — its business); a [`Surface`] blits a
//! buffer onto a destination at a top-left coordinate. Both report failures
//! through their own error types, which this crate propagates without
//! inspecting.

use crate::anchor::Anchor;
use crate::buffer::RasterBuffer;

/// Produces decoded RGBA8 rasters from locators.
///
/// Implementations own the entire acquire-and-decode path, including any
/// asynchronous fetching — by the time `load` returns, the raster is fully
/// decoded. Implementations construct the buffer with
/// [`RasterBuffer::from_raster`], so a successful load always satisfies the
/// layout invariant.
pub trait RasterSource {
    /// The source-specific error type (network, decode, …). Opaque to this
    /// crate.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Load and decode the raster named by `locator`.
    fn load(&mut self, locator: &str) -> Result<RasterBuffer, Self::Error>;
}

/// A destination that can blit raster pixels.
///
/// Implementations interpret (x, y) as the placement of the raster's
/// top-left corner, in whatever coordinate space and with whatever
/// interpolation the surface natively has.
pub trait Surface {
    /// The surface-specific error type. Opaque to this crate.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Blit `raster` with its top-left corner at (x, y).
    fn blit(&mut self, raster: &RasterBuffer, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Blit `raster` anchored at (x, y).
    ///
    /// Computes the anchor-adjusted top-left via [`Anchor::top_left`] and
    /// delegates to [`blit`](Self::blit).
    fn draw(
        &mut self,
        raster: &RasterBuffer,
        x: f64,
        y: f64,
        anchor: Anchor,
    ) -> Result<(), Self::Error> {
        let (tlx, tly) = anchor.top_left(x, y, raster.width(), raster.height());
        self.blit(raster, tlx, tly)
    }
}

impl RasterBuffer {
    /// Load a buffer through a [`RasterSource`].
    ///
    /// # Errors
    ///
    /// Propagates the source's error untouched.
    pub fn from_source<S: RasterSource>(source: &mut S, locator: &str) -> Result<Self, S::Error> {
        source.load(locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::convert::Infallible;
    use core::fmt;

    struct RecordingSurface {
        blits: Vec<(f64, f64)>,
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn blit(&mut self, _raster: &RasterBuffer, x: f64, y: f64) -> Result<(), Infallible> {
            self.blits.push((x, y));
            Ok(())
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum FixtureError {
        NotFound,
    }

    impl fmt::Display for FixtureError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "no fixture for locator")
        }
    }

    impl core::error::Error for FixtureError {}

    /// Yields a fixed 50x50 raster for the one locator it knows.
    struct FixtureSource;

    impl RasterSource for FixtureSource {
        type Error = FixtureError;

        fn load(&mut self, locator: &str) -> Result<RasterBuffer, FixtureError> {
            if locator != "fixture" {
                return Err(FixtureError::NotFound);
            }
            Ok(RasterBuffer::from_raster(50, 50, vec![0u8; 50 * 50 * 4])
                .expect("fixture dimensions are valid"))
        }
    }

    #[test]
    fn from_source_yields_decoded_raster() {
        let buf = RasterBuffer::from_source(&mut FixtureSource, "fixture").unwrap();
        assert_eq!((buf.width(), buf.height()), (50, 50));
    }

    #[test]
    fn from_source_propagates_loader_error() {
        let err = RasterBuffer::from_source(&mut FixtureSource, "missing");
        assert_eq!(err.unwrap_err(), FixtureError::NotFound);
    }

    #[test]
    fn draw_places_anchor_adjusted_top_left() {
        let buf = RasterBuffer::from_source(&mut FixtureSource, "fixture").unwrap();
        let mut surface = RecordingSurface { blits: Vec::new() };
        surface
            .draw(&buf, 10.0, 10.0, Anchor::BottomRight)
            .unwrap();
        surface.draw(&buf, 10.0, 10.0, Anchor::Center).unwrap();
        assert_eq!(surface.blits, vec![(-40.0, -40.0), (-15.0, -15.0)]);
    }

    #[test]
    fn draw_default_anchor_is_plain_blit() {
        let buf = RasterBuffer::from_source(&mut FixtureSource, "fixture").unwrap();
        let mut surface = RecordingSurface { blits: Vec::new() };
        surface.draw(&buf, 10.0, 10.0, Anchor::default()).unwrap();
        surface.blit(&buf, 10.0, 10.0).unwrap();
        assert_eq!(surface.blits[0], surface.blits[1]);
    }
}
