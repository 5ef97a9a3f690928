//! ColorCET colormaps and a rolling average for a rendering front end.
//!
//! - [`Catalog`]: the colormaps built from the raw ColorCET tables,
//!   sorted by display name, searchable by [`ColorCETIdentifier`].
//! - [`RollingAverage`]: fixed window streaming mean, e.g. to smooth
//!   frame times.
//!
//! Colormaps implement [`ColorRange`] so they can be sampled at any
//! `t` ∈ \[0, 1\] and converted to the pixel types of the [`rgb`]
//! crate through [`RGBColor`].

use std::marker::PhantomData;
use rgb::{RGB, RGB8, RGB16, RGBA8};

mod error;
pub mod colorcet;
mod rolling;

pub use error::{Error, Result};
pub use colorcet::{Catalog, ColorCETIdentifier, ColorCETMap, ColorCETType,
                   MapId, Variant, SHIFT50_BASE};
pub use rolling::RollingAverage;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (both included) together with colors.  It is
    /// not required that `a <= b`.
    fn range(&self, a: f64, b: f64, n: usize) -> Range<'_, Self, Color> {
        Range { range: self, color: PhantomData, a, b, n, i: 0 }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<'a, R: ?Sized, Color> {
    range: &'a R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    n: usize, // number of points
    i: usize, // next position to be consumed
}

impl<'a, R, Color> Iterator for Range<'a, R, Color>
where R: ColorRange<Color> + ?Sized {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n { return None }
        let t = if self.n == 1 { 0. }
                else { self.i as f64 / (self.n - 1) as f64 };
        self.i += 1;
        Some(((1. - t) * self.a + t * self.b, self.range.rgb(t)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.n - self.i;
        (len, Some(len))
    }
}

impl<'a, R, Color> ExactSizeIterator for Range<'a, R, Color>
where R: ColorRange<Color> + ?Sized {}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 1\]).  Values
    /// outside that range are clamped.
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGB { r, g, b } = Self::to_rgb(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgb(RGB { r: x, g: x, b: x })
    }
}

/// Scale `x` ∈ \[0, 1\] to \[0, `max`\], rounding to nearest.
#[inline]
fn scale(x: f64, max: f64) -> f64 { (x.clamp(0., 1.) * max).round() }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB { r: c.r.clamp(0., 1.), g: c.g.clamp(0., 1.), b: c.b.clamp(0., 1.) }
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: scale(c.r, 255.) as u8,  g: scale(c.g, 255.) as u8,
               b: scale(c.b, 255.) as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB16 { r: scale(c.r, 65535.) as u16,  g: scale(c.g, 65535.) as u16,
                b: scale(c.b, 65535.) as u16 }
    }
}

/// Colormaps are opaque: the alpha channel is always 255.
impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGBA8 { r: scale(c.r, 255.) as u8,  g: scale(c.g, 255.) as u8,
                b: scale(c.b, 255.) as u8, a: 255 }
    }
}
