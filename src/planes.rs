//! Contains the PlaneMapper struct, which relates a pixel grid with
//! its origin at the upper-left corner to a rectangle on the complex
//! plane given by its four edges.  Row zero of the grid corresponds
//! to the rectangle's top edge, and rows are numbered downward.
//!
//! The mapping scales x by the grid width and y by the grid height
//! independently of one another, so a rectangle whose aspect ratio
//! differs from the grid's is simply stretched to fit rather than
//! letterboxed.

use errors::RenderError;
use num::Complex;

/// The four edges of the region of the complex plane to render.  The
/// real axis runs from `left` to `right`, the imaginary axis from
/// `bottom` up to `top`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneRect {
    /// Smallest real value in the region.
    pub left: f64,
    /// Largest real value in the region.
    pub right: f64,
    /// Largest imaginary value in the region, mapped to row zero.
    pub top: f64,
    /// Smallest imaginary value in the region, mapped to the last
    /// row.
    pub bottom: f64,
}

/// Relates a pixel grid of fixed width and height to a rectangle on
/// the complex plane.  Immutable for the duration of a render.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// Number of pixel columns.
    pub width: usize,
    /// Number of pixel rows.
    pub height: usize,
    rect: PlaneRect,
}

impl PlaneMapper {
    /// Constructor.  Rejects empty grids and rectangles whose edges
    /// are out of order, so every mapper that exists can project
    /// every pixel of its grid.
    pub fn new(width: usize, height: usize, rect: PlaneRect) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage);
        }
        if rect.right <= rect.left {
            return Err(RenderError::InvertedHorizontal);
        }
        if rect.top <= rect.bottom {
            return Err(RenderError::InvertedVertical);
        }
        Ok(PlaneMapper { width, height, rect })
    }

    /// The total number of pixels in the grid.  Used to size the
    /// pixel buffer.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the grid holds no pixels.  `new` refuses to build
    /// such a mapper, so in practice this is always false.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given the column and row of a pixel, return the point on the
    /// complex plane that pixel stands for.
    pub fn pixel_to_point(&self, x: usize, y: usize) -> Complex<f64> {
        Complex {
            re: self.rect.left
                + (x as f64) * (self.rect.right - self.rect.left) / (self.width as f64),
            im: self.rect.top
                + (y as f64) * (self.rect.bottom - self.rect.top) / (self.height as f64),
        }
    }
}
