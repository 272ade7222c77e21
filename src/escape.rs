//! Escape-time classification of points on the complex plane.
//!
//! A point c belongs to the Mandelbrot set when the sequence
//! z = z * z + c, started from zero, never leaves the circle of
//! radius 2.  We cannot iterate forever, so the test is capped: a
//! point that survives the full iteration budget is taken to be a
//! member.  The comparison uses the squared norm against 4.0 to
//! avoid the square root.

use num::Complex;

/// The color written for points that never left the escape radius,
/// as a packed 0xRRGGBB value.
pub const INSIDE_COLOR: u32 = 0xFF_C4_00;

/// The color written for points that escaped.
pub const OUTSIDE_COLOR: u32 = 0x00_00_00;

/// Count the iterations of z = z * z + c needed for z to leave the
/// circle of radius 2, up to `limit`.  Returns `None` when the point
/// used up the whole budget, i.e. it is (as far as we can tell) a
/// member of the set.
pub fn escape_time(c: Complex<f64>, limit: usize) -> Option<usize> {
    let mut z = Complex { re: 0.0, im: 0.0 };
    let mut count = 0;
    while z.norm_sqr() < 4.0 && count < limit {
        z = z * z + c;
        count += 1;
    }
    if count == limit {
        None
    } else {
        Some(count)
    }
}

/// Reduce a point to one of the two fixed colors: apparent members
/// of the set get `INSIDE_COLOR`, everything else `OUTSIDE_COLOR`.
/// There is no gradient; the classification is binary.
pub fn classify(c: Complex<f64>, limit: usize) -> u32 {
    match escape_time(c, limit) {
        None => INSIDE_COLOR,
        Some(_) => OUTSIDE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex { re: 0.0, im: 0.0 }, 500), None);
    }

    #[test]
    fn far_point_escapes_on_the_first_iteration() {
        assert_eq!(escape_time(Complex { re: 3.0, im: 0.0 }, 500), Some(1));
    }

    #[test]
    fn known_members_and_escapees() {
        assert_eq!(classify(Complex { re: 0.0, im: 0.0 }, 500), INSIDE_COLOR);
        assert_eq!(classify(Complex { re: -1.0, im: 0.0 }, 500), INSIDE_COLOR);
        assert_eq!(classify(Complex { re: 1.0, im: 1.0 }, 500), OUTSIDE_COLOR);
    }

    #[test]
    fn classification_is_deterministic() {
        let c = Complex { re: -0.75, im: 0.11 };
        assert_eq!(classify(c, 500), classify(c, 500));
        assert_eq!(escape_time(c, 500), escape_time(c, 500));
    }
}
