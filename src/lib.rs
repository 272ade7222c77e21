#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Threaded Mandelbrot renderer
//!
//! The Mandelbrot set lives on the complex plane: a point c is a
//! member when the sequence z = z * z + c, started from zero, never
//! runs off to infinity.  This crate classifies every pixel of a
//! fixed rectangle of that plane by escape time, coloring each pixel
//! by whether its point stayed inside a radius-2 circle for the whole
//! iteration budget.
//!
//! The interesting part is not the arithmetic but the fan-out: the
//! image is cut into horizontal bands of whole rows, one band per
//! worker thread, and each worker writes only its own rows of the
//! shared pixel buffer.  The scope join is the single barrier; when
//! `render` returns, every pixel has been written exactly once.  The
//! finished buffer is serialized as an uncompressed truecolor TGA
//! file.

#[macro_use]
extern crate failure;
extern crate crossbeam;
extern crate itertools;
extern crate num;

pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;
pub mod tga;

pub use errors::RenderError;
pub use escape::{classify, escape_time, INSIDE_COLOR, OUTSIDE_COLOR};
pub use planes::{PlaneMapper, PlaneRect};
pub use render::{rows_per_band, Renderer};
