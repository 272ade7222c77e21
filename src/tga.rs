//! Writes a pixel buffer as an uncompressed truecolor TGA file.
//!
//! The format is fixed: an 18-byte header declaring a type-2
//! (uncompressed, unmapped) image with 24 bits per pixel, followed
//! by the pixel data as blue-green-red byte triples, row-major
//! starting at the first row of the buffer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER_LEN: usize = 18;

/// Build the TGA header for an image of the given size.  Width and
/// height are stored little-endian in 16 bits each, so images larger
/// than 65535 on a side cannot be represented.
fn header(width: usize, height: usize) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[2] = 2; // uncompressed truecolor
    header[12] = (width & 0xFF) as u8;
    header[13] = ((width >> 8) & 0xFF) as u8;
    header[14] = (height & 0xFF) as u8;
    header[15] = ((height >> 8) & 0xFF) as u8;
    header[16] = 24; // bits per pixel
    header
}

/// Encode `pixels`, a row-major buffer of packed 0xRRGGBB values,
/// onto any writer.
pub fn encode<W: Write>(
    out: &mut W,
    pixels: &[u32],
    width: usize,
    height: usize,
) -> io::Result<()> {
    assert_eq!(pixels.len(), width * height);
    out.write_all(&header(width, height))?;
    for pixel in pixels {
        let bgr = [
            (pixel & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            ((pixel >> 16) & 0xFF) as u8,
        ];
        out.write_all(&bgr)?;
    }
    Ok(())
}

/// Write `pixels` to a TGA file at `path`.  Any I/O failure is
/// returned to the caller; a partially written file may be left
/// behind.
pub fn write_tga<P: AsRef<Path>>(
    path: P,
    pixels: &[u32],
    width: usize,
    height: usize,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    encode(&mut out, pixels, width, height)?;
    out.flush()
}
