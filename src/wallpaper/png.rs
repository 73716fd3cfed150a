//! Truecolor PNG encoding over zlib.

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

use crate::error::{AlmanacError, Result};

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode packed 8-bit RGB rows as a PNG file.
pub fn encode(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>> {
    let stride = width as usize * 3;
    if width == 0 || height == 0 || rgb.len() != stride * height as usize {
        return Err(AlmanacError::InvalidInput(format!(
            "Pixel buffer of {} bytes does not match {}x{}",
            rgb.len(),
            width,
            height
        )));
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth 8, colour type 2 (RGB), deflate, adaptive filtering, no interlace
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    for row in rgb.chunks_exact(stride) {
        encoder.write_all(&[0])?;
        encoder.write_all(row)?;
    }
    let idat = encoder.finish()?;

    let mut out = Vec::with_capacity(idat.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    #[test]
    fn header_and_chunks() {
        let png = encode(2, 1, &[255, 0, 0, 0, 255, 0]).unwrap();
        assert_eq!(&png[..8], &SIGNATURE);
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes(png[16..20].try_into().unwrap()), 2);
        assert_eq!(u32::from_be_bytes(png[20..24].try_into().unwrap()), 1);
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
        // well-known CRC of an empty IEND chunk
        assert_eq!(&png[png.len() - 4..], &[0xAE, 0x42, 0x60, 0x82]);
    }

    #[test]
    fn idat_inflates_to_filtered_rows() {
        let pixels = [1, 2, 3, 4, 5, 6];
        let png = encode(1, 2, &pixels).unwrap();
        let idat_start = 8 + 12 + 13;
        let len = u32::from_be_bytes(png[idat_start..idat_start + 4].try_into().unwrap()) as usize;
        assert_eq!(&png[idat_start + 4..idat_start + 8], b"IDAT");

        let mut raw = Vec::new();
        ZlibDecoder::new(&png[idat_start + 8..idat_start + 8 + len])
            .read_to_end(&mut raw)
            .unwrap();
        assert_eq!(raw, vec![0, 1, 2, 3, 0, 4, 5, 6]);
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        assert!(encode(2, 2, &[0; 3]).is_err());
        assert!(encode(0, 0, &[]).is_err());
    }
}
