//! Volume reading through the [`VolumeReader`] seam.
//!
//! Callers depend on the [`VolumeReader`] trait, not on a concrete
//! reader, so conformance checks can substitute test doubles for the
//! real on-disk reader.

use crate::byteswap::Endianness;
use crate::error::{IoError, IoResult};
use crate::header::{AnalyzeHeader, DT_FLOAT};
use anlz_core::{Direction, OrientationCode};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::fs;
use std::path::Path;

/// An in-memory volume: geometry plus native-order f32 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Extent along x, y, z.
    pub dim: [usize; 3],
    /// Voxel spacing along x, y, z.
    pub spacing: [f64; 3],
    /// World-space position of the first voxel.
    pub origin: [f64; 3],
    /// Anatomical direction matrix decoded from the header.
    pub direction: Direction,
    /// Pixels in native byte order, x-fastest.
    pub data: Vec<f32>,
}

impl Volume {
    /// Total pixel count of the extent.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.dim.iter().product()
    }
}

/// Reads a volume from a header file path.
///
/// Implementations own the interpretation of the header and the
/// companion pixel stream it points at.
pub trait VolumeReader {
    /// Reads the volume described by the header at `header_path`.
    fn read_volume(&self, header_path: &Path) -> IoResult<Volume>;
}

/// Reader for legacy Analyze 7.5 header/pixel file pairs.
///
/// The pixel file is located by swapping the header path's extension
/// for `img`. Only float32 volumes are accepted; the orientation byte
/// at offset 252 is decoded into a [`Direction`] matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeReader;

impl AnalyzeReader {
    /// Creates a reader.
    pub fn new() -> Self {
        Self
    }
}

impl VolumeReader for AnalyzeReader {
    fn read_volume(&self, header_path: &Path) -> IoResult<Volume> {
        let header_bytes = fs::read(header_path)?;
        let header = AnalyzeHeader::parse(&header_bytes)?;

        if header.datatype != DT_FLOAT {
            return Err(IoError::format(format!(
                "unsupported datatype {}, only float32 ({DT_FLOAT}) is handled",
                header.datatype
            )));
        }
        if header.bitpix != 32 {
            return Err(IoError::format(format!(
                "bitpix {} inconsistent with float32 pixels",
                header.bitpix
            )));
        }

        let code = OrientationCode::from_byte(header.orient)?;
        let direction = code.direction();

        let img_path = header_path.with_extension("img");
        let raw = fs::read(&img_path)?;
        let count = header.voxel_count();
        let expected_len = count * size_of::<f32>();
        if raw.len() < expected_len {
            return Err(IoError::format(format!(
                "pixel stream truncated: {} has {} bytes, need {expected_len}",
                img_path.display(),
                raw.len()
            )));
        }

        let mut data = vec![0.0f32; count];
        match header.endianness {
            Endianness::Little => LittleEndian::read_f32_into(&raw[..expected_len], &mut data),
            Endianness::Big => BigEndian::read_f32_into(&raw[..expected_len], &mut data),
        }

        tracing::debug!(
            path = %header_path.display(),
            dim = ?header.dim,
            orientation = %code,
            "read legacy volume"
        );

        Ok(Volume {
            dim: header.dim,
            spacing: header.spacing,
            origin: [0.0; 3],
            direction,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::offsets;
    use crate::writer::write_blob;

    fn header_bytes(orient: u8) -> Vec<u8> {
        let mut buf = vec![0u8; 348];
        LittleEndian::write_i32(&mut buf[0..4], 348);
        LittleEndian::write_i16(&mut buf[offsets::DIM..offsets::DIM + 2], 4);
        LittleEndian::write_i16(&mut buf[offsets::DIM + 2..offsets::DIM + 4], 2);
        LittleEndian::write_i16(&mut buf[offsets::DIM + 4..offsets::DIM + 6], 2);
        LittleEndian::write_i16(&mut buf[offsets::DIM + 6..offsets::DIM + 8], 2);
        LittleEndian::write_i16(&mut buf[offsets::DATATYPE..offsets::DATATYPE + 2], DT_FLOAT);
        LittleEndian::write_i16(&mut buf[offsets::BITPIX..offsets::BITPIX + 2], 32);
        for i in 0..8 {
            let offset = offsets::PIXDIM + i * 4;
            LittleEndian::write_f32(&mut buf[offset..offset + 4], 1.0);
        }
        buf[offsets::ORIENT] = orient;
        buf
    }

    fn img_bytes(values: &[f32]) -> Vec<u8> {
        let mut buf = vec![0u8; values.len() * 4];
        LittleEndian::write_f32_into(values, &mut buf);
        buf
    }

    #[test]
    fn test_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let hdr = dir.path().join("vol.hdr");
        let pixels: Vec<f32> = (0..8).map(|i| i as f32 * 0.5).collect();

        write_blob(&hdr, &header_bytes(0)).unwrap();
        write_blob(&dir.path().join("vol.img"), &img_bytes(&pixels)).unwrap();

        let volume = AnalyzeReader::new().read_volume(&hdr).unwrap();
        assert_eq!(volume.dim, [2, 2, 2]);
        assert_eq!(volume.pixel_count(), 8);
        assert_eq!(volume.data, pixels);
        assert_eq!(volume.origin, [0.0; 3]);
        assert_eq!(volume.direction, OrientationCode::Rpi.direction());
    }

    #[test]
    fn test_read_rejects_truncated_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let hdr = dir.path().join("vol.hdr");

        write_blob(&hdr, &header_bytes(0)).unwrap();
        write_blob(&dir.path().join("vol.img"), &[0u8; 12]).unwrap();

        let err = AnalyzeReader::new().read_volume(&hdr).unwrap_err();
        assert!(matches!(err, IoError::Format(_)));
    }

    #[test]
    fn test_read_rejects_illegal_orientation_byte() {
        let dir = tempfile::tempdir().unwrap();
        let hdr = dir.path().join("vol.hdr");

        write_blob(&hdr, &header_bytes(200)).unwrap();
        write_blob(&dir.path().join("vol.img"), &img_bytes(&[0.0; 8])).unwrap();

        let err = AnalyzeReader::new().read_volume(&hdr).unwrap_err();
        assert!(matches!(err, IoError::Orientation(e) if e.is_invalid_code()));
    }

    #[test]
    fn test_read_rejects_non_float_datatype() {
        let dir = tempfile::tempdir().unwrap();
        let hdr = dir.path().join("vol.hdr");
        let mut bytes = header_bytes(0);
        LittleEndian::write_i16(&mut bytes[offsets::DATATYPE..offsets::DATATYPE + 2], 4);

        write_blob(&hdr, &bytes).unwrap();
        write_blob(&dir.path().join("vol.img"), &img_bytes(&[0.0; 8])).unwrap();

        let err = AnalyzeReader::new().read_volume(&hdr).unwrap_err();
        assert!(matches!(err, IoError::Format(_)));
    }

    #[test]
    fn test_read_missing_img_file() {
        let dir = tempfile::tempdir().unwrap();
        let hdr = dir.path().join("vol.hdr");
        write_blob(&hdr, &header_bytes(0)).unwrap();

        let err = AnalyzeReader::new().read_volume(&hdr).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
