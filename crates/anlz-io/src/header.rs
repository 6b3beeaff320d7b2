//! The fixed 348-byte legacy header blob.
//!
//! Analyze 7.5 stores volume metadata in a fixed-layout 348-byte buffer
//! preceding a separate `.img` pixel file. [`HeaderBlob`] treats that
//! buffer as immutable-by-default: a shared template is never written in
//! place, every variant is derived by [`HeaderBlob::patched`], a pure
//! copy-then-patch.
//!
//! Only the handful of fields needed for orientation and pixel fidelity
//! are interpreted (see [`AnalyzeHeader`]); all other bytes are preserved
//! bit-for-bit for compatibility with existing format consumers.

use crate::byteswap::Endianness;
use crate::error::{IoError, IoResult};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Legacy header field byte offsets.
///
/// Offsets follow the published Analyze 7.5 layout; only the fields the
/// transcoder actually reads are listed.
pub mod offsets {
    /// `sizeof_hdr`: i32, always 348. Doubles as the endianness probe.
    pub const SIZEOF_HDR: usize = 0;
    /// `dim`: eight i16 values, `dim[0]` is the rank.
    pub const DIM: usize = 40;
    /// `datatype`: i16 pixel type tag.
    pub const DATATYPE: usize = 70;
    /// `bitpix`: i16 bits per voxel.
    pub const BITPIX: usize = 72;
    /// `pixdim`: eight f32 values, spacing lives at `pixdim[1..=3]`.
    pub const PIXDIM: usize = 76;
    /// `orient`: the single historical orientation byte.
    pub const ORIENT: usize = 252;
}

/// Datatype tag for 4-byte IEEE-754 floating point voxels.
pub const DT_FLOAT: i16 = 16;

/// An owned, fixed-size 348-byte header buffer.
///
/// The blob itself carries no interpretation; parse it with
/// [`AnalyzeHeader::parse`] when field values are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlob {
    bytes: [u8; Self::SIZE],
}

impl HeaderBlob {
    /// Size of the legacy header in bytes.
    pub const SIZE: usize = 348;

    /// Creates a blob from a byte slice of exactly [`Self::SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> IoResult<Self> {
        let bytes: [u8; Self::SIZE] = bytes.try_into().map_err(|_| {
            IoError::invalid_header(format!(
                "expected {} header bytes, got {}",
                Self::SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    /// The raw header bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a new blob equal to `self` except at the patched offsets.
    ///
    /// Pure: the template is copied, never mutated. An offset at or past
    /// [`Self::SIZE`] fails with [`IoError::InvalidHeader`].
    pub fn patched(&self, patches: &[(usize, u8)]) -> IoResult<Self> {
        let mut bytes = self.bytes;
        for &(offset, value) in patches {
            if offset >= Self::SIZE {
                return Err(IoError::invalid_header(format!(
                    "patch offset {offset} outside {}-byte header",
                    Self::SIZE
                )));
            }
            bytes[offset] = value;
        }
        Ok(Self { bytes })
    }

    /// The historical orientation byte at offset 252.
    #[inline]
    pub fn orient_byte(&self) -> u8 {
        self.bytes[offsets::ORIENT]
    }
}

/// The minimal parsed view of a legacy header.
///
/// Endianness is detected from `sizeof_hdr`: the four leading bytes read
/// 348 in exactly one byte order for a well-formed header.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeHeader {
    /// Byte order the file was written in.
    pub endianness: Endianness,
    /// Volume extent along x, y, z.
    pub dim: [usize; 3],
    /// Voxel spacing along x, y, z.
    pub spacing: [f64; 3],
    /// Pixel type tag (`datatype` field).
    pub datatype: i16,
    /// Bits per voxel (`bitpix` field).
    pub bitpix: i16,
    /// The historical orientation byte.
    pub orient: u8,
}

impl AnalyzeHeader {
    /// Parses the fields of interest out of a header buffer.
    pub fn parse(bytes: &[u8]) -> IoResult<Self> {
        if bytes.len() < HeaderBlob::SIZE {
            return Err(IoError::format(format!(
                "header too short: got {} bytes, need {}",
                bytes.len(),
                HeaderBlob::SIZE
            )));
        }

        let sizeof_le = LittleEndian::read_i32(&bytes[offsets::SIZEOF_HDR..offsets::SIZEOF_HDR + 4]);
        let sizeof_be = BigEndian::read_i32(&bytes[offsets::SIZEOF_HDR..offsets::SIZEOF_HDR + 4]);
        if sizeof_le == HeaderBlob::SIZE as i32 {
            Self::parse_fields::<LittleEndian>(bytes, Endianness::Little)
        } else if sizeof_be == HeaderBlob::SIZE as i32 {
            Self::parse_fields::<BigEndian>(bytes, Endianness::Big)
        } else {
            Err(IoError::format(format!(
                "sizeof_hdr is {sizeof_le} (LE) / {sizeof_be} (BE), expected 348"
            )))
        }
    }

    fn parse_fields<E: ByteOrder>(bytes: &[u8], endianness: Endianness) -> IoResult<Self> {
        let rank = E::read_i16(&bytes[offsets::DIM..offsets::DIM + 2]);
        if rank < 3 {
            return Err(IoError::format(format!(
                "volume rank {rank} too low, need at least 3 spatial dimensions"
            )));
        }

        let mut dim = [0usize; 3];
        for (i, d) in dim.iter_mut().enumerate() {
            let offset = offsets::DIM + 2 + i * 2;
            let raw = E::read_i16(&bytes[offset..offset + 2]);
            if raw <= 0 {
                return Err(IoError::format(format!("dim[{}] is {raw}, must be positive", i + 1)));
            }
            *d = raw as usize;
        }

        let datatype = E::read_i16(&bytes[offsets::DATATYPE..offsets::DATATYPE + 2]);
        let bitpix = E::read_i16(&bytes[offsets::BITPIX..offsets::BITPIX + 2]);

        let mut spacing = [0.0f64; 3];
        for (i, s) in spacing.iter_mut().enumerate() {
            let offset = offsets::PIXDIM + 4 + i * 4;
            let raw = E::read_f32(&bytes[offset..offset + 4]);
            if !raw.is_finite() || raw <= 0.0 {
                return Err(IoError::format(format!(
                    "pixdim[{}] is {raw}, must be finite and positive",
                    i + 1
                )));
            }
            *s = raw as f64;
        }

        Ok(Self {
            endianness,
            dim,
            spacing,
            datatype,
            bitpix,
            orient: bytes[offsets::ORIENT],
        })
    }

    /// Total voxel count of the spatial extent.
    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.dim.iter().product()
    }
}
