//! # anlz-io
//!
//! Endian-safe binary I/O for legacy Analyze 7.5 headers and pixel streams.
//!
//! This crate covers the transcoding side of ANLZ-RS:
//!
//! - [`byteswap`] - byte-order detection and fixed-width value swapping
//! - [`header`] - the immutable 348-byte header blob, its documented field
//!   offsets, copy-then-patch derivation, and minimal field parsing
//! - [`writer`] - scoped binary file writes with guaranteed handle release
//! - [`volume`] - the [`VolumeReader`] seam plus the legacy
//!   [`AnalyzeReader`] collaborator that turns a header/pixel pair on disk
//!   into an in-memory [`Volume`]
//!
//! The reader deliberately parses only the handful of header fields needed
//! to prove orientation and pixel round-trip fidelity; everything else in
//! the 348 bytes is preserved but uninterpreted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod byteswap;
pub mod error;
pub mod header;
pub mod volume;
pub mod writer;

pub use byteswap::{ByteSwap, Endianness, to_declared};
pub use error::{IoError, IoResult};
pub use header::{AnalyzeHeader, HeaderBlob};
pub use volume::{AnalyzeReader, Volume, VolumeReader};
pub use writer::write_blob;
