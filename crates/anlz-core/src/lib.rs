//! # anlz-core
//!
//! Core types for legacy Analyze 7.5 spatial orientation handling.
//!
//! This crate provides the foundational types shared by the ANLZ-RS crates:
//!
//! - [`OrientationCode`] - the 48-value anatomical orientation enumeration
//!   historically stored as a single byte in Analyze 7.5 headers
//! - [`CoordinateTerm`] - the six directed anatomical axis labels
//!   (Right/Left, Anterior/Posterior, Inferior/Superior)
//! - [`Direction`] - a 3x3 direction-cosine matrix whose columns give the
//!   patient-space direction of each image axis
//! - [`Error`], [`Result`] - codec error taxonomy
//!
//! ## Design Philosophy
//!
//! The legacy-byte/matrix duality is modeled as a **bijective codec**: two
//! pure, total, mutually-inverse functions between the 48 orientation codes
//! and the 48 signed-permutation direction matrices. Correctness is a
//! round-trip law, not object identity:
//!
//! ```rust
//! use anlz_core::OrientationCode;
//!
//! let code = OrientationCode::from_byte(0)?; // historical Analyze "transverse unflipped"
//! assert_eq!(code.label(), "RPI");
//! assert_eq!(OrientationCode::from_direction(&code.direction())?, code);
//! # Ok::<(), anlz_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of ANLZ-RS and has no internal dependencies:
//!
//! ```text
//! anlz-core (this crate)
//!    ^
//!    |
//!    +-- anlz-io (header/pixel transcoding, byte order)
//!    +-- anlz-conformance (reference scenario harness)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod direction;
pub mod error;
pub mod orientation;

// Re-exports for convenience
pub use direction::Direction;
pub use error::{Error, Result};
pub use orientation::{AnatomicalPair, CoordinateTerm, OrientationCode};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use anlz_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::error::{Error, Result};
    pub use crate::orientation::{AnatomicalPair, CoordinateTerm, OrientationCode};
}
