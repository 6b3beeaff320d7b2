//! The 48-value anatomical orientation enumeration and its matrix codec.
//!
//! Legacy Analyze 7.5 headers record spatial orientation as a single byte.
//! Each legal value assigns every image axis (column, row, slice) one
//! directed anatomical label drawn from the three complementary pairs
//! Right/Left, Anterior/Posterior and Inferior/Superior, such that each
//! pair is used exactly once. That gives `3! * 2^3 = 48` distinct codes.
//!
//! [`OrientationCode`] is the tagged-variant model of that byte, and the
//! codec consists of two pure, mutually-inverse functions:
//!
//! - [`OrientationCode::direction`] - code to signed-permutation matrix
//! - [`OrientationCode::from_direction`] - matrix back to code
//!
//! ```rust
//! use anlz_core::OrientationCode;
//!
//! for byte in 0..48 {
//!     let code = OrientationCode::from_byte(byte)?;
//!     assert_eq!(OrientationCode::from_direction(&code.direction())?, code);
//! }
//! # Ok::<(), anlz_core::Error>(())
//! ```

use crate::direction::Direction;
use crate::error::{Error, Result};

/// Relative magnitude gap below which two column components are considered
/// equally dominant, making the axis assignment ambiguous.
pub const DOMINANCE_TOLERANCE: f64 = 1e-6;

/// A directed anatomical axis label.
///
/// The six terms form three complementary pairs. Each term names the side
/// of the patient an image axis starts from, following the historical
/// labeling convention of the legacy format: the axis labeled `Right` runs
/// from the patient's right toward the left, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateTerm {
    /// From patient right (axis direction +x).
    Right,
    /// From patient left (axis direction -x).
    Left,
    /// From patient front (axis direction +y).
    Anterior,
    /// From patient back (axis direction -y).
    Posterior,
    /// From below (axis direction +z).
    Inferior,
    /// From above (axis direction -z).
    Superior,
}

/// One of the three complementary anatomical pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnatomicalPair {
    /// Right/Left (x).
    RightLeft,
    /// Anterior/Posterior (y).
    AnteriorPosterior,
    /// Inferior/Superior (z).
    InferiorSuperior,
}

impl CoordinateTerm {
    /// The single-letter label used in three-letter orientation strings.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Anterior => 'A',
            Self::Posterior => 'P',
            Self::Inferior => 'I',
            Self::Superior => 'S',
        }
    }

    /// The complementary pair this term belongs to.
    #[inline]
    pub const fn pair(self) -> AnatomicalPair {
        match self {
            Self::Right | Self::Left => AnatomicalPair::RightLeft,
            Self::Anterior | Self::Posterior => AnatomicalPair::AnteriorPosterior,
            Self::Inferior | Self::Superior => AnatomicalPair::InferiorSuperior,
        }
    }

    /// The patient-space unit column an axis with this label advances along.
    #[inline]
    pub const fn unit_column(self) -> [f64; 3] {
        match self {
            Self::Right => [1.0, 0.0, 0.0],
            Self::Left => [-1.0, 0.0, 0.0],
            Self::Anterior => [0.0, 1.0, 0.0],
            Self::Posterior => [0.0, -1.0, 0.0],
            Self::Inferior => [0.0, 0.0, 1.0],
            Self::Superior => [0.0, 0.0, -1.0],
        }
    }

    /// Parses a term from its single-letter label.
    pub const fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'R' => Some(Self::Right),
            b'L' => Some(Self::Left),
            b'A' => Some(Self::Anterior),
            b'P' => Some(Self::Posterior),
            b'I' => Some(Self::Inferior),
            b'S' => Some(Self::Superior),
            _ => None,
        }
    }

    /// The term denoted by a dominant component: patient-space row index
    /// and the sign of the column entry there.
    #[inline]
    const fn from_component(row: usize, positive: bool) -> Self {
        match (row, positive) {
            (0, true) => Self::Right,
            (0, false) => Self::Left,
            (1, true) => Self::Anterior,
            (1, false) => Self::Posterior,
            (_, true) => Self::Inferior,
            (_, false) => Self::Superior,
        }
    }
}

/// One of the 48 canonical anatomical orientations.
///
/// Variant names spell the three axis labels in column/row/slice order.
/// Discriminants are stable and meaningful: the first six (`0..=5`) are
/// the historical Analyze 7.5 orient byte values, the remainder fill out
/// the 48-value set in a fixed order.
///
/// | byte | code | legacy meaning |
/// |------|------|----------------|
/// | 0 | `Rpi` | transverse, unflipped |
/// | 1 | `Rip` | coronal, unflipped |
/// | 2 | `Pir` | sagittal, unflipped |
/// | 3 | `Rai` | transverse, flipped |
/// | 4 | `Rsp` | coronal, flipped |
/// | 5 | `Pil` | sagittal, flipped |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)] // variant names are their own documentation
pub enum OrientationCode {
    // Historical Analyze orient byte values.
    Rpi = 0,
    Rip = 1,
    Pir = 2,
    Rai = 3,
    Rsp = 4,
    Pil = 5,
    // Remaining codes of the 48-value set.
    Lip = 6,
    Lsp = 7,
    Ria = 8,
    Lia = 9,
    Rsa = 10,
    Lsa = 11,
    Irp = 12,
    Ilp = 13,
    Srp = 14,
    Slp = 15,
    Ira = 16,
    Ila = 17,
    Sra = 18,
    Sla = 19,
    Lpi = 20,
    Lai = 21,
    Rps = 22,
    Lps = 23,
    Ras = 24,
    Las = 25,
    Pri = 26,
    Pli = 27,
    Ari = 28,
    Ali = 29,
    Prs = 30,
    Pls = 31,
    Ars = 32,
    Als = 33,
    Ipr = 34,
    Spr = 35,
    Iar = 36,
    Sar = 37,
    Ipl = 38,
    Spl = 39,
    Ial = 40,
    Sal = 41,
    Psr = 42,
    Air = 43,
    Asr = 44,
    Psl = 45,
    Ail = 46,
    Asl = 47,
}

impl OrientationCode {
    /// Every legal orientation code, indexed by its byte value.
    pub const ALL: [Self; 48] = [
        Self::Rpi,
        Self::Rip,
        Self::Pir,
        Self::Rai,
        Self::Rsp,
        Self::Pil,
        Self::Lip,
        Self::Lsp,
        Self::Ria,
        Self::Lia,
        Self::Rsa,
        Self::Lsa,
        Self::Irp,
        Self::Ilp,
        Self::Srp,
        Self::Slp,
        Self::Ira,
        Self::Ila,
        Self::Sra,
        Self::Sla,
        Self::Lpi,
        Self::Lai,
        Self::Rps,
        Self::Lps,
        Self::Ras,
        Self::Las,
        Self::Pri,
        Self::Pli,
        Self::Ari,
        Self::Ali,
        Self::Prs,
        Self::Pls,
        Self::Ars,
        Self::Als,
        Self::Ipr,
        Self::Spr,
        Self::Iar,
        Self::Sar,
        Self::Ipl,
        Self::Spl,
        Self::Ial,
        Self::Sal,
        Self::Psr,
        Self::Air,
        Self::Asr,
        Self::Psl,
        Self::Ail,
        Self::Asl,
    ];

    /// Parses a raw orientation byte.
    ///
    /// Fails with [`Error::InvalidCode`] for any value outside `0..=47`;
    /// an unknown byte is never mapped to a default orientation.
    pub fn from_byte(byte: u8) -> Result<Self> {
        Self::ALL
            .get(byte as usize)
            .copied()
            .ok_or_else(|| Error::invalid_code(byte))
    }

    /// The byte value stored in the legacy header for this code.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// The fixed three-letter label, one letter per axis.
    ///
    /// Total and exhaustive over the variant set: every code has exactly
    /// one label and the match has no default arm to fall through.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rpi => "RPI",
            Self::Rip => "RIP",
            Self::Pir => "PIR",
            Self::Rai => "RAI",
            Self::Rsp => "RSP",
            Self::Pil => "PIL",
            Self::Lip => "LIP",
            Self::Lsp => "LSP",
            Self::Ria => "RIA",
            Self::Lia => "LIA",
            Self::Rsa => "RSA",
            Self::Lsa => "LSA",
            Self::Irp => "IRP",
            Self::Ilp => "ILP",
            Self::Srp => "SRP",
            Self::Slp => "SLP",
            Self::Ira => "IRA",
            Self::Ila => "ILA",
            Self::Sra => "SRA",
            Self::Sla => "SLA",
            Self::Lpi => "LPI",
            Self::Lai => "LAI",
            Self::Rps => "RPS",
            Self::Lps => "LPS",
            Self::Ras => "RAS",
            Self::Las => "LAS",
            Self::Pri => "PRI",
            Self::Pli => "PLI",
            Self::Ari => "ARI",
            Self::Ali => "ALI",
            Self::Prs => "PRS",
            Self::Pls => "PLS",
            Self::Ars => "ARS",
            Self::Als => "ALS",
            Self::Ipr => "IPR",
            Self::Spr => "SPR",
            Self::Iar => "IAR",
            Self::Sar => "SAR",
            Self::Ipl => "IPL",
            Self::Spl => "SPL",
            Self::Ial => "IAL",
            Self::Sal => "SAL",
            Self::Psr => "PSR",
            Self::Air => "AIR",
            Self::Asr => "ASR",
            Self::Psl => "PSL",
            Self::Ail => "AIL",
            Self::Asl => "ASL",
        }
    }

    /// The directed label of each image axis, in column/row/slice order.
    pub fn terms(self) -> [CoordinateTerm; 3] {
        let label = self.label().as_bytes();
        let mut terms = [CoordinateTerm::Right; 3];
        for (term, &letter) in terms.iter_mut().zip(label) {
            // Labels are built from the six legal letters by construction.
            if let Some(parsed) = CoordinateTerm::from_letter(letter) {
                *term = parsed;
            }
        }
        terms
    }

    /// Decodes this code into its signed-permutation direction matrix.
    ///
    /// Column `i` of the result is the patient-space unit vector of image
    /// axis `i`. Infallible: the enum itself carries the 48-value legality
    /// invariant, byte-level validation lives in [`Self::from_byte`].
    pub fn direction(self) -> Direction {
        let [a, b, c] = self.terms();
        Direction::from_cols([a.unit_column(), b.unit_column(), c.unit_column()])
    }

    /// Encodes a direction matrix back into an orientation code.
    ///
    /// For each axis the dominant-magnitude component of the corresponding
    /// column picks the anatomical term. Fails with
    /// [`Error::AmbiguousOrientation`] when a column has no dominant
    /// component within [`DOMINANCE_TOLERANCE`], or when the three terms
    /// do not use each anatomical pair exactly once.
    pub fn from_direction(dir: &Direction) -> Result<Self> {
        let mut terms = [CoordinateTerm::Right; 3];
        for axis in 0..3 {
            terms[axis] = dominant_term(dir, axis)?;
        }

        // The three assignments must be a bijection over the three pairs.
        for i in 0..3 {
            for j in (i + 1)..3 {
                if terms[i].pair() == terms[j].pair() {
                    return Err(Error::ambiguous(
                        j,
                        format!(
                            "axes {i} and {j} both resolve to the {}/{} pair",
                            terms[i].letter(),
                            terms[j].letter()
                        ),
                    ));
                }
            }
        }

        Self::from_terms(terms)
            .ok_or_else(|| Error::ambiguous(0, "term assignment matches no known code"))
    }

    /// Looks up the code with the given per-axis terms.
    pub fn from_terms(terms: [CoordinateTerm; 3]) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.terms() == terms)
    }
}

impl std::fmt::Display for OrientationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies one column of a direction matrix by its dominant component.
fn dominant_term(dir: &Direction, axis: usize) -> Result<CoordinateTerm> {
    let col = dir.col(axis);
    let mags = [col[0].abs(), col[1].abs(), col[2].abs()];

    let mut dominant = 0;
    for row in 1..3 {
        if mags[row] > mags[dominant] {
            dominant = row;
        }
    }
    let runner_up = (0..3)
        .filter(|&row| row != dominant)
        .map(|row| mags[row])
        .fold(0.0f64, f64::max);

    if mags[dominant] <= 0.0 {
        return Err(Error::ambiguous(axis, "zero column"));
    }
    // Relative gap, so uniformly scaled columns classify the same way.
    if (mags[dominant] - runner_up) / mags[dominant] <= DOMINANCE_TOLERANCE {
        return Err(Error::ambiguous(
            axis,
            format!(
                "no dominant component: |{:.6}| vs |{:.6}|",
                mags[dominant], runner_up
            ),
        ));
    }

    Ok(CoordinateTerm::from_component(dominant, col[dominant] > 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_byte_roundtrip_all_48() {
        for byte in 0..48u8 {
            let code = OrientationCode::from_byte(byte).unwrap();
            assert_eq!(code.as_byte(), byte);
        }
    }

    #[test]
    fn test_from_byte_rejects_out_of_range() {
        for byte in [48u8, 49, 100, 255] {
            let err = OrientationCode::from_byte(byte).unwrap_err();
            assert!(err.is_invalid_code(), "byte {byte} must be rejected");
        }
    }

    #[test]
    fn test_historical_analyze_bytes() {
        let expected = ["RPI", "RIP", "PIR", "RAI", "RSP", "PIL"];
        for (byte, label) in expected.iter().enumerate() {
            let code = OrientationCode::from_byte(byte as u8).unwrap();
            assert_eq!(code.label(), *label);
        }
    }

    #[test]
    fn test_labels_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for code in OrientationCode::ALL {
            let label = code.label();
            assert_eq!(label.len(), 3);
            assert!(seen.insert(label), "duplicate label {label}");

            // One letter from each complementary pair.
            let distinct: HashSet<_> = code.terms().iter().map(|t| t.pair()).collect();
            assert_eq!(distinct.len(), 3, "label {label} reuses a pair");
        }
        assert_eq!(seen.len(), 48);
    }

    #[test]
    fn test_matrix_roundtrip_all_48() {
        for code in OrientationCode::ALL {
            let matrix = code.direction();
            assert!(matrix.is_signed_permutation(1e-12), "{code} not signed perm");
            assert!(matrix.is_orthonormal(1e-12));
            let decoded = OrientationCode::from_direction(&matrix).unwrap();
            assert_eq!(decoded, code);
        }
    }

    #[test]
    fn test_direction_roundtrip_through_encode() {
        for code in OrientationCode::ALL {
            let matrix = code.direction();
            let again = OrientationCode::from_direction(&matrix).unwrap().direction();
            assert_eq!(again, matrix);
        }
    }

    #[test]
    fn test_rpi_matrix_columns() {
        // R -> +x, P -> -y, I -> +z
        let m = OrientationCode::Rpi.direction();
        assert_eq!(m.col(0), [1.0, 0.0, 0.0]);
        assert_eq!(m.col(1), [0.0, -1.0, 0.0]);
        assert_eq!(m.col(2), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_encode_tolerates_small_perturbation() {
        let mut m = OrientationCode::Rai.direction();
        m.m[1][0] = 1e-3;
        m.m[0][0] = (1.0 - 1e-6f64).sqrt();
        let code = OrientationCode::from_direction(&m).unwrap();
        assert_eq!(code, OrientationCode::Rai);
    }

    #[test]
    fn test_encode_dominance_is_scale_invariant() {
        // A uniformly tiny matrix still has relatively dominant components.
        let mut m = OrientationCode::Rai.direction();
        for row in m.m.iter_mut() {
            for v in row.iter_mut() {
                *v *= 1e-7;
            }
        }
        assert_eq!(OrientationCode::from_direction(&m).unwrap(), OrientationCode::Rai);
    }

    #[test]
    fn test_encode_rejects_zero_column() {
        let m = Direction::from_cols([[0.0; 3], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(OrientationCode::from_direction(&m).unwrap_err().is_ambiguous());
    }

    #[test]
    fn test_encode_rejects_ambiguous_column() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let m = Direction::from_cols([[s, s, 0.0], [-s, s, 0.0], [0.0, 0.0, 1.0]]);
        let err = OrientationCode::from_direction(&m).unwrap_err();
        assert!(err.is_ambiguous());
    }

    #[test]
    fn test_encode_rejects_non_bijection() {
        // Two axes dominated by the same anatomical pair.
        let m = Direction::from_cols([
            [1.0, 0.0, 0.0],
            [-1.0, 0.1, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let err = OrientationCode::from_direction(&m).unwrap_err();
        assert!(err.is_ambiguous());
    }

    #[test]
    fn test_from_terms_matches_label_letters() {
        use CoordinateTerm::*;
        assert_eq!(
            OrientationCode::from_terms([Posterior, Inferior, Left]),
            Some(OrientationCode::Pil)
        );
        assert_eq!(
            OrientationCode::from_terms([Right, Anterior, Inferior]),
            Some(OrientationCode::Rai)
        );
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(OrientationCode::Lps.to_string(), "LPS");
    }
}
