//! 3x3 direction-cosine matrix type.
//!
//! [`Direction`] describes how a volume's index axes map into patient
//! space: column `i` is a unit vector giving the physical direction of
//! increasing index along image axis `i`.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use anlz_core::Direction;
//!
//! let axial = Direction::from_cols([
//!     [1.0, 0.0, 0.0],
//!     [0.0, -1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! assert!(axial.is_signed_permutation(1e-9));
//! ```

use std::fmt;
use std::ops::{Index, Mul};

/// A 3x3 direction-cosine matrix.
///
/// Stored in row-major order. Use [`Direction::from_rows`] or
/// [`Direction::from_cols`] to construct from component arrays.
///
/// For orientations expressible by the legacy 48-code enumeration the
/// matrix is a *signed permutation*: exactly one nonzero entry of value
/// plus or minus one in every row and column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Direction {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Direction {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix (axis-aligned orientation).
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally). Each column
    /// is one image axis expressed in patient space.
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Returns a row as an array.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 3] {
        self.m[i]
    }

    /// Returns a column as an array.
    #[inline]
    pub fn col(&self, i: usize) -> [f64; 3] {
        [self.m[0][i], self.m[1][i], self.m[2][i]]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns true if the columns are pairwise orthogonal unit vectors
    /// within `tol`.
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                let dot: f64 = (0..3).map(|k| self.m[k][i] * self.m[k][j]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                if (dot - expected).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if the matrix is a signed permutation within `tol`:
    /// exactly one entry of magnitude one per row and column, all other
    /// entries zero.
    pub fn is_signed_permutation(&self, tol: f64) -> bool {
        let mut row_hits = [0usize; 3];
        let mut col_hits = [0usize; 3];
        for r in 0..3 {
            for c in 0..3 {
                let mag = self.m[r][c].abs();
                if (mag - 1.0).abs() <= tol {
                    row_hits[r] += 1;
                    col_hits[c] += 1;
                } else if mag > tol {
                    return false;
                }
            }
        }
        row_hits == [1, 1, 1] && col_hits == [1, 1, 1]
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Transforms a column vector by this matrix.
    #[inline]
    pub fn transform(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        // glam uses column-major, so we transpose
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_cols([cols[0], cols[1], cols[2]])
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{} {} {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

// Direction * [f64; 3]
impl Mul<[f64; 3]> for Direction {
    type Output = [f64; 3];

    #[inline]
    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.transform(rhs)
    }
}

// Direction * Direction
impl Mul for Direction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Direction {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(Direction::IDENTITY * v, v);
        assert!(Direction::IDENTITY.is_orthonormal(1e-12));
        assert!(Direction::IDENTITY.is_signed_permutation(1e-12));
    }

    #[test]
    fn test_from_cols_transposes() {
        let d = Direction::from_cols([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(d.col(0), [0.0, 1.0, 0.0]);
        assert_eq!(d.row(0), [0.0, 1.0, 0.0]);
        assert_eq!(d.m[1][0], 1.0);
    }

    #[test]
    fn test_determinant() {
        let d = Direction::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_abs_diff_eq!(d.determinant(), 1.0, epsilon = 1e-12);

        // Reflections have determinant -1
        let mut r = Direction::IDENTITY;
        r.m[0][0] = -1.0;
        assert_abs_diff_eq!(r.determinant(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transpose() {
        let d = Direction::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = d.transpose();
        assert_eq!(t.m[0][1], 4.0);
        assert_eq!(t.m[1][0], 2.0);
        assert_eq!(t.transpose(), d);
    }

    #[test]
    fn test_signed_permutation_rejects_rotation() {
        // A 45-degree rotation is orthonormal but not a signed permutation.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let rot = Direction::from_rows([[s, -s, 0.0], [s, s, 0.0], [0.0, 0.0, 1.0]]);
        assert!(rot.is_orthonormal(1e-12));
        assert!(!rot.is_signed_permutation(1e-6));
    }

    #[test]
    fn test_orthonormal_rejects_scaled() {
        let mut d = Direction::IDENTITY;
        d.m[0][0] = 2.0;
        assert!(!d.is_orthonormal(1e-6));
    }

    #[test]
    fn test_signed_permutation_rejects_duplicate_column() {
        let d = Direction::from_cols([[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!d.is_signed_permutation(1e-9));
    }

    #[test]
    fn test_glam_roundtrip() {
        let d = Direction::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]]);
        assert_eq!(Direction::from_glam(d.to_glam()), d);
    }

    #[test]
    fn test_display_rows() {
        let out = Direction::IDENTITY.to_string();
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("[1 0 0]"));
    }
}
