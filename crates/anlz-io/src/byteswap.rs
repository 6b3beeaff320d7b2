//! Byte-order detection and fixed-width value swapping.
//!
//! Legacy volume files declare a byte order; the running system has its
//! own. [`to_declared`] reconciles the two: it reverses the bytes of a
//! value if and only if the native order differs from the declared one,
//! and is a bit-exact pass-through otherwise.
//!
//! # Laws
//!
//! - `x.swapped().swapped() == x` for every supported width
//! - `to_declared(x, Endianness::native()) == x`
//!
//! ```rust
//! use anlz_io::byteswap::{Endianness, to_declared};
//!
//! let x = 0x1122_3344u32;
//! assert_eq!(to_declared(x, Endianness::native()), x);
//! ```

/// Byte order (endianness).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Big-endian (network byte order).
    Big,
    /// Little-endian. Default for the legacy pixel format.
    #[default]
    Little,
}

impl Endianness {
    /// The byte order of the running system.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

/// Fixed-width values whose byte order can be reversed.
pub trait ByteSwap: Copy {
    /// Returns the value with its byte order reversed.
    fn swapped(self) -> Self;
}

macro_rules! impl_byteswap_int {
    ($($t:ty),*) => {
        $(impl ByteSwap for $t {
            #[inline]
            fn swapped(self) -> Self {
                self.swap_bytes()
            }
        })*
    };
}

impl_byteswap_int!(u16, i16, u32, i32, u64, i64);

impl ByteSwap for f32 {
    #[inline]
    fn swapped(self) -> Self {
        Self::from_bits(self.to_bits().swap_bytes())
    }
}

impl ByteSwap for f64 {
    #[inline]
    fn swapped(self) -> Self {
        Self::from_bits(self.to_bits().swap_bytes())
    }
}

/// Converts a value between the native byte order and a declared one.
///
/// Swaps exactly when `Endianness::native() != declared`; otherwise the
/// value passes through untouched (bit-exact, including NaN payloads).
/// The same call converts in both directions since swapping is
/// self-inverse.
#[inline]
pub fn to_declared<T: ByteSwap>(value: T, declared: Endianness) -> T {
    if Endianness::native() == declared {
        value
    } else {
        value.swapped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_is_involution() {
        assert_eq!(0x1122u16.swapped().swapped(), 0x1122);
        assert_eq!(0x1122_3344u32.swapped().swapped(), 0x1122_3344);
        assert_eq!((-7i32).swapped().swapped(), -7);
        assert_eq!(0x1122_3344_5566_7788u64.swapped().swapped(), 0x1122_3344_5566_7788);
        let f = 123.456f32;
        assert_eq!(f.swapped().swapped().to_bits(), f.to_bits());
        let d = -98765.4321f64;
        assert_eq!(d.swapped().swapped().to_bits(), d.to_bits());
    }

    #[test]
    fn test_swap_reverses_bytes() {
        assert_eq!(0x1122_3344u32.swapped(), 0x4433_2211);
        assert_eq!(0x1122u16.swapped(), 0x2211);
        let one = f32::from_le_bytes([0x00, 0x00, 0x80, 0x3f]);
        assert_eq!(one, 1.0);
        assert_eq!(one.swapped().to_bits(), 0x0000_803f);
    }

    #[test]
    fn test_native_order_is_identity() {
        let v = 0xdead_beefu32;
        assert_eq!(to_declared(v, Endianness::native()), v);
        let f = 1.5f32;
        assert_eq!(to_declared(f, Endianness::native()).to_bits(), f.to_bits());
    }

    #[test]
    fn test_foreign_order_swaps() {
        let foreign = match Endianness::native() {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        };
        assert_eq!(to_declared(0x1122_3344u32, foreign), 0x4433_2211);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_little_endian_host_passthrough() {
        // On a little-endian host a little-endian declaration never swaps.
        assert_eq!(to_declared(0x0102_0304u32, Endianness::Little), 0x0102_0304);
        assert_eq!(to_declared(0x0102_0304u32, Endianness::Big), 0x0403_0201);
    }
}
