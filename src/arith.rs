//! Integer scaling used by the exported functions.
//!
//! Products that do not fit in an `i32` wrap around (two's complement),
//! in debug and release builds alike.

/// Multiply `x` by `factor`, wrapping on overflow.
#[inline]
pub fn scale(x: i32, factor: i32) -> i32 {
    x.wrapping_mul(factor)
}

#[inline]
pub fn double(x: i32) -> i32 {
    scale(x, 2)
}

#[inline]
pub fn triple(x: i32) -> i32 {
    scale(x, 3)
}

/// Returns true if the exact product `x * factor` is outside the `i32` range,
/// i.e. `scale` would have wrapped.
#[inline]
pub fn overflows(x: i32, factor: i32) -> bool {
    x.checked_mul(factor).is_none()
}
