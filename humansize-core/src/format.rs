use crate::error::SizeError;
use crate::units::UnitBase;

/// Convert a byte count to human-readable form.
///
/// When `base1024` is true (the conventional default, see
/// [`approximate_size_binary`]) multiples of 1024 are used with KiB/MiB/...
/// suffixes; otherwise multiples of 1000 with KB/MB/....
///
/// Sizes below one multiple are shown as a whole number of bytes (`"42 B"`);
/// anything larger gets one decimal place (`"1.0 TB"`).
///
/// # Errors
/// * [`SizeError::InvalidArgument`] if `size` is negative
/// * [`SizeError::Overflow`] if the scaled value still reaches one multiple
///   after the largest suffix (roughly `multiple^9` and up)
pub fn approximate_size(size: impl Into<i128>, base1024: bool) -> Result<String, SizeError> {
    approximate_size_with(size, UnitBase::from_base1024(base1024))
}

/// [`approximate_size`] with binary (1024) multiples.
pub fn approximate_size_binary(size: impl Into<i128>) -> Result<String, SizeError> {
    approximate_size_with(size, UnitBase::Binary)
}

/// [`approximate_size`] keyed by an explicit [`UnitBase`].
pub fn approximate_size_with(size: impl Into<i128>, base: UnitBase) -> Result<String, SizeError> {
    let size = size.into();
    if size < 0 {
        return Err(SizeError::InvalidArgument { size });
    }

    let multiple = i128::from(base.multiple());
    if size < multiple {
        return Ok(format!("{} B", size));
    }

    let divisor = f64::from(base.multiple());
    let mut value = quotient_to_f64(size.unsigned_abs(), u128::from(base.multiple()));
    for (tier, suffix) in base.suffixes().iter().enumerate() {
        if tier > 0 {
            value /= divisor;
        }
        if value < divisor {
            return Ok(format!("{:.1} {}", value, suffix));
        }
    }

    Err(SizeError::Overflow { size })
}

/// `n / d` rounded once to the nearest `f64`.
///
/// Converting `n` first would round twice for inputs above 2^53. The quotient
/// is widened to at least 55 significant bits and the remainder folded into
/// the lowest bit, so the final `as f64` sees the correct sticky bit.
/// Requires `n >= d > 0`.
fn quotient_to_f64(n: u128, d: u128) -> f64 {
    let bits = u128::BITS - (n / d).leading_zeros();
    let shift = 55u32.saturating_sub(bits);
    // With a short quotient, n < d * 2^55, so the shift cannot overflow.
    let scaled = n << shift;
    let mut q = scaled / d;
    if scaled % d != 0 {
        q |= 1;
    }
    q as f64 / 2f64.powi(shift as i32)
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
