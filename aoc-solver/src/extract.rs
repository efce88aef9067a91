//! Static key extraction
//!
//! Recovers the constant a solution's `year`/`day` accessor returns by reading
//! its compiled [`AccessorBody`]. The solution type is never constructed and
//! the accessor never runs, so constructors with side effects are safe during
//! discovery.

use crate::body::{AccessorBody, op};
use crate::module::SolutionType;
use crate::registry::SolutionDescriptor;

/// Recover the constant returned by an accessor body
///
/// Accepted shapes are a single constant load followed by `RETURN`:
/// - `LOAD_MINUS_ONE`
/// - `LOAD_0` ..= `LOAD_8`
/// - `LOAD_I8 <byte>`
/// - `LOAD_I32 <4 bytes, little-endian>`
///
/// # Returns
/// * `Some(value)` - The body returns a literal constant
/// * `None` - Any other shape (field reads, calls, arithmetic, truncated operands)
///
/// # Example
///
/// ```
/// use aoc_solver::{AccessorBody, extract_constant};
///
/// assert_eq!(extract_constant(&AccessorBody::literal(2025)), Some(2025));
/// assert_eq!(extract_constant(&AccessorBody::computed()), None);
/// ```
pub fn extract_constant(body: &AccessorBody) -> Option<i32> {
    let (value, rest) = match body.code() {
        [op::LOAD_MINUS_ONE, rest @ ..] => (-1, rest),
        [small @ op::LOAD_0..=op::LOAD_8, rest @ ..] => (i32::from(*small - op::LOAD_0), rest),
        [op::LOAD_I8, byte, rest @ ..] => (i32::from(*byte as i8), rest),
        [op::LOAD_I32, b0, b1, b2, b3, rest @ ..] => (i32::from_le_bytes([*b0, *b1, *b2, *b3]), rest),
        _ => return None,
    };

    matches!(rest, [op::RETURN]).then_some(value)
}

/// Extract the (year, day) pair of a candidate type
///
/// Returns `None` unless both accessors are literal constants.
pub fn extract_keys(ty: &SolutionType) -> Option<(i32, i32)> {
    let year = extract_constant(&ty.year_body)?;
    let day = extract_constant(&ty.day_body)?;
    Some((year, day))
}

/// Build the descriptor for a candidate type
///
/// Returns `None` when the keys cannot be recovered statically or are negative;
/// such candidates are simply not eligible for registration.
pub fn extract_descriptor(ty: &'static SolutionType) -> Option<SolutionDescriptor> {
    let (year, day) = extract_keys(ty)?;
    SolutionDescriptor::new(ty, year, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(code: &[u8]) -> AccessorBody {
        AccessorBody::from_code(code).unwrap()
    }

    #[test]
    fn test_literals_round_through_extraction() {
        for value in [-1, 0, 1, 5, 8, 42, 2025, -100, 100_000, i32::MIN, i32::MAX] {
            assert_eq!(extract_constant(&AccessorBody::literal(value)), Some(value));
        }
    }

    #[test]
    fn test_wide_encoding_of_small_value() {
        let wide = body(&[op::LOAD_I32, 5, 0, 0, 0, op::RETURN]);
        assert_eq!(extract_constant(&wide), Some(5));

        let byte = body(&[op::LOAD_I8, 0xFF, op::RETURN]);
        assert_eq!(extract_constant(&byte), Some(-1));
    }

    #[test]
    fn test_computed_bodies_are_rejected() {
        assert_eq!(extract_constant(&AccessorBody::computed()), None);

        let field_read = body(&[op::LOAD_SELF, op::LOAD_FIELD, 0, 0, op::RETURN]);
        assert_eq!(extract_constant(&field_read), None);

        let sum = body(&[op::LOAD_0 + 2, op::LOAD_0 + 3, op::ADD, op::RETURN]);
        assert_eq!(extract_constant(&sum), None);
    }

    #[test]
    fn test_malformed_bodies_are_rejected() {
        assert_eq!(extract_constant(&body(&[])), None);
        assert_eq!(extract_constant(&body(&[op::LOAD_0 + 1])), None);
        assert_eq!(extract_constant(&body(&[op::LOAD_I8])), None);
        assert_eq!(extract_constant(&body(&[op::LOAD_I32, 1, 2, op::RETURN])), None);
        assert_eq!(
            extract_constant(&body(&[op::LOAD_0, op::RETURN, op::RETURN])),
            None
        );
    }
}
