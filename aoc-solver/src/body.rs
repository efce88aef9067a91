//! Compiled accessor bodies
//!
//! The `year` and `day` accessors of a solution are recorded alongside its
//! registration as a tiny byte program. The derive macro compiles literal
//! values into a constant-load instruction followed by [`op::RETURN`], and
//! every other expression into an opaque body that calls out to the accessor.
//! Discovery only ever reads these bytes; it never runs the accessor itself.

use std::fmt;

/// Instruction set used by accessor bodies
pub mod op {
    /// Return the value on top of the stack
    pub const RETURN: u8 = 0x01;
    /// Push the constant `-1`
    pub const LOAD_MINUS_ONE: u8 = 0x10;
    /// Push the constant `0`; `LOAD_0 + n` pushes `n` for `n` in `0..=8`
    pub const LOAD_0: u8 = 0x11;
    /// Push the constant `8`
    pub const LOAD_8: u8 = LOAD_0 + 8;
    /// Push the following signed byte
    pub const LOAD_I8: u8 = 0x1A;
    /// Push the following four bytes as a little-endian `i32`
    pub const LOAD_I32: u8 = 0x1B;
    /// Push the receiver
    pub const LOAD_SELF: u8 = 0x20;
    /// Replace the receiver with one of its fields (u16 index follows)
    pub const LOAD_FIELD: u8 = 0x21;
    /// Call a method on the receiver (u16 index follows)
    pub const CALL: u8 = 0x22;
    /// Pop two values and push their sum
    pub const ADD: u8 = 0x30;
}

/// Longest program an accessor body can hold
pub const MAX_CODE_LEN: usize = 8;

/// The compiled body of a read-only integer accessor
///
/// Bodies are plain data and can be built in `const` context, which is what
/// lets the derive macro place them inside `inventory` registrations.
///
/// # Example
///
/// ```
/// use aoc_solver::{AccessorBody, body::op};
///
/// let body = AccessorBody::literal(2025);
/// assert_eq!(body.code()[0], op::LOAD_I32);
/// assert_eq!(body.code().last(), Some(&op::RETURN));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessorBody {
    code: [u8; MAX_CODE_LEN],
    len: u8,
}

impl AccessorBody {
    /// Compile a literal value into the most compact constant-load shape
    pub const fn literal(value: i32) -> Self {
        let mut code = [0u8; MAX_CODE_LEN];
        let len = match value {
            -1 => {
                code[0] = op::LOAD_MINUS_ONE;
                1
            }
            0..=8 => {
                code[0] = op::LOAD_0 + value as u8;
                1
            }
            -128..=127 => {
                code[0] = op::LOAD_I8;
                code[1] = value as i8 as u8;
                2
            }
            _ => {
                let bytes = value.to_le_bytes();
                code[0] = op::LOAD_I32;
                code[1] = bytes[0];
                code[2] = bytes[1];
                code[3] = bytes[2];
                code[4] = bytes[3];
                5
            }
        };
        code[len] = op::RETURN;
        Self {
            code,
            len: len as u8 + 1,
        }
    }

    /// Body of an accessor whose value is computed at runtime
    ///
    /// Compiles to `LOAD_SELF; CALL 0; RETURN`.
    pub const fn computed() -> Self {
        let mut code = [0u8; MAX_CODE_LEN];
        code[0] = op::LOAD_SELF;
        code[1] = op::CALL;
        code[4] = op::RETURN;
        Self { code, len: 5 }
    }

    /// Wrap raw instruction bytes
    ///
    /// Returns `None` if `bytes` is longer than [`MAX_CODE_LEN`].
    pub const fn from_code(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_CODE_LEN {
            return None;
        }
        let mut code = [0u8; MAX_CODE_LEN];
        let mut i = 0;
        while i < bytes.len() {
            code[i] = bytes[i];
            i += 1;
        }
        Some(Self {
            code,
            len: bytes.len() as u8,
        })
    }

    /// The instruction bytes of this body
    pub fn code(&self) -> &[u8] {
        &self.code[..self.len as usize]
    }
}

impl fmt::Debug for AccessorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessorBody(")?;
        for (i, byte) in self.code().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_shapes() {
        assert_eq!(AccessorBody::literal(-1).code(), &[op::LOAD_MINUS_ONE, op::RETURN]);
        assert_eq!(AccessorBody::literal(0).code(), &[op::LOAD_0, op::RETURN]);
        assert_eq!(AccessorBody::literal(8).code(), &[op::LOAD_8, op::RETURN]);
        assert_eq!(AccessorBody::literal(9).code(), &[op::LOAD_I8, 9, op::RETURN]);
        assert_eq!(
            AccessorBody::literal(-100).code(),
            &[op::LOAD_I8, (-100i8) as u8, op::RETURN]
        );
        assert_eq!(
            AccessorBody::literal(2025).code(),
            &[op::LOAD_I32, 0xE9, 0x07, 0x00, 0x00, op::RETURN]
        );
    }

    #[test]
    fn test_literal_is_const() {
        const BODY: AccessorBody = AccessorBody::literal(100_000);
        assert_eq!(BODY.code().len(), 6);
    }

    #[test]
    fn test_from_code_rejects_long_programs() {
        assert!(AccessorBody::from_code(&[op::RETURN; MAX_CODE_LEN]).is_some());
        assert!(AccessorBody::from_code(&[op::RETURN; MAX_CODE_LEN + 1]).is_none());
    }

    #[test]
    fn test_debug_renders_hex() {
        let body = AccessorBody::literal(3);
        assert_eq!(format!("{:?}", body), "AccessorBody(14 01)");
    }
}
