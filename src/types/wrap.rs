//! Packed per-axis texture wrap encoding: one byte per axis (S, T, R) in a
//! single 32-bit value, accepted both as three explicit arguments and as the
//! packed `u32` form for API compatibility with the packed source encoding.

use gl::types::GLenum;

/// Per-axis wrap mode. Byte value 0 means "unset", which [`Wrap::resolve`]
/// treats as [`WrapMode::ClampToEdge`], matching the packed encoding's
/// "zero defaults to CLAMP_TO_EDGE" rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WrapMode {
    ClampToEdge,
    Repeat,
    MirroredRepeat,
    MirrorClampToEdge,
    ClampToBorder,
}

impl WrapMode {
    fn from_byte(byte: u8) -> WrapMode {
        match byte {
            0x02 => WrapMode::Repeat,
            0x03 => WrapMode::MirroredRepeat,
            0x04 => WrapMode::MirrorClampToEdge,
            0x05 => WrapMode::ClampToBorder,
            _ => WrapMode::ClampToEdge,
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            WrapMode::ClampToEdge => 0x01,
            WrapMode::Repeat => 0x02,
            WrapMode::MirroredRepeat => 0x03,
            WrapMode::MirrorClampToEdge => 0x04,
            WrapMode::ClampToBorder => 0x05,
        }
    }

    pub fn to_gl(self) -> GLenum {
        match self {
            WrapMode::ClampToEdge => gl::CLAMP_TO_EDGE,
            WrapMode::Repeat => gl::REPEAT,
            WrapMode::MirroredRepeat => gl::MIRRORED_REPEAT,
            WrapMode::MirrorClampToEdge => gl::MIRROR_CLAMP_TO_EDGE,
            WrapMode::ClampToBorder => gl::CLAMP_TO_BORDER,
        }
    }
}

/// Wrap state for all three texture axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Wrap {
    pub s: WrapMode,
    pub t: WrapMode,
    pub r: WrapMode,
}

impl Wrap {
    pub fn new(s: WrapMode, t: WrapMode, r: WrapMode) -> Wrap {
        Wrap { s, t, r }
    }
}

impl From<u32> for Wrap {
    fn from(packed: u32) -> Self {
        let bytes = packed.to_le_bytes();
        Wrap {
            s: WrapMode::from_byte(bytes[0]),
            t: WrapMode::from_byte(bytes[1]),
            r: WrapMode::from_byte(bytes[2]),
        }
    }
}

impl From<Wrap> for u32 {
    fn from(wrap: Wrap) -> Self {
        u32::from_le_bytes([wrap.s.to_byte(), wrap.t.to_byte(), wrap.r.to_byte(), 0])
    }
}

impl Default for Wrap {
    fn default() -> Self {
        Wrap::new(WrapMode::ClampToEdge, WrapMode::ClampToEdge, WrapMode::ClampToEdge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_byte_defaults_to_clamp_to_edge() {
        let wrap = Wrap::from(0u32);
        assert_eq!(wrap.s, WrapMode::ClampToEdge);
        assert_eq!(wrap.t, WrapMode::ClampToEdge);
        assert_eq!(wrap.r, WrapMode::ClampToEdge);
    }

    #[test]
    fn round_trips_through_the_packed_form() {
        let wrap = Wrap::new(WrapMode::Repeat, WrapMode::MirroredRepeat, WrapMode::ClampToBorder);
        let packed: u32 = wrap.into();
        assert_eq!(Wrap::from(packed), wrap);
    }

    #[test]
    fn axes_pack_into_distinct_bytes() {
        let packed: u32 = Wrap::new(WrapMode::Repeat, WrapMode::ClampToEdge, WrapMode::ClampToEdge).into();
        assert_eq!(packed & 0xFF, 0x02);
        assert_eq!((packed >> 8) & 0xFF, 0x01);
    }
}
