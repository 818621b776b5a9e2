//! The `DataType` registry: a frozen table mapping a two-character dtype
//! code (`f4`, `u2`, `d3`, ...) to the GL formats/types needed to allocate
//! and transfer texture storage of that element type and channel count.

use crate::error::Error;
use gl::types::GLenum;

/// One row of the dtype table: everything [`crate::texture::Texture`] needs
/// to call `TexStorage*`/`TexImage*`/`TexSubImage*` for a given channel
/// count of this element type.
#[derive(Debug, Clone, Copy)]
pub struct DataType {
    /// Base (unsized) external format for each channel count 1..=4, index 0 unused.
    pub base_format: [GLenum; 5],
    /// Sized internal format for each channel count 1..=4, index 0 unused.
    pub internal_format: [GLenum; 5],
    /// GL element type (`FLOAT`, `UNSIGNED_BYTE`, ...).
    pub gl_type: GLenum,
    /// `'f' | 'u' | 'i' | 'd'` classifying how host values are read/written.
    pub shape: u8,
    /// Size in bytes of one element (one channel).
    pub element_size: u8,
    /// True for the single depth dtype row (`d2`/`d3`/`d4`), which only
    /// populates `base_format[1]`/`internal_format[1]`.
    pub is_depth: bool,
}

const fn f(arr: [GLenum; 5]) -> [GLenum; 5] {
    arr
}

macro_rules! row {
    ($shape:literal, $size:literal, $ty:expr, $base:expr, $internal:expr) => {
        DataType {
            base_format: $base,
            internal_format: $internal,
            gl_type: $ty,
            shape: $shape,
            element_size: $size,
            is_depth: false,
        }
    };
}

/// `f1, f2, f4` — normalized/float 8- and 32-bit channels.
const F1: DataType = row!(
    b'f',
    1,
    gl::UNSIGNED_BYTE,
    f([0, gl::RED, gl::RG, gl::RGB, gl::RGBA]),
    f([0, gl::R8, gl::RG8, gl::RGB8, gl::RGBA8])
);
const F2: DataType = row!(
    b'f',
    2,
    gl::HALF_FLOAT,
    f([0, gl::RED, gl::RG, gl::RGB, gl::RGBA]),
    f([0, gl::R16F, gl::RG16F, gl::RGB16F, gl::RGBA16F])
);
const F4: DataType = row!(
    b'f',
    4,
    gl::FLOAT,
    f([0, gl::RED, gl::RG, gl::RGB, gl::RGBA]),
    f([0, gl::R32F, gl::RG32F, gl::RGB32F, gl::RGBA32F])
);
const U1: DataType = row!(
    b'u',
    1,
    gl::UNSIGNED_BYTE,
    f([0, gl::RED_INTEGER, gl::RG_INTEGER, gl::RGB_INTEGER, gl::RGBA_INTEGER]),
    f([0, gl::R8UI, gl::RG8UI, gl::RGB8UI, gl::RGBA8UI])
);
const U2: DataType = row!(
    b'u',
    2,
    gl::UNSIGNED_SHORT,
    f([0, gl::RED_INTEGER, gl::RG_INTEGER, gl::RGB_INTEGER, gl::RGBA_INTEGER]),
    f([0, gl::R16UI, gl::RG16UI, gl::RGB16UI, gl::RGBA16UI])
);
const U4: DataType = row!(
    b'u',
    4,
    gl::UNSIGNED_INT,
    f([0, gl::RED_INTEGER, gl::RG_INTEGER, gl::RGB_INTEGER, gl::RGBA_INTEGER]),
    f([0, gl::R32UI, gl::RG32UI, gl::RGB32UI, gl::RGBA32UI])
);
const I1: DataType = row!(
    b'i',
    1,
    gl::BYTE,
    f([0, gl::RED_INTEGER, gl::RG_INTEGER, gl::RGB_INTEGER, gl::RGBA_INTEGER]),
    f([0, gl::R8I, gl::RG8I, gl::RGB8I, gl::RGBA8I])
);
const I2: DataType = row!(
    b'i',
    2,
    gl::SHORT,
    f([0, gl::RED_INTEGER, gl::RG_INTEGER, gl::RGB_INTEGER, gl::RGBA_INTEGER]),
    f([0, gl::R16I, gl::RG16I, gl::RGB16I, gl::RGBA16I])
);
const I4: DataType = row!(
    b'i',
    4,
    gl::INT,
    f([0, gl::RED_INTEGER, gl::RG_INTEGER, gl::RGB_INTEGER, gl::RGBA_INTEGER]),
    f([0, gl::R32I, gl::RG32I, gl::RGB32I, gl::RGBA32I])
);

const fn depth_row(internal: GLenum) -> DataType {
    DataType {
        base_format: [0, gl::DEPTH_COMPONENT, 0, 0, 0],
        internal_format: [0, internal, 0, 0, 0],
        gl_type: gl::FLOAT,
        shape: b'f',
        element_size: 4,
        is_depth: true,
    }
}

const D2: DataType = depth_row(gl::DEPTH_COMPONENT16);
const D3: DataType = depth_row(gl::DEPTH_COMPONENT24);
const D4: DataType = depth_row(gl::DEPTH_COMPONENT32F);

impl DataType {
    /// Resolves a two-character dtype code such as `"f4"`, `"u2"`, `"d3"`.
    pub fn lookup(code: &str) -> Result<DataType, Error> {
        let bytes = code.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::invalid_dtype(code));
        }
        match (bytes[0], bytes[1]) {
            (b'f', b'1') => Ok(F1),
            (b'f', b'2') => Ok(F2),
            (b'f', b'4') => Ok(F4),
            (b'u', b'1') => Ok(U1),
            (b'u', b'2') => Ok(U2),
            (b'u', b'4') => Ok(U4),
            (b'i', b'1') => Ok(I1),
            (b'i', b'2') => Ok(I2),
            (b'i', b'4') => Ok(I4),
            (b'd', b'2') => Ok(D2),
            (b'd', b'3') => Ok(D3),
            (b'd', b'4') => Ok(D4),
            _ => Err(Error::invalid_dtype(code)),
        }
    }

    pub fn base_format(&self, components: u8) -> GLenum {
        if self.is_depth {
            self.base_format[1]
        } else {
            self.base_format[components as usize]
        }
    }

    pub fn internal_format(&self, components: u8) -> GLenum {
        if self.is_depth {
            self.internal_format[1]
        } else {
            self.internal_format[components as usize]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_every_documented_code() {
        for code in ["f1", "f2", "f4", "u1", "u2", "u4", "i1", "i2", "i4", "d2", "d3", "d4"] {
            assert!(DataType::lookup(code).is_ok(), "{code} should resolve");
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        for code in ["x1", "f5", "f", "f44", ""] {
            assert!(DataType::lookup(code).is_err(), "{code} should fail");
        }
    }

    #[test]
    fn depth_dtype_only_populates_single_channel_format() {
        let d = DataType::lookup("d3").unwrap();
        assert!(d.is_depth);
        assert_eq!(d.base_format(1), gl::DEPTH_COMPONENT);
        assert_eq!(d.internal_format(1), gl::DEPTH_COMPONENT24);
    }

    #[test]
    fn f1_is_one_byte_per_channel() {
        let d = DataType::lookup("f1").unwrap();
        assert_eq!(d.element_size, 1);
        assert_eq!(d.shape, b'f');
        assert_eq!(d.internal_format(3), gl::RGB8);
    }
}
