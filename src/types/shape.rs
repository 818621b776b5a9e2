//! Decodes a GL uniform/attribute type enum into `{shape, cols, rows}`,
//! per the GL type -> shape table. One decoder drives both uniform
//! marshalling ([`crate::program`]) and attribute/uniform introspection.

use gl::types::GLenum;

/// How a single scalar component of a uniform/attribute value is read or
/// written on the host side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Shape {
    /// `f32`
    F,
    /// `i32`
    I,
    /// `u32`
    U,
    /// `f64`
    D,
    /// bool, marshalled as `i32`
    P,
}

/// Decoded shape of a GL type: scalar/vector/matrix dimensions plus the
/// host read/write kind. `cols == rows == 1` is a scalar; `rows == 1` with
/// `cols > 1` is a vector; otherwise a `cols x rows` matrix. Samplers and
/// images decode to `(Shape::I, 1, 1)` since they are set as integer
/// texture-unit bindings.
pub fn decode_gl_type(ty: GLenum) -> Option<(Shape, u8, u8)> {
    use Shape::*;
    let row = match ty {
        gl::FLOAT => (F, 1, 1),
        gl::FLOAT_VEC2 => (F, 2, 1),
        gl::FLOAT_VEC3 => (F, 3, 1),
        gl::FLOAT_VEC4 => (F, 4, 1),
        gl::FLOAT_MAT2 => (F, 2, 2),
        gl::FLOAT_MAT3 => (F, 3, 3),
        gl::FLOAT_MAT4 => (F, 4, 4),
        gl::FLOAT_MAT2x3 => (F, 2, 3),
        gl::FLOAT_MAT2x4 => (F, 2, 4),
        gl::FLOAT_MAT3x2 => (F, 3, 2),
        gl::FLOAT_MAT3x4 => (F, 3, 4),
        gl::FLOAT_MAT4x2 => (F, 4, 2),
        gl::FLOAT_MAT4x3 => (F, 4, 3),

        gl::DOUBLE => (D, 1, 1),
        gl::DOUBLE_VEC2 => (D, 2, 1),
        gl::DOUBLE_VEC3 => (D, 3, 1),
        gl::DOUBLE_VEC4 => (D, 4, 1),
        gl::DOUBLE_MAT2 => (D, 2, 2),
        gl::DOUBLE_MAT3 => (D, 3, 3),
        gl::DOUBLE_MAT4 => (D, 4, 4),
        gl::DOUBLE_MAT2x3 => (D, 2, 3),
        gl::DOUBLE_MAT2x4 => (D, 2, 4),
        gl::DOUBLE_MAT3x2 => (D, 3, 2),
        gl::DOUBLE_MAT3x4 => (D, 3, 4),
        gl::DOUBLE_MAT4x2 => (D, 4, 2),
        gl::DOUBLE_MAT4x3 => (D, 4, 3),

        gl::INT => (I, 1, 1),
        gl::INT_VEC2 => (I, 2, 1),
        gl::INT_VEC3 => (I, 3, 1),
        gl::INT_VEC4 => (I, 4, 1),

        gl::UNSIGNED_INT => (U, 1, 1),
        gl::UNSIGNED_INT_VEC2 => (U, 2, 1),
        gl::UNSIGNED_INT_VEC3 => (U, 3, 1),
        gl::UNSIGNED_INT_VEC4 => (U, 4, 1),

        gl::BOOL => (P, 1, 1),
        gl::BOOL_VEC2 => (P, 2, 1),
        gl::BOOL_VEC3 => (P, 3, 1),
        gl::BOOL_VEC4 => (P, 4, 1),

        // Samplers and images: set with glUniform1i (texture unit index).
        gl::SAMPLER_1D
        | gl::SAMPLER_2D
        | gl::SAMPLER_3D
        | gl::SAMPLER_CUBE
        | gl::SAMPLER_1D_SHADOW
        | gl::SAMPLER_2D_SHADOW
        | gl::SAMPLER_1D_ARRAY
        | gl::SAMPLER_2D_ARRAY
        | gl::SAMPLER_1D_ARRAY_SHADOW
        | gl::SAMPLER_2D_ARRAY_SHADOW
        | gl::SAMPLER_2D_MULTISAMPLE
        | gl::SAMPLER_2D_MULTISAMPLE_ARRAY
        | gl::SAMPLER_CUBE_SHADOW
        | gl::SAMPLER_BUFFER
        | gl::SAMPLER_2D_RECT
        | gl::SAMPLER_2D_RECT_SHADOW
        | gl::INT_SAMPLER_1D
        | gl::INT_SAMPLER_2D
        | gl::INT_SAMPLER_3D
        | gl::INT_SAMPLER_CUBE
        | gl::INT_SAMPLER_2D_ARRAY
        | gl::UNSIGNED_INT_SAMPLER_1D
        | gl::UNSIGNED_INT_SAMPLER_2D
        | gl::UNSIGNED_INT_SAMPLER_3D
        | gl::UNSIGNED_INT_SAMPLER_CUBE
        | gl::UNSIGNED_INT_SAMPLER_2D_ARRAY
        | gl::IMAGE_1D
        | gl::IMAGE_2D
        | gl::IMAGE_3D
        | gl::IMAGE_CUBE
        | gl::IMAGE_2D_ARRAY
        | gl::IMAGE_BUFFER => (I, 1, 1),

        _ => return None,
    };
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_scalar_vector_and_square_matrix() {
        assert_eq!(decode_gl_type(gl::FLOAT), Some((Shape::F, 1, 1)));
        assert_eq!(decode_gl_type(gl::FLOAT_VEC3), Some((Shape::F, 3, 1)));
        assert_eq!(decode_gl_type(gl::FLOAT_MAT4), Some((Shape::F, 4, 4)));
    }

    #[test]
    fn decodes_rectangular_matrix_as_cols_by_rows() {
        assert_eq!(decode_gl_type(gl::FLOAT_MAT2x3), Some((Shape::F, 2, 3)));
        assert_eq!(decode_gl_type(gl::FLOAT_MAT3x2), Some((Shape::F, 3, 2)));
    }

    #[test]
    fn samplers_and_images_decode_to_integer_scalar() {
        assert_eq!(decode_gl_type(gl::SAMPLER_2D), Some((Shape::I, 1, 1)));
        assert_eq!(decode_gl_type(gl::IMAGE_2D_ARRAY), Some((Shape::I, 1, 1)));
    }

    #[test]
    fn unknown_type_decodes_to_none() {
        assert_eq!(decode_gl_type(0xDEAD), None);
    }
}
