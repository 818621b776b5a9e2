//! # Texture Objects
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Textures>

use crate::types::{TextureBindingTarget, TextureName};
use gl::types::*;

pub fn gen_textures(n: usize) -> Vec<TextureName> {
    let mut names = vec![0 as GLuint; n];
    unsafe { gl::GenTextures(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(TextureName).collect()
}

pub fn delete_textures(names: &[TextureName]) {
    let raw: Vec<GLuint> = names.iter().map(|t| t.0).collect();
    unsafe { gl::DeleteTextures(raw.len() as GLsizei, raw.as_ptr()) };
}

/// `glActiveTexture` — selects which texture unit subsequent `bind_texture`
/// calls and sampler state apply to. `unit` is zero-based; this adds
/// `GL_TEXTURE0`.
pub fn active_texture(unit: u32) {
    unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit) }
}

pub fn bind_texture(target: TextureBindingTarget, texture: TextureName) {
    unsafe { gl::BindTexture(GLenum::from(target), texture.0) }
}

/// `glBindImageTexture` — binds a single texture level/layer as an image unit.
pub fn bind_image_texture(
    unit: u32,
    texture: TextureName,
    level: i32,
    layered: bool,
    layer: i32,
    access: GLenum,
    format: GLenum,
) {
    unsafe {
        gl::BindImageTexture(
            unit,
            texture.0,
            level,
            layered as GLboolean,
            layer,
            access,
            format,
        )
    }
}

/// `glPixelStorei` — sets pack/unpack alignment (one of 1, 2, 4, 8).
pub fn pixel_store_alignment(pname: GLenum, alignment: i32) {
    unsafe { gl::PixelStorei(pname, alignment) }
}

/// SAFETY: for the 2D family, `data` must be null or point to enough bytes
/// for `width * height` texels of `format`/`gl_type`.
pub unsafe fn tex_image_2d(
    target: GLenum,
    level: i32,
    internal_format: GLenum,
    width: i32,
    height: i32,
    format: GLenum,
    gl_type: GLenum,
    data: *const std::ffi::c_void,
) {
    gl::TexImage2D(target, level, internal_format as GLint, width, height, 0, format, gl_type, data)
}

/// SAFETY: see [`tex_image_2d`]; this variant additionally covers 2D arrays and 3D volumes.
pub unsafe fn tex_image_3d(
    target: GLenum,
    level: i32,
    internal_format: GLenum,
    width: i32,
    height: i32,
    depth: i32,
    format: GLenum,
    gl_type: GLenum,
    data: *const std::ffi::c_void,
) {
    gl::TexImage3D(
        target,
        level,
        internal_format as GLint,
        width,
        height,
        depth,
        0,
        format,
        gl_type,
        data,
    )
}

pub fn tex_image_2d_multisample(target: GLenum, samples: i32, internal_format: GLenum, width: i32, height: i32, fixed_locations: bool) {
    unsafe {
        gl::TexImage2DMultisample(target, samples, internal_format, width, height, fixed_locations as GLboolean)
    }
}

pub fn tex_storage_2d(target: GLenum, levels: i32, internal_format: GLenum, width: i32, height: i32) {
    unsafe { gl::TexStorage2D(target, levels, internal_format, width, height) }
}

pub fn tex_storage_3d(target: GLenum, levels: i32, internal_format: GLenum, width: i32, height: i32, depth: i32) {
    unsafe { gl::TexStorage3D(target, levels, internal_format, width, height, depth) }
}

pub fn tex_storage_2d_multisample(target: GLenum, samples: i32, internal_format: GLenum, width: i32, height: i32, fixed_locations: bool) {
    unsafe {
        gl::TexStorage2DMultisample(target, samples, internal_format, width, height, fixed_locations as GLboolean)
    }
}

/// SAFETY: `data` must point to at least `width * height` texels of `format`/`gl_type`.
pub unsafe fn tex_sub_image_2d(
    target: GLenum,
    level: i32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    format: GLenum,
    gl_type: GLenum,
    data: *const std::ffi::c_void,
) {
    gl::TexSubImage2D(target, level, x, y, width, height, format, gl_type, data)
}

/// SAFETY: see [`tex_sub_image_2d`], additionally covering 2D arrays and 3D volumes.
pub unsafe fn tex_sub_image_3d(
    target: GLenum,
    level: i32,
    x: i32,
    y: i32,
    z: i32,
    width: i32,
    height: i32,
    depth: i32,
    format: GLenum,
    gl_type: GLenum,
    data: *const std::ffi::c_void,
) {
    gl::TexSubImage3D(target, level, x, y, z, width, height, depth, format, gl_type, data)
}

/// SAFETY: `out` must point to enough writable bytes for the whole mip level.
pub unsafe fn get_tex_image(target: GLenum, level: i32, format: GLenum, gl_type: GLenum, out: *mut std::ffi::c_void) {
    gl::GetTexImage(target, level, format, gl_type, out)
}

pub fn tex_parameter_i(target: GLenum, pname: GLenum, value: i32) {
    unsafe { gl::TexParameteri(target, pname, value) }
}

pub fn tex_parameter_f(target: GLenum, pname: GLenum, value: f32) {
    unsafe { gl::TexParameterf(target, pname, value) }
}

pub fn generate_mipmap(target: GLenum) {
    unsafe { gl::GenerateMipmap(target) }
}
