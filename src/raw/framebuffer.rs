//! # Framebuffer Objects
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Framebuffer_Objects>

use crate::types::{FramebufferName, RenderbufferName, TextureName};
use gl::types::*;

pub fn gen_framebuffers(n: usize) -> Vec<FramebufferName> {
    let mut names = vec![0 as GLuint; n];
    unsafe { gl::GenFramebuffers(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(FramebufferName).collect()
}

pub fn delete_framebuffers(names: &[FramebufferName]) {
    let raw: Vec<GLuint> = names.iter().map(|f| f.0).collect();
    unsafe { gl::DeleteFramebuffers(raw.len() as GLsizei, raw.as_ptr()) };
}

pub fn bind_framebuffer(target: GLenum, framebuffer: FramebufferName) {
    unsafe { gl::BindFramebuffer(target, framebuffer.0) }
}

pub fn framebuffer_texture_2d(target: GLenum, attachment: GLenum, tex_target: GLenum, texture: TextureName, level: i32) {
    unsafe { gl::FramebufferTexture2D(target, attachment, tex_target, texture.0, level) }
}

pub fn framebuffer_texture_layer(target: GLenum, attachment: GLenum, texture: TextureName, level: i32, layer: i32) {
    unsafe { gl::FramebufferTextureLayer(target, attachment, texture.0, level, layer) }
}

pub fn framebuffer_renderbuffer(target: GLenum, attachment: GLenum, renderbuffer: RenderbufferName) {
    unsafe { gl::FramebufferRenderbuffer(target, attachment, gl::RENDERBUFFER, renderbuffer.0) }
}

/// `glCheckFramebufferStatus` — completeness of the framebuffer bound to `target`.
pub fn check_framebuffer_status(target: GLenum) -> GLenum {
    unsafe { gl::CheckFramebufferStatus(target) }
}

pub fn draw_buffers(attachments: &[GLenum]) {
    unsafe { gl::DrawBuffers(attachments.len() as GLsizei, attachments.as_ptr()) }
}

pub fn read_buffer(src: GLenum) {
    unsafe { gl::ReadBuffer(src) }
}

pub fn clear_buffer_fv(buffer: GLenum, draw_buffer: i32, value: &[f32; 4]) {
    unsafe { gl::ClearBufferfv(buffer, draw_buffer, value.as_ptr()) }
}

pub fn clear_buffer_iv(buffer: GLenum, draw_buffer: i32, value: &[i32; 4]) {
    unsafe { gl::ClearBufferiv(buffer, draw_buffer, value.as_ptr()) }
}

pub fn clear_buffer_uiv(buffer: GLenum, draw_buffer: i32, value: &[u32; 4]) {
    unsafe { gl::ClearBufferuiv(buffer, draw_buffer, value.as_ptr()) }
}

pub fn clear_buffer_depth(depth: f32) {
    unsafe { gl::ClearBufferfv(gl::DEPTH, 0, &depth) }
}

/// SAFETY: `out` must point to enough writable bytes for `width * height`
/// texels of `format`/`gl_type`, or `PIXEL_PACK_BUFFER` must be bound and
/// `out` treated as a byte offset into it.
pub unsafe fn read_pixels(x: i32, y: i32, width: i32, height: i32, format: GLenum, gl_type: GLenum, out: *mut std::ffi::c_void) {
    gl::ReadPixels(x, y, width, height, format, gl_type, out)
}

pub fn blit_framebuffer(
    src: (i32, i32, i32, i32),
    dst: (i32, i32, i32, i32),
    mask: GLbitfield,
    filter: GLenum,
) {
    unsafe {
        gl::BlitFramebuffer(
            src.0, src.1, src.2, src.3, dst.0, dst.1, dst.2, dst.3, mask, filter,
        )
    }
}

pub fn renderbuffer_storage(internal_format: GLenum, width: i32, height: i32) {
    unsafe { gl::RenderbufferStorage(gl::RENDERBUFFER, internal_format, width, height) }
}

pub fn renderbuffer_storage_multisample(samples: i32, internal_format: GLenum, width: i32, height: i32) {
    unsafe { gl::RenderbufferStorageMultisample(gl::RENDERBUFFER, samples, internal_format, width, height) }
}

pub fn gen_renderbuffers(n: usize) -> Vec<RenderbufferName> {
    let mut names = vec![0 as GLuint; n];
    unsafe { gl::GenRenderbuffers(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(RenderbufferName).collect()
}

pub fn delete_renderbuffers(names: &[RenderbufferName]) {
    let raw: Vec<GLuint> = names.iter().map(|r| r.0).collect();
    unsafe { gl::DeleteRenderbuffers(raw.len() as GLsizei, raw.as_ptr()) };
}

pub fn bind_renderbuffer(renderbuffer: RenderbufferName) {
    unsafe { gl::BindRenderbuffer(gl::RENDERBUFFER, renderbuffer.0) }
}
