//! # Vertex Array Objects and Drawing Commands
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Vertex_Rendering>

use crate::types::VertexArrayName;
use gl::types::*;

pub fn gen_vertex_arrays(n: usize) -> Vec<VertexArrayName> {
    let mut names = vec![0 as GLuint; n];
    unsafe { gl::GenVertexArrays(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(VertexArrayName).collect()
}

pub fn delete_vertex_arrays(names: &[VertexArrayName]) {
    let raw: Vec<GLuint> = names.iter().map(|v| v.0).collect();
    unsafe { gl::DeleteVertexArrays(raw.len() as GLsizei, raw.as_ptr()) };
}

pub fn bind_vertex_array(array: VertexArrayName) {
    unsafe { gl::BindVertexArray(array.0) }
}

pub fn enable_vertex_attrib_array(location: u32) {
    unsafe { gl::EnableVertexAttribArray(location) }
}

pub fn vertex_attrib_divisor(location: u32, divisor: u32) {
    unsafe { gl::VertexAttribDivisor(location, divisor) }
}

/// `glVertexAttribPointer` — float family, `normalize` only meaningful here.
pub fn vertex_attrib_pointer(location: u32, size: i32, gl_type: GLenum, normalize: bool, stride: i32, offset: usize) {
    unsafe {
        gl::VertexAttribPointer(
            location,
            size,
            gl_type,
            normalize as GLboolean,
            stride,
            offset as *const std::ffi::c_void,
        )
    }
}

/// `glVertexAttribIPointer` — integer/unsigned family, no normalization.
pub fn vertex_attrib_i_pointer(location: u32, size: i32, gl_type: GLenum, stride: i32, offset: usize) {
    unsafe { gl::VertexAttribIPointer(location, size, gl_type, stride, offset as *const std::ffi::c_void) }
}

/// `glVertexAttribLPointer` — double family.
pub fn vertex_attrib_l_pointer(location: u32, size: i32, gl_type: GLenum, stride: i32, offset: usize) {
    unsafe { gl::VertexAttribLPointer(location, size, gl_type, stride, offset as *const std::ffi::c_void) }
}

pub fn draw_arrays(mode: GLenum, first: i32, count: i32) {
    unsafe { gl::DrawArrays(mode, first, count) }
}

pub fn draw_arrays_instanced(mode: GLenum, first: i32, count: i32, instance_count: i32) {
    unsafe { gl::DrawArraysInstanced(mode, first, count, instance_count) }
}

/// SAFETY: `offset` is interpreted as a byte offset into the bound
/// `ELEMENT_ARRAY_BUFFER`, which must hold at least `count` indices of
/// `index_type` starting there.
pub unsafe fn draw_elements(mode: GLenum, count: i32, index_type: GLenum, offset: usize) {
    gl::DrawElements(mode, count, index_type, offset as *const std::ffi::c_void)
}

/// SAFETY: see [`draw_elements`].
pub unsafe fn draw_elements_instanced(mode: GLenum, count: i32, index_type: GLenum, offset: usize, instance_count: i32) {
    gl::DrawElementsInstanced(mode, count, index_type, offset as *const std::ffi::c_void, instance_count)
}

/// `glMultiDrawArraysIndirect` — parameters sourced from the bound
/// `DRAW_INDIRECT_BUFFER` at `offset`, `draw_count` draws apart by `stride`
/// bytes (16 for the arrays-indirect command struct).
pub fn multi_draw_arrays_indirect(mode: GLenum, offset: usize, draw_count: i32, stride: i32) {
    unsafe { gl::MultiDrawArraysIndirect(mode, offset as *const std::ffi::c_void, draw_count, stride) }
}

/// `glMultiDrawElementsIndirect` — elements-indirect command struct is 20 bytes.
pub fn multi_draw_elements_indirect(mode: GLenum, index_type: GLenum, offset: usize, draw_count: i32, stride: i32) {
    unsafe { gl::MultiDrawElementsIndirect(mode, index_type, offset as *const std::ffi::c_void, draw_count, stride) }
}

pub fn begin_transform_feedback(mode: GLenum) {
    unsafe { gl::BeginTransformFeedback(mode) }
}

pub fn end_transform_feedback() {
    unsafe { gl::EndTransformFeedback() }
}
