//! # Buffer Objects
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Buffer_Objects>

use crate::types::{BufferBindingTarget, BufferName};
use gl::types::*;

/// Generates `n` unused buffer object names.
pub fn gen_buffers(n: usize) -> Vec<BufferName> {
    let mut names = vec![0 as GLuint; n];
    // SAFE: `names` is sized for `n` and fully initialized by the driver.
    unsafe { gl::GenBuffers(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(BufferName).collect()
}

/// Deletes the given buffer names; names already zero or never generated are
/// silently ignored by the driver.
pub fn delete_buffers(names: &[BufferName]) {
    let raw: Vec<GLuint> = names.iter().map(|b| b.0).collect();
    // SAFE: `raw` lives for the duration of the call.
    unsafe { gl::DeleteBuffers(raw.len() as GLsizei, raw.as_ptr()) };
}

/// <https://registry.khronos.org/OpenGL-Refpages/gl4/html/glBindBuffer.xhtml>
pub fn bind_buffer(target: BufferBindingTarget, buffer: BufferName) {
    // SAFE: integers copied by value.
    unsafe { gl::BindBuffer(GLenum::from(target), buffer.0) }
}

/// `glBindBufferBase` — binds a whole buffer to an indexed target
/// (uniform block / shader storage block / transform feedback).
pub fn bind_buffer_base(target: BufferBindingTarget, binding: u32, buffer: BufferName) {
    unsafe { gl::BindBufferBase(GLenum::from(target), binding, buffer.0) }
}

/// `glBindBufferRange` — binds a byte subrange of a buffer to an indexed target.
pub fn bind_buffer_range(
    target: BufferBindingTarget,
    binding: u32,
    buffer: BufferName,
    offset: i64,
    size: i64,
) {
    unsafe {
        gl::BindBufferRange(
            GLenum::from(target),
            binding,
            buffer.0,
            offset as GLintptr,
            size as GLsizeiptr,
        )
    }
}

/// `glBufferStorage` — allocates immutable storage with the given flag set.
/// SAFETY: `data` must be either null or point to at least `size` readable bytes.
pub unsafe fn buffer_storage(target: BufferBindingTarget, size: u64, data: *const std::ffi::c_void, flags: GLbitfield) {
    gl::BufferStorage(GLenum::from(target), size as GLsizeiptr, data, flags)
}

/// `glBufferData` — (re)allocates mutable storage, orphaning any prior contents.
/// SAFETY: `data` must be either null or point to at least `size` readable bytes.
pub unsafe fn buffer_data(target: BufferBindingTarget, size: u64, data: *const std::ffi::c_void, usage: GLenum) {
    gl::BufferData(GLenum::from(target), size as GLsizeiptr, data, usage)
}

/// `glBufferSubData` — uploads a contiguous byte range into existing storage.
/// SAFETY: `data` must point to at least `size` readable bytes, and `[offset,
/// offset+size)` must lie within the bound buffer's storage.
pub unsafe fn buffer_sub_data(target: BufferBindingTarget, offset: i64, size: u64, data: *const std::ffi::c_void) {
    gl::BufferSubData(GLenum::from(target), offset as GLintptr, size as GLsizeiptr, data)
}

/// `glGetBufferSubData` — reads a contiguous byte range out of existing storage.
/// SAFETY: `out` must point to at least `size` writable bytes.
pub unsafe fn get_buffer_sub_data(target: BufferBindingTarget, offset: i64, size: u64, out: *mut std::ffi::c_void) {
    gl::GetBufferSubData(GLenum::from(target), offset as GLintptr, size as GLsizeiptr, out)
}

/// `glCopyBufferSubData` — GPU-to-GPU copy between the buffers bound to
/// `COPY_READ_BUFFER`/`COPY_WRITE_BUFFER` (or any two targets, per spec).
pub fn copy_buffer_sub_data(
    read_target: BufferBindingTarget,
    write_target: BufferBindingTarget,
    read_offset: i64,
    write_offset: i64,
    size: u64,
) {
    unsafe {
        gl::CopyBufferSubData(
            GLenum::from(read_target),
            GLenum::from(write_target),
            read_offset as GLintptr,
            write_offset as GLintptr,
            size as GLsizeiptr,
        )
    }
}

/// `glMapBufferRange` — maps `[offset, offset+length)` of the buffer bound to
/// `target`; returns null on failure. Caller must [`unmap_buffer`] before any
/// further GL call touches the same buffer.
pub fn map_buffer_range(target: BufferBindingTarget, offset: i64, length: u64, access: GLbitfield) -> *mut std::ffi::c_void {
    // SAFE: GL validates offset/length against the bound buffer's own storage.
    unsafe { gl::MapBufferRange(GLenum::from(target), offset as GLintptr, length as GLsizeiptr, access) }
}

/// `glUnmapBuffer` — returns `false` if the buffer's contents became corrupt
/// during the mapping (e.g. a display mode change), per the GL spec.
pub fn unmap_buffer(target: BufferBindingTarget) -> bool {
    unsafe { gl::UnmapBuffer(GLenum::from(target)) == gl::TRUE }
}

fn get_buffer_parameter_i32(target: BufferBindingTarget, pname: GLenum) -> i32 {
    let mut param: i32 = 0;
    // SAFE: `param` is an out-param and not retained.
    unsafe { gl::GetBufferParameteriv(GLenum::from(target), pname, &mut param) };
    param
}

/// `GL_BUFFER_SIZE` of the buffer bound to `target`.
pub fn get_buffer_size(target: BufferBindingTarget) -> i64 {
    get_buffer_parameter_i32(target, gl::BUFFER_SIZE) as i64
}

/// `GL_BUFFER_IMMUTABLE_STORAGE` of the buffer bound to `target`.
pub fn get_buffer_immutable_storage(target: BufferBindingTarget) -> bool {
    get_buffer_parameter_i32(target, gl::BUFFER_IMMUTABLE_STORAGE) != 0
}
