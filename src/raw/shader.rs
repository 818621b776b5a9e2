//! # Shader and Program Objects
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Shader_and_Program_Objects>

use crate::types::{ProgramName, ShaderName};
use gl::types::*;
use std::ffi::CString;

pub fn create_shader(ty: GLenum) -> ShaderName {
    ShaderName(unsafe { gl::CreateShader(ty) })
}

pub fn delete_shader(shader: ShaderName) {
    unsafe { gl::DeleteShader(shader.0) }
}

pub fn shader_source(shader: ShaderName, source: &str) {
    let c_source = CString::new(source).expect("shader source must not contain a NUL byte");
    let ptr = c_source.as_ptr();
    let len = source.len() as GLint;
    // SAFE: one string, one length, GL copies the bytes before returning.
    unsafe { gl::ShaderSource(shader.0, 1, &ptr, &len) }
}

pub fn compile_shader(shader: ShaderName) {
    unsafe { gl::CompileShader(shader.0) }
}

fn get_shader_iv(shader: ShaderName, pname: GLenum) -> i32 {
    let mut value = 0;
    unsafe { gl::GetShaderiv(shader.0, pname, &mut value) };
    value
}

pub fn get_shader_compile_status(shader: ShaderName) -> bool {
    get_shader_iv(shader, gl::COMPILE_STATUS) == gl::TRUE as i32
}

pub fn get_shader_info_log(shader: ShaderName) -> String {
    let len = get_shader_iv(shader, gl::INFO_LOG_LENGTH).max(0) as usize;
    if len == 0 {
        return String::new();
    }
    let mut buf = vec![0u8; len];
    let mut actual_len: GLsizei = 0;
    unsafe {
        gl::GetShaderInfoLog(
            shader.0,
            len as GLsizei,
            &mut actual_len,
            buf.as_mut_ptr() as *mut GLchar,
        )
    };
    buf.truncate(actual_len.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn create_program() -> ProgramName {
    ProgramName(unsafe { gl::CreateProgram() })
}

pub fn delete_program(program: ProgramName) {
    unsafe { gl::DeleteProgram(program.0) }
}

pub fn attach_shader(program: ProgramName, shader: ShaderName) {
    unsafe { gl::AttachShader(program.0, shader.0) }
}

pub fn detach_shader(program: ProgramName, shader: ShaderName) {
    unsafe { gl::DetachShader(program.0, shader.0) }
}

pub fn bind_frag_data_location(program: ProgramName, color_number: u32, name: &str) {
    let c_name = CString::new(name).expect("fragment output name must not contain a NUL byte");
    unsafe { gl::BindFragDataLocation(program.0, color_number, c_name.as_ptr()) }
}

pub fn transform_feedback_varyings(program: ProgramName, varyings: &[&str], mode: GLenum) {
    let c_names: Vec<CString> = varyings
        .iter()
        .map(|s| CString::new(*s).expect("varying name must not contain a NUL byte"))
        .collect();
    let ptrs: Vec<*const GLchar> = c_names.iter().map(|s| s.as_ptr()).collect();
    unsafe { gl::TransformFeedbackVaryings(program.0, ptrs.len() as GLsizei, ptrs.as_ptr(), mode) }
}

pub fn link_program(program: ProgramName) {
    unsafe { gl::LinkProgram(program.0) }
}

pub fn use_program(program: ProgramName) {
    unsafe { gl::UseProgram(program.0) }
}

fn get_program_iv(program: ProgramName, pname: GLenum) -> i32 {
    let mut value = 0;
    unsafe { gl::GetProgramiv(program.0, pname, &mut value) };
    value
}

pub fn get_program_link_status(program: ProgramName) -> bool {
    get_program_iv(program, gl::LINK_STATUS) == gl::TRUE as i32
}

pub fn get_program_info_log(program: ProgramName) -> String {
    let len = get_program_iv(program, gl::INFO_LOG_LENGTH).max(0) as usize;
    if len == 0 {
        return String::new();
    }
    let mut buf = vec![0u8; len];
    let mut actual_len: GLsizei = 0;
    unsafe {
        gl::GetProgramInfoLog(
            program.0,
            len as GLsizei,
            &mut actual_len,
            buf.as_mut_ptr() as *mut GLchar,
        )
    };
    buf.truncate(actual_len.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

/// `(name, gl_type, array_length, location)` for the `index`-th active
/// attribute or uniform, selected by `what` (`ACTIVE_ATTRIBUTES` /
/// `ACTIVE_UNIFORMS`).
pub fn get_active_var(program: ProgramName, what: GLenum, index: u32) -> Option<(String, GLenum, i32)> {
    let count = get_program_iv(program, what);
    if index as i32 >= count {
        return None;
    }
    let name_buf_len = get_program_iv(
        program,
        if what == gl::ACTIVE_ATTRIBUTES {
            gl::ACTIVE_ATTRIBUTE_MAX_LENGTH
        } else {
            gl::ACTIVE_UNIFORM_MAX_LENGTH
        },
    )
    .max(16) as usize;
    let mut name_buf = vec![0u8; name_buf_len];
    let mut name_len: GLsizei = 0;
    let mut size: GLint = 0;
    let mut gl_type: GLenum = 0;
    unsafe {
        if what == gl::ACTIVE_ATTRIBUTES {
            gl::GetActiveAttrib(
                program.0,
                index,
                name_buf_len as GLsizei,
                &mut name_len,
                &mut size,
                &mut gl_type,
                name_buf.as_mut_ptr() as *mut GLchar,
            );
        } else {
            gl::GetActiveUniform(
                program.0,
                index,
                name_buf_len as GLsizei,
                &mut name_len,
                &mut size,
                &mut gl_type,
                name_buf.as_mut_ptr() as *mut GLchar,
            );
        }
    }
    name_buf.truncate(name_len.max(0) as usize);
    Some((String::from_utf8_lossy(&name_buf).into_owned(), gl_type, size))
}

pub fn get_attrib_location(program: ProgramName, name: &str) -> i32 {
    let c_name = CString::new(name).expect("attribute name must not contain a NUL byte");
    unsafe { gl::GetAttribLocation(program.0, c_name.as_ptr()) }
}

pub fn get_uniform_location(program: ProgramName, name: &str) -> crate::types::UniformLocation {
    let c_name = CString::new(name).expect("uniform name must not contain a NUL byte");
    crate::types::UniformLocation(unsafe { gl::GetUniformLocation(program.0, c_name.as_ptr()) })
}

pub fn get_active_uniform_block_count(program: ProgramName) -> i32 {
    get_program_iv(program, gl::ACTIVE_UNIFORM_BLOCKS)
}

pub fn get_uniform_block_index(program: ProgramName, name: &str) -> u32 {
    let c_name = CString::new(name).expect("uniform block name must not contain a NUL byte");
    unsafe { gl::GetUniformBlockIndex(program.0, c_name.as_ptr()) }
}

pub fn get_active_uniform_block_data_size(program: ProgramName, index: u32) -> i32 {
    let mut size = 0;
    unsafe { gl::GetActiveUniformBlockiv(program.0, index, gl::UNIFORM_BLOCK_DATA_SIZE, &mut size) };
    size
}

pub fn get_active_uniform_block_name(program: ProgramName, index: u32) -> String {
    let mut name_len = 0;
    let mut max_len = 0;
    unsafe { gl::GetProgramiv(program.0, gl::ACTIVE_UNIFORM_BLOCK_MAX_NAME_LENGTH, &mut max_len) };
    let mut name_buf = vec![0u8; max_len.max(1) as usize];
    unsafe {
        gl::GetActiveUniformBlockName(
            program.0,
            index,
            name_buf.len() as GLsizei,
            &mut name_len,
            name_buf.as_mut_ptr() as *mut GLchar,
        );
    }
    name_buf.truncate(name_len.max(0) as usize);
    String::from_utf8_lossy(&name_buf).into_owned()
}

pub fn uniform_block_binding(program: ProgramName, block_index: u32, binding: u32) {
    unsafe { gl::UniformBlockBinding(program.0, block_index, binding) }
}

pub fn dispatch_compute(x: u32, y: u32, z: u32) {
    unsafe { gl::DispatchCompute(x, y, z) }
}

/// Active subroutine-uniform count for the given shader stage (version ≥ 400).
pub fn get_active_subroutine_uniform_count(program: ProgramName, stage: GLenum) -> i32 {
    let mut count = 0;
    unsafe { gl::GetProgramStageiv(program.0, stage, gl::ACTIVE_SUBROUTINE_UNIFORMS, &mut count) };
    count
}

/// Active subroutine count for the given shader stage (version ≥ 400).
pub fn get_active_subroutine_count(program: ProgramName, stage: GLenum) -> i32 {
    let mut count = 0;
    unsafe { gl::GetProgramStageiv(program.0, stage, gl::ACTIVE_SUBROUTINES, &mut count) };
    count
}
