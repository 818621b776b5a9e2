//! `glUniform*`/`glUniformMatrix*` family, dispatched by the `(shape, cols,
//! rows)` triple a uniform decodes to (see [`crate::types::decode_gl_type`]).

use crate::types::{Shape, UniformLocation};
use gl::types::*;

/// SAFETY: `data` must point to at least `count * cols` elements of the type
/// implied by `shape` (f32 for F, i32 for I/P, u32 for U, f64 for D).
pub unsafe fn uniform_vector(location: UniformLocation, shape: Shape, cols: u8, count: i32, data: *const std::ffi::c_void) {
    let loc = location.0;
    match (shape, cols) {
        (Shape::F, 1) => gl::Uniform1fv(loc, count, data as *const f32),
        (Shape::F, 2) => gl::Uniform2fv(loc, count, data as *const f32),
        (Shape::F, 3) => gl::Uniform3fv(loc, count, data as *const f32),
        (Shape::F, 4) => gl::Uniform4fv(loc, count, data as *const f32),

        (Shape::I, 1) | (Shape::P, 1) => gl::Uniform1iv(loc, count, data as *const i32),
        (Shape::I, 2) | (Shape::P, 2) => gl::Uniform2iv(loc, count, data as *const i32),
        (Shape::I, 3) | (Shape::P, 3) => gl::Uniform3iv(loc, count, data as *const i32),
        (Shape::I, 4) | (Shape::P, 4) => gl::Uniform4iv(loc, count, data as *const i32),

        (Shape::U, 1) => gl::Uniform1uiv(loc, count, data as *const u32),
        (Shape::U, 2) => gl::Uniform2uiv(loc, count, data as *const u32),
        (Shape::U, 3) => gl::Uniform3uiv(loc, count, data as *const u32),
        (Shape::U, 4) => gl::Uniform4uiv(loc, count, data as *const u32),

        (Shape::D, 1) => gl::Uniform1dv(loc, count, data as *const f64),
        (Shape::D, 2) => gl::Uniform2dv(loc, count, data as *const f64),
        (Shape::D, 3) => gl::Uniform3dv(loc, count, data as *const f64),
        (Shape::D, 4) => gl::Uniform4dv(loc, count, data as *const f64),

        _ => unreachable!("uniform_vector called with a matrix-shaped (cols, rows) pair"),
    }
}

/// SAFETY: `data` must point to at least `count * cols * rows` elements of
/// the float or double type implied by `shape`. Matrices pass `transpose =
/// false` always, per the uniform-set contract.
pub unsafe fn uniform_matrix(location: UniformLocation, shape: Shape, cols: u8, rows: u8, count: i32, data: *const std::ffi::c_void) {
    let loc = location.0;
    let transpose = gl::FALSE;
    match shape {
        Shape::F => {
            let p = data as *const f32;
            match (cols, rows) {
                (2, 2) => gl::UniformMatrix2fv(loc, count, transpose, p),
                (3, 3) => gl::UniformMatrix3fv(loc, count, transpose, p),
                (4, 4) => gl::UniformMatrix4fv(loc, count, transpose, p),
                (2, 3) => gl::UniformMatrix2x3fv(loc, count, transpose, p),
                (3, 2) => gl::UniformMatrix3x2fv(loc, count, transpose, p),
                (2, 4) => gl::UniformMatrix2x4fv(loc, count, transpose, p),
                (4, 2) => gl::UniformMatrix4x2fv(loc, count, transpose, p),
                (3, 4) => gl::UniformMatrix3x4fv(loc, count, transpose, p),
                (4, 3) => gl::UniformMatrix4x3fv(loc, count, transpose, p),
                _ => unreachable!("matrix uniform with unsupported dimensions {cols}x{rows}"),
            }
        }
        Shape::D => {
            let p = data as *const f64;
            match (cols, rows) {
                (2, 2) => gl::UniformMatrix2dv(loc, count, transpose, p),
                (3, 3) => gl::UniformMatrix3dv(loc, count, transpose, p),
                (4, 4) => gl::UniformMatrix4dv(loc, count, transpose, p),
                (2, 3) => gl::UniformMatrix2x3dv(loc, count, transpose, p),
                (3, 2) => gl::UniformMatrix3x2dv(loc, count, transpose, p),
                (2, 4) => gl::UniformMatrix2x4dv(loc, count, transpose, p),
                (4, 2) => gl::UniformMatrix4x2dv(loc, count, transpose, p),
                (3, 4) => gl::UniformMatrix3x4dv(loc, count, transpose, p),
                (4, 3) => gl::UniformMatrix4x3dv(loc, count, transpose, p),
                _ => unreachable!("matrix uniform with unsupported dimensions {cols}x{rows}"),
            }
        }
        _ => unreachable!("matrix uniform with non-float/double shape"),
    }
}

pub fn get_uniform_fv(program: crate::types::ProgramName, location: UniformLocation, out: &mut [f32]) {
    unsafe { gl::GetUniformfv(program.0, location.0, out.as_mut_ptr()) }
}

pub fn get_uniform_iv(program: crate::types::ProgramName, location: UniformLocation, out: &mut [i32]) {
    unsafe { gl::GetUniformiv(program.0, location.0, out.as_mut_ptr()) }
}
