//! # Whole-Context State
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Per-Fragment_Operations>
//!
//! Enable flags, blend/depth/cull/stencil function state, viewport/scissor,
//! and the clear operations. [`crate::context::Context`] is the only caller
//! that should reach these directly; everything else goes through its state
//! shadow accessors.

use crate::types::{BlendFactor, ClearMask, CompareFunc, Face};
use gl::types::*;

pub fn enable(cap: GLenum) {
    unsafe { gl::Enable(cap) }
}

pub fn disable(cap: GLenum) {
    unsafe { gl::Disable(cap) }
}

pub fn blend_func(src: BlendFactor, dst: BlendFactor) {
    unsafe { gl::BlendFunc(GLenum::from(src), GLenum::from(dst)) }
}

pub fn depth_func(func: CompareFunc) {
    unsafe { gl::DepthFunc(GLenum::from(func)) }
}

pub fn depth_mask(enabled: bool) {
    unsafe { gl::DepthMask(enabled as GLboolean) }
}

pub fn cull_face(face: Face) {
    unsafe { gl::CullFace(GLenum::from(face)) }
}

pub fn front_face(clockwise: bool) {
    unsafe { gl::FrontFace(if clockwise { gl::CW } else { gl::CCW }) }
}

pub fn color_mask(r: bool, g: bool, b: bool, a: bool) {
    unsafe { gl::ColorMask(r as GLboolean, g as GLboolean, b as GLboolean, a as GLboolean) }
}

pub fn stencil_func(func: CompareFunc, reference: i32, mask: u32) {
    unsafe { gl::StencilFunc(GLenum::from(func), reference, mask) }
}

pub fn stencil_func_separate(face: Face, func: CompareFunc, reference: i32, mask: u32) {
    unsafe { gl::StencilFuncSeparate(GLenum::from(face), GLenum::from(func), reference, mask) }
}

pub fn viewport(x: i32, y: i32, width: i32, height: i32) {
    unsafe { gl::Viewport(x, y, width, height) }
}

pub fn scissor(x: i32, y: i32, width: i32, height: i32) {
    unsafe { gl::Scissor(x, y, width, height) }
}

pub fn point_size(size: f32) {
    unsafe { gl::PointSize(size) }
}

pub fn line_width(width: f32) {
    unsafe { gl::LineWidth(width) }
}

pub fn polygon_offset(factor: f32, units: f32) {
    unsafe { gl::PolygonOffset(factor, units) }
}

pub fn provoking_vertex(convention: GLenum) {
    unsafe { gl::ProvokingVertex(convention) }
}

pub fn polygon_mode_line(enabled: bool) {
    let mode = if enabled { gl::LINE } else { gl::FILL };
    unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode) }
}

pub fn clear_color(r: f32, g: f32, b: f32, a: f32) {
    unsafe { gl::ClearColor(r, g, b, a) }
}

pub fn clear_depth(depth: f64) {
    unsafe { gl::ClearDepth(depth) }
}

pub fn clear(mask: ClearMask) {
    unsafe { gl::Clear(mask.bits()) }
}

pub fn primitive_restart_index(index: u32) {
    unsafe { gl::PrimitiveRestartIndex(index) }
}

pub fn finish() {
    unsafe { gl::Finish() }
}
