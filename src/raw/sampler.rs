//! # Sampler Objects
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Textures>

use crate::types::SamplerName;
use gl::types::*;

pub fn gen_samplers(n: usize) -> Vec<SamplerName> {
    let mut names = vec![0 as GLuint; n];
    unsafe { gl::GenSamplers(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(SamplerName).collect()
}

pub fn delete_samplers(names: &[SamplerName]) {
    let raw: Vec<GLuint> = names.iter().map(|s| s.0).collect();
    unsafe { gl::DeleteSamplers(raw.len() as GLsizei, raw.as_ptr()) };
}

pub fn bind_sampler(unit: u32, sampler: SamplerName) {
    unsafe { gl::BindSampler(unit, sampler.0) }
}

pub fn sampler_parameter_i(sampler: SamplerName, pname: GLenum, value: i32) {
    unsafe { gl::SamplerParameteri(sampler.0, pname, value) }
}

pub fn sampler_parameter_f(sampler: SamplerName, pname: GLenum, value: f32) {
    unsafe { gl::SamplerParameterf(sampler.0, pname, value) }
}

pub fn sampler_parameter_fv(sampler: SamplerName, pname: GLenum, values: &[f32; 4]) {
    unsafe { gl::SamplerParameterfv(sampler.0, pname, values.as_ptr()) }
}
