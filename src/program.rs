//! Shader program construction, linking, and introspection.

use crate::context::LiveObject;
use crate::error::{Error, Result};
use crate::raw;
use crate::types::{decode_gl_type, ProgramName, ShaderName, ShaderType, Shape, UniformLocation};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Source strings for every stage a program may use. `vertex`/`fragment` are
/// the minimal raster pair; `compute` is mutually exclusive with all raster
/// stages.
#[derive(Default)]
pub struct ProgramSources<'a> {
    pub vertex: Option<&'a str>,
    pub fragment: Option<&'a str>,
    pub geometry: Option<&'a str>,
    pub tess_control: Option<&'a str>,
    pub tess_evaluation: Option<&'a str>,
    pub compute: Option<&'a str>,
    pub varyings: &'a [&'a str],
    pub interleaved: bool,
    pub fragment_outputs: &'a [(&'a str, u32)],
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub location: i32,
    pub gl_type: gl::types::GLenum,
    pub array_length: i32,
}

#[derive(Debug, Clone)]
pub struct Uniform {
    pub name: String,
    pub location: UniformLocation,
    pub gl_type: gl::types::GLenum,
    pub array_length: i32,
}

#[derive(Debug, Clone)]
pub struct UniformBlock {
    pub name: String,
    pub index: u32,
    pub data_size: i32,
    pub binding: Cell<u32>,
}

struct Inner {
    glo: Cell<ProgramName>,
    attributes: Vec<Attribute>,
    uniforms: HashMap<String, Uniform>,
    uniform_blocks: HashMap<String, UniformBlock>,
    is_compute: bool,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "Program"
    }
}

/// `{attributes, uniforms, uniform_blocks}` introspected once, right after
/// a successful link.
#[derive(Clone)]
pub struct Program(Rc<Inner>);

fn strip_array_suffix(name: &str) -> &str {
    name.find("[0]").map(|i| &name[..i]).unwrap_or(name)
}

fn compile_stage(ty: ShaderType, source: &str) -> Result<ShaderName> {
    let shader = raw::create_shader(gl::types::GLenum::from(ty));
    raw::shader_source(shader, source);
    raw::compile_shader(shader);
    if !raw::get_shader_compile_status(shader) {
        let log = raw::get_shader_info_log(shader);
        raw::delete_shader(shader);
        return Err(Error::compile_error(&format!("{ty:?}"), log));
    }
    Ok(shader)
}

impl Program {
    pub fn create(context: &crate::context::Context, sources: ProgramSources) -> Result<Program> {
        let is_compute = sources.compute.is_some();
        let has_raster = sources.vertex.is_some()
            || sources.fragment.is_some()
            || sources.geometry.is_some()
            || sources.tess_control.is_some()
            || sources.tess_evaluation.is_some();
        if is_compute && has_raster {
            return Err(Error::invalid_argument("a compute program cannot also declare raster stages"));
        }
        if !is_compute && (sources.vertex.is_none() || sources.fragment.is_none()) {
            return Err(Error::invalid_argument("a raster program requires at least a vertex and fragment stage"));
        }

        let program = raw::create_program();
        let mut stages = Vec::new();

        macro_rules! attach {
            ($field:expr, $ty:expr) => {
                if let Some(src) = $field {
                    let shader = compile_stage($ty, src)?;
                    raw::attach_shader(program, shader);
                    stages.push(shader);
                }
            };
        }
        attach!(sources.vertex, ShaderType::Vertex);
        attach!(sources.tess_control, ShaderType::TessControl);
        attach!(sources.tess_evaluation, ShaderType::TessEvaluation);
        attach!(sources.geometry, ShaderType::Geometry);
        attach!(sources.fragment, ShaderType::Fragment);
        attach!(sources.compute, ShaderType::Compute);

        for (name, color_number) in sources.fragment_outputs {
            raw::bind_frag_data_location(program, *color_number, name);
        }
        if !sources.varyings.is_empty() {
            let mode = if sources.interleaved {
                gl::INTERLEAVED_ATTRIBS
            } else {
                gl::SEPARATE_ATTRIBS
            };
            raw::transform_feedback_varyings(program, sources.varyings, mode);
        }

        raw::link_program(program);
        for shader in &stages {
            raw::detach_shader(program, *shader);
            raw::delete_shader(*shader);
        }
        if !raw::get_program_link_status(program) {
            let log = raw::get_program_info_log(program);
            raw::delete_program(program);
            return Err(Error::link_error(log));
        }

        let attributes = Self::introspect_attributes(program);
        let uniforms = Self::introspect_uniforms(program);
        let uniform_blocks = Self::introspect_uniform_blocks(program);

        let inner = Rc::new(Inner {
            glo: Cell::new(program),
            attributes,
            uniforms,
            uniform_blocks,
            is_compute,
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::info!("linked program {} ({} attributes, {} uniforms)", program.0, inner.attributes.len(), inner.uniforms.len());
        Ok(Program(inner))
    }

    fn introspect_attributes(program: ProgramName) -> Vec<Attribute> {
        let mut out = Vec::new();
        let mut index = 0;
        while let Some((name, gl_type, array_length)) = raw::get_active_var(program, gl::ACTIVE_ATTRIBUTES, index) {
            let name = strip_array_suffix(&name).to_string();
            let location = raw::get_attrib_location(program, &name);
            out.push(Attribute { name, location, gl_type, array_length });
            index += 1;
        }
        out
    }

    fn introspect_uniforms(program: ProgramName) -> HashMap<String, Uniform> {
        let mut out = HashMap::new();
        let mut index = 0;
        while let Some((name, gl_type, array_length)) = raw::get_active_var(program, gl::ACTIVE_UNIFORMS, index) {
            let clean = strip_array_suffix(&name).to_string();
            let location = raw::get_uniform_location(program, &clean);
            if !location.is_none() {
                out.insert(clean.clone(), Uniform { name: clean, location, gl_type, array_length });
            }
            index += 1;
        }
        out
    }

    fn introspect_uniform_blocks(program: ProgramName) -> HashMap<String, UniformBlock> {
        let mut out = HashMap::new();
        let count = raw::get_active_uniform_block_count(program).max(0) as u32;
        for index in 0..count {
            let name = raw::get_active_uniform_block_name(program, index);
            let data_size = raw::get_active_uniform_block_data_size(program, index);
            out.insert(name.clone(), UniformBlock { name, index, data_size, binding: Cell::new(index) });
        }
        out
    }

    pub fn glo(&self) -> ProgramName {
        self.0.glo.get()
    }

    pub fn is_compute(&self) -> bool {
        self.0.is_compute
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.0.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.0.attributes.iter().find(|a| a.name == name)
    }

    pub fn uniform(&self, name: &str) -> Option<&Uniform> {
        self.0.uniforms.get(name)
    }

    pub fn uniforms(&self) -> impl Iterator<Item = &Uniform> {
        self.0.uniforms.values()
    }

    pub fn bind(&self) {
        raw::use_program(self.glo());
    }

    pub fn uniform_block(&self, name: &str) -> Option<&UniformBlock> {
        self.0.uniform_blocks.get(name)
    }

    pub fn uniform_blocks(&self) -> impl Iterator<Item = &UniformBlock> {
        self.0.uniform_blocks.values()
    }

    /// Binds a uniform block (by its introspected index) to a binding point
    /// and remembers the binding on the [`UniformBlock`] record.
    pub fn bind_uniform_block(&self, block: &UniformBlock, binding: u32) {
        raw::uniform_block_binding(self.glo(), block.index, binding);
        block.binding.set(binding);
    }

    pub fn uniform_block_index(&self, name: &str) -> u32 {
        raw::get_uniform_block_index(self.glo(), name)
    }

    /// Sets a scalar/vector/matrix uniform from raw bytes, dispatched by the
    /// uniform's own decoded GL type. `data` must hold `count` repeats of the
    /// element shape.
    pub fn set_uniform(&self, name: &str, count: i32, data: &[u8]) -> Result<()> {
        let uniform = self
            .0
            .uniforms
            .get(name)
            .ok_or_else(|| Error::invalid_argument(format!("no active uniform named `{name}`")))?;
        let (shape, cols, rows) = decode_gl_type(uniform.gl_type)
            .ok_or_else(|| Error::unsupported(format!("uniform `{name}` has an unrecognized GL type")))?;
        self.bind();
        if rows <= 1 {
            // SAFE: caller guarantees `data` holds `count * cols` elements of the shape's native type.
            unsafe { raw::uniform_vector(uniform.location, shape, cols, count, data.as_ptr() as *const _) };
        } else {
            if !matches!(shape, Shape::F | Shape::D) {
                return Err(Error::unsupported("matrix uniforms must be float or double shaped"));
            }
            // SAFE: caller guarantees `data` holds `count * cols * rows` elements of the shape's native type.
            unsafe { raw::uniform_matrix(uniform.location, shape, cols, rows, count, data.as_ptr() as *const _) };
        }
        Ok(())
    }

    /// Runs a compute program over the given work-group grid.
    /// Errors if this program was not linked with a compute stage.
    pub fn run(&self, x: u32, y: u32, z: u32) -> Result<()> {
        if !self.0.is_compute {
            return Err(Error::unsupported("run() requires a program linked with a compute stage"));
        }
        self.bind();
        raw::dispatch_compute(x, y, z);
        Ok(())
    }

    /// Active subroutine-uniform/subroutine counts for `stage`. Silently
    /// returns `(0, 0)` below version 400, where subroutines don't exist.
    pub fn subroutine_counts(&self, context: &crate::context::Context, stage: gl::types::GLenum) -> (i32, i32) {
        if context.version_code() < 400 {
            return (0, 0);
        }
        (
            raw::get_active_subroutine_uniform_count(self.glo(), stage),
            raw::get_active_subroutine_count(self.glo(), stage),
        )
    }

    pub fn release(&self) {
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_program(glo);
        self.0.glo.set(ProgramName::NONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_array_subscript() {
        assert_eq!(strip_array_suffix("lights[0]"), "lights");
        assert_eq!(strip_array_suffix("color"), "color");
    }
}
