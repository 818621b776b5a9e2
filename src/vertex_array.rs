//! Binds buffers, a format string, and a program's attribute locations into
//! a vertex array object, and dispatches draw calls through it.

use crate::context::{Context, LiveObject};
use crate::error::{Error, Result};
use crate::program::Program;
use crate::query::Query;
use crate::raw;
use crate::scope::Scope;
use crate::types::{BufferBindingTarget, IndicesType, RenderPrimitive, VertexArrayName};
use crate::vertex_format::parse_format;
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// One buffer bound into the array, with its own format string and the
/// attribute names (in order) it feeds.
pub struct Binding<'a> {
    pub buffer: crate::buffer::Buffer,
    pub format: &'a str,
    pub attributes: &'a [&'a str],
}

struct BoundIndexBuffer {
    buffer: crate::buffer::Buffer,
    element_size: IndicesType,
}

struct Inner {
    glo: Cell<VertexArrayName>,
    program: Program,
    index_buffer: Option<BoundIndexBuffer>,
    /// Owned transform-feedback destination, used by `render_with_transform_feedback`.
    output_buffer: Option<crate::buffer::Buffer>,
    /// Owned `DRAW_INDIRECT_BUFFER` source, used by `render_indirect`.
    indirect_buffer: Option<crate::buffer::Buffer>,
    /// Applied around every draw, if set: framebuffer, enable flags, and
    /// resource bindings for the duration of the call.
    scope: Option<Scope>,
    mode: RenderPrimitive,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "VertexArray"
    }
}

/// `{program, bindings, index_buffer, output_buffer, indirect_buffer, scope,
/// mode}`. Vertex layout comes from a per-binding format string
/// (`"3f 2f/v 1i/i"`); attribute names not present in `program`'s
/// introspected attribute set are silently skipped. `output_buffer`,
/// `indirect_buffer`, and `scope` are owning references this array holds for
/// the lifetime of the corresponding `render_with_transform_feedback`,
/// `render_indirect`, and scoped-`render` paths.
#[derive(Clone)]
pub struct VertexArray(Rc<Inner>);

fn index_element_size(byte_size: u32) -> Result<IndicesType> {
    match byte_size {
        1 => Ok(IndicesType::U8),
        2 => Ok(IndicesType::U16),
        4 => Ok(IndicesType::U32),
        other => Err(Error::invalid_size(format!("index element size must be 1, 2, or 4 bytes, got {other}"))),
    }
}

impl VertexArray {
    pub fn create(
        context: &Context,
        program: Program,
        bindings: Vec<Binding>,
        index_buffer: Option<(crate::buffer::Buffer, u32)>,
        output_buffer: Option<crate::buffer::Buffer>,
        indirect_buffer: Option<crate::buffer::Buffer>,
        scope: Option<Scope>,
        mode: RenderPrimitive,
    ) -> Result<VertexArray> {
        let names = raw::gen_vertex_arrays(1);
        let glo = names[0];
        if glo.is_none() {
            return Err(Error::object_creation_failed("VertexArrays"));
        }
        raw::bind_vertex_array(glo);

        for binding in &bindings {
            let parsed = parse_format(binding.format)?;
            if parsed.nodes.len() != binding.attributes.len() {
                raw::delete_vertex_arrays(&[glo]);
                return Err(Error::invalid_argument("format token count must match attribute name count"));
            }
            raw::bind_buffer(BufferBindingTarget::Array, binding.buffer.glo());
            for (node, name) in parsed.nodes.iter().zip(binding.attributes.iter()) {
                let Some(attribute) = program.attribute(name) else {
                    continue;
                };
                let location = attribute.location as u32;
                let offset = node.offset as usize;
                raw::enable_vertex_attrib_array(location);
                match node.shape {
                    crate::types::Shape::D => raw::vertex_attrib_l_pointer(location, node.count as i32, node.gl_type, parsed.stride as i32, offset),
                    crate::types::Shape::I | crate::types::Shape::U if !node.normalize => {
                        raw::vertex_attrib_i_pointer(location, node.count as i32, node.gl_type, parsed.stride as i32, offset)
                    }
                    _ => raw::vertex_attrib_pointer(location, node.count as i32, node.gl_type, node.normalize, parsed.stride as i32, offset),
                }
                if node.per_instance {
                    raw::vertex_attrib_divisor(location, parsed.divisor);
                }
            }
        }

        let index_buffer = match index_buffer {
            Some((buffer, element_bytes)) => {
                let element_size = index_element_size(element_bytes)?;
                raw::bind_buffer(BufferBindingTarget::ElementArray, buffer.glo());
                Some(BoundIndexBuffer { buffer, element_size })
            }
            None => None,
        };

        raw::bind_vertex_array(VertexArrayName::NONE);

        let inner = Rc::new(Inner {
            glo: Cell::new(glo),
            program,
            index_buffer,
            output_buffer,
            indirect_buffer,
            scope,
            mode,
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::debug!("created vertex array {} ({} bindings)", glo.0, bindings.len());
        Ok(VertexArray(inner))
    }

    pub fn glo(&self) -> VertexArrayName {
        self.0.glo.get()
    }

    pub fn program(&self) -> &Program {
        &self.0.program
    }

    fn bind(&self) {
        raw::bind_vertex_array(self.glo());
        self.0.program.bind();
    }

    /// Draws `vertices` starting at `first`, `instances` times (1 = no
    /// instancing). Goes through the indexed path when this array was built
    /// with an index buffer. If this array was built with a `Scope`, the
    /// scope's framebuffer/enable flags/bindings are applied for the
    /// duration of the draw and restored afterward; if `condition` is given,
    /// the draw is wrapped in a `BeginConditionalRender`/`EndConditionalRender`
    /// pair keyed off that query's occlusion result.
    pub fn render(&self, context: &Context, vertices: i32, first: i32, instances: i32, condition: Option<&Query>) -> Result<()> {
        if vertices < 0 || instances < 1 {
            return Err(Error::invalid_argument("vertices must be >= 0 and instances >= 1"));
        }
        self.with_scope_and_condition(context, condition, || self.draw(vertices, first, instances))
    }

    /// Draws while recording into this array's owned transform-feedback
    /// destination. Errors if this array was not built with an
    /// `output_buffer`. Brackets the draw with the bind/rasterizer-discard
    /// sequence `BeginTransformFeedback` requires.
    pub fn render_with_transform_feedback(&self, context: &Context, vertices: i32, first: i32, instances: i32, condition: Option<&Query>) -> Result<()> {
        let output = self
            .0
            .output_buffer
            .as_ref()
            .ok_or_else(|| Error::unsupported("render_with_transform_feedback requires an output_buffer"))?;
        self.with_scope_and_condition(context, condition, || {
            raw::bind_buffer_base(BufferBindingTarget::TransformFeedbackBuffer, 0, output.glo());
            raw::enable(gl::RASTERIZER_DISCARD);
            raw::begin_transform_feedback(gl::types::GLenum::from(self.0.mode));
            let result = self.draw(vertices, first, instances);
            raw::end_transform_feedback();
            raw::disable(gl::RASTERIZER_DISCARD);
            result
        })
    }

    /// `MultiDrawArraysIndirect`/`MultiDrawElementsIndirect` sourced from this
    /// array's owned `indirect_buffer` at `offset`. Errors if this array was
    /// not built with one.
    pub fn render_indirect(&self, context: &Context, offset: usize, draw_count: i32, stride: i32, condition: Option<&Query>) -> Result<()> {
        let indirect = self
            .0
            .indirect_buffer
            .as_ref()
            .ok_or_else(|| Error::unsupported("render_indirect requires an indirect_buffer"))?;
        self.with_scope_and_condition(context, condition, || {
            self.bind();
            raw::bind_buffer(BufferBindingTarget::DrawIndirect, indirect.glo());
            let mode = gl::types::GLenum::from(self.0.mode);
            match &self.0.index_buffer {
                Some(index) => {
                    raw::bind_buffer(BufferBindingTarget::ElementArray, index.buffer.glo());
                    raw::multi_draw_elements_indirect(mode, gl::types::GLenum::from(index.element_size), offset, draw_count, stride);
                }
                None => raw::multi_draw_arrays_indirect(mode, offset, draw_count, stride),
            }
            Ok(())
        })
    }

    /// Binds this array and program, then dispatches the indexed or array
    /// draw call the array was built for.
    fn draw(&self, vertices: i32, first: i32, instances: i32) -> Result<()> {
        self.bind();
        let mode = gl::types::GLenum::from(self.0.mode);
        match &self.0.index_buffer {
            Some(index) => {
                raw::bind_buffer(BufferBindingTarget::ElementArray, index.buffer.glo());
                let offset = (first as usize) * index_byte_width(index.element_size);
                if instances == 1 {
                    // SAFE: offset/count are validated against the bound index buffer's own size by the driver.
                    unsafe { raw::draw_elements(mode, vertices, gl::types::GLenum::from(index.element_size), offset) };
                } else {
                    // SAFE: see above.
                    unsafe { raw::draw_elements_instanced(mode, vertices, gl::types::GLenum::from(index.element_size), offset, instances) };
                }
            }
            None => {
                if instances == 1 {
                    raw::draw_arrays(mode, first, vertices);
                } else {
                    raw::draw_arrays_instanced(mode, first, vertices, instances);
                }
            }
        }
        Ok(())
    }

    /// Applies this array's `Scope` (if any) around `f`, itself wrapping `f`
    /// in a conditional-render guard (if `condition` is given). The scope is
    /// always restored, even if `f` or the conditional-render setup errors.
    fn with_scope_and_condition(&self, context: &Context, condition: Option<&Query>, f: impl FnOnce() -> Result<()>) -> Result<()> {
        if let Some(scope) = &self.0.scope {
            scope.begin(context);
        }
        let result = (|| {
            let _guard = condition.map(|query| query.render_conditionally(gl::QUERY_WAIT)).transpose()?;
            f()
        })();
        if let Some(scope) = &self.0.scope {
            scope.end(context);
        }
        result
    }

    pub fn release(&self) {
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_vertex_arrays(&[glo]);
        self.0.glo.set(VertexArrayName::NONE);
    }
}

fn index_byte_width(ty: IndicesType) -> usize {
    match ty {
        IndicesType::U8 => 1,
        IndicesType::U16 => 2,
        IndicesType::U32 => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_byte_size_to_the_matching_index_type() {
        assert!(matches!(index_element_size(1).unwrap(), IndicesType::U8));
        assert!(matches!(index_element_size(2).unwrap(), IndicesType::U16));
        assert!(matches!(index_element_size(4).unwrap(), IndicesType::U32));
    }

    #[test]
    fn rejects_unsupported_index_sizes() {
        assert!(index_element_size(3).is_err());
        assert!(index_element_size(0).is_err());
    }
}
