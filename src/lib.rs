//! `oglman` is a high-level, object-oriented binding over the OpenGL 3.3+
//! core profile: one [`context::Context`] owns everything else, and
//! [`buffer::Buffer`], [`texture::Texture`], [`program::Program`], and the
//! rest are reference-counted handles you create from it and release when
//! done.
//!
//! This crate never creates a native window or GL context itself; pair it
//! with whatever windowing/context crate you already use, then call
//! [`context::Context::new`] once a context is current.

pub mod buffer;
pub mod context;
pub mod error;
pub mod framebuffer;
pub mod program;
pub mod query;
pub(crate) mod raw;
pub mod renderbuffer;
pub mod sampler;
pub mod scope;
pub mod texture;
pub mod types;
pub mod vertex_array;
pub mod vertex_format;

/// The common set of types most programs need in scope.
pub mod prelude {
    pub use crate::buffer::{Buffer, BufferSource, StorageFlags};
    pub use crate::context::{Capability, Context, ContextOptions};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::framebuffer::{Attachment, Framebuffer};
    pub use crate::program::{Attribute, Program, ProgramSources, Uniform, UniformBlock};
    pub use crate::query::Query;
    pub use crate::renderbuffer::Renderbuffer;
    pub use crate::sampler::Sampler;
    pub use crate::scope::{BufferBinding, Scope, TextureBinding};
    pub use crate::texture::{Filter, Size, Texture, TextureOptions};
    pub use crate::types::*;
    pub use crate::vertex_array::{Binding, VertexArray};
}
