//! Thin unsafe wrappers over individual `gl::*` entry points, grouped by
//! Khronos reference category. This is the layer the resource-manager
//! objects (`Context`, `Buffer`, `Texture`, ...) are built on top of; nothing
//! outside this module calls `gl::*` directly.

mod buffer;
mod framebuffer;
mod get;
mod query;
mod sampler;
mod shader;
mod state;
mod texture;
mod uniform;
mod vertex;

#[doc(inline)]
pub use buffer::*;
#[doc(inline)]
pub use framebuffer::*;
#[doc(inline)]
pub use get::*;
#[doc(inline)]
pub use query::*;
#[doc(inline)]
pub use sampler::*;
#[doc(inline)]
pub use shader::*;
#[doc(inline)]
pub use state::*;
#[doc(inline)]
pub use texture::*;
#[doc(inline)]
pub use uniform::*;
#[doc(inline)]
pub use vertex::*;

/// Maps the next pending `glGetError` to [`crate::error::Error`] if one is
/// set, tagging it as [`crate::error::ErrorKind::Unsupported`] since the raw
/// layer has no finer-grained context at this point; callers with more
/// context (buffer/texture/program layers) re-tag as appropriate.
pub(crate) fn check_error(context: &str) -> Result<(), crate::error::Error> {
    // SAFE: glGetError takes no arguments and never retains state beyond the flag it drains.
    let code = unsafe { gl::GetError() };
    if code == gl::NO_ERROR {
        return Ok(());
    }
    let name = match code {
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        gl::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        gl::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "GL_UNKNOWN_ERROR",
    };
    log::warn!("{context}: {name}");
    Err(crate::error::Error::unsupported(format!("{context}: {name}")))
}
