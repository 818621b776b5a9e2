//! Bundles a framebuffer, enable flags, and resource bindings into one unit
//! that can be entered and exited as a whole, restoring whatever was bound
//! before `begin`. Scopes do not nest: `begin` captures a single snapshot to
//! restore on `end`, not a stack, so entering a second scope before exiting
//! the first loses the first's restore point.

use crate::context::{Capability, Context};
use crate::framebuffer::Framebuffer;
use crate::raw;
use crate::sampler::Sampler;
use crate::texture::Texture;
use crate::types::{BufferBindingTarget, FramebufferBindingTarget, FramebufferName};
use std::cell::RefCell;
use std::rc::Rc;

/// A texture bound to a unit, with an optional standalone sampler overriding
/// the texture's own sampling state for the scope's duration.
pub struct TextureBinding {
    pub unit: u32,
    pub texture: Texture,
    pub sampler: Option<Sampler>,
}

/// A buffer bound to an indexed binding point (`glBindBufferBase`), uniform
/// blocks or shader storage blocks.
pub struct BufferBinding {
    pub target: BufferBindingTarget,
    pub index: u32,
    pub buffer: crate::buffer::Buffer,
}

struct Previous {
    framebuffer: FramebufferName,
    enabled: Capability,
}

struct Inner {
    framebuffer: Framebuffer,
    enable_flags: Capability,
    textures: Vec<TextureBinding>,
    buffers: Vec<BufferBinding>,
    previous: RefCell<Option<Previous>>,
}

/// `{framebuffer, enable_flags, textures, buffers}`.
#[derive(Clone)]
pub struct Scope(Rc<Inner>);

impl Scope {
    pub fn create(framebuffer: Framebuffer, enable_flags: Capability, textures: Vec<TextureBinding>, buffers: Vec<BufferBinding>) -> Scope {
        Scope(Rc::new(Inner {
            framebuffer,
            enable_flags,
            textures,
            buffers,
            previous: RefCell::new(None),
        }))
    }

    /// The scope a context starts with: the screen framebuffer, no enable
    /// flags, no bound textures or buffers.
    pub fn for_screen(context: &Rc<Context>) -> Scope {
        Scope::create(context.screen().clone(), Capability::empty(), Vec::new(), Vec::new())
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.0.framebuffer
    }

    /// Snapshots the context's current framebuffer/enable state, then
    /// applies this scope's own framebuffer, enable flags, and bindings.
    pub fn begin(&self, context: &Context) {
        *self.0.previous.borrow_mut() = Some(Previous {
            framebuffer: context.current_framebuffer(),
            enabled: context.enabled(),
        });

        self.0.framebuffer.bind(context, FramebufferBindingTarget::ReadDraw);
        context.enable_only(self.0.enable_flags);

        for binding in &self.0.textures {
            binding.texture.bind_unit(binding.unit);
            if let Some(sampler) = &binding.sampler {
                sampler.bind(binding.unit);
            }
        }
        for binding in &self.0.buffers {
            raw::bind_buffer_base(binding.target, binding.index, binding.buffer.glo());
        }
    }

    /// Restores whatever framebuffer/enable state was captured by the most
    /// recent `begin`. A no-op if `begin` was never called, or was already
    /// matched by an `end`.
    pub fn end(&self, context: &Context) {
        let Some(previous) = self.0.previous.borrow_mut().take() else {
            return;
        };
        raw::bind_framebuffer(gl::types::GLenum::from(FramebufferBindingTarget::ReadDraw), previous.framebuffer);
        context.set_current_framebuffer(previous.framebuffer);
        context.enable_only(previous.enabled);
    }
}
