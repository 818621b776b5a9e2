//! GL-name newtypes. One per object category the driver hands out a `glo`
//! for; all `#[repr(transparent)]` over the underlying `GLuint`/`GLint` so a
//! name can be passed to `gl::*` calls by value at zero cost.

use gl::types::{GLint, GLuint};

macro_rules! gl_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(pub GLuint);

        impl $name {
            /// The reserved null name; never returned by a `Gen*` call.
            pub const NONE: $name = $name(0);

            pub fn is_none(self) -> bool {
                self.0 == 0
            }
        }
    };
}

gl_name!(
    /// Name of a buffer object.
    BufferName
);
gl_name!(
    /// Name of a texture object.
    TextureName
);
gl_name!(
    /// Name of a renderbuffer object.
    RenderbufferName
);
gl_name!(
    /// Name of a framebuffer object. `0` denotes the default (screen) framebuffer.
    FramebufferName
);
gl_name!(
    /// Name of a shader object (pre-link, intermediate).
    ShaderName
);
gl_name!(
    /// Name of a linked program object.
    ProgramName
);
gl_name!(
    /// Name of a vertex array object.
    VertexArrayName
);
gl_name!(
    /// Name of a sampler object.
    SamplerName
);
gl_name!(
    /// Name of a query object.
    QueryName
);

/// Location of a uniform within a program; `-1` means "not present, no-op on set".
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub struct UniformLocation(pub GLint);

impl UniformLocation {
    pub const NONE: UniformLocation = UniformLocation(-1);

    pub fn is_none(self) -> bool {
        self.0 < 0
    }
}
