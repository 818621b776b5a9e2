//! The root object: owns the loaded GL function table (via the `gl` crate's
//! global loader), the state shadow, the screen framebuffer, the default
//! [`crate::scope::Scope`], and the live-object registry.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::raw;
use crate::scope::Scope;
use crate::types::{BufferName, FramebufferName};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};

bitflags::bitflags! {
    /// Recognised enable flags, stable bit values per the external interface.
    pub struct Capability: u32 {
        const BLEND = 1;
        const DEPTH_TEST = 2;
        const CULL_FACE = 4;
        const RASTERIZER_DISCARD = 8;
        const PROGRAM_POINT_SIZE = 16;
    }
}

impl Capability {
    fn gl_enum(self) -> gl::types::GLenum {
        match self {
            Capability::BLEND => gl::BLEND,
            Capability::DEPTH_TEST => gl::DEPTH_TEST,
            Capability::CULL_FACE => gl::CULL_FACE,
            Capability::RASTERIZER_DISCARD => gl::RASTERIZER_DISCARD,
            Capability::PROGRAM_POINT_SIZE => gl::PROGRAM_POINT_SIZE,
            _ => unreachable!("gl_enum called on a non-singleton Capability set"),
        }
    }

    fn singletons() -> [Capability; 5] {
        [
            Capability::BLEND,
            Capability::DEPTH_TEST,
            Capability::CULL_FACE,
            Capability::RASTERIZER_DISCARD,
            Capability::PROGRAM_POINT_SIZE,
        ]
    }
}

/// GPU limits and caps, queried once at [`Context::new`] time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    pub max_samples: i32,
    pub max_integer_samples: i32,
    pub max_color_attachments: i32,
    pub max_texture_image_units: i32,
    pub max_combined_texture_image_units: i32,
    pub max_array_texture_layers: i32,
    pub max_uniform_buffer_bindings: i32,
    pub max_vertex_attribs: i32,
    pub max_draw_buffers: i32,
    pub max_anisotropy: f32,
}

/// `Context::info()` result: the three strings the original queries at construction.
#[derive(Debug, Clone, Default)]
pub struct ContextInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
}

/// Callback signature for a caller-supplied loader, used in place of a
/// default platform loader when adopting an externally-created context.
pub type LoaderHook = Box<dyn Fn(&'static str) -> *const std::ffi::c_void>;

/// Construction inputs for [`Context::new`]. "Configuration" for this crate
/// means these typed constructor arguments, validated up front, not a
/// CLI/file/env surface.
pub struct ContextOptions {
    /// Whether this crate is expected to create/own the native context
    /// (informational; native window/context creation itself is out of
    /// scope and left to the caller's loader).
    pub standalone: bool,
    /// Three-digit requested version, e.g. `330` for 3.3.
    pub glversion: u32,
    /// Optional loader override; when absent, the caller must have already
    /// arranged for `gl::load_with`-compatible symbol resolution (e.g. via
    /// an external window/context crate) before calling [`Context::new`].
    pub hooks: Option<LoaderHook>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions {
            standalone: true,
            glversion: 330,
            hooks: None,
        }
    }
}

pub(crate) trait LiveObject {
    fn glo_raw(&self) -> u32;
    fn kind_name(&self) -> &'static str;
}

/// A snapshot entry returned by [`Context::objects`].
pub struct ObjectSnapshot {
    pub glo: u32,
    pub kind: &'static str,
}

struct StateShadow {
    enabled: Capability,
    current_framebuffer: FramebufferName,
    current_texture_unit: u32,
    front_face_clockwise: bool,
    cull_face: bool,
    depth_func_set: bool,
    blend_src: gl::types::GLenum,
    blend_dst: gl::types::GLenum,
    wireframe: bool,
    multisample: bool,
    provoking_vertex: gl::types::GLenum,
    polygon_offset: (f32, f32),
}

/// Root of the object graph; one per native GL context.
pub struct Context {
    pub(crate) version_code: u32,
    pub(crate) extensions: HashSet<String>,
    pub limits: Limits,
    info: ContextInfo,
    state: RefCell<StateShadow>,
    live: RefCell<Vec<Weak<dyn LiveObject>>>,
    screen: Framebuffer,
    default_scope: RefCell<Option<Scope>>,
}

impl Context {
    /// Loads (or adopts) a GL context at the requested version and brings
    /// the state shadow to the construction-time baseline described by the
    /// component design: blend func, cube-map seamless, primitive restart,
    /// caps/extension enumeration, screen framebuffer, default scope.
    pub fn new(options: ContextOptions) -> Result<Rc<Context>> {
        if let Some(hook) = &options.hooks {
            gl::load_with(|name| hook(Box::leak(name.to_string().into_boxed_str())) as *const _);
        }
        log::debug!(
            "loading GL context, standalone={}, requested version={}",
            options.standalone,
            options.glversion
        );

        let (major, minor) = raw::get_version();
        let version_code = (major * 100 + minor * 10) as u32;
        log::info!("resolved GL version {major}.{minor} (version_code={version_code})");

        raw::blend_func(crate::types::BlendFactor::SrcAlpha, crate::types::BlendFactor::OneMinusSrcAlpha);
        raw::enable(gl::TEXTURE_CUBE_MAP_SEAMLESS);
        raw::enable(gl::PRIMITIVE_RESTART);
        raw::primitive_restart_index(u32::MAX);

        let extensions: HashSet<String> = raw::get_extensions().into_iter().collect();
        log::debug!("{} extensions reported", extensions.len());

        let limits = Limits {
            max_samples: raw::get_integer(gl::MAX_SAMPLES),
            max_integer_samples: raw::get_integer(gl::MAX_INTEGER_SAMPLES),
            max_color_attachments: raw::get_integer(gl::MAX_COLOR_ATTACHMENTS),
            max_texture_image_units: raw::get_integer(gl::MAX_TEXTURE_IMAGE_UNITS),
            max_combined_texture_image_units: raw::get_integer(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
            max_array_texture_layers: raw::get_integer(gl::MAX_ARRAY_TEXTURE_LAYERS),
            max_uniform_buffer_bindings: raw::get_integer(gl::MAX_UNIFORM_BUFFER_BINDINGS),
            max_vertex_attribs: raw::get_integer(gl::MAX_VERTEX_ATTRIBS),
            max_draw_buffers: raw::get_integer(gl::MAX_DRAW_BUFFERS),
            max_anisotropy: if version_code >= 460 {
                raw::get_float(gl::MAX_TEXTURE_MAX_ANISOTROPY)
            } else {
                1.0
            },
        };

        let info = ContextInfo {
            vendor: raw::get_string(gl::VENDOR),
            renderer: raw::get_string(gl::RENDERER),
            version: raw::get_string(gl::VERSION),
        };
        log::info!("{} / {} / {}", info.vendor, info.renderer, info.version);

        let mut scissor_box = [0i32; 4];
        // SAFE: out-param sized for GL_SCISSOR_BOX's 4 components.
        unsafe { gl::GetIntegerv(gl::SCISSOR_BOX, scissor_box.as_mut_ptr()) };
        let screen = Framebuffer::screen(scissor_box[2].max(1), scissor_box[3].max(1));

        let context = Rc::new(Context {
            version_code,
            extensions,
            limits,
            info,
            state: RefCell::new(StateShadow {
                enabled: Capability::empty(),
                current_framebuffer: FramebufferName::NONE,
                current_texture_unit: 0,
                front_face_clockwise: false,
                cull_face: false,
                depth_func_set: false,
                blend_src: gl::SRC_ALPHA,
                blend_dst: gl::ONE_MINUS_SRC_ALPHA,
                wireframe: false,
                multisample: false,
                provoking_vertex: gl::LAST_VERTEX_CONVENTION,
                polygon_offset: (0.0, 0.0),
            }),
            live: RefCell::new(Vec::new()),
            screen,
            default_scope: RefCell::new(None),
        });

        let default_scope = Scope::for_screen(&context);
        *context.default_scope.borrow_mut() = Some(default_scope);

        Ok(context)
    }

    pub fn version_code(&self) -> u32 {
        self.version_code
    }

    pub fn extensions(&self) -> &HashSet<String> {
        &self.extensions
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    pub fn info(&self) -> &ContextInfo {
        &self.info
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Samples and clears the driver's pending error flag.
    pub fn error(&self) -> Result<()> {
        raw::check_error("Context::error")
    }

    pub fn screen(&self) -> &Framebuffer {
        &self.screen
    }

    pub fn scope_for_screen(&self) -> Scope {
        self.default_scope.borrow().as_ref().expect("default scope initialized in new()").clone()
    }

    pub(crate) fn register(&self, object: Weak<dyn LiveObject>) {
        self.live.borrow_mut().push(object);
    }

    /// Snapshot of the live list: every registered object whose `glo` is
    /// still non-zero. Dead weak references (dropped objects) and released
    /// ones (`glo == 0`) are both excluded.
    pub fn objects(&self) -> Vec<ObjectSnapshot> {
        self.live
            .borrow()
            .iter()
            .filter_map(|weak| weak.upgrade())
            .filter(|obj| obj.glo_raw() != 0)
            .map(|obj| ObjectSnapshot {
                glo: obj.glo_raw(),
                kind: obj.kind_name(),
            })
            .collect()
    }

    /// Drops dead weak entries accumulated by released/dropped objects.
    /// Not required for correctness (`objects()` already filters them) but
    /// keeps the registry from growing unbounded over a long-lived context.
    pub fn compact(&self) {
        self.live.borrow_mut().retain(|w| w.strong_count() > 0);
    }

    /// Drives `Enable`/`Disable` to match `flags` exactly, never partial.
    pub fn enable_only(&self, flags: Capability) {
        let mut state = self.state.borrow_mut();
        for cap in Capability::singletons() {
            let want = flags.contains(cap);
            let have = state.enabled.contains(cap);
            if want == have {
                continue;
            }
            if want {
                raw::enable(cap.gl_enum());
            } else {
                raw::disable(cap.gl_enum());
            }
        }
        state.enabled = flags;
    }

    pub fn enable(&self, flags: Capability) {
        let current = self.state.borrow().enabled;
        self.enable_only(current | flags);
    }

    pub fn disable(&self, flags: Capability) {
        let current = self.state.borrow().enabled;
        self.enable_only(current - flags);
    }

    pub fn enabled(&self) -> Capability {
        self.state.borrow().enabled
    }

    pub(crate) fn set_current_framebuffer(&self, framebuffer: FramebufferName) {
        self.state.borrow_mut().current_framebuffer = framebuffer;
    }

    pub(crate) fn current_framebuffer(&self) -> FramebufferName {
        self.state.borrow().current_framebuffer
    }

    pub(crate) fn set_current_texture_unit(&self, unit: u32) {
        self.state.borrow_mut().current_texture_unit = unit;
    }

    pub fn finish(&self) {
        raw::finish();
    }

    /// `copy_buffer(dst, src, size, read_off, write_off)` — binds READ/WRITE
    /// targets and issues `CopyBufferSubData`.
    pub fn copy_buffer(&self, dst: BufferName, src: BufferName, size: u64, read_offset: i64, write_offset: i64) {
        raw::bind_buffer(crate::types::BufferBindingTarget::CopyRead, src);
        raw::bind_buffer(crate::types::BufferBindingTarget::CopyWrite, dst);
        raw::copy_buffer_sub_data(
            crate::types::BufferBindingTarget::CopyRead,
            crate::types::BufferBindingTarget::CopyWrite,
            read_offset,
            write_offset,
            size,
        );
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("version_code", &self.version_code)
            .field("info", &self.info)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_bits_match_the_external_interface() {
        assert_eq!(Capability::BLEND.bits(), 1);
        assert_eq!(Capability::DEPTH_TEST.bits(), 2);
        assert_eq!(Capability::CULL_FACE.bits(), 4);
        assert_eq!(Capability::RASTERIZER_DISCARD.bits(), 8);
        assert_eq!(Capability::PROGRAM_POINT_SIZE.bits(), 16);
    }

    #[test]
    fn capability_set_union_and_difference_behave_like_a_bitset() {
        let flags = Capability::BLEND | Capability::DEPTH_TEST;
        assert!(flags.contains(Capability::BLEND));
        assert!(!flags.contains(Capability::CULL_FACE));
        let removed = flags - Capability::BLEND;
        assert_eq!(removed, Capability::DEPTH_TEST);
    }
}
