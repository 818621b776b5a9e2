//! Render target construction, completeness validation, clear/read, and the
//! screen (default, name-zero) framebuffer.

use crate::context::{Context, LiveObject};
use crate::error::{Error, Result};
use crate::raw;
use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture;
use crate::types::{ClearMask, FramebufferBindingTarget, FramebufferName};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// A single color or depth attachment: either a texture level or a
/// renderbuffer, whichever the caller created storage with.
#[derive(Clone)]
pub enum Attachment {
    Texture(Texture),
    Renderbuffer(Renderbuffer),
}

impl Attachment {
    fn components(&self) -> u8 {
        match self {
            Attachment::Texture(t) => t.components(),
            Attachment::Renderbuffer(r) => r.components(),
        }
    }

    fn dtype_shape(&self) -> u8 {
        match self {
            Attachment::Texture(t) => t.dtype().shape,
            Attachment::Renderbuffer(r) => r.dtype().shape,
        }
    }

    fn attach(&self, target: gl::types::GLenum, attachment_point: gl::types::GLenum) {
        match self {
            Attachment::Texture(t) => raw::framebuffer_texture_2d(target, attachment_point, gl::types::GLenum::from(t.target()), t.glo(), 0),
            Attachment::Renderbuffer(r) => raw::framebuffer_renderbuffer(target, attachment_point, r.glo()),
        }
    }
}

fn status_name(status: gl::types::GLenum) -> &'static str {
    match status {
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "FRAMEBUFFER_INCOMPLETE_ATTACHMENT",
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => "FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT",
        gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER",
        gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "FRAMEBUFFER_INCOMPLETE_READ_BUFFER",
        gl::FRAMEBUFFER_UNSUPPORTED => "FRAMEBUFFER_UNSUPPORTED",
        gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "FRAMEBUFFER_INCOMPLETE_MULTISAMPLE",
        _ => "FRAMEBUFFER_INCOMPLETE",
    }
}

struct Inner {
    glo: Cell<FramebufferName>,
    width: i32,
    height: i32,
    color_attachments: Vec<Attachment>,
    depth_attachment: Option<Attachment>,
    viewport: Cell<(i32, i32, i32, i32)>,
    scissor: Cell<Option<(i32, i32, i32, i32)>>,
    color_mask: Cell<(bool, bool, bool, bool)>,
    depth_mask: Cell<bool>,
    is_screen: bool,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "Framebuffer"
    }
}

/// `{width, height, color_attachments, depth_attachment, viewport, scissor,
/// color_mask, depth_mask}`. The screen framebuffer (`glo == 0`) carries no
/// attachments of its own; it is whatever the windowing layer bound before
/// this crate was asked to manage anything.
#[derive(Clone)]
pub struct Framebuffer(Rc<Inner>);

impl Framebuffer {
    /// The default framebuffer. Not registered with any context's live list
    /// since it isn't GL-object-owned; `context.screen()` hands out the one
    /// true instance created during [`Context::new`].
    pub fn screen(width: i32, height: i32) -> Framebuffer {
        Framebuffer(Rc::new(Inner {
            glo: Cell::new(FramebufferName::NONE),
            width,
            height,
            color_attachments: Vec::new(),
            depth_attachment: None,
            viewport: Cell::new((0, 0, width, height)),
            scissor: Cell::new(None),
            color_mask: Cell::new((true, true, true, true)),
            depth_mask: Cell::new(true),
            is_screen: true,
        }))
    }

    pub fn create(
        context: &Context,
        width: i32,
        height: i32,
        color_attachments: Vec<Attachment>,
        depth_attachment: Option<Attachment>,
    ) -> Result<Framebuffer> {
        if width < 1 || height < 1 {
            return Err(Error::invalid_size("framebuffer dimensions must be >= 1"));
        }
        if color_attachments.is_empty() && depth_attachment.is_none() {
            return Err(Error::invalid_argument("framebuffer needs at least one attachment"));
        }
        if color_attachments.len() as i32 > context.limits().max_color_attachments {
            return Err(Error::out_of_range("too many color attachments for this implementation"));
        }

        let names = raw::gen_framebuffers(1);
        let glo = names[0];
        if glo.is_none() {
            return Err(Error::object_creation_failed("Framebuffers"));
        }
        let target = gl::types::GLenum::from(FramebufferBindingTarget::ReadDraw);
        raw::bind_framebuffer(target, glo);

        for (i, attachment) in color_attachments.iter().enumerate() {
            attachment.attach(target, gl::COLOR_ATTACHMENT0 + i as u32);
        }
        if let Some(depth) = &depth_attachment {
            depth.attach(target, gl::DEPTH_ATTACHMENT);
        }

        if color_attachments.is_empty() {
            raw::draw_buffers(&[gl::NONE]);
            raw::read_buffer(gl::NONE);
        } else {
            let draw_points: Vec<_> = (0..color_attachments.len() as u32).map(|i| gl::COLOR_ATTACHMENT0 + i).collect();
            raw::draw_buffers(&draw_points);
        }

        let status = raw::check_framebuffer_status(target);
        if status != gl::FRAMEBUFFER_COMPLETE {
            raw::delete_framebuffers(&[glo]);
            return Err(Error::framebuffer_incomplete(status_name(status)));
        }

        let inner = Rc::new(Inner {
            glo: Cell::new(glo),
            width,
            height,
            color_attachments,
            depth_attachment,
            viewport: Cell::new((0, 0, width, height)),
            scissor: Cell::new(None),
            color_mask: Cell::new((true, true, true, true)),
            depth_mask: Cell::new(true),
            is_screen: false,
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::debug!("created framebuffer {} ({width}x{height}, {} color attachments)", glo.0, inner.color_attachments.len());
        Ok(Framebuffer(inner))
    }

    pub fn glo(&self) -> FramebufferName {
        self.0.glo.get()
    }

    pub fn width(&self) -> i32 {
        self.0.width
    }

    pub fn height(&self) -> i32 {
        self.0.height
    }

    pub fn is_screen(&self) -> bool {
        self.0.is_screen
    }

    pub fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.0.viewport.set((x, y, width, height));
    }

    pub fn viewport(&self) -> (i32, i32, i32, i32) {
        self.0.viewport.get()
    }

    pub fn set_scissor(&self, rect: Option<(i32, i32, i32, i32)>) {
        self.0.scissor.set(rect);
    }

    pub fn set_color_mask(&self, mask: (bool, bool, bool, bool)) {
        self.0.color_mask.set(mask);
    }

    pub fn set_depth_mask(&self, mask: bool) {
        self.0.depth_mask.set(mask);
    }

    /// Binds this framebuffer and applies its stored viewport/scissor/masks,
    /// per the bind-then-apply protocol [`crate::scope::Scope`] relies on.
    pub fn bind(&self, context: &Context, target: FramebufferBindingTarget) {
        raw::bind_framebuffer(gl::types::GLenum::from(target), self.glo());
        context.set_current_framebuffer(self.glo());
        let (x, y, w, h) = self.0.viewport.get();
        raw::viewport(x, y, w, h);
        match self.0.scissor.get() {
            Some((x, y, w, h)) => {
                raw::enable(gl::SCISSOR_TEST);
                raw::scissor(x, y, w, h);
            }
            None => raw::disable(gl::SCISSOR_TEST),
        }
        let (r, g, b, a) = self.0.color_mask.get();
        raw::color_mask(r, g, b, a);
        raw::depth_mask(self.0.depth_mask.get());
    }

    /// Clears the given color attachment index (`None` clears depth) to
    /// `value`. Dispatch is by the attachment's own dtype shape, per the
    /// single-decode-table design used everywhere a GL type needs to pick a
    /// marshalling function.
    pub fn clear_color(&self, context: &Context, index: usize, value: [f32; 4]) -> Result<()> {
        self.bind(context, FramebufferBindingTarget::ReadDraw);
        if self.0.is_screen {
            raw::clear_buffer_fv(gl::COLOR, 0, &value);
            return Ok(());
        }
        let attachment = self
            .0
            .color_attachments
            .get(index)
            .ok_or_else(|| Error::out_of_range("no color attachment at that index"))?;
        match attachment.dtype_shape() {
            b'u' => {
                let as_u = [value[0] as u32, value[1] as u32, value[2] as u32, value[3] as u32];
                raw::clear_buffer_uiv(gl::COLOR, index as i32, &as_u);
            }
            b'i' => {
                let as_i = [value[0] as i32, value[1] as i32, value[2] as i32, value[3] as i32];
                raw::clear_buffer_iv(gl::COLOR, index as i32, &as_i);
            }
            _ => raw::clear_buffer_fv(gl::COLOR, index as i32, &value),
        }
        Ok(())
    }

    pub fn clear_depth(&self, context: &Context, depth: f32) {
        self.bind(context, FramebufferBindingTarget::ReadDraw);
        raw::clear_buffer_depth(depth);
    }

    /// `clear(mask)` — clears whatever `mask` selects using the currently
    /// bound draw buffers, matching the legacy whole-framebuffer clear.
    pub fn clear(&self, context: &Context, mask: ClearMask) {
        self.bind(context, FramebufferBindingTarget::ReadDraw);
        raw::clear(mask);
    }

    /// Reads `components` channels of `attachment_index`'s color data back,
    /// either into a byte buffer or (when `into` is set) a GPU-side pixel
    /// pack buffer.
    pub fn read(
        &self,
        context: &Context,
        attachment_index: usize,
        rect: (i32, i32, i32, i32),
        alignment: i32,
        into: Option<&crate::buffer::Buffer>,
    ) -> Result<Vec<u8>> {
        self.bind(context, FramebufferBindingTarget::Read);
        let attachment = self
            .0
            .color_attachments
            .get(attachment_index)
            .ok_or_else(|| Error::out_of_range("no color attachment at that index"))?;
        raw::read_buffer(gl::COLOR_ATTACHMENT0 + attachment_index as u32);
        raw::pixel_store_alignment(gl::PACK_ALIGNMENT, alignment);

        let (x, y, w, h) = rect;
        let components = attachment.components();
        let (format, gl_type, element_size) = match attachment {
            Attachment::Texture(t) => (t.dtype().base_format(components), t.dtype().gl_type, t.dtype().element_size),
            Attachment::Renderbuffer(r) => (r.dtype().base_format(components), r.dtype().gl_type, r.dtype().element_size),
        };

        if let Some(buffer) = into {
            raw::bind_buffer(crate::types::BufferBindingTarget::PixelPack, buffer.glo());
            // SAFE: offset 0 into the bound pack buffer, which must hold enough bytes for w*h texels.
            unsafe { raw::read_pixels(x, y, w, h, format, gl_type, std::ptr::null_mut()) };
            raw::bind_buffer(crate::types::BufferBindingTarget::PixelPack, crate::types::BufferName::NONE);
            return Ok(Vec::new());
        }

        let byte_size = (w * h) as usize * components as usize * element_size as usize;
        let mut out = vec![0u8; byte_size];
        // SAFE: `out` is sized for exactly `byte_size` bytes computed from `rect` and the attachment's own format.
        unsafe { raw::read_pixels(x, y, w, h, format, gl_type, out.as_mut_ptr() as *mut _) };
        Ok(out)
    }

    pub fn release(&self) {
        if self.0.is_screen {
            return;
        }
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_framebuffers(&[glo]);
        self.0.glo.set(FramebufferName::NONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_framebuffer_has_no_gl_name() {
        let fb = Framebuffer::screen(800, 600);
        assert!(fb.glo().is_none());
        assert!(fb.is_screen());
        assert_eq!(fb.viewport(), (0, 0, 800, 600));
    }

    #[test]
    fn status_name_maps_known_incompleteness_codes() {
        assert_eq!(status_name(gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT), "FRAMEBUFFER_INCOMPLETE_ATTACHMENT");
        assert_eq!(status_name(gl::FRAMEBUFFER_UNSUPPORTED), "FRAMEBUFFER_UNSUPPORTED");
    }
}
