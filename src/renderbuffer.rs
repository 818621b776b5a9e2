//! Non-sampleable framebuffer attachments. Immutable after creation: the
//! storage call happens exactly once, at construction.

use crate::context::LiveObject;
use crate::error::{Error, Result};
use crate::raw;
use crate::types::{DataType, RenderbufferName};
use std::cell::Cell;
use std::rc::{Rc, Weak};

struct Inner {
    glo: Cell<RenderbufferName>,
    width: i32,
    height: i32,
    components: u8,
    samples: i32,
    dtype: DataType,
    depth: bool,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "Renderbuffer"
    }
}

/// `{width, height, components, samples, dtype, depth}`.
#[derive(Clone)]
pub struct Renderbuffer(Rc<Inner>);

impl Renderbuffer {
    pub fn create(
        context: &crate::context::Context,
        width: i32,
        height: i32,
        components: u8,
        samples: i32,
        dtype_code: &str,
        depth: bool,
    ) -> Result<Renderbuffer> {
        if width < 1 || height < 1 {
            return Err(Error::invalid_size("renderbuffer dimensions must be >= 1"));
        }
        let dtype = DataType::lookup(dtype_code)?;
        let names = raw::gen_renderbuffers(1);
        let glo = names[0];
        if glo.is_none() {
            return Err(Error::object_creation_failed("Renderbuffers"));
        }
        raw::bind_renderbuffer(glo);
        let internal_format = dtype.internal_format(components);
        if samples > 0 {
            raw::renderbuffer_storage_multisample(samples, internal_format, width, height);
        } else {
            raw::renderbuffer_storage(internal_format, width, height);
        }

        let inner = Rc::new(Inner {
            glo: Cell::new(glo),
            width,
            height,
            components,
            samples,
            dtype,
            depth,
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::debug!("created renderbuffer {} ({width}x{height}, samples={samples})", glo.0);
        Ok(Renderbuffer(inner))
    }

    pub fn glo(&self) -> RenderbufferName {
        self.0.glo.get()
    }

    pub fn width(&self) -> i32 {
        self.0.width
    }

    pub fn height(&self) -> i32 {
        self.0.height
    }

    pub fn components(&self) -> u8 {
        self.0.components
    }

    pub fn samples(&self) -> i32 {
        self.0.samples
    }

    pub fn dtype(&self) -> DataType {
        self.0.dtype
    }

    pub fn is_depth(&self) -> bool {
        self.0.depth
    }

    pub fn release(&self) {
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_renderbuffers(&[glo]);
        self.0.glo.set(RenderbufferName::NONE);
    }
}
