//! Standalone sampling state. A sampler's lifetime is independent of any
//! [`crate::texture::Texture`] it is later bound alongside; binding overrides
//! whatever sampling parameters the texture itself carries.

use crate::context::LiveObject;
use crate::error::Result;
use crate::raw;
use crate::texture::Filter;
use crate::types::{CompareFunc, SamplerName, Wrap};
use std::cell::Cell;
use std::rc::{Rc, Weak};

struct Inner {
    glo: Cell<SamplerName>,
    filter: Cell<Filter>,
    anisotropy: Cell<f32>,
    wrap: Cell<Wrap>,
    compare_func: Cell<Option<CompareFunc>>,
    border_color: Cell<[f32; 4]>,
    min_lod: Cell<f32>,
    max_lod: Cell<f32>,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "Sampler"
    }
}

/// `{filter, anisotropy, wrap, compare_func, border_color, min_lod, max_lod}`.
#[derive(Clone)]
pub struct Sampler(Rc<Inner>);

impl Sampler {
    pub fn create(context: &crate::context::Context) -> Result<Sampler> {
        let names = raw::gen_samplers(1);
        let glo = names[0];
        if glo.is_none() {
            return Err(crate::error::Error::object_creation_failed("Samplers"));
        }
        let filter = Filter::default();
        let wrap = Wrap::default();
        raw::sampler_parameter_i(glo, gl::TEXTURE_MIN_FILTER, filter.min as i32);
        raw::sampler_parameter_i(glo, gl::TEXTURE_MAG_FILTER, filter.mag as i32);
        raw::sampler_parameter_i(glo, gl::TEXTURE_WRAP_S, wrap.s.to_gl() as i32);
        raw::sampler_parameter_i(glo, gl::TEXTURE_WRAP_T, wrap.t.to_gl() as i32);
        raw::sampler_parameter_i(glo, gl::TEXTURE_WRAP_R, wrap.r.to_gl() as i32);

        let inner = Rc::new(Inner {
            glo: Cell::new(glo),
            filter: Cell::new(filter),
            anisotropy: Cell::new(1.0),
            wrap: Cell::new(wrap),
            compare_func: Cell::new(None),
            border_color: Cell::new([0.0, 0.0, 0.0, 0.0]),
            min_lod: Cell::new(-1000.0),
            max_lod: Cell::new(1000.0),
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::debug!("created sampler {}", glo.0);
        Ok(Sampler(inner))
    }

    pub fn glo(&self) -> SamplerName {
        self.0.glo.get()
    }

    pub fn bind(&self, unit: u32) {
        raw::bind_sampler(unit, self.glo());
    }

    pub fn unbind(unit: u32) {
        raw::bind_sampler(unit, SamplerName::NONE);
    }

    pub fn set_filter(&self, filter: Filter) {
        raw::sampler_parameter_i(self.glo(), gl::TEXTURE_MIN_FILTER, filter.min as i32);
        raw::sampler_parameter_i(self.glo(), gl::TEXTURE_MAG_FILTER, filter.mag as i32);
        self.0.filter.set(filter);
    }

    pub fn filter(&self) -> Filter {
        self.0.filter.get()
    }

    pub fn set_wrap(&self, wrap: Wrap) {
        raw::sampler_parameter_i(self.glo(), gl::TEXTURE_WRAP_S, wrap.s.to_gl() as i32);
        raw::sampler_parameter_i(self.glo(), gl::TEXTURE_WRAP_T, wrap.t.to_gl() as i32);
        raw::sampler_parameter_i(self.glo(), gl::TEXTURE_WRAP_R, wrap.r.to_gl() as i32);
        self.0.wrap.set(wrap);
    }

    pub fn wrap(&self) -> Wrap {
        self.0.wrap.get()
    }

    pub fn set_compare_func(&self, func: Option<CompareFunc>) {
        match func {
            Some(func) => {
                raw::sampler_parameter_i(self.glo(), gl::TEXTURE_COMPARE_MODE, gl::COMPARE_REF_TO_TEXTURE as i32);
                raw::sampler_parameter_i(self.glo(), gl::TEXTURE_COMPARE_FUNC, gl::types::GLenum::from(func) as i32);
            }
            None => raw::sampler_parameter_i(self.glo(), gl::TEXTURE_COMPARE_MODE, gl::NONE as i32),
        }
        self.0.compare_func.set(func);
    }

    pub fn set_border_color(&self, color: [f32; 4]) {
        raw::sampler_parameter_fv(self.glo(), gl::TEXTURE_BORDER_COLOR, &color);
        self.0.border_color.set(color);
    }

    pub fn border_color(&self) -> [f32; 4] {
        self.0.border_color.get()
    }

    pub fn set_lod_range(&self, min: f32, max: f32) {
        raw::sampler_parameter_f(self.glo(), gl::TEXTURE_MIN_LOD, min);
        raw::sampler_parameter_f(self.glo(), gl::TEXTURE_MAX_LOD, max);
        self.0.min_lod.set(min);
        self.0.max_lod.set(max);
    }

    pub fn lod_range(&self) -> (f32, f32) {
        (self.0.min_lod.get(), self.0.max_lod.get())
    }

    /// Same capability gate as [`crate::texture::Texture::set_anisotropy`].
    pub fn set_anisotropy(&self, context: &crate::context::Context, amount: f32) {
        if context.version_code() < 460 && !context.has_extension("GL_ARB_texture_filter_anisotropic") {
            return;
        }
        let clamped = amount.clamp(1.0, context.limits().max_anisotropy.max(1.0));
        raw::sampler_parameter_f(self.glo(), gl::TEXTURE_MAX_ANISOTROPY, clamped);
        self.0.anisotropy.set(clamped);
    }

    pub fn anisotropy(&self) -> f32 {
        self.0.anisotropy.get()
    }

    pub fn release(&self) {
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_samplers(&[glo]);
        self.0.glo.set(SamplerName::NONE);
    }
}
