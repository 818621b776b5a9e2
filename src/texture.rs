//! Unified sampleable image storage. Sample vs. non-sample, array vs.
//! non-array, 2D vs. 3D, depth vs. color are all reflected in one
//! `texture_target`, stored on a single record rather than a family of types.

use crate::context::LiveObject;
use crate::error::{Error, Result};
use crate::raw;
use crate::types::{CompareFunc, DataType, Swizzle, TextureBindingTarget, TextureName, Wrap};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Width/height/depth-or-layers, in one shape since the only distinction
/// between the 2D and 3D/array families is whether the third component is
/// meaningful.
#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl Size {
    pub fn new_2d(width: i32, height: i32) -> Size {
        Size { width, height, depth: 1 }
    }

    pub fn new_3d(width: i32, height: i32, depth: i32) -> Size {
        Size { width, height, depth }
    }
}

/// Minification/magnification filter pair.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Filter {
    pub min: gl::types::GLenum,
    pub mag: gl::types::GLenum,
}

impl Default for Filter {
    fn default() -> Self {
        Filter { min: gl::LINEAR, mag: gl::LINEAR }
    }
}

/// Creation inputs for [`Texture::create`].
pub struct TextureOptions<'a> {
    pub size: Size,
    pub components: u8,
    pub data: Option<&'a [u8]>,
    pub samples: i32,
    pub levels: i32,
    pub alignment: i32,
    pub dtype: &'a str,
    pub cube: bool,
    pub array: bool,
}

impl Default for TextureOptions<'_> {
    fn default() -> Self {
        TextureOptions {
            size: Size::new_2d(1, 1),
            components: 4,
            data: None,
            samples: 0,
            levels: 1,
            alignment: 4,
            dtype: "f1",
            cube: false,
            array: false,
        }
    }
}

struct Inner {
    glo: Cell<TextureName>,
    target: TextureBindingTarget,
    size: Size,
    components: u8,
    samples: i32,
    levels: i32,
    dtype: DataType,
    filter: Cell<Filter>,
    wrap: Cell<Wrap>,
    swizzle: Cell<Swizzle>,
    compare_func: Cell<Option<CompareFunc>>,
    anisotropy: Cell<f32>,
    max_level: Cell<i32>,
    depth: bool,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "Texture"
    }
}

/// `{size, components, samples, levels, dtype, filter, wrap, swizzle,
/// compare_func, anisotropy, depth}`. One record covers the whole 2D/3D/
/// array/cube/multisample family; `target()` reports which it is.
#[derive(Clone)]
pub struct Texture(Rc<Inner>);

fn clamp_levels(requested: i32, size: Size) -> i32 {
    let max_dim = size.width.max(size.height).max(size.depth).max(1);
    let max_levels = (max_dim as f32).log2().floor() as i32 + 1;
    if requested <= 0 {
        max_levels
    } else {
        requested.min(max_levels)
    }
}

fn choose_target(size: Size, samples: i32, cube: bool, array: bool, is_3d: bool) -> TextureBindingTarget {
    if cube {
        return TextureBindingTarget::TextureCubeMap;
    }
    if samples > 0 {
        return if array {
            TextureBindingTarget::Texture2DMultisampleArray
        } else {
            TextureBindingTarget::Texture2DMultisample
        };
    }
    if is_3d || (array && size.depth > 1) {
        return TextureBindingTarget::Texture3D;
    }
    if array {
        return TextureBindingTarget::Texture2DArray;
    }
    TextureBindingTarget::Texture2D
}

impl Texture {
    pub fn create(context: &crate::context::Context, options: TextureOptions) -> Result<Texture> {
        if !(1..=4).contains(&options.components) {
            return Err(Error::invalid_argument("components must be in 1..=4"));
        }
        if options.samples != 0 && !options.samples.is_power_of_two() {
            return Err(Error::invalid_argument("samples must be 0 or a power of two"));
        }
        if ![1, 2, 4, 8].contains(&options.alignment) {
            return Err(Error::invalid_argument("alignment must be one of 1, 2, 4, 8"));
        }
        let dtype = DataType::lookup(options.dtype)?;
        if dtype.is_depth && options.components != 1 {
            return Err(Error::invalid_argument("depth textures must have components == 1"));
        }
        let is_3d = options.size.depth > 1 && !options.array;
        let target = choose_target(options.size, options.samples, options.cube, options.array, is_3d);
        let levels = if options.samples > 0 { 1 } else { clamp_levels(options.levels, options.size) };

        let names = raw::gen_textures(1);
        let glo = names[0];
        if glo.is_none() {
            return Err(Error::object_creation_failed("Textures"));
        }
        raw::bind_texture(target, glo);
        raw::pixel_store_alignment(gl::UNPACK_ALIGNMENT, options.alignment);

        let internal_format = dtype.internal_format(options.components);
        let base_format = dtype.base_format(options.components);
        let gl_target = gl::types::GLenum::from(target);
        let has_storage = context.version_code() >= 420 || context.has_extension("GL_ARB_texture_storage");

        match target {
            TextureBindingTarget::Texture2DMultisample => {
                raw::tex_storage_2d_multisample(gl_target, options.samples, internal_format, options.size.width, options.size.height, true);
            }
            TextureBindingTarget::Texture2DMultisampleArray => {
                if has_storage {
                    raw::tex_storage_3d(gl_target, 1, internal_format, options.size.width, options.size.height, options.size.depth);
                }
            }
            TextureBindingTarget::Texture3D | TextureBindingTarget::Texture2DArray => {
                if has_storage {
                    raw::tex_storage_3d(gl_target, levels, internal_format, options.size.width, options.size.height, options.size.depth);
                    if let Some(data) = options.data {
                        unsafe {
                            raw::tex_sub_image_3d(
                                gl_target, 0, 0, 0, 0,
                                options.size.width, options.size.height, options.size.depth,
                                base_format, dtype.gl_type, data.as_ptr() as *const _,
                            )
                        };
                    }
                } else {
                    let data_ptr = options.data.map_or(std::ptr::null(), |d| d.as_ptr() as *const _);
                    unsafe {
                        raw::tex_image_3d(
                            gl_target, 0, internal_format,
                            options.size.width, options.size.height, options.size.depth,
                            base_format, dtype.gl_type, data_ptr,
                        )
                    };
                }
            }
            TextureBindingTarget::TextureCubeMap => {
                if has_storage {
                    raw::tex_storage_2d(gl::TEXTURE_CUBE_MAP, levels, internal_format, options.size.width, options.size.height);
                    if let Some(data) = options.data {
                        for face in 0..6u32 {
                            let face_target = gl::TEXTURE_CUBE_MAP_POSITIVE_X + face;
                            unsafe {
                                raw::tex_sub_image_2d(
                                    face_target, 0, 0, 0, options.size.width, options.size.height,
                                    base_format, dtype.gl_type, data.as_ptr() as *const _,
                                )
                            };
                        }
                    }
                } else {
                    for face in 0..6u32 {
                        let face_target = gl::TEXTURE_CUBE_MAP_POSITIVE_X + face;
                        let data_ptr = options.data.map_or(std::ptr::null(), |d| d.as_ptr() as *const _);
                        unsafe {
                            raw::tex_image_2d(
                                face_target, 0, internal_format, options.size.width, options.size.height,
                                base_format, dtype.gl_type, data_ptr,
                            )
                        };
                    }
                }
            }
            _ => {
                if has_storage {
                    raw::tex_storage_2d(gl_target, levels, internal_format, options.size.width, options.size.height);
                    if let Some(data) = options.data {
                        unsafe {
                            raw::tex_sub_image_2d(
                                gl_target, 0, 0, 0, options.size.width, options.size.height,
                                base_format, dtype.gl_type, data.as_ptr() as *const _,
                            )
                        };
                    }
                } else {
                    let data_ptr = options.data.map_or(std::ptr::null(), |d| d.as_ptr() as *const _);
                    unsafe {
                        raw::tex_image_2d(
                            gl_target, 0, internal_format, options.size.width, options.size.height,
                            base_format, dtype.gl_type, data_ptr,
                        )
                    };
                }
            }
        }

        let filter = if dtype.is_depth {
            Filter { min: gl::NEAREST, mag: gl::NEAREST }
        } else {
            Filter::default()
        };
        raw::tex_parameter_i(gl_target, gl::TEXTURE_MIN_FILTER, filter.min as i32);
        raw::tex_parameter_i(gl_target, gl::TEXTURE_MAG_FILTER, filter.mag as i32);

        let inner = Rc::new(Inner {
            glo: Cell::new(glo),
            target,
            size: options.size,
            components: options.components,
            samples: options.samples,
            levels,
            dtype,
            filter: Cell::new(filter),
            wrap: Cell::new(Wrap::default()),
            swizzle: Cell::new(Swizzle::default()),
            compare_func: Cell::new(None),
            anisotropy: Cell::new(1.0),
            max_level: Cell::new(levels - 1),
            depth: dtype.is_depth,
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::debug!("created texture {} ({}x{}x{})", glo.0, options.size.width, options.size.height, options.size.depth);
        Ok(Texture(inner))
    }

    pub fn glo(&self) -> TextureName {
        self.0.glo.get()
    }

    pub fn target(&self) -> TextureBindingTarget {
        self.0.target
    }

    pub fn size(&self) -> Size {
        self.0.size
    }

    pub fn components(&self) -> u8 {
        self.0.components
    }

    pub fn dtype(&self) -> DataType {
        self.0.dtype
    }

    pub fn is_depth(&self) -> bool {
        self.0.depth
    }

    fn gl_target(&self) -> gl::types::GLenum {
        gl::types::GLenum::from(self.0.target)
    }

    fn bind(&self) {
        raw::bind_texture(self.0.target, self.glo());
    }

    /// Writes either the whole texture (`viewport = None`) or a
    /// sub-rectangle. Viewport is `(x, y, z, w, h, d)`; the trailing two
    /// components are ignored for the plain 2D target.
    pub fn write(&self, alignment: i32, data: &[u8], viewport: Option<(i32, i32, i32, i32, i32, i32)>) -> Result<()> {
        self.bind();
        raw::pixel_store_alignment(gl::UNPACK_ALIGNMENT, alignment);
        let base_format = self.0.dtype.base_format(self.0.components);
        let gl_type = self.0.dtype.gl_type;
        let (x, y, z, w, h, d) = viewport.unwrap_or((0, 0, 0, self.0.size.width, self.0.size.height, self.0.size.depth));
        match self.0.target {
            TextureBindingTarget::Texture3D | TextureBindingTarget::Texture2DArray | TextureBindingTarget::Texture2DMultisampleArray => {
                // SAFE: caller-supplied `data` must cover w*h*d texels; this mirrors the raw layer's own safety contract.
                unsafe { raw::tex_sub_image_3d(self.gl_target(), 0, x, y, z, w, h, d, base_format, gl_type, data.as_ptr() as *const _) };
            }
            _ => {
                unsafe { raw::tex_sub_image_2d(self.gl_target(), 0, x, y, w, h, base_format, gl_type, data.as_ptr() as *const _) };
            }
        }
        Ok(())
    }

    /// Reads the whole texture back. Into a [`crate::buffer::Buffer`], goes
    /// through `PIXEL_PACK_BUFFER` and returns an empty `Vec` (the data
    /// lands in the buffer); otherwise returns the bytes directly.
    pub fn read(&self, alignment: i32, into: Option<&crate::buffer::Buffer>) -> Result<Vec<u8>> {
        self.bind();
        raw::pixel_store_alignment(gl::PACK_ALIGNMENT, alignment);
        let base_format = self.0.dtype.base_format(self.0.components);
        let gl_type = self.0.dtype.gl_type;
        let texel_count = (self.0.size.width * self.0.size.height * self.0.size.depth.max(1)) as usize;
        let byte_size = texel_count * self.0.components as usize * self.0.dtype.element_size as usize;

        if let Some(buffer) = into {
            raw::bind_buffer(crate::types::BufferBindingTarget::PixelPack, buffer.glo());
            // SAFE: offset 0 into the bound pack buffer, which the caller must size for >= byte_size bytes.
            unsafe { raw::get_tex_image(self.gl_target(), 0, base_format, gl_type, std::ptr::null_mut()) };
            raw::bind_buffer(crate::types::BufferBindingTarget::PixelPack, crate::types::BufferName::NONE);
            return Ok(Vec::new());
        }

        let mut out = vec![0u8; byte_size];
        // SAFE: `out` is sized for exactly `byte_size` bytes computed from the texture's own dimensions.
        unsafe { raw::get_tex_image(self.gl_target(), 0, base_format, gl_type, out.as_mut_ptr() as *mut _) };
        Ok(out)
    }

    /// Sets `TEXTURE_BASE_LEVEL`/`MAX_LEVEL`, generates the mip chain, and
    /// switches the min filter to `LINEAR_MIPMAP_LINEAR`.
    pub fn build_mipmaps(&self, base: i32, max: i32) {
        self.bind();
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_BASE_LEVEL, base);
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_MAX_LEVEL, max);
        raw::generate_mipmap(self.gl_target());
        let mut filter = self.0.filter.get();
        filter.min = gl::LINEAR_MIPMAP_LINEAR;
        self.0.filter.set(filter);
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_MIN_FILTER, filter.min as i32);
        self.0.max_level.set(max);
    }

    pub fn set_filter(&self, filter: Filter) {
        self.bind();
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_MIN_FILTER, filter.min as i32);
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_MAG_FILTER, filter.mag as i32);
        self.0.filter.set(filter);
    }

    pub fn filter(&self) -> Filter {
        self.0.filter.get()
    }

    /// Accepts the three explicit axis modes or the packed `u32` form via
    /// [`crate::types::Wrap`]'s `From<u32>`.
    pub fn set_wrap(&self, wrap: Wrap) {
        self.bind();
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_WRAP_S, wrap.s.to_gl() as i32);
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_WRAP_T, wrap.t.to_gl() as i32);
        raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_WRAP_R, wrap.r.to_gl() as i32);
        self.0.wrap.set(wrap);
    }

    pub fn wrap(&self) -> Wrap {
        self.0.wrap.get()
    }

    pub fn set_swizzle(&self, swizzle: Swizzle) {
        self.bind();
        const PNAMES: [gl::types::GLenum; 4] = [
            gl::TEXTURE_SWIZZLE_R,
            gl::TEXTURE_SWIZZLE_G,
            gl::TEXTURE_SWIZZLE_B,
            gl::TEXTURE_SWIZZLE_A,
        ];
        for (pname, channel) in PNAMES.iter().zip(swizzle.channels.iter()) {
            if let Some(source) = channel {
                raw::tex_parameter_i(self.gl_target(), *pname, *source as i32);
            }
        }
        self.0.swizzle.set(swizzle);
    }

    pub fn swizzle(&self) -> Swizzle {
        self.0.swizzle.get()
    }

    pub fn set_compare_func(&self, func: Option<CompareFunc>) {
        self.bind();
        match func {
            Some(func) => {
                raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_COMPARE_MODE, gl::COMPARE_REF_TO_TEXTURE as i32);
                raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_COMPARE_FUNC, gl::types::GLenum::from(func) as i32);
            }
            None => raw::tex_parameter_i(self.gl_target(), gl::TEXTURE_COMPARE_MODE, gl::NONE as i32),
        }
        self.0.compare_func.set(func);
    }

    /// Version-gated on `GL_ARB_texture_filter_anisotropic` / version >= 460;
    /// a silent no-op below that, matching this crate's capability-gating
    /// convention elsewhere (subroutines, SSBOs, compute).
    pub fn set_anisotropy(&self, context: &crate::context::Context, amount: f32) {
        if context.version_code() < 460 && !context.has_extension("GL_ARB_texture_filter_anisotropic") {
            return;
        }
        self.bind();
        let clamped = amount.clamp(1.0, context.limits().max_anisotropy.max(1.0));
        raw::tex_parameter_f(self.gl_target(), gl::TEXTURE_MAX_ANISOTROPY, clamped);
        self.0.anisotropy.set(clamped);
    }

    pub fn anisotropy(&self) -> f32 {
        self.0.anisotropy.get()
    }

    /// `bind_image(unit, read, write, level, format)` — issues
    /// `BindImageTexture`. `read == write == false` is rejected.
    pub fn bind_image(&self, unit: u32, read: bool, write: bool, level: i32, format: gl::types::GLenum) -> Result<()> {
        let access = match (read, write) {
            (true, true) => gl::READ_WRITE,
            (true, false) => gl::READ_ONLY,
            (false, true) => gl::WRITE_ONLY,
            (false, false) => return Err(Error::invalid_argument("bind_image requires at least one of read/write")),
        };
        let layered = matches!(
            self.0.target,
            TextureBindingTarget::Texture3D | TextureBindingTarget::Texture2DArray | TextureBindingTarget::TextureCubeMap
        );
        raw::bind_image_texture(unit, self.glo(), level, layered, 0, access, format);
        Ok(())
    }

    /// Binds to a texture unit for sampling (`active_texture` + `bind_texture`).
    pub fn bind_unit(&self, unit: u32) {
        raw::active_texture(unit);
        self.bind();
    }

    pub fn release(&self) {
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_textures(&[glo]);
        self.0.glo.set(TextureName::NONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_count_clamps_to_log2_of_largest_dimension() {
        assert_eq!(clamp_levels(0, Size::new_2d(256, 64)), 9);
        assert_eq!(clamp_levels(20, Size::new_2d(256, 64)), 9);
        assert_eq!(clamp_levels(2, Size::new_2d(256, 64)), 2);
    }

    #[test]
    fn chooses_cube_target_over_array_or_3d() {
        let target = choose_target(Size::new_2d(64, 64), 0, true, true, false);
        assert_eq!(target, TextureBindingTarget::TextureCubeMap);
    }

    #[test]
    fn chooses_multisample_array_when_both_set() {
        let target = choose_target(Size::new_3d(64, 64, 4), 4, false, true, false);
        assert_eq!(target, TextureBindingTarget::Texture2DMultisampleArray);
    }

    #[test]
    fn chooses_plain_2d_by_default() {
        let target = choose_target(Size::new_2d(64, 64), 0, false, false, false);
        assert_eq!(target, TextureBindingTarget::Texture2D);
    }
}
