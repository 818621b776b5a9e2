//! Linear GPU byte region with declared usage and optional immutable
//! storage flags.

use crate::context::LiveObject;
use crate::error::{Error, Result};
use crate::raw;
use crate::types::{parse_reserve, BufferBindingTarget, BufferName};
use std::cell::Cell;
use std::rc::{Rc, Weak};

bitflags::bitflags! {
    /// Immutable-storage flags, used when `glBufferStorage` is available.
    pub struct StorageFlags: u32 {
        const READABLE = 1;
        const WRITABLE = 2;
        const CLIENT_LOCAL = 4;
    }
}

impl StorageFlags {
    fn to_gl_bits(self) -> gl::types::GLbitfield {
        let mut bits = 0;
        if self.contains(StorageFlags::READABLE) {
            bits |= gl::MAP_READ_BIT;
        }
        if self.contains(StorageFlags::WRITABLE) {
            bits |= gl::MAP_WRITE_BIT;
        }
        bits |= gl::DYNAMIC_STORAGE_BIT;
        if self.contains(StorageFlags::CLIENT_LOCAL) {
            bits |= gl::CLIENT_STORAGE_BIT;
        }
        bits
    }
}

/// Creation inputs. `data` and `reserve` are mutually exclusive.
pub enum BufferSource<'a> {
    Data(&'a [u8]),
    Reserve(u64),
}

struct Inner {
    glo: Cell<BufferName>,
    size: Cell<u64>,
    storage_flags: StorageFlags,
    immutable: bool,
    mapped: Cell<bool>,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        self.glo.get().0
    }

    fn kind_name(&self) -> &'static str {
        "Buffer"
    }
}

/// `{size >= 1, storage_flags, glo}`. Mapping is transient and
/// re-entrant-unsafe: at most one in-flight range map at a time.
#[derive(Clone)]
pub struct Buffer(Rc<Inner>);

const BIND_TARGET: BufferBindingTarget = BufferBindingTarget::Array;

impl Buffer {
    pub fn create(
        context: &crate::context::Context,
        source: BufferSource,
        storage_flags: StorageFlags,
    ) -> Result<Buffer> {
        let size = match &source {
            BufferSource::Data(bytes) => bytes.len() as u64,
            BufferSource::Reserve(n) => *n,
        };
        if size == 0 || size > (1u64 << 31) - 1 {
            return Err(Error::invalid_size(format!(
                "buffer size must be in [1, 2^31-1], got {size}"
            )));
        }

        let names = raw::gen_buffers(1);
        let glo = names[0];
        if glo.is_none() {
            return Err(Error::object_creation_failed("Buffers"));
        }
        raw::bind_buffer(BIND_TARGET, glo);

        let immutable = context.has_extension("GL_ARB_buffer_storage") || context.version_code() >= 440;
        let ptr = match &source {
            BufferSource::Data(bytes) => bytes.as_ptr() as *const std::ffi::c_void,
            BufferSource::Reserve(_) => std::ptr::null(),
        };
        if immutable {
            // SAFE: `ptr` is either null or points to exactly `size` bytes for the lifetime of this call.
            unsafe { raw::buffer_storage(BIND_TARGET, size, ptr, storage_flags.to_gl_bits()) };
        } else {
            let usage = gl::DYNAMIC_DRAW;
            // SAFE: see above.
            unsafe { raw::buffer_data(BIND_TARGET, size, ptr, usage) };
        }

        let inner = Rc::new(Inner {
            glo: Cell::new(glo),
            size: Cell::new(size),
            storage_flags,
            immutable,
            mapped: Cell::new(false),
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        log::debug!("created buffer {} ({size} bytes, immutable={immutable})", glo.0);
        Ok(Buffer(inner))
    }

    /// Convenience constructor accepting a reserve string (`"16KB"`) instead
    /// of a raw byte count.
    pub fn create_reserved(
        context: &crate::context::Context,
        reserve: &str,
        storage_flags: StorageFlags,
    ) -> Result<Buffer> {
        let size = parse_reserve(reserve)?;
        Buffer::create(context, BufferSource::Reserve(size), storage_flags)
    }

    pub fn glo(&self) -> BufferName {
        self.0.glo.get()
    }

    pub fn size(&self) -> u64 {
        self.0.size.get()
    }

    fn check_range(&self, offset: u64, size: u64) -> Result<()> {
        if offset.checked_add(size).map_or(true, |end| end > self.size()) {
            return Err(Error::out_of_range(format!(
                "range [{offset}, {offset}+{size}) exceeds buffer size {}",
                self.size()
            )));
        }
        Ok(())
    }

    /// Uploads a contiguous byte slice at `offset`.
    pub fn write(&self, data: &[u8], offset: u64) -> Result<()> {
        self.check_range(offset, data.len() as u64)?;
        raw::bind_buffer(BIND_TARGET, self.glo());
        // SAFE: `data` is borrowed for the duration of the call and its
        // length matches what we pass as `size`; range already validated.
        unsafe { raw::buffer_sub_data(BIND_TARGET, offset as i64, data.len() as u64, data.as_ptr() as *const _) };
        Ok(())
    }

    /// Reads `size` bytes starting at `offset`. If `into` is given, performs
    /// a GPU-to-GPU copy via `CopyBufferSubData` and fills `into` at
    /// `write_offset` instead of returning bytes.
    pub fn read(&self, size: u64, offset: u64, into: Option<(&Buffer, u64)>, context: &crate::context::Context) -> Result<Vec<u8>> {
        self.check_range(offset, size)?;
        if let Some((dst, write_offset)) = into {
            dst.check_range(write_offset, size)?;
            context.copy_buffer(dst.glo(), self.glo(), size, offset as i64, write_offset as i64);
            return Ok(Vec::new());
        }
        raw::bind_buffer(BIND_TARGET, self.glo());
        let ptr = raw::map_buffer_range(BIND_TARGET, offset as i64, size, gl::MAP_READ_BIT);
        if ptr.is_null() {
            return Err(Error::map_failed("MapBufferRange returned null for a read"));
        }
        // SAFE: GL guarantees `ptr` is valid for `size` bytes until unmapped.
        let bytes = unsafe { std::slice::from_raw_parts(ptr as *const u8, size as usize) }.to_vec();
        raw::unmap_buffer(BIND_TARGET);
        Ok(bytes)
    }

    /// Strided gather: reads `count` chunks of `chunk_size` bytes, `step`
    /// bytes apart, starting at `start`, via one `MapBufferRange` over the
    /// whole buffer.
    pub fn read_chunks(&self, chunk_size: u64, start: u64, step: i64, count: u64) -> Result<Vec<u8>> {
        self.validate_chunked(chunk_size, start, step, count)?;
        raw::bind_buffer(BIND_TARGET, self.glo());
        let ptr = raw::map_buffer_range(BIND_TARGET, 0, self.size(), gl::MAP_READ_BIT);
        if ptr.is_null() {
            return Err(Error::map_failed("MapBufferRange returned null for a chunked read"));
        }
        let mut out = Vec::with_capacity((chunk_size * count) as usize);
        for i in 0..count {
            let chunk_offset = (start as i64 + i as i64 * step) as usize;
            // SAFE: bounds already validated by `validate_chunked`.
            let chunk = unsafe { std::slice::from_raw_parts((ptr as *const u8).add(chunk_offset), chunk_size as usize) };
            out.extend_from_slice(chunk);
        }
        raw::unmap_buffer(BIND_TARGET);
        Ok(out)
    }

    /// Strided scatter, the write-side counterpart of [`Buffer::read_chunks`].
    pub fn write_chunks(&self, chunk_size: u64, start: u64, step: i64, data: &[u8]) -> Result<()> {
        let count = if chunk_size == 0 { 0 } else { data.len() as u64 / chunk_size };
        self.validate_chunked(chunk_size, start, step, count)?;
        raw::bind_buffer(BIND_TARGET, self.glo());
        let ptr = raw::map_buffer_range(BIND_TARGET, 0, self.size(), gl::MAP_WRITE_BIT);
        if ptr.is_null() {
            return Err(Error::map_failed("MapBufferRange returned null for a chunked write"));
        }
        for i in 0..count {
            let chunk_offset = (start as i64 + i as i64 * step) as usize;
            let src = &data[(i * chunk_size) as usize..((i + 1) * chunk_size) as usize];
            // SAFE: bounds already validated; `ptr` is writable for `self.size()` bytes.
            unsafe {
                std::ptr::copy_nonoverlapping(src.as_ptr(), (ptr as *mut u8).add(chunk_offset), chunk_size as usize);
            }
        }
        raw::unmap_buffer(BIND_TARGET);
        Ok(())
    }

    fn validate_chunked(&self, chunk_size: u64, start: u64, step: i64, count: u64) -> Result<()> {
        if chunk_size > step.unsigned_abs() {
            return Err(Error::out_of_range("chunk_size must be <= |step|"));
        }
        if start.checked_add(chunk_size).map_or(true, |end| end > self.size()) {
            return Err(Error::out_of_range("start + chunk_size exceeds buffer size"));
        }
        if count > 0 {
            let last = start as i64 + (count as i64 - 1) * step;
            if last < 0 || (last as u64 + chunk_size) > self.size() {
                return Err(Error::out_of_range("chunked range escapes buffer bounds"));
            }
        }
        Ok(())
    }

    /// Writes zeroes, or a repeating `chunk` pattern, over `[offset,
    /// offset+size)`. `size % chunk.len()` must be zero when `chunk` is given.
    pub fn clear(&self, size: u64, offset: u64, chunk: Option<&[u8]>) -> Result<()> {
        self.check_range(offset, size)?;
        if let Some(chunk) = chunk {
            if chunk.is_empty() || size % chunk.len() as u64 != 0 {
                return Err(Error::invalid_size("size must be a multiple of the clear chunk length"));
            }
        }
        raw::bind_buffer(BIND_TARGET, self.glo());
        let ptr = raw::map_buffer_range(BIND_TARGET, offset as i64, size, gl::MAP_WRITE_BIT);
        if ptr.is_null() {
            return Err(Error::map_failed("MapBufferRange returned null for a clear"));
        }
        match chunk {
            None => unsafe { std::ptr::write_bytes(ptr as *mut u8, 0, size as usize) },
            Some(chunk) => {
                let mut written = 0u64;
                while written < size {
                    // SAFE: loop bound is `size`, validated to be a multiple of `chunk.len()`.
                    unsafe {
                        std::ptr::copy_nonoverlapping(
                            chunk.as_ptr(),
                            (ptr as *mut u8).add(written as usize),
                            chunk.len(),
                        )
                    };
                    written += chunk.len() as u64;
                }
            }
        }
        raw::unmap_buffer(BIND_TARGET);
        Ok(())
    }

    /// Invalidates contents by re-issuing the allocation call, optionally resizing.
    pub fn orphan(&self, size: Option<u64>) -> Result<()> {
        if self.0.immutable {
            return Err(Error::unsupported("orphan() requires mutable (non-immutable-storage) buffers"));
        }
        let new_size = size.unwrap_or_else(|| self.size());
        raw::bind_buffer(BIND_TARGET, self.glo());
        // SAFE: null data pointer, only reserving `new_size` bytes.
        unsafe { raw::buffer_data(BIND_TARGET, new_size, std::ptr::null(), gl::DYNAMIC_DRAW) };
        self.0.size.set(new_size);
        Ok(())
    }

    pub fn bind_to_uniform_block(&self, binding: u32, offset: i64, size: i64) {
        raw::bind_buffer_range(BufferBindingTarget::Uniform, binding, self.glo(), offset, size);
    }

    pub fn bind_to_storage_buffer(&self, binding: u32, offset: i64, size: i64) {
        raw::bind_buffer_range(BufferBindingTarget::ShaderStorage, binding, self.glo(), offset, size);
    }

    pub fn release(&self) {
        let glo = self.0.glo.get();
        if glo.is_none() {
            return;
        }
        raw::delete_buffers(&[glo]);
        self.0.glo.set(BufferName::NONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_inner(size: u64) -> Buffer {
        Buffer(Rc::new(Inner {
            glo: Cell::new(BufferName(1)),
            size: Cell::new(size),
            storage_flags: StorageFlags::empty(),
            immutable: false,
            mapped: Cell::new(false),
        }))
    }

    #[test]
    fn rejects_chunk_size_larger_than_step() {
        let buf = dummy_inner(1024);
        assert!(buf.validate_chunked(8, 0, 4, 4).is_err());
    }

    #[test]
    fn rejects_ranges_that_escape_the_buffer() {
        let buf = dummy_inner(64);
        assert!(buf.validate_chunked(8, 60, 8, 2).is_err());
    }

    #[test]
    fn accepts_a_well_formed_strided_range() {
        let buf = dummy_inner(64);
        assert!(buf.validate_chunked(8, 0, 16, 4).is_ok());
    }
}
