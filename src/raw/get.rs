//! # State Queries
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_State_Queries>

use gl::types::*;
use std::ffi::CStr;

pub fn get_integer(pname: GLenum) -> i32 {
    let mut value = 0;
    unsafe { gl::GetIntegerv(pname, &mut value) };
    value
}

pub fn get_integer_i(pname: GLenum, index: u32) -> i32 {
    let mut value = 0;
    unsafe { gl::GetIntegeri_v(pname, index, &mut value) };
    value
}

pub fn get_float(pname: GLenum) -> f32 {
    let mut value = 0.0;
    unsafe { gl::GetFloatv(pname, &mut value) };
    value
}

pub fn get_boolean(pname: GLenum) -> bool {
    let mut value: GLboolean = gl::FALSE;
    unsafe { gl::GetBooleanv(pname, &mut value) };
    value == gl::TRUE
}

/// `glGetString` — reads a static, NUL-terminated driver string. Returns an
/// empty string for a null pointer, which happens before a context exists.
pub fn get_string(pname: GLenum) -> String {
    // SAFE: the returned pointer is owned by the driver and valid for the
    // context's lifetime; we copy it immediately and never retain it.
    unsafe {
        let ptr = gl::GetString(pname);
        if ptr.is_null() {
            return String::new();
        }
        CStr::from_ptr(ptr as *const i8).to_string_lossy().into_owned()
    }
}

/// `glGetStringi` — one indexed extension name out of `GL_NUM_EXTENSIONS`.
pub fn get_string_i(pname: GLenum, index: u32) -> String {
    unsafe {
        let ptr = gl::GetStringi(pname, index);
        if ptr.is_null() {
            return String::new();
        }
        CStr::from_ptr(ptr as *const i8).to_string_lossy().into_owned()
    }
}

/// Enumerates every extension string the driver reports via `GL_EXTENSIONS`/`GL_NUM_EXTENSIONS`.
pub fn get_extensions() -> Vec<String> {
    let count = get_integer(gl::NUM_EXTENSIONS).max(0) as u32;
    (0..count).map(|i| get_string_i(gl::EXTENSIONS, i)).collect()
}

/// Queried GL major/minor; falls back to parsing `GL_VERSION` when the
/// integer queries report zero (pre-3.0 drivers, per the construction spec).
pub fn get_version() -> (i32, i32) {
    let major = get_integer(gl::MAJOR_VERSION);
    let minor = get_integer(gl::MINOR_VERSION);
    if major != 0 {
        return (major, minor);
    }
    parse_version_string(&get_string(gl::VERSION)).unwrap_or((3, 3))
}

fn parse_version_string(version: &str) -> Option<(i32, i32)> {
    let mut parts = version.split(|c: char| !c.is_ascii_digit()).filter(|s| !s.is_empty());
    let major: i32 = parts.next()?.parse().ok()?;
    let minor: i32 = parts.next()?.parse().ok()?;
    Some((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_version_prefix() {
        assert_eq!(parse_version_string("3.3.0 NVIDIA 535.104"), Some((3, 3)));
        assert_eq!(parse_version_string("4.60"), Some((4, 60)));
    }

    #[test]
    fn rejects_unparsable_strings() {
        assert_eq!(parse_version_string(""), None);
        assert_eq!(parse_version_string("OpenGL"), None);
    }
}
