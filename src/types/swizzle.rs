//! Swizzle string parsing: 1-4 characters from `{r,g,b,a,0,1}` map to
//! `TEXTURE_SWIZZLE_R..A`. Missing trailing channels are left unaltered.

use crate::error::Error;
use gl::types::GLenum;

/// One resolved swizzle source per channel, already in `Option<GLenum>`
/// form so the texture layer can skip channels the string didn't mention.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Swizzle {
    pub channels: [Option<GLenum>; 4],
}

fn source(c: char) -> Option<GLenum> {
    match c.to_ascii_lowercase() {
        'r' => Some(gl::RED),
        'g' => Some(gl::GREEN),
        'b' => Some(gl::BLUE),
        'a' => Some(gl::ALPHA),
        '0' => Some(gl::ZERO),
        '1' => Some(gl::ONE),
        _ => None,
    }
}

/// Parses a swizzle string such as `"rgba"`, `"bgr"`, or `"r001"`.
pub fn parse_swizzle(s: &str) -> Result<Swizzle, Error> {
    if s.is_empty() || s.chars().count() > 4 {
        return Err(Error::invalid_argument(format!(
            "swizzle string must be 1-4 characters, got `{s}`"
        )));
    }
    let mut out = Swizzle::default();
    for (i, c) in s.chars().enumerate() {
        out.channels[i] = Some(source(c).ok_or_else(|| {
            Error::invalid_argument(format!("swizzle character `{c}` is not one of r,g,b,a,0,1"))
        })?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_four_channel_string() {
        let sw = parse_swizzle("rgba").unwrap();
        assert_eq!(sw.channels, [Some(gl::RED), Some(gl::GREEN), Some(gl::BLUE), Some(gl::ALPHA)]);
    }

    #[test]
    fn leaves_trailing_channels_unset() {
        let sw = parse_swizzle("rg").unwrap();
        assert_eq!(sw.channels[0], Some(gl::RED));
        assert_eq!(sw.channels[1], Some(gl::GREEN));
        assert_eq!(sw.channels[2], None);
        assert_eq!(sw.channels[3], None);
    }

    #[test]
    fn accepts_constant_zero_one_sources() {
        let sw = parse_swizzle("r001").unwrap();
        assert_eq!(sw.channels[1], Some(gl::ZERO));
        assert_eq!(sw.channels[2], Some(gl::ZERO));
        assert_eq!(sw.channels[3], Some(gl::ONE));
    }

    #[test]
    fn rejects_unknown_characters_and_bad_length() {
        assert!(parse_swizzle("").is_err());
        assert!(parse_swizzle("rgbaa").is_err());
        assert!(parse_swizzle("rx").is_err());
    }
}
