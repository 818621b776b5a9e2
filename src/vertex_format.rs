//! Minimal internal parser for the vertex-binding format string
//! (`"3f 2f/v 1i/i"`). This is not a general-purpose interleaved-layout
//! grammar; it covers exactly the whitespace-separated
//! `count·element_size[/i|/v]` token shape [`crate::vertex_array::VertexArray`]
//! needs to turn a buffer binding into attribute pointers.

use crate::error::Error;
use gl::types::GLenum;

/// One parsed token: how many elements of what GL type, normalized or not,
/// and whether its attribute advances per-vertex or per-instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FormatNode {
    pub count: u32,
    pub element_size: u32,
    pub gl_type: GLenum,
    pub normalize: bool,
    pub shape: crate::types::Shape,
    pub per_instance: bool,
    /// Byte offset of this attribute within one vertex, counting any `x`
    /// padding tokens that came before it.
    pub offset: u32,
}

/// Parsed format string: nodes in declaration order, total byte stride, and
/// the (single, shared) instance divisor implied by any `/i` token.
#[derive(Debug, Clone, Default)]
pub struct ParsedFormat {
    pub nodes: Vec<FormatNode>,
    pub stride: u32,
    pub divisor: u32,
}

fn type_for_char(c: char) -> Option<(GLenum, u32, crate::types::Shape, bool)> {
    use crate::types::Shape;
    match c {
        'f' => Some((gl::FLOAT, 4, Shape::F, false)),
        'u' => Some((gl::UNSIGNED_BYTE, 1, Shape::F, true)), // normalized ubyte color channel
        'i' => Some((gl::INT, 4, Shape::I, false)),
        'I' => Some((gl::UNSIGNED_INT, 4, Shape::U, false)),
        'd' => Some((gl::DOUBLE, 8, Shape::D, false)),
        'h' => Some((gl::HALF_FLOAT, 2, Shape::F, false)),
        'B' => Some((gl::UNSIGNED_BYTE, 1, Shape::U, false)),
        'x' => None, // padding byte, handled by the caller
        _ => None,
    }
}

/// Parses a single token such as `"3f"`, `"2f/v"`, `"1i/i"`, `"4x"` (padding).
fn parse_token(token: &str) -> Result<(Option<FormatNode>, u32), Error> {
    let (body, per_instance) = if let Some(stripped) = token.strip_suffix("/i") {
        (stripped, true)
    } else if let Some(stripped) = token.strip_suffix("/v") {
        (stripped, false)
    } else {
        (token, false)
    };

    let split_at = body
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| Error::invalid_argument(format!("format token `{token}` has no type character")))?;
    let (count_str, type_str) = body.split_at(split_at);
    let count: u32 = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse()
            .map_err(|_| Error::invalid_argument(format!("format token `{token}` has an invalid count")))?
    };
    if type_str.len() != 1 {
        return Err(Error::invalid_argument(format!(
            "format token `{token}` must have exactly one type character"
        )));
    }
    let c = type_str.chars().next().unwrap();
    if c == 'x' {
        return Ok((None, count));
    }
    let (gl_type, element_size, shape, normalize) = type_for_char(c)
        .ok_or_else(|| Error::invalid_argument(format!("format token `{token}` has an unknown type `{c}`")))?;
    Ok((
        Some(FormatNode {
            count,
            element_size,
            gl_type,
            normalize,
            shape,
            per_instance,
            offset: 0, // stamped with the running offset in `parse_format`
        }),
        count * element_size,
    ))
}

/// Parses a whole format string, e.g. `"3f 2f/v 1i/i"`.
pub fn parse_format(format: &str) -> Result<ParsedFormat, Error> {
    let mut nodes = Vec::new();
    let mut stride = 0u32;
    let mut divisor = 0u32;
    for token in format.split_whitespace() {
        let (node, size) = parse_token(token)?;
        if let Some(mut node) = node {
            node.offset = stride;
            if node.per_instance {
                divisor = 1;
            }
            nodes.push(node);
        }
        stride += size;
    }
    Ok(ParsedFormat { nodes, stride, divisor })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_per_vertex_and_per_instance_tokens() {
        let parsed = parse_format("3f 2f/v 1i/i").unwrap();
        assert_eq!(parsed.nodes.len(), 3);
        assert_eq!(parsed.nodes[0].count, 3);
        assert!(!parsed.nodes[0].per_instance);
        assert!(parsed.nodes[2].per_instance);
        assert_eq!(parsed.divisor, 1);
    }

    #[test]
    fn stride_sums_every_token_including_padding() {
        let parsed = parse_format("3f 4x 1i").unwrap();
        assert_eq!(parsed.stride, 3 * 4 + 4 + 1 * 4);
        assert_eq!(parsed.nodes.len(), 2);
    }

    #[test]
    fn padding_tokens_shift_the_offset_of_later_attributes() {
        let parsed = parse_format("3f 4x 2f").unwrap();
        assert_eq!(parsed.nodes[0].offset, 0);
        assert_eq!(parsed.nodes[1].offset, 3 * 4 + 4);
    }

    #[test]
    fn divisor_is_one_whenever_any_instanced_token_present() {
        let parsed = parse_format("3f/i 2f/v").unwrap();
        assert_eq!(parsed.divisor, 1);
    }

    #[test]
    fn rejects_empty_and_malformed_tokens() {
        assert!(parse_format("3").is_err());
        assert!(parse_format("3q").is_err());
    }
}
