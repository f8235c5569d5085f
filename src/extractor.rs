//! Class body extraction by balanced-delimiter scanning
//!
//! Locates the first type declaration in a source file and extracts its full
//! body by counting `{`/`}` nesting. This is purely lexical: no grammar is
//! parsed, and source with unbalanced or absent braces is rejected outright.

use anyhow::{bail, Context};

/// Marker that opens a C# class declaration.
pub const CLASS_MARKER: &str = "public class";

/// Extract the first complete class body starting at `start_marker`.
///
/// Returns the substring from the marker (inclusive) through the brace that
/// closes its outermost block (inclusive). The scan ends the instant the
/// brace depth returns to zero after having been positive.
///
/// # Errors
///
/// Fails if the marker is absent, if a close brace appears before any open
/// brace, or if the text ends before the block is closed.
pub fn extract_class_body(source: &str, start_marker: &str) -> anyhow::Result<String> {
    let start = source
        .find(start_marker)
        .with_context(|| format!("declaration not found: {start_marker}"))?;

    let mut depth = 0usize;
    for (offset, ch) in source[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    bail!("unbalanced delimiters: close brace before any open brace");
                }
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Ok(source[start..end].to_string());
                }
            }
            _ => {}
        }
    }
    bail!("unbalanced delimiters: declaration block never closes")
}

/// Rebuild the extracted class under a new name.
///
/// The declaration header is replaced wholesale; the body from the first `{`
/// onward is carried over unchanged. This lets one model definition produce
/// several differently-named data-transfer shapes.
pub fn rename_declaration(source: &str, new_name: &str) -> anyhow::Result<String> {
    let body = extract_class_body(source, CLASS_MARKER)?;
    let brace = body
        .find('{')
        .context("declaration has no opening brace")?;
    Ok(format!("{CLASS_MARKER} {new_name}\n{}", &body[brace..]))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const MODEL: &str = "using System;\n\nnamespace DOMAIN.Model;\npublic class User\n{\n    public int Id { get; set; }\n    public string Name { get; set; }\n}\n// trailing comment\n";

    #[test]
    fn extracts_from_marker_through_closing_brace() {
        let body = extract_class_body(MODEL, CLASS_MARKER).unwrap();
        assert!(body.starts_with("public class User"));
        assert!(body.ends_with('}'));
        assert!(!body.contains("trailing comment"));
        // nested property braces stay balanced inside the span
        let opens = body.matches('{').count();
        let closes = body.matches('}').count();
        assert_eq!(opens, closes);
    }

    #[test]
    fn extracted_span_is_shorter_than_input() {
        let body = extract_class_body(MODEL, CLASS_MARKER).unwrap();
        assert!(body.len() < MODEL.len());
    }

    #[test]
    fn missing_declaration_is_an_error() {
        let err = extract_class_body("namespace X;\nstruct Y {}", CLASS_MARKER).unwrap_err();
        assert!(err.to_string().contains("declaration not found"));
    }

    #[test]
    fn unclosed_block_is_an_error() {
        let err = extract_class_body("public class User {\n  public int Id;", CLASS_MARKER)
            .unwrap_err();
        assert!(err.to_string().contains("unbalanced"));
    }

    #[test]
    fn stray_close_brace_is_an_error() {
        let err = extract_class_body("public class User }\n{", CLASS_MARKER).unwrap_err();
        assert!(err.to_string().contains("unbalanced"));
    }

    #[test]
    fn rename_keeps_the_body() {
        let renamed = rename_declaration(MODEL, "GetUserDto").unwrap();
        assert!(renamed.starts_with("public class GetUserDto\n{"));
        assert!(renamed.contains("public int Id { get; set; }"));
        assert!(renamed.ends_with('}'));
    }

    #[test]
    fn rename_is_idempotent_on_the_header() {
        let once = rename_declaration(MODEL, "UserDto").unwrap();
        let twice = rename_declaration(&once, "UserDto").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn single_line_class_round_trips() {
        let source = "public class User { public int Id; }";
        let renamed = rename_declaration(source, "UserDto").unwrap();
        assert_eq!(renamed, "public class UserDto\n{ public int Id; }");
    }
}
