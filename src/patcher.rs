//! Marked-region patching for injection-list files
//!
//! An injection list is an ordinary source file carrying a named region
//! (`#region NAME` … `#endregion`). Patching inserts one placeholder line at
//! the end of the region, indented to match the surrounding code, and leaves
//! every other byte of the file untouched. The whole rewrite happens in
//! memory.
//!
//! Indentation is inferred by counting `{` characters from the start of the
//! file up to the region, one indent unit each. That is a convention of the
//! target template style (each block opened exactly once, on its own line,
//! before the region), not a general-purpose formatter.

use anyhow::Context;

/// Generic marker closing any named region.
pub const REGION_END: &str = "#endregion";

/// Insert `placeholder` as a new line at the end of the named region.
///
/// The placeholder is deliberately not the final wiring line: callers
/// string-replace it afterwards, so a line containing braces or generics
/// syntax never reaches the depth counter.
///
/// # Errors
///
/// Fails if the start marker is absent, or if no end marker follows it.
pub fn insert_into_region(
    text: &str,
    start_marker: &str,
    end_marker: &str,
    placeholder: &str,
    indent_unit: &str,
) -> anyhow::Result<String> {
    let start = text
        .find(start_marker)
        .with_context(|| format!("region start marker not found: {start_marker}"))?;
    let end = text[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .with_context(|| format!("region end marker not found: {end_marker}"))?;

    // One indent unit per open brace preceding the region.
    let depth = text[..start].matches('{').count();
    let indent = indent_unit.repeat(depth);

    let mut patched =
        String::with_capacity(text.len() + placeholder.len() + 2 * indent.len() + 1);
    patched.push_str(&text[..end]);
    patched.push_str(&indent);
    patched.push_str(placeholder);
    patched.push('\n');
    patched.push_str(&indent);
    patched.push_str(&text[end..]);
    Ok(patched)
}
