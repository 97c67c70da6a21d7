//! Rendering a [`ResultMap`] as indented JSON.

use serde::Serialize;
use std::io::{self, Write};

use crate::evaluate::ResultMap;

const INDENT: &[u8] = b"    ";

/// Render `result` as a JSON object indented by four spaces.
pub fn to_json_string(result: &ResultMap) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    serialize_into(&mut buf, result)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the rendered result followed by a newline.
pub fn write_to<W: Write>(writer: &mut W, result: &ResultMap) -> io::Result<()> {
    serialize_into(&mut *writer, result).map_err(io::Error::from)?;
    writeln!(writer)?;
    writer.flush()
}

/// Print the rendered result to stdout.
pub fn write(result: &ResultMap) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, result)
}

fn serialize_into<W: Write>(writer: W, result: &ResultMap) -> serde_json::Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    result.serialize(&mut serializer)
}
