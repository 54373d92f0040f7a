//! Text output for programs and the addressing table
//!
//! Rust output matches the layout of `sim::programs` so generated constants
//! can be pasted in unchanged. C output follows the classic bitmap dumper:
//! `const byte name[N] = {` with eight bytes per line.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::sim::cell::CellTable;

use super::encoder::{EncodeStats, Encoded};

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Rust,
    C,
    Json,
}

#[derive(Serialize)]
struct ProgramDoc<'a> {
    name: &'a str,
    bytes: &'a [u8],
    stats: &'a EncodeStats,
}

#[derive(Serialize)]
struct TableDoc<'a> {
    locations: &'a [u16],
    masks: &'a [u8],
}

/// Format an encoded program as a named constant
pub fn program(
    format: Format,
    name: &str,
    doc: &str,
    encoded: &Encoded,
) -> Result<String, serde_json::Error> {
    match format {
        Format::Rust => Ok(rust_array(&name.to_uppercase(), doc, "u8", &encoded.bytes, 16)),
        Format::C => Ok(c_array(&name.to_lowercase(), "byte", &encoded.bytes, 8)),
        Format::Json => serde_json::to_string_pretty(&ProgramDoc {
            name,
            bytes: &encoded.bytes,
            stats: &encoded.stats,
        })
        .map(|json| json + "\n"),
    }
}

/// Format the addressing table as two parallel arrays
pub fn table(format: Format, table: &CellTable) -> Result<String, serde_json::Error> {
    match format {
        Format::Rust => {
            let mut out = rust_array(
                "CELL_LOCATIONS",
                "Display byte offset of every field cell",
                "u16",
                table.locations(),
                8,
            );
            out.push('\n');
            out += &rust_array(
                "CELL_MASKS",
                "Pixel bit of every field cell",
                "u8",
                table.masks(),
                16,
            );
            Ok(out)
        }
        Format::C => {
            let mut out = c_array("cell_locations", "word", table.locations(), 8);
            out += &c_array("cell_masks", "byte", table.masks(), 8);
            Ok(out)
        }
        Format::Json => serde_json::to_string_pretty(&TableDoc {
            locations: table.locations(),
            masks: table.masks(),
        })
        .map(|json| json + "\n"),
    }
}

/// Hex literal sized to the element type
trait HexLiteral: Copy {
    fn hex(self) -> String;
}

impl HexLiteral for u8 {
    fn hex(self) -> String {
        format!("0x{self:02x}")
    }
}

impl HexLiteral for u16 {
    fn hex(self) -> String {
        format!("0x{self:04x}")
    }
}

fn rust_array<T: HexLiteral>(
    name: &str,
    doc: &str,
    ty: &str,
    values: &[T],
    per_line: usize,
) -> String {
    let mut out = String::new();
    if !doc.is_empty() {
        let _ = writeln!(out, "/// {doc}");
    }
    let _ = writeln!(out, "pub const {name}: [{ty}; {}] = [", values.len());
    for chunk in values.chunks(per_line) {
        let line: Vec<String> = chunk.iter().map(|v| format!("{},", v.hex())).collect();
        let _ = writeln!(out, "    {}", line.join(" "));
    }
    out.push_str("];\n");
    out
}

fn c_array<T: HexLiteral>(name: &str, ty: &str, values: &[T], per_line: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "const {ty} {name}[{}] = {{", values.len());
    for chunk in values.chunks(per_line) {
        for v in chunk {
            let _ = write!(out, " {},", v.hex());
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoder::encode;
    use crate::codec::matrix::ColumnMatrix;
    use crate::codec::patterns::rotor;
    use crate::consts::FIELD_CELLS;

    fn blink() -> Encoded {
        let matrix = ColumnMatrix::from_fn(5, |x, y| x == 5 && (3..5).contains(&y));
        encode(&matrix).expect("blink encodes")
    }

    #[test]
    fn test_rust_output_matches_builtin_layout() {
        let encoded = encode(&rotor(4, 4, 64)).expect("rotor encodes");
        let text = program(Format::Rust, "rotor", "", &encoded).expect("formats");
        assert!(text.starts_with("pub const ROTOR: [u8; 339] = [\n"));

        let source = include_str!("../sim/programs.rs");
        assert!(source.contains(&text), "generated ROTOR differs from sim::programs");
    }

    #[test]
    fn test_c_output() {
        let text = program(Format::C, "Blink", "", &blink()).expect("formats");
        assert_eq!(
            text,
            "const byte blink[9] = {\n 0x00, 0x02, 0x01, 0x05, 0x01, 0x01, 0x05, 0x00,\n 0x00,\n};\n"
        );
    }

    #[test]
    fn test_json_output() {
        let text = program(Format::Json, "blink", "", &blink()).expect("formats");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["name"], "blink");
        assert_eq!(value["bytes"].as_array().map(|a| a.len()), Some(9));
        assert_eq!(value["stats"]["rows"], 5);
    }

    #[test]
    fn test_table_arrays() {
        let cells = CellTable::new();
        let text = table(Format::Rust, &cells).expect("formats");
        assert!(text.contains(&format!("pub const CELL_LOCATIONS: [u16; {FIELD_CELLS}] = [")));
        assert!(text.contains(&format!("pub const CELL_MASKS: [u8; {FIELD_CELLS}] = [")));

        let text = table(Format::C, &cells).expect("formats");
        assert!(text.starts_with(&format!("const word cell_locations[{FIELD_CELLS}] = {{\n")));
        // Every value line plus header and footer for both arrays
        assert_eq!(text.lines().count(), 2 * (FIELD_CELLS as usize / 8 + 2));
    }
}
