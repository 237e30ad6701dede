//! Plain-text monochrome bitmap (`P1`) output.
//!
//! One line is written per x with `height` space-separated `0`/`1` cells,
//! each followed by a space.

use crate::error::{AntError, Result};
use crate::grid::{Bitmap, Position};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub fn write_pbm<W: Write>(bitmap: &Bitmap, mut out: W) -> Result<()> {
    writeln!(out, "P1")?;
    writeln!(out, "{} {}", bitmap.width(), bitmap.height())?;
    for column in bitmap.columns() {
        for &cell in column {
            write!(out, "{} ", if cell { '1' } else { '0' })?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes `bitmap` to it.
pub fn save_pbm(bitmap: &Bitmap, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_pbm(bitmap, BufWriter::new(file))
}

/// Parses a `P1` bitmap. Cells may be separated by any whitespace or none.
pub fn read_pbm<R: Read>(mut input: R) -> Result<Bitmap> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    match tokens.next() {
        Some("P1") => {}
        Some(tag) => return Err(AntError::Pbm(format!("expected tag P1, found '{}'", tag))),
        None => return Err(AntError::Pbm("empty input".to_string())),
    }
    let width = parse_dimension(tokens.next(), "width")?;
    let height = parse_dimension(tokens.next(), "height")?;

    let expected = width
        .checked_mul(height)
        .ok_or_else(|| AntError::Pbm(format!("{}x{} cells overflow", width, height)))?;

    // Count the cells before allocating so a lying header cannot size the bitmap.
    let mut cells = Vec::new();
    for ch in tokens.flat_map(str::chars) {
        let visited = match ch {
            '0' => false,
            '1' => true,
            other => return Err(AntError::Pbm(format!("unexpected character '{}'", other))),
        };
        if cells.len() >= expected {
            return Err(AntError::Pbm(format!("more than {} cells", expected)));
        }
        cells.push(visited);
    }
    if cells.len() != expected {
        return Err(AntError::Pbm(format!(
            "expected {} cells, found {}",
            expected,
            cells.len()
        )));
    }

    let mut bitmap = Bitmap::new(width, height)?;
    for (i, _) in cells.iter().enumerate().filter(|&(_, &visited)| visited) {
        // Dimensions were range-checked in parse_dimension.
        bitmap.set(Position::new((i / height) as i32, (i % height) as i32));
    }
    Ok(bitmap)
}

pub fn load_pbm(path: &Path) -> Result<Bitmap> {
    read_pbm(File::open(path)?)
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| AntError::Pbm(format!("missing {}", what)))?;
    let value: i32 = token
        .parse()
        .map_err(|_| AntError::Pbm(format!("invalid {} '{}'", what, token)))?;
    usize::try_from(value).map_err(|_| AntError::Pbm(format!("negative {} {}", what, value)))
}
