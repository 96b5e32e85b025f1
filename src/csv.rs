// src/csv.rs
//
// Thin helpers over the `csv` crate. Every stage reads through `Table` so
// header lookups are trim+lowercase, regardless of how the file was written.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::core::sanitize::normalize_header;
use crate::error::{Error, Result};

/* ---------------- Reading ---------------- */

/// A headered file with normalised header names.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl Table {
    /// Column index by (normalised) name.
    pub fn col(&self, name: &str) -> Option<usize> {
        let want = normalize_header(name);
        self.headers.iter().position(|h| *h == want)
    }

    /// First of several accepted names.
    pub fn col_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.col(n))
    }

    pub fn require(&self, name: &str) -> Result<usize> {
        self.col(name).ok_or_else(|| Error::MissingColumn(s!(name)))
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Cell by column index, `""` when the row is short.
#[inline]
pub fn cell(row: &StringRecord, col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).unwrap_or("")
}

fn open(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    Ok(File::open(path)?)
}

pub fn read_table(path: &Path, delim: u8) -> Result<Table> {
    read_table_from(open(path)?, delim)
}

pub fn read_table_from<R: Read>(rdr: R, delim: u8) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let headers = rdr.headers()?.iter().map(normalize_header).collect();
    let rows = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Table { headers, rows })
}

pub fn read_headerless(path: &Path, delim: u8) -> Result<Vec<StringRecord>> {
    read_headerless_from(open(path)?, delim)
}

pub fn read_headerless_from<R: Read>(rdr: R, delim: u8) -> Result<Vec<StringRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let rows = rdr
        .records()
        .filter(|r| match r {
            // skip fully blank lines
            Ok(rec) => !(rec.len() == 1 && rec.get(0).map_or(true, str::is_empty)),
            Err(_) => true,
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/* ---------------- Writing ---------------- */

/// Write header + rows. `\n` line endings, quoting only where needed.
pub fn write_rows<W: Write, H: AsRef<str>>(w: W, delim: u8, headers: &[H], rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    wtr.write_record(headers.iter().map(|h| h.as_ref()))?;
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create/truncate `path` (parent dirs included) and write the table.
pub fn write_table<H: AsRef<str>>(path: &Path, delim: u8, headers: &[H], rows: &[Vec<String>]) -> Result<()> {
    crate::file::ensure_parent(path)?;
    let file = File::create(path)?;
    write_rows(std::io::BufWriter::new(file), delim, headers, rows)
}

/// Same as `write_rows`, into a String (copy to clipboard, tests).
pub fn rows_to_string<H: AsRef<str>>(delim: u8, headers: &[H], rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_rows(&mut buf, delim, headers, rows);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
