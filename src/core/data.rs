//! Plain-text loaders feeding the command line: numeric series and
//! delimited tables.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
};

use thiserror::Error;

// --- Public Row Structs ---

/// Headers plus body cells of a delimited text table.  Empty fields are
/// absent cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseInputError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sample '{0}'")]
    BadFloat(String),
    #[error("no header row found")]
    MissingHeader,
}

impl ParseInputError {
    fn io(line: usize, e: std::io::Error) -> Self {
        Self {
            line,
            kind: ParseErrorKind::Io(e),
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 MINUS SIGN to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseInputError> {
    let bad = || ParseInputError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Turn the two-character escape `\n` into a real line break.
#[inline]
fn unescape_cell(field: &str) -> String {
    field.replace("\\n", "\n")
}

fn open(path: &str) -> Result<Box<dyn Read>, ParseInputError> {
    if path == "-" {
        Ok(Box::new(std::io::stdin()))
    } else {
        Ok(Box::new(
            File::open(path).map_err(|e| ParseInputError::io(0, e))?,
        ))
    }
}

// --- Series ---

/// Samples separated by commas and/or whitespace.  Blank lines and lines
/// starting with `#` are skipped.
pub fn read_series<R: Read>(src: R) -> Result<Vec<f64>, ParseInputError> {
    let mut rdr = BufReader::new(src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseInputError::io(line_no, e))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        for field in line.split(|&b| b == b',' || b.is_ascii_whitespace()) {
            if field.is_empty() {
                continue;
            }
            series.push(parse_f64(field, line_no)?);
        }
    }
    Ok(series)
}

pub fn read_series_from_path(path: &str) -> Result<Vec<f64>, ParseInputError> {
    read_series(open(path)?)
}

// --- Tables ---

/// First meaningful line is the header row, every following one a body row.
pub fn read_table<R: Read>(src: R, delimiter: char) -> Result<TableData, ParseInputError> {
    let mut headers = None;
    let mut rows = Vec::new();

    for (idx, line) in BufReader::new(src).lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| ParseInputError::io(line_no, e))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = line.split(delimiter).map(str::trim);
        if headers.is_none() {
            headers = Some(fields.map(unescape_cell).collect());
        } else {
            rows.push(
                fields
                    .map(|f| (!f.is_empty()).then(|| unescape_cell(f)))
                    .collect(),
            );
        }
    }

    let headers = headers.ok_or(ParseInputError {
        line: 0,
        kind: ParseErrorKind::MissingHeader,
    })?;
    Ok(TableData { headers, rows })
}

pub fn read_table_from_path(path: &str, delimiter: char) -> Result<TableData, ParseInputError> {
    read_table(open(path)?, delimiter)
}
