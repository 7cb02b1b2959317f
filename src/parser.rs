//! RCFT table parsing: header detection, row parsing and context assembly.
//!
//! An RCFT table looks like
//! ```text
//! FormalContext Vehicles
//! | | wheels | engine |
//! | car  | X | X |
//! | bike | X |   |
//! ```
//! The first line that starts with `|` and names at least one property is the
//! header. Every later `|` line whose second cell is non-empty is an object
//! row; its remaining cells, minus the last one, are aligned with the header
//! and a cell reading `x` (any case) marks the property as present.

use std::collections::HashSet;
use std::hash::BuildHasherDefault;

use lazy_static::lazy_static;
use pest::Parser;
use pest_derive::Parser;
use regex::Regex;
use seahash::SeaHasher;
use tracing::{debug, info, warn};

use crate::context::{BooleanContext, ObjectRow};
use crate::error::{NameKind, RcftError, Result};
use crate::reader::RawTable;

pub const DELIMITER: char = '|';
pub const MARKER: &str = "x";

type NameHasher = BuildHasherDefault<SeaHasher>;

lazy_static! {
    // markdown style column rules such as --- or :---:
    static ref SEPARATOR: Regex = Regex::new(r"^:?-{3,}:?$").unwrap();
}

#[derive(Parser)]
#[grammar = "rcft.pest"]
struct RcftParser;

/// Knobs for the parts of the format that are a matter of policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail with [`RcftError::DuplicateName`] instead of warning when an
    /// object or property name occurs more than once.
    pub reject_duplicates: bool,
}

/// The detected header: where it is and which properties it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Position among the kept (non-blank) lines of the table.
    pub index: usize,
    /// 1-based line number in the resource.
    pub line: usize,
    pub properties: Vec<String>,
}

/// Splits a line on the delimiter, keeping empty cells. `line_no` is the
/// 1-based line number in the resource and is only used for diagnostics.
pub fn split_cells(line: &str, line_no: usize) -> Result<Vec<&str>> {
    let row = RcftParser::parse(Rule::row, line)
        .map_err(|e| RcftError::Parse {
            message: e.to_string(),
            line: line_no,
        })?
        .next()
        .ok_or_else(|| RcftError::Parse {
            message: "empty parse".into(),
            line: line_no,
        })?;
    Ok(row
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::cell)
        .map(|pair| pair.as_str())
        .collect())
}

/// Finds the first delimiter-led line that names at least one property.
///
/// No check is made that this line really is a header and not an object row;
/// whatever comes first wins.
pub fn detect_header(table: &RawTable) -> Result<Header> {
    for (index, line) in table.lines().iter().enumerate() {
        if !line.starts_with(DELIMITER) {
            continue;
        }
        let line_no = table.line_number(index);
        let properties: Vec<String> = split_cells(line, line_no)?
            .into_iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(String::from)
            .collect();
        if !properties.is_empty() {
            debug!(line = line_no, "header found");
            return Ok(Header {
                index,
                line: line_no,
                properties,
            });
        }
    }
    Err(RcftError::HeaderNotFound)
}

/// True when a value cell marks the property as present.
pub fn is_marked(cell: &str) -> bool {
    cell.trim().to_lowercase() == MARKER
}

/// Parses one data line against `property_count` columns.
///
/// Returns `None` for lines that carry no object: lines not led by the
/// delimiter and lines whose name cell is blank. Short rows are padded with
/// `false`, cells past the last property are ignored and the final cell is
/// always dropped since a trailing delimiter leaves an empty one behind.
pub fn parse_row(line: &str, line_no: usize, property_count: usize) -> Result<Option<ObjectRow>> {
    if !line.starts_with(DELIMITER) {
        return Ok(None);
    }
    let cells = split_cells(line, line_no)?;
    if cells.len() < 2 {
        return Ok(None);
    }
    let name = cells[1].trim();
    if name.is_empty() {
        return Ok(None);
    }
    let values = cells.get(2..cells.len() - 1).unwrap_or(&[]);
    let incidence = (0..property_count)
        .map(|i| values.get(i).is_some_and(|cell| is_marked(cell)))
        .collect();
    Ok(Some(ObjectRow {
        name: name.to_string(),
        incidence,
    }))
}

/// Parses every object row after the header.
pub fn parse_rows(table: &RawTable, header: &Header) -> Result<Vec<ObjectRow>> {
    let property_count = header.properties.len();
    let mut rows = Vec::new();
    for (index, line) in table.lines().iter().enumerate().skip(header.index + 1) {
        let line_no = table.line_number(index);
        if let Some(row) = parse_row(line, line_no, property_count)? {
            if SEPARATOR.is_match(&row.name) {
                warn!(line = line_no, name = %row.name, "separator row kept as an object");
            }
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Returns every name that occurs more than once, in order of second
/// occurrence.
fn duplicates<'a, I>(names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::<&str, NameHasher>::default();
    names.into_iter().filter(|name| !seen.insert(*name)).collect()
}

fn check_duplicates<'a, I>(kind: NameKind, names: I, options: &ParseOptions) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for name in duplicates(names) {
        if options.reject_duplicates {
            return Err(RcftError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
        warn!(%kind, %name, "duplicate name");
    }
    Ok(())
}

pub fn parse_table(table: &RawTable) -> Result<BooleanContext> {
    parse_table_with(table, &ParseOptions::default())
}

/// Header detection, row parsing and assembly in one go.
pub fn parse_table_with(table: &RawTable, options: &ParseOptions) -> Result<BooleanContext> {
    let header = detect_header(table)?;
    info!(count = header.properties.len(), properties = ?header.properties, "properties found");
    check_duplicates(NameKind::Property, header.properties.iter().map(String::as_str), options)?;

    let rows = parse_rows(table, &header)?;
    check_duplicates(NameKind::Object, rows.iter().map(|row| row.name.as_str()), options)?;

    let context = BooleanContext::from_rows(header.properties, rows)?;
    info!(count = context.objects().len(), objects = ?context.objects(), "objects found");
    Ok(context)
}
