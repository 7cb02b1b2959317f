//! Serialises a context back into RCFT text.
//!
//! The layout is the one model extractors produce: a `FormalContext` title,
//! a header whose corner cell is blank, then one row per object with ` X `
//! for a present property and an empty cell otherwise. Reading the output
//! back gives the same context, provided names are non-empty, carry no
//! delimiter and there is at least one property (a header with no property
//! is not recognised as one).

use std::fmt::Write;

use crate::context::BooleanContext;

pub const TITLE_KEYWORD: &str = "FormalContext";

pub fn write_rcft(title: &str, context: &BooleanContext) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{TITLE_KEYWORD} {title}");
    out.push_str("| |");
    for property in context.properties() {
        let _ = write!(out, " {property} |");
    }
    out.push('\n');
    for (object, incidence) in context.rows() {
        let _ = write!(out, "| {object} |");
        for present in incidence {
            out.push_str(if *present { " X |" } else { " |" });
        }
        out.push('\n');
    }
    out
}
