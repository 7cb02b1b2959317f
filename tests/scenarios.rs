mod common;

use common::{data, scratch};
use rcft::parser::parse_table;
use rcft::reader::RawTable;
use rcft::{RcftError, load_context};

#[test]
fn two_objects_two_properties() {
    let path = scratch("scenario-a.rcft", "| | A | B |\n| o1 | x | |\n| o2 | | x |\n");
    let ctx = load_context(&path).expect("parse ok");
    let _ = std::fs::remove_file(&path);
    assert_eq!(ctx.properties(), ["A", "B"]);
    assert_eq!(ctx.objects(), ["o1", "o2"]);
    assert_eq!(ctx.matrix(), [vec![true, false], vec![false, true]]);
}

#[test]
fn missing_resource_names_the_path() {
    let path = data("no-such-table.rcft");
    let err = load_context(&path).unwrap_err();
    assert!(matches!(err, RcftError::ResourceNotFound { .. }));
    assert!(err.to_string().contains("no-such-table.rcft"));
}

#[test]
fn short_row_pads_with_false() {
    let ctx = parse_table(&RawTable::from_text("| | A | B |\n| o3 |")).unwrap();
    assert_eq!(ctx.objects(), ["o3"]);
    assert_eq!(ctx.matrix(), [vec![false, false]]);
}

#[test]
fn markdown_separator_row_is_kept_as_an_object() {
    // known limitation: the separator's name cell is "---", which is not blank
    let ctx = load_context(data("markdown.rcft")).unwrap();
    assert_eq!(ctx.objects(), ["---", "o1"]);
    assert_eq!(ctx.matrix(), [vec![false, false], vec![true, false]]);
}

#[test]
fn shape_holds_for_a_realistic_table() {
    let ctx = load_context(data("transport.rcft")).unwrap();
    assert_eq!(ctx.properties(), ["wheels:int", "seats:int", "depart()", "float()"]);
    // the nameless row is skipped, the blank line ignored
    assert_eq!(ctx.objects(), ["Bus", "Tram", "Ferry", "Bicycle"]);
    assert_eq!(ctx.matrix().len(), ctx.objects().len());
    assert!(ctx.matrix().iter().all(|row| row.len() == ctx.properties().len()));
    assert_eq!(ctx.matrix()[2], vec![false, true, true, true]);
    assert_eq!(ctx.matrix()[3], vec![true, false, false, false]);
}

#[test]
fn reparsing_is_idempotent() {
    let first = load_context(data("transport.rcft")).unwrap();
    let second = load_context(data("transport.rcft")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn marker_cells() {
    let ctx = parse_table(&RawTable::from_text(
        "| | a | b | c | d | e | f |\n| o | X |  x  | yes | | - | x |",
    ))
    .unwrap();
    assert_eq!(ctx.matrix(), [vec![true, true, false, false, false, true]]);
}

#[test]
fn table_without_header() {
    let err = parse_table(&RawTable::from_text("FormalContext Empty\njust text")).unwrap_err();
    assert!(matches!(err, RcftError::HeaderNotFound));
    assert!(matches!(parse_table(&RawTable::default()), Err(RcftError::HeaderNotFound)));
}

#[test]
fn header_only_table_has_no_objects() {
    let ctx = parse_table(&RawTable::from_text("| | A |")).unwrap();
    assert!(ctx.objects().is_empty());
    assert_eq!(ctx.shape(), (0, 1));
}
