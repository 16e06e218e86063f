//! End-to-end CRUD flow over an in-memory store, checking the rendered
//! fragments the way a browser would see them.

use sheetform::handlers::{delete_data, insert_data, select_data, update_data};
use sheetform::render::render_outcome;
use sheetform::store::SheetStore;

#[test]
fn insert_update_delete_select_round_trip() {
    let mut store = SheetStore::in_memory();

    let inserted = render_outcome(&insert_data(&mut store, r#"["x","1","2"]"#).unwrap());
    assert!(inserted.contains("The data were inserted into the sheet:"));
    assert!(inserted.contains("<td>x</td><td>1</td><td>2</td>"));

    let updated = render_outcome(&update_data(&mut store, r#"["x","3","4"]"#).unwrap());
    assert!(updated.contains("The data were updated:"));
    assert!(updated.contains("<td>x</td><td>3</td><td>4</td>"));

    let deleted = render_outcome(&delete_data(&mut store, "x").unwrap());
    assert!(deleted.contains("The data were deleted from the sheet:"));
    assert!(deleted.contains("<td>x</td><td>3</td><td>4</td>"));

    let missing = render_outcome(&select_data(&mut store, "x").unwrap());
    assert_eq!(missing, "<p>The data were not found in the sheet.</p>");
}

#[test]
fn validation_messages_reach_the_fragment_unchanged() {
    let mut store = SheetStore::in_memory();

    let empty = render_outcome(&insert_data(&mut store, r#"["","b","c"]"#).unwrap());
    assert_eq!(empty, "<p>A may not be empty.</p>");

    insert_data(&mut store, r#"["k","b","c"]"#).unwrap();
    let dup = render_outcome(&insert_data(&mut store, r#"["k","b","c"]"#).unwrap());
    assert_eq!(dup, "<p>A must be unique.</p>");
}

#[test]
fn field_values_are_escaped_in_responses() {
    let mut store = SheetStore::in_memory();

    let payload = r#"["<img src=x>","&","c"]"#;
    let inserted = render_outcome(&insert_data(&mut store, payload).unwrap());
    assert!(inserted.contains("&lt;img src=x&gt;"));
    assert!(inserted.contains("<td>&amp;</td>"));
    assert!(!inserted.contains("<img"));
}

#[test]
fn flow_survives_a_reopen_of_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.bin.gz");

    {
        let mut store = SheetStore::open(&path).unwrap();
        insert_data(&mut store, r#"["x","1","2"]"#).unwrap();
    }

    let mut store = SheetStore::open(&path).unwrap();
    let selected = render_outcome(&select_data(&mut store, "x").unwrap());
    assert!(selected.contains("<td>x</td><td>1</td><td>2</td>"));
}
