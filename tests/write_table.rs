use std::fs;

use rowcsv::{write_table, Session};

fn record(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

#[test]
fn round_trips_an_accumulated_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("people_copy.csv");

    let mut session = Session::open("tests/fixtures/people.csv").unwrap();
    let mut table = Vec::new();
    while let Some(row) = session.next_row().unwrap() {
        table.push(row.to_record());
    }
    write_table(&out, &table).unwrap();

    let mut reread = Session::open(&out).unwrap();
    let mut table2 = Vec::new();
    while let Some(row) = reread.next_row().unwrap() {
        table2.push(row.to_record());
    }
    assert_eq!(table, table2);
}

#[test]
fn round_trips_a_ragged_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ragged_copy.csv");

    // Default options tolerate unequal field counts on read; writing the
    // accumulated table back must tolerate them too.
    let mut session = Session::open("tests/fixtures/ragged.csv").unwrap();
    let mut table = Vec::new();
    while let Some(row) = session.next_row().unwrap() {
        table.push(row.to_record());
    }
    assert_eq!(
        table.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![3, 2, 4]
    );
    write_table(&out, &table).unwrap();

    let mut reread = Session::open(&out).unwrap();
    let mut counts = Vec::new();
    let mut table2 = Vec::new();
    while let Some(row) = reread.next_row().unwrap() {
        counts.push(row.field_count());
        table2.push(row.to_record());
    }
    assert_eq!(counts, vec![3, 2, 4]);
    assert_eq!(table, table2);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a/b/c/out.csv");
    write_table(&out, &[record(&["x", "y"])]).unwrap();
    assert!(out.exists());
}

#[test]
fn destination_extension_selects_the_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![record(&["a", "b"]), record(&["1", "2"])];

    let tsv = dir.path().join("out.tsv");
    write_table(&tsv, &rows).unwrap();
    assert_eq!(fs::read_to_string(&tsv).unwrap(), "a\tb\n1\t2\n");

    let psv = dir.path().join("out.psv");
    write_table(&psv, &rows).unwrap();
    assert_eq!(fs::read_to_string(&psv).unwrap(), "a|b\n1|2\n");

    // And the round trip back in respects the same rule.
    let mut session = Session::open(&psv).unwrap();
    let row = session.next_row().unwrap().unwrap();
    assert_eq!(row.fields(), ["a", "b"]);
}

#[test]
fn fields_containing_the_delimiter_are_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("quoted.csv");
    let rows = vec![record(&["a,b", "plain"])];
    write_table(&out, &rows).unwrap();

    let mut session = Session::open(&out).unwrap();
    let row = session.next_row().unwrap().unwrap();
    assert_eq!(row.fields(), ["a,b", "plain"]);
}

#[test]
fn truncates_an_existing_destination() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    write_table(&out, &[record(&["old", "table"]), record(&["1", "2"])]).unwrap();
    write_table(&out, &[record(&["new", "table"])]).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "new,table\n");
}
