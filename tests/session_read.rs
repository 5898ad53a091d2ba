use rowcsv::{Error, Session, SessionOptions};

#[test]
fn reads_rows_with_one_based_numbers() {
    let mut session = Session::open("tests/fixtures/people.csv").unwrap();
    assert_eq!(session.delimiter(), b',');
    assert_eq!(session.current_row_number(), 0);

    let header = session.next_row().unwrap().unwrap();
    assert_eq!(header.number(), 1);
    assert_eq!(header.fields(), ["id", "name", "age", "active"]);

    let row = session.next_row().unwrap().unwrap();
    assert_eq!(row.number(), 2);
    assert_eq!(row.cell_at(2).as_str(), " Zhang San ");
    assert_eq!(row.cell_at(2).trim().as_str(), "Zhang San");
    assert_eq!(row.cell_at(3).to_i64(None).unwrap(), 28);
    assert!(row.cell_at(4).to_bool(None).unwrap());

    let mut last = 2;
    while let Some(row) = session.next_row().unwrap() {
        last = row.number();
    }
    assert_eq!(last, 6);
    assert_eq!(session.current_row_number(), 6);

    // Exhausted sessions keep signalling end-of-input without error.
    assert!(session.next_row().unwrap().is_none());
}

#[test]
fn reset_restarts_numbering_from_one() {
    let mut session = Session::open("tests/fixtures/people.csv").unwrap();
    let first = session.next_row().unwrap().unwrap();
    while session.next_row().unwrap().is_some() {}

    session.reset().unwrap();
    assert_eq!(session.current_row_number(), 0);
    let again = session.next_row().unwrap().unwrap();
    assert_eq!(again.number(), 1);
    assert_eq!(again.fields(), first.fields());
}

#[test]
fn close_is_idempotent_and_reset_after_close_fails() {
    let mut session = Session::open("tests/fixtures/people.csv").unwrap();
    assert!(session.is_open());
    session.close();
    assert!(!session.is_open());
    session.close();

    assert!(matches!(session.reset(), Err(Error::NotOpen)));
    assert!(matches!(session.next_row(), Err(Error::NotOpen)));
}

#[test]
fn open_missing_file_is_io_error() {
    let err = Session::open("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn utf8_bom_is_skipped_and_stays_skipped_after_reset() {
    let mut session = Session::open("tests/fixtures/bom.csv").unwrap();
    let header = session.next_row().unwrap().unwrap();
    assert_eq!(header.cell_at(1).as_str(), "id");

    session.reset().unwrap();
    let header = session.next_row().unwrap().unwrap();
    assert_eq!(header.cell_at(1).as_str(), "id");
}

#[test]
fn ragged_rows_are_tolerated_by_default() {
    let mut session = Session::open("tests/fixtures/ragged.csv").unwrap();
    let mut counts = Vec::new();
    while let Some(row) = session.next_row().unwrap() {
        counts.push(row.field_count());
    }
    assert_eq!(counts, vec![3, 2, 4]);
}

#[test]
fn ragged_rows_are_rejected_when_flexible_is_off() {
    let options = SessionOptions {
        flexible: false,
        ..Default::default()
    };
    let mut session = Session::open_with("tests/fixtures/ragged.csv", options).unwrap();
    assert!(session.next_row().is_ok());
    let err = session.next_row().unwrap_err();
    assert!(matches!(err, Error::Csv(_)));
}

#[test]
fn delimiter_override_beats_extension_inference() {
    let options = SessionOptions {
        delimiter: Some(b';'),
        ..Default::default()
    };
    let session = Session::open_with("tests/fixtures/people.csv", options).unwrap();
    assert_eq!(session.delimiter(), b';');
}

#[test]
fn write_back_round_trips_through_the_row() {
    let mut session = Session::open("tests/fixtures/people.csv").unwrap();
    session.next_row().unwrap();
    let mut row = session.next_row().unwrap().unwrap();

    let cell = row.cell_at(2).trim().transform(|s| s.to_uppercase());
    row.write_back(&cell);
    assert_eq!(row.fields()[1], "ZHANG SAN");

    // Row-level predicate over the mutated row.
    assert!(row.for_all(|r| (1..=r.field_count()).any(|i| r.cell_at(i).as_str() == "ZHANG SAN")));
}
