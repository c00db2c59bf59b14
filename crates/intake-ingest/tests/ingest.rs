//! End-to-end roster ingestion tests.

use chrono::NaiveDate;
use intake_dates::DateOrder;
use intake_ingest::{
    CanonicalRecord, ColumnResolution, CommitPolicy, IngestError, IngestOptions, ingest_bytes,
    ingest_table, load_table, validate_row,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn options(order: DateOrder, policy: CommitPolicy) -> IngestOptions {
    IngestOptions::new(order, policy).with_today(today())
}

#[test]
fn headerless_single_row() {
    let table = load_table(b"Jane,Doe,14/02/2013", "utf-8").unwrap();

    assert_eq!(table.resolution, ColumnResolution::Positional);
    assert_eq!(
        table.records,
        vec![CanonicalRecord::new("Jane", "Doe", "14/02/2013")]
    );
    assert_eq!(table.row_number(0), 1);
}

#[test]
fn header_columns_remap_regardless_of_order() {
    let csv = "DOB,Surname,GivenName\n14/02/2013,Doe,Jane\n01/03/1980,Roe,John\n";
    let table = load_table(csv.as_bytes(), "utf-8").unwrap();

    assert_eq!(table.resolution, ColumnResolution::Header);
    assert_eq!(table.columns, vec!["DOB", "Surname", "GivenName"]);
    assert_eq!(
        table.records,
        vec![
            CanonicalRecord::new("Jane", "Doe", "14/02/2013"),
            CanonicalRecord::new("John", "Roe", "01/03/1980"),
        ]
    );
}

#[test]
fn extra_columns_are_ignored() {
    let csv = "ID,First Name,Email,Last Name,Date of Birth\n7,Jane,jane@example.org,Doe,14 Feb 2013\n";
    let table = load_table(csv.as_bytes(), "utf-8").unwrap();
    assert_eq!(
        table.records,
        vec![CanonicalRecord::new("Jane", "Doe", "14 Feb 2013")]
    );
}

#[test]
fn too_few_columns_is_missing_columns() {
    let result = load_table(b"Name,DOB\nJane,14/02/2013\n", "utf-8");
    assert!(matches!(
        result,
        Err(IngestError::MissingColumns { found: 2 })
    ));
}

#[test]
fn latin1_upload_is_decoded() {
    let csv = b"first_name,last_name,birthdate\nRen\xE9e,M\xFCller,03.04.1975\n";
    let table = load_table(csv, "iso-8859-1").unwrap();
    assert_eq!(table.records[0].first_name, "Renée");
    assert_eq!(table.records[0].last_name, "Müller");
}

#[test]
fn missing_last_name_reports_once_and_keeps_other_checks() {
    let record = CanonicalRecord::new("", "", "14/02/2013");
    let validation = validate_row(&record, DateOrder::DayFirst, today());

    let last_name: Vec<_> = validation
        .messages
        .iter()
        .filter(|message| message.contains("LastName"))
        .collect();
    assert_eq!(last_name.len(), 1);
    assert!(
        validation
            .messages
            .iter()
            .any(|message| message.contains("FirstName"))
    );
}

#[test]
fn batch_error_rows_account_for_header() {
    let csv = "FirstName,LastName,DateOfBirth\n\
               Jane,Doe,14/02/2013\n\
               John,Roe,31/31/1990\n\
               Ann,Poe,1985-07-09\n";
    let table = load_table(csv.as_bytes(), "utf-8").unwrap();

    let result = ingest_table(&table, &options(DateOrder::DayFirst, CommitPolicy::AllOrNothing));
    let Err(IngestError::RowValidationFailed { errors }) = result else {
        panic!("expected row validation failure");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row, 3);
    assert_eq!(
        errors[0].messages,
        vec!["unrecognised date format: '31/31/1990'"]
    );

    // The sibling rows still normalize on their own.
    let outcome = ingest_table(&table, &options(DateOrder::DayFirst, CommitPolicy::ValidSubset))
        .unwrap();
    let dates: Vec<_> = outcome
        .records
        .iter()
        .map(|record| (record.row, record.date_iso.to_string()))
        .collect();
    assert_eq!(
        dates,
        vec![(2, "2013-02-14".to_string()), (4, "1985-07-09".to_string())]
    );
}

#[test]
fn month_first_preference_applies_to_every_row() {
    let csv = "Jane,Doe,02/03/2001\nJohn,Roe,13/03/2001\n";
    let outcome = ingest_bytes(
        csv.as_bytes(),
        "utf-8",
        &options(DateOrder::MonthFirst, CommitPolicy::AllOrNothing),
    )
    .unwrap();

    assert_eq!(outcome.records[0].date_iso.to_string(), "2001-02-03");
    // 13 cannot be a month, so the day-month-year decomposition wins.
    assert_eq!(outcome.records[1].date_iso.to_string(), "2001-03-13");
}

#[test]
fn header_only_file_has_no_valid_rows() {
    let result = ingest_bytes(
        b"FirstName,LastName,DOB\n",
        "utf-8",
        &options(DateOrder::DayFirst, CommitPolicy::AllOrNothing),
    );
    assert!(matches!(result, Err(IngestError::NoValidRows)));
}

#[test]
fn short_rows_fail_validation_instead_of_loading() {
    let csv = "FirstName,LastName,DOB\nJane\n";
    let result = ingest_bytes(
        csv.as_bytes(),
        "utf-8",
        &options(DateOrder::DayFirst, CommitPolicy::AllOrNothing),
    );
    let Err(IngestError::RowValidationFailed { errors }) = result else {
        panic!("expected row validation failure");
    };
    assert_eq!(
        errors[0].messages,
        vec!["LastName is required", "DateOfBirth is required"]
    );
}
