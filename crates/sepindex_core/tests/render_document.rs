use chrono::NaiveDate;
use regex::Regex;
use sepindex_core::{parse_sep, write_index, Author, RenderError, Sep, SepStatus, SepType};
use std::io::BufReader;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date")
}

fn parse(text: &str, source: &str) -> Sep {
    parse_sep(BufReader::new(text.as_bytes()), source).expect("record should parse")
}

fn render(seps: &[Sep]) -> String {
    let mut out = Vec::new();
    write_index(seps, &mut out, date()).expect("render should succeed");
    String::from_utf8(out).expect("index is utf-8")
}

fn section<'a>(document: &'a str, title: &str) -> &'a str {
    let underlined = format!("\n{title}\n");
    let start = document.find(&underlined).expect("section title present");
    let rest = &document[start + underlined.len()..];
    // Next anchor label starts the following section.
    match rest.find("\n.. _") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

fn data_row_numbers(section_text: &str) -> Vec<u32> {
    let row = Regex::new(r"(?m)^[A-Z][A-Z ] +(\d+)  ").expect("row pattern");
    row.captures_iter(section_text)
        .map(|captures| captures[1].parse().expect("row number"))
        .collect()
}

const SINGLE: &str = "\
SEP: 1
Title: Test
Type: Informational
Status: Active
Author: A. Author <a@x.org>

Body text.
";

#[test]
fn single_record_lands_in_other_informational() {
    let document = render(&[parse(SINGLE, "sep-0001.txt")]);

    assert!(document.starts_with("SEP: 0\n"));
    assert!(document.contains("Last-Modified: 2026-08-05\n"));

    let info = section(&document, "Other Informational SEPs");
    assert_eq!(data_row_numbers(info), vec![1]);
    assert!(info.contains("I     1  Test"));

    // Every other category renders an empty table frame.
    let open = section(&document, "Open SEPs (under consideration)");
    assert_eq!(data_row_numbers(open), Vec::<u32>::new());
    assert!(open.contains("== ====  "));
}

#[test]
fn single_record_authors_section_resolves_the_email() {
    let document = render(&[parse(SINGLE, "sep-0001.txt")]);
    let authors = section(&document, "Authors/Owners");
    assert!(authors.contains("Author, A.  a@x.org"));
    assert!(authors.contains("Name        Email Address"));
}

#[test]
fn numerical_index_has_no_gap_for_consecutive_numbers() {
    let document = render(&[parse(SINGLE, "sep-0001.txt")]);
    let numerical = section(&document, "Numerical Index");
    assert_eq!(data_row_numbers(numerical), vec![1]);
    // Number 1 follows the virtual 0 directly, so the header rule touches
    // the row.
    assert!(numerical.contains("=\nI     1  Test"));
}

#[test]
fn numerical_index_inserts_one_blank_line_per_gap() {
    let one = parse(SINGLE, "sep-0001.txt");
    let five = parse(
        "SEP: 5\nTitle: Later\nType: Process\nStatus: Active\nAuthor: B. Other\n\n",
        "sep-0005.txt",
    );
    let document = render(&[one, five]);
    let numerical = section(&document, "Numerical Index");

    assert_eq!(data_row_numbers(numerical), vec![1, 5]);
    let gap = Regex::new(r"(?m)^I {5}1  Test.*\n\nP {5}5  Later").expect("gap pattern");
    assert!(
        gap.is_match(numerical),
        "expected exactly one blank line between rows:\n{numerical}"
    );
}

#[test]
fn rendered_numbers_round_trip_in_order() {
    let seps: Vec<Sep> = [2u32, 3, 7, 42]
        .iter()
        .map(|number| {
            parse(
                &format!(
                    "SEP: {number}\nTitle: Entry {number}\nType: Process\nStatus: Active\nAuthor: A. Author\n\n"
                ),
                &format!("sep-{number:04}.txt"),
            )
        })
        .collect();
    let document = render(&seps);
    let numerical = section(&document, "Numerical Index");
    assert_eq!(data_row_numbers(numerical), vec![2, 3, 7, 42]);
}

#[test]
fn reserved_numbers_render_with_placeholder_codes() {
    let document = render(&[parse(SINGLE, "sep-0001.txt")]);
    let reserved = section(&document, "Reserved SEP Numbers");
    assert!(reserved.contains(".  801  RESERVED"));
    assert!(reserved.contains("Warsaw"));
}

#[test]
fn type_and_status_keys_follow_the_display_rules() {
    let document = render(&[parse(SINGLE, "sep-0001.txt")]);

    let types = section(&document, "SEP Types Key");
    assert!(types.contains("    I - Informational SEP"));
    assert!(types.contains("    P - Process SEP"));
    assert!(types.contains("    S - Standards Track SEP"));

    let statuses = section(&document, "SEP Status Key");
    assert!(statuses.contains("    A - Accepted (Standards Track only) or Active proposal"));
    assert!(statuses.contains("    F - Final proposal"));
    assert!(!statuses.contains("Draft proposal"));
    assert!(!statuses.contains("A - Active proposal"));
}

#[test]
fn document_ends_with_the_editor_footer() {
    let document = render(&[parse(SINGLE, "sep-0001.txt")]);
    assert!(document.ends_with("   End:\n"));
}

#[test]
fn author_conflict_fails_before_any_output() {
    let one = parse(SINGLE, "sep-0001.txt");
    let two = parse(
        "SEP: 2\nTitle: Second\nType: Informational\nStatus: Active\nAuthor: A. Author <other@x.org>\n\n",
        "sep-0002.txt",
    );

    let mut out = Vec::new();
    let err = write_index(&[one, two], &mut out, date()).expect_err("conflict must fail");
    assert!(matches!(err, RenderError::AuthorConflict(_)));
    let message = err.to_string();
    assert!(message.contains("Author, A."));
    assert!(message.contains("a@x.org"));
    assert!(message.contains("other@x.org"));
    assert!(out.is_empty(), "no partial document may be emitted");
}

#[test]
fn rendering_is_deterministic() {
    let seps = vec![
        parse(SINGLE, "sep-0001.txt"),
        Sep {
            number: 2,
            title: "Directly Built".to_string(),
            kind: SepType::StandardsTrack,
            status: SepStatus::Final,
            authors: vec![Author::new("B. Other", None)],
            headers: Vec::new(),
        },
    ];
    assert_eq!(render(&seps), render(&seps));
}
