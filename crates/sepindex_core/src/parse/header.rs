//! RFC822-style metadata header extraction.
//!
//! # Responsibility
//! - Split the leading `Field: value` block off one SEP text stream.
//! - Fold continuation lines into the preceding field's value.
//!
//! # Invariants
//! - Reading stops at the first blank line or EOF; the body is never read.
//! - Field order and raw values are preserved.

use crate::parse::ParseErrorKind;
use std::io::BufRead;

/// Reads the header block as an ordered `(field, value)` list.
///
/// A line starting with whitespace continues the previous field's value,
/// joined with a single space. Any other line without a colon is malformed.
pub(crate) fn read_header<R: BufRead>(
    reader: &mut R,
) -> Result<Vec<(String, String)>, ParseErrorKind> {
    let mut fields: Vec<(String, String)> = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|err| ParseErrorKind::Io(err.to_string()))?;
        if read == 0 {
            break;
        }

        let trimmed_end = line.trim_end_matches(['\r', '\n']);
        if trimmed_end.trim().is_empty() {
            break;
        }

        if trimmed_end.starts_with([' ', '\t']) {
            let continuation = trimmed_end.trim();
            match fields.last_mut() {
                Some((_, value)) => {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(continuation);
                }
                None => {
                    return Err(ParseErrorKind::MalformedHeaderLine(
                        trimmed_end.to_string(),
                    ));
                }
            }
            continue;
        }

        match trimmed_end.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                fields.push((name.trim().to_string(), value.trim().to_string()));
            }
            _ => {
                return Err(ParseErrorKind::MalformedHeaderLine(
                    trimmed_end.to_string(),
                ));
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::read_header;
    use crate::parse::ParseErrorKind;
    use std::io::BufReader;

    fn parse(text: &str) -> Result<Vec<(String, String)>, ParseErrorKind> {
        read_header(&mut BufReader::new(text.as_bytes()))
    }

    #[test]
    fn reads_fields_in_order_and_stops_at_blank_line() {
        let fields = parse("SEP: 1\nTitle: Guidelines\n\nbody: not a header\n")
            .expect("header should parse");
        assert_eq!(
            fields,
            vec![
                ("SEP".to_string(), "1".to_string()),
                ("Title".to_string(), "Guidelines".to_string()),
            ]
        );
    }

    #[test]
    fn folds_continuation_lines_with_a_single_space() {
        let fields = parse("Author: A. Author <a@x.org>,\n    B. Other\n\n")
            .expect("folded header should parse");
        assert_eq!(
            fields,
            vec![(
                "Author".to_string(),
                "A. Author <a@x.org>, B. Other".to_string()
            )]
        );
    }

    #[test]
    fn rejects_line_without_colon() {
        let err = parse("SEP: 1\nnot a field\n").expect_err("line must be rejected");
        assert_eq!(
            err,
            ParseErrorKind::MalformedHeaderLine("not a field".to_string())
        );
    }

    #[test]
    fn rejects_leading_continuation_line() {
        let err = parse("   dangling\n").expect_err("continuation without field");
        assert!(matches!(err, ParseErrorKind::MalformedHeaderLine(_)));
    }

    #[test]
    fn stops_cleanly_at_eof_without_blank_line() {
        let fields = parse("SEP: 42").expect("EOF-terminated header should parse");
        assert_eq!(fields, vec![("SEP".to_string(), "42".to_string())]);
    }
}
