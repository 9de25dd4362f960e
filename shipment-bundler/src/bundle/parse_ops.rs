use std::str::FromStr;

use itertools::Itertools;

use crate::bundle::bundler_error::BundlerError;
use crate::bundle::day_of_week::DayOfWeek;
use crate::bundle::shipment::Shipment;

/// parses the line-oriented shipment input format. each non-blank line is
///
///   <id> <origin> <destination> <day>
///
/// with whitespace-separated fields and a single-character day code. blank
/// lines are ignored. any other shape rejects the whole run: every bundling
/// invariant depends on a fully and correctly populated store, so no partial
/// parse is ever handed downstream.
pub fn parse_shipments(contents: &str) -> Result<Vec<Shipment>, BundlerError> {
    let mut shipments: Vec<Shipment> = vec![];
    for (line_index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let fields = line.split_whitespace().collect_vec();
        let (id, origin, destination, day_code) = match fields[..] {
            [id, origin, destination, day_code] => (id, origin, destination, day_code),
            _ => {
                return Err(BundlerError::MalformedLineError {
                    line_number: line_index + 1,
                    line: String::from(raw_line),
                    reason: format!("expected 4 fields, found {}", fields.len()),
                })
            }
        };
        let day = DayOfWeek::from_str(day_code).map_err(|e| BundlerError::MalformedLineError {
            line_number: line_index + 1,
            line: String::from(raw_line),
            reason: format!("{e}"),
        })?;
        shipments.push(Shipment::new(id, origin, destination, day));
    }
    Ok(shipments)
}

#[cfg(test)]
mod test {
    use super::parse_shipments;
    use crate::bundle::bundler_error::BundlerError;
    use crate::bundle::day_of_week::DayOfWeek;

    #[test]
    fn test_parses_records_and_ignores_blank_lines() {
        let contents = "1 CHICAGO SEATTLE M\n\n   \n2 SEATTLE PORTLAND T\n";
        let shipments = parse_shipments(contents).expect("well-formed input");
        assert_eq!(shipments.len(), 2);
        assert_eq!(shipments[0].id, "1");
        assert_eq!(shipments[0].destination, "SEATTLE");
        assert_eq!(shipments[1].day, DayOfWeek::Tuesday);
        assert!(!shipments[1].consumed);
    }

    #[test]
    fn test_rejects_wrong_field_count_naming_the_line() {
        let contents = "1 CHICAGO SEATTLE M\n2 SEATTLE T\n";
        let error = parse_shipments(contents).expect_err("short line must fail");
        match error {
            BundlerError::MalformedLineError { line_number, .. } => assert_eq!(line_number, 2),
            other => panic!("expected MalformedLineError, got {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_day_code() {
        let contents = "1 CHICAGO SEATTLE S\n";
        let error = parse_shipments(contents).expect_err("bad day code must fail");
        let message = format!("{error}");
        assert!(message.contains("line 1"), "got '{message}'");
        assert!(message.contains('S'), "got '{message}'");
    }

    #[test]
    fn test_rejects_excess_fields() {
        let contents = "1 CHICAGO SEATTLE M EXTRA\n";
        assert!(parse_shipments(contents).is_err());
    }

    #[test]
    fn test_empty_input_yields_no_shipments() {
        assert!(parse_shipments("").expect("empty input is valid").is_empty());
        assert!(parse_shipments("\n\n").expect("blank input is valid").is_empty());
    }
}
