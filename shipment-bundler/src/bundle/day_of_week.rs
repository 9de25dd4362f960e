use std::fmt::Display;
use std::str::FromStr;

use crate::bundle::bundler_error::BundlerError;

/// days on which a shipment may run. the bundling week is Monday through
/// Friday; there is no weekend service and no wraparound into the next week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// the five working days in calendar order. bundle discovery iterates
    /// this ordering, which makes the emitted output deterministic.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// single-character code used in the shipment input format.
    pub fn code(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "M",
            DayOfWeek::Tuesday => "T",
            DayOfWeek::Wednesday => "W",
            DayOfWeek::Thursday => "R",
            DayOfWeek::Friday => "F",
        }
    }

    /// the day immediately following this one, or None at the end of the
    /// week. Friday has no successor, so no chain extends past it.
    pub fn next(&self) -> Option<DayOfWeek> {
        let ordinal = *self as usize;
        DayOfWeek::ALL.get(ordinal + 1).copied()
    }

    /// true if `other` is the day immediately following this one. false for
    /// the same day, for reversed pairs, and for skips.
    pub fn is_followed_by(&self, other: &DayOfWeek) -> bool {
        self.next() == Some(*other)
    }
}

impl FromStr for DayOfWeek {
    type Err = BundlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(DayOfWeek::Monday),
            "T" => Ok(DayOfWeek::Tuesday),
            "W" => Ok(DayOfWeek::Wednesday),
            "R" => Ok(DayOfWeek::Thursday),
            "F" => Ok(DayOfWeek::Friday),
            _ => Err(BundlerError::InvalidDayCodeError(String::from(s))),
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod test {
    use super::DayOfWeek;
    use std::str::FromStr;

    #[test]
    fn test_consecutive_day_table() {
        // all 25 ordered pairs: true only for a day and its immediate successor
        for (i, a) in DayOfWeek::ALL.iter().enumerate() {
            for (j, b) in DayOfWeek::ALL.iter().enumerate() {
                let expected = j == i + 1;
                assert_eq!(
                    a.is_followed_by(b),
                    expected,
                    "({a},{b}) expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_friday_has_no_successor() {
        assert_eq!(DayOfWeek::Friday.next(), None);
    }

    #[test]
    fn test_parses_all_codes() {
        for day in DayOfWeek::ALL {
            let parsed = DayOfWeek::from_str(day.code()).expect("known code should parse");
            assert_eq!(parsed, day);
        }
    }

    #[test]
    fn test_rejects_unknown_code() {
        assert!(DayOfWeek::from_str("S").is_err());
        assert!(DayOfWeek::from_str("monday").is_err());
        assert!(DayOfWeek::from_str("").is_err());
    }
}
