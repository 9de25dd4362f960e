use crate::bundle::day_of_week::DayOfWeek;

/// a single day's transport leg, parsed from one line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    /// unique identifier for this shipment, stable across the run
    pub id: String,
    /// location code where the leg begins
    pub origin: String,
    /// location code where the leg ends
    pub destination: String,
    /// day of the working week the leg runs
    pub day: DayOfWeek,
    /// set exactly once, when the shipment is emitted as part of a bundle
    pub consumed: bool,
}

impl Shipment {
    pub fn new(id: &str, origin: &str, destination: &str, day: DayOfWeek) -> Shipment {
        Shipment {
            id: String::from(id),
            origin: String::from(origin),
            destination: String::from(destination),
            day,
            consumed: false,
        }
    }

    /// true if `child` can directly follow this shipment in a bundle: it runs
    /// on the immediately following day and departs from the location this
    /// shipment arrives at. location codes match case-sensitively with no
    /// normalization.
    pub fn is_valid_child(&self, child: &Shipment) -> bool {
        self.day.is_followed_by(&child.day) && self.destination == child.origin
    }
}

#[cfg(test)]
mod test {
    use super::Shipment;
    use crate::bundle::day_of_week::DayOfWeek;

    #[test]
    fn test_valid_child_on_consecutive_day_and_matching_location() {
        let parent = Shipment::new("1", "CHICAGO", "SEATTLE", DayOfWeek::Monday);
        let child = Shipment::new("2", "SEATTLE", "SAN_FRANCISCO", DayOfWeek::Tuesday);
        assert!(parent.is_valid_child(&child));
    }

    #[test]
    fn test_invalid_child_on_skipped_day() {
        let parent = Shipment::new("1", "CHICAGO", "SEATTLE", DayOfWeek::Monday);
        let child = Shipment::new("2", "SEATTLE", "SAN_FRANCISCO", DayOfWeek::Wednesday);
        assert!(!parent.is_valid_child(&child));
    }

    #[test]
    fn test_invalid_child_on_origin_mismatch() {
        let parent = Shipment::new("1", "CHICAGO", "SEATTLE", DayOfWeek::Monday);
        let child = Shipment::new("2", "CHICAGO", "SAN_FRANCISCO", DayOfWeek::Tuesday);
        assert!(!parent.is_valid_child(&child));
    }

    #[test]
    fn test_invalid_child_on_same_day() {
        let parent = Shipment::new("1", "CHICAGO", "SEATTLE", DayOfWeek::Monday);
        let child = Shipment::new("2", "SEATTLE", "SAN_FRANCISCO", DayOfWeek::Monday);
        assert!(!parent.is_valid_child(&child));
    }
}
