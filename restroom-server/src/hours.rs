//! Open/closed heuristic over free-text operating hours.
//!
//! Source feeds describe hours as free text ("24/7", "8am - 4pm", "Dawn to
//! dusk", ...). No interval parsing is attempted: any non-empty description
//! counts as open, and around-the-clock markers are recognized separately so
//! callers can tell them apart.

/// Coarse classification of an hours description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursClass {
    /// No hours given.
    Unknown,
    /// Contains a continuous-operation marker such as "24" or "24/7".
    AroundTheClock,
    /// Some other schedule text. Treated as open.
    Scheduled,
}

impl HoursClass {
    /// Whether a facility with these hours is considered open now.
    pub fn is_open(self) -> bool {
        match self {
            HoursClass::Unknown => false,
            HoursClass::AroundTheClock | HoursClass::Scheduled => true,
        }
    }
}

/// Classify an hours description.
pub fn classify_hours(hours: &str) -> HoursClass {
    if hours.is_empty() {
        HoursClass::Unknown
    } else if hours.contains("24") {
        HoursClass::AroundTheClock
    } else {
        HoursClass::Scheduled
    }
}

/// Whether a facility with the given hours text is open now.
///
/// `false` for missing or empty text, `true` otherwise.
pub fn is_open_now(hours: Option<&str>) -> bool {
    hours.map(classify_hours).is_some_and(HoursClass::is_open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_the_clock() {
        assert!(is_open_now(Some("24/7")));
        assert!(is_open_now(Some("Open 24 hours")));
        assert_eq!(classify_hours("24/7"), HoursClass::AroundTheClock);
    }

    #[test]
    fn missing_or_empty_is_closed() {
        assert!(!is_open_now(None));
        assert!(!is_open_now(Some("")));
        assert_eq!(classify_hours(""), HoursClass::Unknown);
    }

    #[test]
    fn any_other_schedule_counts_as_open() {
        // Schedules are not parsed; a daytime window is open at any hour.
        assert!(is_open_now(Some("9am-5pm")));
        assert!(is_open_now(Some("Closed for renovation")));
        assert_eq!(classify_hours("9am-5pm"), HoursClass::Scheduled);
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(is_open_now(Some("   ")));
    }
}
