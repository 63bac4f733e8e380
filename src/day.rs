//! Day codes and their labels

use std::fmt::{Display, Formatter};

/// The conference days that have a known date.
/// Each line is (day code, ordinal, date)
static KNOWN_DAYS: &[(u32, u32, &str)] = &[
    (11, 1, "Monday, 11 August 2025"),
    (12, 2, "Tuesday, 12 August 2025"),
    (18, 3, "Monday, 18 August 2025"),
    (19, 4, "Tuesday, 19 August 2025"),
];

/// How a day code is presented: "Day `ordinal`" and a date
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayLabel {
    pub ordinal: u32,
    pub date: String,
}

impl DayLabel {
    /// "Day 1", "Day 2"...
    pub fn heading(&self) -> String {
        format!("Day {}", self.ordinal)
    }
}

impl Display for DayLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "Day {} - {}", self.ordinal, self.date)
    }
}

/// Returns the label of a day code.
///
/// Unknown codes never fail: they use the raw code as ordinal and "`<day>` August 2025" as date
pub fn day_label(day: u32) -> DayLabel {
    match KNOWN_DAYS.iter().find(|(code, _, _)| *code == day) {
        Some((_, ordinal, date)) => DayLabel { ordinal: *ordinal, date: date.to_string() },
        None => DayLabel {
            ordinal: day,
            date: format!("{} {}", day, crate::settings::conference_month()),
        },
    }
}
