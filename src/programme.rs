//! The programme view model: entries grouped by day, filtered views and the event catalogue

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::day::{day_label, DayLabel};
use crate::entry::{ProgrammeEntry, ProgrammeId};

/// Groups entries by day code.
///
/// Days enumerate in ascending order, and entries of a same day keep their relative order.
pub fn group_by_day<'a, I>(entries: I) -> BTreeMap<u32, Vec<&'a ProgrammeEntry>>
where
    I: IntoIterator<Item = &'a ProgrammeEntry>,
{
    let mut groups: BTreeMap<u32, Vec<&ProgrammeEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.day()).or_default().push(entry);
    }
    groups
}

/// The grouped view restricted to `day`, or the full grouped view when `day` is `None`
pub fn filter_by_day<'a, I>(entries: I, day: Option<u32>) -> BTreeMap<u32, Vec<&'a ProgrammeEntry>>
where
    I: IntoIterator<Item = &'a ProgrammeEntry>,
{
    match day {
        None => group_by_day(entries),
        Some(day) => group_by_day(entries.into_iter().filter(|e| e.day() == day)),
    }
}


/// A group of entries sharing the same day, ready to be displayed
#[derive(Clone, Debug, PartialEq)]
pub struct DaySection<'a> {
    pub day: u32,
    pub label: DayLabel,
    pub entries: Vec<&'a ProgrammeEntry>,
}

fn into_sections(groups: BTreeMap<u32, Vec<&ProgrammeEntry>>) -> Vec<DaySection<'_>> {
    groups.into_iter()
        .map(|(day, entries)| DaySection { day, label: day_label(day), entries })
        .collect()
}


/// A whole programme, as loaded from a programme document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Programme {
    entries: Vec<ProgrammeEntry>,
}

impl Programme {
    /// Build a programme.
    /// Entries whose ID has already been seen are ignored
    pub fn new(entries: Vec<ProgrammeEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.insert(entry.id().clone()) == false {
                log::warn!("Duplicate programme ID {}. Ignoring entry {:?}", entry.id(), entry.topic());
                continue;
            }
            kept.push(entry);
        }
        Self { entries: kept }
    }

    pub fn entries(&self) -> &[ProgrammeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &ProgrammeId) -> Option<&ProgrammeEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Every day code that has at least one entry, in ascending order
    pub fn days(&self) -> Vec<u32> {
        group_by_day(&self.entries).into_iter().map(|(day, _)| day).collect()
    }

    /// The sections to display, either for every day or for a single one
    pub fn sections(&self, day: Option<u32>) -> Vec<DaySection<'_>> {
        into_sections(filter_by_day(&self.entries, day))
    }

    /// Entries that can be picked for registration, grouped by day
    pub fn event_catalogue(&self) -> Vec<DaySection<'_>> {
        into_sections(group_by_day(self.entries.iter().filter(|e| e.is_selectable())))
    }

    /// Whether `id` refers to an entry that can be picked for registration
    pub fn is_selectable(&self, id: &ProgrammeId) -> bool {
        self.find(id).map(|e| e.is_selectable()).unwrap_or(false)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProgrammeEntry> {
        vec![
            ProgrammeEntry::new("A", 12, "09:00", "Keynote"),
            ProgrammeEntry::new("B", 11, "09:00", "Opening Ceremony"),
            ProgrammeEntry::new("C", 12, "10:30", "Tea Break"),
            ProgrammeEntry::new("D", 18, "14:00", "Workshop"),
        ]
    }

    #[test]
    fn groups_in_ascending_day_order() {
        let entries = sample();
        let groups = group_by_day(&entries);

        assert_eq!(groups.keys().cloned().collect::<Vec<_>>(), vec![11, 12, 18]);
        let day_12: Vec<&str> = groups[&12].iter().map(|e| e.id().as_str()).collect();
        assert_eq!(day_12, vec!["A", "C"]);
        assert_eq!(groups.values().map(|v| v.len()).sum::<usize>(), entries.len());
    }

    #[test]
    fn filter_restricts_to_one_day() {
        let entries = sample();
        let filtered = filter_by_day(&entries, Some(12));
        assert_eq!(filtered.keys().cloned().collect::<Vec<_>>(), vec![12]);
        assert_eq!(filtered[&12].len(), 2);

        assert!(filter_by_day(&entries, Some(19)).is_empty());
        assert_eq!(filter_by_day(&entries, None), group_by_day(&entries));
    }

    #[test]
    fn catalogue_skips_breaks() {
        let programme = Programme::new(sample());
        let catalogue = programme.event_catalogue();
        let ids: Vec<&str> = catalogue.iter()
            .flat_map(|s| s.entries.iter().map(|e| e.id().as_str()))
            .collect();
        assert_eq!(ids, vec!["B", "A", "D"]);
        assert_eq!(catalogue[0].label.to_string(), "Day 1 - Monday, 11 August 2025");
        assert!(!programme.is_selectable(&"C".into()));
        assert!(!programme.is_selectable(&"nope".into()));
    }

    #[test]
    fn duplicates_are_dropped() {
        let programme = Programme::new(vec![
            ProgrammeEntry::new("A", 11, "09:00", "First"),
            ProgrammeEntry::new("A", 12, "09:00", "Second"),
        ]);
        assert_eq!(programme.entries().len(), 1);
        assert_eq!(programme.find(&"A".into()).unwrap().topic(), "First");
        assert_eq!(programme.days(), vec![11]);
    }
}
