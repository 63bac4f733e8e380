//! What the visitor has picked: a school, and a set of events
//!
//! Pickers only track what is currently checked. Nothing is selected until the picker is confirmed,
//! and confirming always replaces the previous selection.

use crate::day::day_label;
use crate::entry::ProgrammeId;
use crate::form::{RegistrationForm, SelectedEventLine};
use crate::programme::Programme;
use crate::source::School;


/// The single-choice school picker
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchoolPicker {
    checked: Option<String>,
}

impl SchoolPicker {
    pub fn check<S: ToString>(&mut self, school_id: S) {
        self.checked = Some(school_id.to_string());
    }

    pub fn uncheck(&mut self) {
        self.checked = None;
    }

    pub fn checked(&self) -> Option<&str> {
        self.checked.as_deref()
    }
}

/// The multiple-choice event picker
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventPicker {
    checked: Vec<ProgrammeId>,
}

impl EventPicker {
    pub fn check(&mut self, id: ProgrammeId) {
        if self.checked.contains(&id) == false {
            self.checked.push(id);
        }
    }

    pub fn uncheck(&mut self, id: &ProgrammeId) {
        self.checked.retain(|checked| checked != id);
    }

    pub fn toggle(&mut self, id: ProgrammeId) {
        if self.is_checked(&id) {
            self.uncheck(&id);
        } else {
            self.check(id);
        }
    }

    pub fn is_checked(&self, id: &ProgrammeId) -> bool {
        self.checked.contains(id)
    }

    pub fn checked(&self) -> &[ProgrammeId] {
        &self.checked
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }
}


/// How a set of selected events shows in the form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventSelectionView {
    pub display: String,
    pub hidden: String,
    pub details: Option<Vec<SelectedEventLine>>,
}

/// Computes what the form shows for `selected`:
/// * nothing selected: empty fields, no list
/// * a single event: its topic, no list (it would be redundant)
/// * more: "`<count>` events selected", and a numbered list
pub fn describe_events(selected: &[ProgrammeId], programme: &Programme) -> EventSelectionView {
    let hidden = selected.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    match selected {
        [] => EventSelectionView::default(),
        [single] => EventSelectionView {
            display: programme.find(single).map(|e| e.topic().to_string()).unwrap_or_else(|| single.to_string()),
            hidden,
            details: None,
        },
        _ => {
            let details = selected.iter()
                .filter_map(|id| programme.find(id))
                .enumerate()
                .map(|(index, entry)| SelectedEventLine {
                    number: index + 1,
                    topic: entry.topic().to_string(),
                    date: day_label(entry.day()).date,
                    time: entry.time().to_string(),
                })
                .collect();
            EventSelectionView {
                display: format!("{} events selected", selected.len()),
                hidden,
                details: Some(details),
            }
        },
    }
}


/// The school and events the visitor has confirmed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    selected_school: Option<String>,
    selected_events: Vec<ProgrammeId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_school(&self) -> Option<&str> {
        self.selected_school.as_deref()
    }

    pub fn selected_events(&self) -> &[ProgrammeId] {
        &self.selected_events
    }

    pub fn is_empty(&self) -> bool {
        self.selected_school.is_none() && self.selected_events.is_empty()
    }

    /// Confirms the school picker, and mirrors the result into the form
    pub fn confirm_school(&mut self, checked: Option<&School>, form: &mut RegistrationForm) {
        match checked {
            None => {
                log::debug!("No school picked, clearing the school selection");
                self.selected_school = None;
                form.school_display.clear();
            },
            Some(school) => {
                log::debug!("School {} picked", school.id);
                self.selected_school = Some(school.id.clone());
                form.school_display = school.label.clone();
            },
        }
    }

    /// Confirms the event picker, and mirrors the result into the form.
    ///
    /// The whole selection is replaced by `checked`. Unknown IDs and break entries cannot be selected, they are ignored.
    pub fn confirm_events(&mut self, checked: &[ProgrammeId], programme: &Programme, form: &mut RegistrationForm) {
        let mut selected: Vec<ProgrammeId> = Vec::with_capacity(checked.len());
        for id in checked {
            if programme.is_selectable(id) == false {
                log::warn!("Programme entry {} cannot be picked for registration. Ignoring it", id);
                continue;
            }
            if selected.contains(id) {
                continue;
            }
            selected.push(id.clone());
        }
        log::debug!("{} events picked", selected.len());

        let view = describe_events(&selected, programme);
        form.event_display = view.display;
        form.event_ids = view.hidden;
        form.selected_events_list = view.details;
        self.selected_events = selected;
    }

    pub fn clear(&mut self) {
        self.selected_school = None;
        self.selected_events.clear();
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ProgrammeEntry;

    fn programme() -> Programme {
        Programme::new(vec![
            ProgrammeEntry::new("E1", 11, "09:00 - 10:00", "Opening Ceremony"),
            ProgrammeEntry::new("E2", 11, "10:00 - 11:00", "Keynote"),
            ProgrammeEntry::new("E3", 11, "11:00 - 11:30", "Tea Break"),
            ProgrammeEntry::new("E5", 12, "14:00 - 15:00", "Panel"),
        ])
    }

    fn ids(ids: &[&str]) -> Vec<ProgrammeId> {
        ids.iter().map(|s| ProgrammeId::from(*s)).collect()
    }

    #[test]
    fn no_events() {
        let mut state = SelectionState::new();
        let mut form = RegistrationForm::new();
        state.confirm_events(&[], &programme(), &mut form);
        assert_eq!(form.event_display, "");
        assert_eq!(form.event_ids, "");
        assert_eq!(form.selected_events_list, None);
    }

    #[test]
    fn single_event() {
        let mut state = SelectionState::new();
        let mut form = RegistrationForm::new();
        state.confirm_events(&ids(&["E1"]), &programme(), &mut form);
        assert_eq!(form.event_display, "Opening Ceremony");
        assert_eq!(form.event_ids, "E1");
        assert_eq!(form.selected_events_list, None);
    }

    #[test]
    fn several_events() {
        let mut state = SelectionState::new();
        let mut form = RegistrationForm::new();
        state.confirm_events(&ids(&["E2", "E5"]), &programme(), &mut form);
        assert_eq!(form.event_display, "2 events selected");
        assert_eq!(form.event_ids, "E2,E5");
        let lines = form.selected_events_list.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], SelectedEventLine {
            number: 1,
            topic: "Keynote".into(),
            date: "Monday, 11 August 2025".into(),
            time: "10:00 - 11:00".into(),
        });
        assert_eq!(lines[1].number, 2);
        assert_eq!(lines[1].topic, "Panel");
        assert_eq!(lines[1].date, "Tuesday, 12 August 2025");
    }

    #[test]
    fn confirm_replaces_and_filters() {
        let mut state = SelectionState::new();
        let mut form = RegistrationForm::new();
        state.confirm_events(&ids(&["E2", "E5"]), &programme(), &mut form);
        state.confirm_events(&ids(&["E5", "E3", "E5", "E9"]), &programme(), &mut form);
        assert_eq!(state.selected_events(), &ids(&["E5"])[..]);
        assert_eq!(form.event_display, "Panel");
        assert_eq!(form.event_ids, "E5");
    }

    #[test]
    fn unknown_single_id_shows_raw() {
        let view = describe_events(&ids(&["X9"]), &programme());
        assert_eq!(view.display, "X9");
        assert_eq!(view.hidden, "X9");
    }

    #[test]
    fn school_selection() {
        let mut state = SelectionState::new();
        let mut form = RegistrationForm::new();
        let school = School::new("s1", "North High");

        state.confirm_school(Some(&school), &mut form);
        assert_eq!(state.selected_school(), Some("s1"));
        assert_eq!(form.school_display, "North High");

        state.confirm_school(None, &mut form);
        assert_eq!(state.selected_school(), None);
        assert_eq!(form.school_display, "");
    }

    #[test]
    fn event_picker_toggles() {
        let mut picker = EventPicker::default();
        picker.toggle("E1".into());
        picker.toggle("E2".into());
        picker.check("E1".into());
        assert_eq!(picker.checked(), &ids(&["E1", "E2"])[..]);
        picker.toggle("E1".into());
        assert_eq!(picker.checked(), &ids(&["E2"])[..]);
        picker.clear();
        assert!(picker.checked().is_empty());
    }
}
