//! A programme page, and everything a visitor can do on it
//!
//! A [`Page`] owns all the session state: what has been loaded, the active day filter,
//! the two pickers, the registration form, what has been selected and the registration flow.
//! Every handler is a method on it, so that the whole behaviour can be driven without any browser.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::entry::ProgrammeId;
use crate::error::ValidationFailure;
use crate::form::RegistrationForm;
use crate::loader::{load_programme, LoadState};
use crate::programme::Programme;
use crate::registration::{HideTicket, Registration};
use crate::render;
use crate::selection::{EventPicker, SchoolPicker, SelectionState};
use crate::settings::SUCCESS_MESSAGE_DURATION;
use crate::source::School;
use crate::traits::ProgrammeSource;

/// The state of one visitor's page
#[derive(Debug, Default)]
pub struct Page {
    load_state: LoadState,
    /// `None` means "all days"
    active_day: Option<u32>,
    school_picker: SchoolPicker,
    event_picker: EventPicker,
    form: RegistrationForm,
    selection: SelectionState,
    registration: Registration,
    /// The options of the school picker
    schools: Vec<School>,
    /// Only used when nothing is loaded, so that handlers always have a programme to look at
    empty_programme: Programme,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page and load its programme from `source`
    pub async fn load<S>(source: &S) -> Self
    where
        S: ProgrammeSource + ?Sized,
    {
        let mut page = Self::new();
        page.load_state = load_programme(source).await;
        page.schools = page.load_state.schools().to_vec();
        page
    }

    /// Create a page and load its programme from `source`, with school options that do not come from the document.
    /// Schools listed in the document are kept after the given ones
    pub async fn load_with_schools<S>(source: &S, schools: Vec<School>) -> Self
    where
        S: ProgrammeSource + ?Sized,
    {
        let mut page = Self::load(source).await;
        let from_document = std::mem::replace(&mut page.schools, schools);
        for school in from_document {
            if page.schools.iter().any(|s| s.id == school.id) == false {
                page.schools.push(school);
            }
        }
        page
    }

    /// Create a page from an already loaded programme
    pub fn with_programme(programme: Programme, schools: Vec<School>) -> Self {
        let mut page = Self::new();
        page.schools = schools.clone();
        page.load_state = LoadState::Loaded{ programme, schools };
        page
    }

    pub fn load_state(&self) -> &LoadState { &self.load_state }
    pub fn active_day(&self) -> Option<u32> { self.active_day }
    pub fn form(&self) -> &RegistrationForm { &self.form }
    pub fn form_mut(&mut self) -> &mut RegistrationForm { &mut self.form }
    pub fn selection(&self) -> &SelectionState { &self.selection }
    pub fn registration(&self) -> &Registration { &self.registration }
    pub fn school_picker_mut(&mut self) -> &mut SchoolPicker { &mut self.school_picker }
    pub fn event_picker_mut(&mut self) -> &mut EventPicker { &mut self.event_picker }

    pub fn schools(&self) -> &[School] { &self.schools }

    /// Replaces the options of the school picker
    pub fn set_schools(&mut self, schools: Vec<School>) {
        log::debug!("{} school options", schools.len());
        self.schools = schools;
    }

    pub fn programme(&self) -> &Programme {
        self.load_state.programme().unwrap_or(&self.empty_programme)
    }

    /// Shows a single day, or every day with `None`
    pub fn filter_by_day(&mut self, day: Option<u32>) {
        log::debug!("Filtering the programme on {:?}", day);
        self.active_day = day;
    }

    /// Confirms whatever is checked in the school picker
    pub fn confirm_school_selection(&mut self) {
        let schools = &self.schools;
        let checked = self.school_picker.checked()
            .and_then(|id| schools.iter().find(|s| s.id == id));
        if checked.is_none() && self.school_picker.checked().is_some() {
            log::warn!("Unknown school {:?} picked. Ignoring it", self.school_picker.checked());
        }
        self.selection.confirm_school(checked, &mut self.form);
    }

    /// Confirms whatever is checked in the event picker
    pub fn confirm_event_selection(&mut self) {
        let checked: Vec<ProgrammeId> = self.event_picker.checked().to_vec();
        let programme = self.load_state.programme().unwrap_or(&self.empty_programme);
        self.selection.confirm_events(&checked, programme, &mut self.form);
    }

    /// Submits the registration form at `now`. See [`Registration::submit`]
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<HideTicket, ValidationFailure> {
        let programme = self.load_state.programme().unwrap_or(&self.empty_programme);
        self.registration.submit(
            now,
            &mut self.form,
            &mut self.selection,
            (&mut self.school_picker, &mut self.event_picker),
            programme,
        )
    }

    pub fn submit(&mut self) -> Result<HideTicket, ValidationFailure> {
        self.submit_at(Utc::now())
    }

    /// Hides the success message, if `ticket` is the one of the current message
    pub fn hide_success_message(&mut self, ticket: HideTicket) -> bool {
        self.registration.hide(ticket)
    }

    /// Empties the form, both selections, and both pickers
    pub fn clear_registration_form(&mut self) {
        log::debug!("Clearing the registration form");
        self.form.reset();
        self.selection.clear();
        self.school_picker.uncheck();
        self.event_picker.clear();
    }

    /// The current content of the programme list area
    pub fn render_programme(&self) -> String {
        render::programme_list(&self.load_state, self.active_day)
    }

    /// The current content of the event picker
    pub fn render_event_picker(&self) -> String {
        render::event_checkbox_list(self.programme(), &self.event_picker)
    }

    /// The current content of the "Selected Events" list
    pub fn render_selected_events(&self) -> String {
        render::selected_events_list(self.form.selected_events_list.as_deref())
    }

    /// The success message, if one is displayed
    pub fn render_success_message(&self) -> Option<String> {
        self.registration.confirmation().map(render::success_message)
    }
}


/// Submits the form of a shared page, and schedules the success message to be hidden after
/// [`SUCCESS_MESSAGE_DURATION`].
///
/// A newer successful submission makes the previously scheduled hide a no-op.
pub fn submit_and_schedule_hide(page: &Arc<Mutex<Page>>) -> Result<JoinHandle<bool>, ValidationFailure> {
    let ticket = {
        let mut guard = page.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.submit()?
    };

    let page = Arc::clone(page);
    Ok(tokio::spawn(async move {
        tokio::time::sleep(SUCCESS_MESSAGE_DURATION).await;
        let mut guard = page.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.hide_success_message(ticket)
    }))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ProgrammeEntry;

    fn page() -> Page {
        Page::with_programme(
            Programme::new(vec![
                ProgrammeEntry::new("E1", 11, "09:00", "Opening Ceremony"),
                ProgrammeEntry::new("E2", 12, "09:00", "Keynote"),
                ProgrammeEntry::new("E3", 12, "10:30", "Tea Break"),
            ]),
            vec![School::new("s1", "North High"), School::new("s2", "South College")],
        )
    }

    #[test]
    fn day_filter() {
        let mut page = page();
        assert!(page.render_programme().contains("Day 1"));
        page.filter_by_day(Some(12));
        assert_eq!(page.active_day(), Some(12));
        let html = page.render_programme();
        assert!(!html.contains("Day 1"));
        assert!(html.contains("Day 2"));
        page.filter_by_day(None);
        assert!(page.render_programme().contains("Day 1"));
    }

    #[test]
    fn unknown_school_clears_selection() {
        let mut page = page();
        page.school_picker_mut().check("s2");
        page.confirm_school_selection();
        assert_eq!(page.form().school_display, "South College");

        page.school_picker_mut().check("nope");
        page.confirm_school_selection();
        assert_eq!(page.form().school_display, "");
        assert_eq!(page.selection().selected_school(), None);
    }

    #[test]
    fn schools_set_after_load() {
        let mut page = Page::with_programme(
            Programme::new(vec![ProgrammeEntry::new("E1", 11, "09:00", "Opening Ceremony")]),
            Vec::new(),
        );
        page.school_picker_mut().check("s1");
        page.confirm_school_selection();
        assert_eq!(page.form().school_display, "");

        page.set_schools(vec![School::new("s1", "North High")]);
        page.school_picker_mut().check("s1");
        page.confirm_school_selection();
        assert_eq!(page.form().school_display, "North High");
        assert_eq!(page.selection().selected_school(), Some("s1"));
    }

    #[test]
    fn clear_form() {
        let mut page = page();
        page.school_picker_mut().check("s1");
        page.confirm_school_selection();
        page.event_picker_mut().check("E1".into());
        page.event_picker_mut().check("E2".into());
        page.confirm_event_selection();
        assert!(page.render_selected_events().contains("Selected Events:"));

        page.clear_registration_form();
        assert!(page.selection().is_empty());
        assert_eq!(page.form(), &RegistrationForm::default());
        assert_eq!(page.render_selected_events(), "");
        assert!(!page.render_event_picker().contains("checked"));
    }

    #[test]
    fn page_before_load() {
        let mut page = Page::new();
        assert!(page.render_programme().contains("Loading programmes..."));
        page.event_picker_mut().check("E1".into());
        page.confirm_event_selection();
        assert!(page.selection().selected_events().is_empty());
    }
}
