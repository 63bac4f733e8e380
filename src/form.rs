//! The registration form fields

/// One numbered line of the "Selected Events" list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedEventLine {
    /// 1-based, in selection order
    pub number: usize,
    pub topic: String,
    pub date: String,
    pub time: String,
}

/// The registration form, as a visitor sees it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    /// Only set by the school picker, never typed in
    pub school_display: String,
    /// Only set by the event picker, never typed in
    pub event_display: String,
    /// The hidden field: selected programme IDs, comma-joined.
    /// Only used to tell whether events are selected, the IDs themselves are kept by the selection
    pub event_ids: String,
    /// The detailed list of selected events. `None` when the list is hidden
    pub selected_events_list: Option<Vec<SelectedEventLine>>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every field, and hides the selected events list
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
