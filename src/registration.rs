//! The registration flow
//!
//! Registering never leaves the process: a valid form only produces a confirmation message,
//! which is hidden again after [`SUCCESS_MESSAGE_DURATION`](crate::settings::SUCCESS_MESSAGE_DURATION).

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Duration, Utc};

use crate::entry::ProgrammeId;
use crate::error::{RequiredField, ValidationFailure};
use crate::form::RegistrationForm;
use crate::programme::Programme;
use crate::selection::{EventPicker, SchoolPicker, SelectionState};
use crate::settings::{MISSING_FIELDS_NOTICE, SUCCESS_MESSAGE_DURATION};


/// What has been registered for, as shown in the confirmation message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisteredEvents {
    /// A single event, shown inline
    Single(String),
    /// Several events, shown as a list
    Many(Vec<String>),
}

/// The content of a successful registration message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub name: String,
    pub email: String,
    pub events: RegisteredEvents,
}

impl Display for Confirmation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Registration Successful!")?;
        writeln!(f, "Thank you, {}! You have successfully registered for:", self.name)?;
        match &self.events {
            RegisteredEvents::Single(topic) => writeln!(f, "{}", topic)?,
            RegisteredEvents::Many(topics) => {
                for topic in topics {
                    writeln!(f, "  - {}", topic)?;
                }
            },
        }
        write!(f, "A confirmation email will be sent to {}.", self.email)
    }
}

/// Required to hide a confirmation message.
/// Only the ticket of the latest confirmation can hide it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket {
    generation: u64,
    due: DateTime<Utc>,
}

impl HideTicket {
    /// When the message should be hidden
    pub fn due(&self) -> DateTime<Utc> {
        self.due
    }
}

/// The registration state machine
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationState {
    Idle,
    Submitting,
    /// The confirmation message is displayed
    Success{ confirmation: Confirmation, ticket: HideTicket },
    Rejected(ValidationFailure),
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::Idle
    }
}


/// Drives registrations for a page
#[derive(Clone, Debug, Default)]
pub struct Registration {
    state: RegistrationState,
    generation: u64,
}

/// Returns the required fields of `form` that are empty (after trimming)
pub fn missing_fields(form: &RegistrationForm) -> Vec<RequiredField> {
    let checks = [
        (RequiredField::Name, &form.name),
        (RequiredField::Email, &form.email),
        (RequiredField::School, &form.school_display),
        (RequiredField::Events, &form.event_ids),
    ];
    checks.iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect()
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    /// The confirmation currently displayed, if any
    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.state {
            RegistrationState::Success{confirmation, ..} => Some(confirmation),
            _ => None,
        }
    }

    /// Submits the form.
    ///
    /// When a required field is empty, nothing changes and the failure is returned so that it can be notified to the visitor.
    /// Otherwise, the confirmation is displayed, and the form, the selections and the pickers are cleared.
    /// The returned ticket hides the confirmation, unless another submission succeeds in between.
    pub fn submit(
        &mut self,
        now: DateTime<Utc>,
        form: &mut RegistrationForm,
        selection: &mut SelectionState,
        pickers: (&mut SchoolPicker, &mut EventPicker),
        programme: &Programme,
    ) -> Result<HideTicket, ValidationFailure> {
        let previous = self.enter(RegistrationState::Submitting);

        let missing = missing_fields(form);
        if missing.is_empty() == false {
            let failure = ValidationFailure {
                notice: MISSING_FIELDS_NOTICE.to_string(),
                missing,
            };
            log::warn!("Registration rejected: {}", failure);
            self.enter(RegistrationState::Rejected(failure.clone()));
            // Back to where we were, as if nothing happened
            self.enter(previous);
            return Err(failure);
        }

        let topics: Vec<String> = selection.selected_events()
            .iter()
            .map(|id| topic_or_id(programme, id))
            .collect();
        let events = match <[String; 1]>::try_from(topics) {
            Ok([single]) => RegisteredEvents::Single(single),
            Err(topics) => RegisteredEvents::Many(topics),
        };

        let confirmation = Confirmation {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            events,
        };

        self.generation += 1;
        let delay = Duration::from_std(SUCCESS_MESSAGE_DURATION).unwrap_or_else(|_| Duration::seconds(8));
        let ticket = HideTicket { generation: self.generation, due: now + delay };
        log::info!("Registration of {} succeeded, confirmation displayed until {}", confirmation.email, ticket.due);

        form.reset();
        selection.clear();
        pickers.0.uncheck();
        pickers.1.clear();

        self.enter(RegistrationState::Success{ confirmation, ticket });
        Ok(ticket)
    }

    /// Hides the confirmation message, if `ticket` belongs to the one currently displayed.
    /// Returns whether the message has been hidden
    pub fn hide(&mut self, ticket: HideTicket) -> bool {
        let is_current = match &self.state {
            RegistrationState::Success{ticket: current, ..} => *current == ticket,
            _ => false,
        };
        if is_current == false {
            log::debug!("Ignoring a stale confirmation hide (generation {})", ticket.generation);
            return false;
        }
        self.enter(RegistrationState::Idle);
        true
    }

    /// Hides the confirmation message if its time has come.
    /// Returns whether the message has been hidden
    pub fn hide_if_due(&mut self, now: DateTime<Utc>) -> bool {
        let due_ticket = match &self.state {
            RegistrationState::Success{ticket, ..} if ticket.due <= now => *ticket,
            _ => return false,
        };
        self.hide(due_ticket)
    }
}

impl Registration {
    /// Switches to `next`, and returns the previous state
    fn enter(&mut self, next: RegistrationState) -> RegistrationState {
        log::debug!("Registration: {} -> {}", self.state.name(), next.name());
        std::mem::replace(&mut self.state, next)
    }
}

impl RegistrationState {
    fn name(&self) -> &'static str {
        match self {
            RegistrationState::Idle => "idle",
            RegistrationState::Submitting => "submitting",
            RegistrationState::Success{..} => "success",
            RegistrationState::Rejected(_) => "rejected",
        }
    }
}

fn topic_or_id(programme: &Programme, id: &ProgrammeId) -> String {
    programme.find(id)
        .map(|entry| entry.topic().to_string())
        .unwrap_or_else(|| id.to_string())
}
