//! HTML fragments for the programme page
//!
//! These functions only turn view-model values into markup. They never change any state.

use std::fmt::Write;

use crate::day::day_label;
use crate::entry::ProgrammeEntry;
use crate::form::SelectedEventLine;
use crate::loader::LoadState;
use crate::programme::{DaySection, Programme};
use crate::registration::{Confirmation, RegisteredEvents};
use crate::selection::EventPicker;
use crate::settings::{LOADING_NOTICE, LOAD_ERROR_NOTICE};
use crate::utils::escape_html;


/// The content of the programme list area
pub fn programme_list(state: &LoadState, day: Option<u32>) -> String {
    match state {
        LoadState::Failed{..} => format!(r#"<p class="error">{}</p>"#, LOAD_ERROR_NOTICE),
        LoadState::Loaded{programme, ..} if programme.is_empty() == false => {
            programme.sections(day)
                .iter()
                .map(day_section)
                .collect()
        },
        _ => format!(r#"<div class="loading">{}</div>"#, LOADING_NOTICE),
    }
}

/// One day: its header, then its entries
pub fn day_section(section: &DaySection<'_>) -> String {
    let mut html = String::new();
    let _ = write!(html,
        r#"<div class="day-section" data-day="{}"><div class="day-header"><h3>{}</h3><div class="day-date">{}</div></div>"#,
        section.day,
        escape_html(&section.label.heading()),
        escape_html(&section.label.date),
    );
    for entry in &section.entries {
        html.push_str(&programme_item(entry));
    }
    html.push_str("</div>");
    html
}

/// A single entry. Breaks get the `break-item` class
pub fn programme_item(entry: &ProgrammeEntry) -> String {
    let class = if entry.is_break() { "programme-item break-item" } else { "programme-item" };
    let mut html = String::new();
    let _ = write!(html, r#"<div class="{}" data-id="{}"><div class="programme-header">"#, class, escape_html(entry.id().as_str()));
    let _ = write!(html, r#"<div class="programme-time">{}</div>"#, escape_html(entry.time()));
    if let Some(venue) = entry.venue() {
        let _ = write!(html, r#"<div class="programme-venue">{}</div>"#, escape_html(venue));
    }
    if let Some(language) = entry.language() {
        let _ = write!(html, r#"<div class="programme-language">{}</div>"#, escape_html(language));
    }
    html.push_str("</div>");

    let _ = write!(html, r#"<div class="programme-title">{}</div>"#, escape_html(entry.topic()));
    if let Some(synopsis) = entry.synopsis() {
        let _ = write!(html, r#"<div class="programme-synopsis">{}</div>"#, escape_html(synopsis));
    }
    if entry.speakers().is_empty() == false {
        let _ = write!(html, r#"<div class="programme-speaker"><strong>Speaker(s):</strong> {}</div>"#, escape_html(&entry.speakers().join(", ")));
    }
    if let Some(facilitator) = entry.facilitator() {
        let _ = write!(html, r#"<div class="programme-facilitator"><strong>Facilitator:</strong> {}</div>"#, escape_html(facilitator));
    }
    if let Some(note) = entry.note() {
        let _ = write!(html, r#"<div class="programme-note">{}</div>"#, escape_html(note));
    }
    html.push_str("</div>");
    html
}

/// The content of the event picker: selectable entries grouped by day, with their checked state
pub fn event_checkbox_list(programme: &Programme, picker: &EventPicker) -> String {
    let mut html = String::new();
    for section in programme.event_catalogue() {
        let _ = write!(html, r#"<div class="event-day-header">{}</div>"#, escape_html(&section.label.to_string()));
        for entry in &section.entries {
            let id = escape_html(entry.id().as_str());
            let checked = if picker.is_checked(entry.id()) { " checked" } else { "" };
            let _ = write!(html,
                r#"<div class="checkbox-item"><input type="checkbox" name="event" value="{id}" id="event-{id}"{checked}><label for="event-{id}"><span class="event-time">{time}</span><span class="event-topic">{topic}</span></label></div>"#,
                id = id,
                checked = checked,
                time = escape_html(entry.time()),
                topic = escape_html(entry.topic()),
            );
        }
    }
    html
}

/// The "Selected Events" list. `None` (a hidden list) renders nothing
pub fn selected_events_list(lines: Option<&[SelectedEventLine]>) -> String {
    let lines = match lines {
        None => return String::new(),
        Some(lines) => lines,
    };

    let mut html = String::from(r#"<div class="selected-events-header">Selected Events:</div>"#);
    for line in lines {
        let _ = write!(html,
            r#"<div class="selected-event-item"><span class="event-number">{}.</span><div class="event-details"><div class="event-name">{}</div><div class="event-info"><span class="event-date">{}</span><span class="event-time-small">{}</span></div></div></div>"#,
            line.number,
            escape_html(&line.topic),
            escape_html(&line.date),
            escape_html(&line.time),
        );
    }
    html
}

/// The registration success message
pub fn success_message(confirmation: &Confirmation) -> String {
    let events = match &confirmation.events {
        RegisteredEvents::Single(topic) => format!("<strong>{}</strong>", escape_html(topic)),
        RegisteredEvents::Many(topics) => {
            let items: String = topics.iter()
                .map(|topic| format!("<li>{}</li>", escape_html(topic)))
                .collect();
            format!("<ul>{}</ul>", items)
        },
    };
    format!(
        "<strong>✓ Registration Successful!</strong><br>Thank you, {}! You have successfully registered for:<br>{}A confirmation email will be sent to {}.",
        escape_html(&confirmation.name),
        events,
        escape_html(&confirmation.email),
    )
}

/// A plain-text rendition of the programme, e.g. for a terminal
pub fn programme_text(programme: &Programme, day: Option<u32>) -> String {
    let mut text = String::new();
    for section in programme.sections(day) {
        let _ = writeln!(text, "{}", day_label(section.day));
        for entry in &section.entries {
            let marker = if entry.is_break() { "  " } else { "* " };
            let _ = writeln!(text, "  {}{}\t{}", marker, entry.time(), entry.topic());
            if let Some(venue) = entry.venue() {
                let _ = writeln!(text, "        {}", venue);
            }
            if entry.speakers().is_empty() == false {
                let _ = writeln!(text, "        Speaker(s): {}", entry.speakers().join(", "));
            }
        }
    }
    text
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::School;

    fn loaded(entries: Vec<ProgrammeEntry>) -> LoadState {
        LoadState::Loaded{ programme: Programme::new(entries), schools: vec![School::new("s1", "North High")] }
    }

    #[test]
    fn loading_and_error_notices() {
        assert_eq!(programme_list(&LoadState::Loading, None), r#"<div class="loading">Loading programmes...</div>"#);
        assert_eq!(programme_list(&loaded(Vec::new()), None), r#"<div class="loading">Loading programmes...</div>"#);
        assert_eq!(
            programme_list(&LoadState::Failed{ reason: "boom".into() }, None),
            r#"<p class="error">Error loading programme data. Please refresh the page.</p>"#
        );
    }

    #[test]
    fn sections_and_breaks() {
        let state = loaded(vec![
            ProgrammeEntry::new("B", 12, "10:30", "Tea Break"),
            ProgrammeEntry::new("A", 11, "09:00", "Opening <Ceremony>")
                .with_venue("Hall 1")
                .with_speakers(vec!["Dr. A".into(), "Prof. B".into()]),
        ]);
        let html = programme_list(&state, None);
        let day_1 = html.find("<h3>Day 1</h3>").unwrap();
        let day_2 = html.find("<h3>Day 2</h3>").unwrap();
        assert!(day_1 < day_2);
        assert!(html.contains("Opening &lt;Ceremony&gt;"));
        assert!(html.contains(r#"<div class="programme-venue">Hall 1</div>"#));
        assert!(html.contains("<strong>Speaker(s):</strong> Dr. A, Prof. B"));
        assert!(html.contains(r#"<div class="programme-item break-item" data-id="B">"#));
        assert!(html.contains(r#"<div class="programme-item" data-id="A">"#));
        assert!(!html.contains("programme-language"));

        let filtered = programme_list(&state, Some(12));
        assert!(!filtered.contains("Day 1"));
        assert!(filtered.contains("Monday, 11 August 2025") == false);
        assert!(filtered.contains("Tuesday, 12 August 2025"));
    }

    #[test]
    fn checkbox_list_skips_breaks() {
        let programme = Programme::new(vec![
            ProgrammeEntry::new("A", 11, "09:00", "Opening"),
            ProgrammeEntry::new("B", 11, "10:30", "Lunch"),
        ]);
        let mut picker = EventPicker::default();
        picker.check("A".into());
        let html = event_checkbox_list(&programme, &picker);
        assert!(html.contains("Day 1 - Monday, 11 August 2025"));
        assert!(html.contains(r#"value="A" id="event-A" checked>"#));
        assert!(!html.contains(r#"value="B""#));
    }

    #[test]
    fn selected_list() {
        assert_eq!(selected_events_list(None), "");
        let lines = vec![SelectedEventLine { number: 1, topic: "Keynote".into(), date: "Monday, 11 August 2025".into(), time: "10:00".into() }];
        let html = selected_events_list(Some(&lines[..]));
        assert!(html.starts_with(r#"<div class="selected-events-header">Selected Events:</div>"#));
        assert!(html.contains(r#"<span class="event-number">1.</span>"#));
    }

    #[test]
    fn success_messages() {
        let single = Confirmation { name: "Ada".into(), email: "ada@example.com".into(), events: RegisteredEvents::Single("Keynote".into()) };
        assert!(success_message(&single).contains("<strong>Keynote</strong>"));

        let many = Confirmation { events: RegisteredEvents::Many(vec!["Keynote".into(), "Panel".into()]), ..single };
        assert!(success_message(&many).contains("<ul><li>Keynote</li><li>Panel</li></ul>"));
    }
}
