//! Programme entries (one scheduled session each)

use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Matches "break" as a whole word, so that e.g. "breakthrough" is not a break.
/// Word boundaries are ASCII ones: a non-ASCII letter next to "break" does not make it part of a word
static BREAK_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\b)break(?-u:\b)").unwrap(/* this is a valid constant regex */));

/// Tells whether a topic describes a recess (tea break, lunch or any other break).
///
/// Break entries are styled differently when rendered, and can never be picked for registration.
/// This is case-insensitive, and matches when the topic
/// * is exactly "tea break" or "lunch",
/// * contains "tea break",
/// * or contains "break" as a standalone word.
pub fn is_break_entry(topic: &str) -> bool {
    let topic = topic.to_lowercase();
    topic == "tea break"
        || topic == "lunch"
        || topic.contains("tea break")
        || BREAK_WORD.is_match(topic.as_bytes())
}


/// The identifier of a programme entry, as found in the programme document
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgrammeId {
    content: String,
}

impl ProgrammeId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for ProgrammeId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}
impl From<String> for ProgrammeId {
    fn from(s: String) -> Self {
        Self { content: s }
    }
}

impl Display for ProgrammeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ProgrammeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde.
/// Some documents use numbers as identifiers, they are accepted as well.
impl<'de> Deserialize<'de> for ProgrammeId {
    fn deserialize<D>(deserializer: D) -> Result<ProgrammeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        let content = match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };
        Ok(ProgrammeId{ content })
    }
}


/// A scheduled session of the programme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeEntry {
    programme_id: ProgrammeId,
    /// The day code (e.g. `11` for the 11th)
    day: u32,
    /// A display string, e.g. "09:00 - 10:30". This is never parsed
    time: String,
    topic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "one_or_many")]
    speaker: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    facilitator: Option<String>,
}

impl ProgrammeEntry {
    /// Create an entry with only its mandatory fields
    pub fn new<I: Into<ProgrammeId>, S: ToString, T: ToString>(id: I, day: u32, time: S, topic: T) -> Self {
        Self {
            programme_id: id.into(),
            day,
            time: time.to_string(),
            topic: topic.to_string(),
            venue: None,
            language: None,
            synopsis: None,
            note: None,
            speaker: Vec::new(),
            facilitator: None,
        }
    }

    pub fn with_venue<S: ToString>(mut self, venue: S) -> Self { self.venue = Some(venue.to_string()); self }
    pub fn with_language<S: ToString>(mut self, language: S) -> Self { self.language = Some(language.to_string()); self }
    pub fn with_synopsis<S: ToString>(mut self, synopsis: S) -> Self { self.synopsis = Some(synopsis.to_string()); self }
    pub fn with_note<S: ToString>(mut self, note: S) -> Self { self.note = Some(note.to_string()); self }
    pub fn with_speakers(mut self, speakers: Vec<String>) -> Self { self.speaker = speakers; self }
    pub fn with_facilitator<S: ToString>(mut self, facilitator: S) -> Self { self.facilitator = Some(facilitator.to_string()); self }

    pub fn id(&self) -> &ProgrammeId   { &self.programme_id }
    pub fn day(&self) -> u32           { self.day }
    pub fn time(&self) -> &str         { &self.time }
    pub fn topic(&self) -> &str        { &self.topic }
    pub fn venue(&self) -> Option<&str>       { self.venue.as_deref().filter(|s| !s.is_empty()) }
    pub fn language(&self) -> Option<&str>    { self.language.as_deref().filter(|s| !s.is_empty()) }
    pub fn synopsis(&self) -> Option<&str>    { self.synopsis.as_deref().filter(|s| !s.is_empty()) }
    pub fn note(&self) -> Option<&str>        { self.note.as_deref().filter(|s| !s.is_empty()) }
    pub fn facilitator(&self) -> Option<&str> { self.facilitator.as_deref().filter(|s| !s.is_empty()) }
    pub fn speakers(&self) -> &[String]       { &self.speaker }

    /// See [`is_break_entry`]
    pub fn is_break(&self) -> bool {
        is_break_entry(&self.topic)
    }

    /// Whether this entry can be picked for registration
    pub fn is_selectable(&self) -> bool {
        !self.is_break() && !self.topic.trim().is_empty()
    }
}

/// Speakers are usually a list, but a lone string is accepted too
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}
