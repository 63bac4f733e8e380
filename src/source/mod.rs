//! Where programme documents come from
//!
//! A document is either a local file ([`FileSource`]) or a resource on a web server ([`RemoteSource`]).
//! Tests and embedders can also provide one directly, with [`StaticSource`].

pub mod file_source;
pub mod remote_source;

pub use file_source::FileSource;
pub use remote_source::RemoteSource;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::entry::ProgrammeEntry;
use crate::error::DataLoadFailure;
use crate::traits::ProgrammeSource;


/// A school visitors can register from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub label: String,
}

impl School {
    pub fn new<S: ToString, T: ToString>(id: S, label: T) -> Self {
        Self { id: id.to_string(), label: label.to_string() }
    }
}

/// The content of a programme document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgrammeDocument {
    #[serde(rename = "programmeData")]
    pub programme_data: Vec<ProgrammeEntry>,
    #[serde(default)]
    pub schools: Vec<School>,
}

impl ProgrammeDocument {
    pub fn from_json(content: &str) -> Result<Self, DataLoadFailure> {
        Ok(serde_json::from_str(content)?)
    }
}


/// A source that already holds its document (or its failure)
pub struct StaticSource {
    content: StaticContent,
}

enum StaticContent {
    Document(ProgrammeDocument),
    Json(String),
}

impl StaticSource {
    pub fn new(document: ProgrammeDocument) -> Self {
        Self { content: StaticContent::Document(document) }
    }

    /// A source whose document is parsed from `json` every time it is fetched
    pub fn from_json<S: ToString>(json: S) -> Self {
        Self { content: StaticContent::Json(json.to_string()) }
    }
}

#[async_trait]
impl ProgrammeSource for StaticSource {
    async fn fetch(&self) -> Result<ProgrammeDocument, DataLoadFailure> {
        match &self.content {
            StaticContent::Document(doc) => Ok(doc.clone()),
            StaticContent::Json(json) => ProgrammeDocument::from_json(json),
        }
    }

    fn describe(&self) -> String {
        String::from("<in-memory document>")
    }
}


/// Builds the source matching a location: `http://` and `https://` locations are fetched from a server, anything else is a file path
pub fn open_source(location: &str) -> Result<Box<dyn ProgrammeSource + Send + Sync>, DataLoadFailure> {
    let location = location.trim();
    if location.is_empty() {
        return Err(DataLoadFailure::Location(location.to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        let url = Url::parse(location).map_err(|_| DataLoadFailure::Location(location.to_string()))?;
        return Ok(Box::new(RemoteSource::new(url)));
    }

    Ok(Box::new(FileSource::new(PathBuf::from(location))))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_without_schools() {
        let doc = ProgrammeDocument::from_json(r#"{"programmeData": []}"#).unwrap();
        assert!(doc.programme_data.is_empty());
        assert!(doc.schools.is_empty());
    }

    #[test]
    fn document_written_back() {
        let doc = ProgrammeDocument {
            programme_data: vec![
                ProgrammeEntry::new("E1", 11, "09:00 - 10:00", "Opening Ceremony")
                    .with_venue("Main Hall")
                    .with_speakers(vec!["Dr. A".to_string()]),
                ProgrammeEntry::new(String::from("7"), 12, "10:30", "Tea Break"),
            ],
            schools: vec![School::new("north", "North High School")],
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains(r#""programmeData":[{"programmeId":"E1","day":11"#));
        assert!(json.contains(r#""schools":[{"id":"north","label":"North High School"}]"#));
        assert!(!json.contains("language"));

        assert_eq!(ProgrammeDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn document_missing_programme_is_an_error() {
        let err = ProgrammeDocument::from_json(r#"{"schools": []}"#).unwrap_err();
        assert!(matches!(err, DataLoadFailure::Parse(_)));
    }

    #[test]
    fn sources_by_location() {
        assert_eq!(open_source("https://example.com/data.json").unwrap().describe(), "https://example.com/data.json");
        assert_eq!(open_source("data.json").unwrap().describe(), "data.json");
        assert!(open_source("  ").is_err());
        assert!(open_source("http://[::1").is_err());
    }
}
