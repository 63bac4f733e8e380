//! The two kinds of failures a programme page can run into

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// The programme document could not be fetched or understood.
///
/// There is no retry: a page that hits this stays in its error state until it is reloaded.
#[derive(Error, Debug)]
pub enum DataLoadFailure {
    #[error("unable to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid programme document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid data location {0:?}")]
    Location(String),
}

/// A form field that must be filled before registering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    School,
    Events,
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Email => write!(f, "email"),
            RequiredField::School => write!(f, "school"),
            RequiredField::Events => write!(f, "events"),
        }
    }
}

/// Some required registration fields were empty at submit time.
/// Nothing has been submitted and nothing has changed.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{} (missing: {})", .notice, join_fields(.missing))]
pub struct ValidationFailure {
    pub notice: String,
    pub missing: Vec<RequiredField>,
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields.iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
