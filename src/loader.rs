//! Loading a programme at startup, and keeping track of how it went

use std::fmt::{Display, Error, Formatter};

use crate::programme::Programme;
use crate::source::School;
use crate::traits::ProgrammeSource;

/// Where the startup load stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// Nothing has been loaded (yet)
    Loading,
    /// The document has been loaded
    Loaded{ programme: Programme, schools: Vec<School> },
    /// The document could not be loaded. This is permanent until the page is reloaded
    Failed{ reason: String },
}

impl Display for LoadState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            LoadState::Loading => write!(f, "Loading"),
            LoadState::Loaded{programme, schools} => write!(f, "Loaded {} entries and {} schools", programme.entries().len(), schools.len()),
            LoadState::Failed{reason} => write!(f, "Failed: {}", reason),
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::Loading
    }
}

impl LoadState {
    pub fn programme(&self) -> Option<&Programme> {
        match self {
            LoadState::Loaded{programme, ..} => Some(programme),
            _ => None,
        }
    }

    pub fn schools(&self) -> &[School] {
        match self {
            LoadState::Loaded{schools, ..} => schools,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed{..})
    }
}

/// Fetches the document from `source` once.
///
/// Failures are logged and turned into [`LoadState::Failed`], they are never retried.
pub async fn load_programme<S>(source: &S) -> LoadState
where
    S: ProgrammeSource + ?Sized,
{
    log::info!("Loading programme from {}", source.describe());
    match source.fetch().await {
        Err(err) => {
            log::error!("Error loading programme data from {}: {}", source.describe(), err);
            LoadState::Failed{ reason: err.to_string() }
        },
        Ok(document) => {
            let programme = Programme::new(document.programme_data);
            log::info!("Loaded {} programme entries over {} days", programme.entries().len(), programme.days().len());
            LoadState::Loaded{ programme, schools: document.schools }
        },
    }
}
