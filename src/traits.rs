use async_trait::async_trait;

use crate::error::DataLoadFailure;
use crate::source::ProgrammeDocument;

#[async_trait]
pub trait ProgrammeSource {
    /// Fetches and parses the programme document.
    /// This is a one-shot operation that may be long (e.g. for a remote server), and that can fail
    async fn fetch(&self) -> Result<ProgrammeDocument, DataLoadFailure>;

    /// A human-readable description of where the document comes from
    fn describe(&self) -> String;
}
