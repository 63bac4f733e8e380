use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::DataLoadFailure;
use crate::source::ProgrammeDocument;
use crate::traits::ProgrammeSource;

/// A programme document stored in a local file
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgrammeSource for FileSource {
    async fn fetch(&self) -> Result<ProgrammeDocument, DataLoadFailure> {
        log::debug!("Reading programme document from {:?}", self.path);
        let content = tokio::fs::read_to_string(&self.path).await
            .map_err(|source| DataLoadFailure::Io { path: self.describe(), source })?;
        ProgrammeDocument::from_json(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
