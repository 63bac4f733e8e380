use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::error::DataLoadFailure;
use crate::source::ProgrammeDocument;
use crate::traits::ProgrammeSource;

/// A programme document served by a web server
#[derive(Clone, Debug)]
pub struct RemoteSource {
    url: Url,
}

impl RemoteSource {
    /// Create a source. This does not start a connection
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn http_failure(&self, source: reqwest::Error) -> DataLoadFailure {
        DataLoadFailure::Http { url: self.url.to_string(), source }
    }
}

#[async_trait]
impl ProgrammeSource for RemoteSource {
    async fn fetch(&self) -> Result<ProgrammeDocument, DataLoadFailure> {
        log::debug!("Fetching programme document from {}", self.url);
        let res = reqwest::Client::new()
            .get(self.url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| self.http_failure(err))?;

        // Non-success statuses are failures, even if they come with a body
        let res = res.error_for_status().map_err(|err| self.http_failure(err))?;
        let text = res.text().await.map_err(|err| self.http_failure(err))?;
        ProgrammeDocument::from_json(&text)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
