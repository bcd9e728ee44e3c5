use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::data_models::SearchResult;
use crate::error::ApiError;

/// Data access used by the effects. Implemented over HTTP by [`HttpSearchClient`]
/// and by stubs in tests.
pub trait SearchApi: Send + Sync + 'static {
    fn fetch_suggestions(&self) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    fn fetch_results(
        &self,
        search_term: &str,
    ) -> impl Future<Output = Result<SearchResult, ApiError>> + Send;
}

pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str) -> Result<HttpSearchClient, ApiError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<HttpSearchClient, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(HttpSearchClient { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn suggestions_url(&self) -> Result<Url, ApiError> {
        self.endpoint("/search/suggestions")
    }

    pub fn search_url(&self, search_term: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/search")?;
        url.query_pairs_mut().append_pair("query", search_term);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        log::debug!("GET {url}");
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(res.json::<T>().await?)
    }
}

impl SearchApi for HttpSearchClient {
    async fn fetch_suggestions(&self) -> Result<Vec<String>, ApiError> {
        let url = self.suggestions_url()?;
        self.get_json(url).await
    }

    async fn fetch_results(&self, search_term: &str) -> Result<SearchResult, ApiError> {
        let url = self.search_url(search_term)?;
        self.get_json(url).await
    }
}
