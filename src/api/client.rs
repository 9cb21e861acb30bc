// src/api/client.rs
//! HTTP client wrapper for the Readeck API.
//!
//! A thin layer over reqwest: authentication headers, the four endpoints
//! the importer needs, and status-code checking. No business logic.

use super::ReadeckRepository;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use crate::model::{Annotation, Bookmark};
use crate::types::{ApiToken, ApiUrl};
use reqwest::{header, Client, Response};

/// A thin wrapper around a reqwest Client for Readeck API requests.
#[derive(Clone)]
pub struct ReadeckHttpClient {
    client: Client,
    base_url: ApiUrl,
}

impl ReadeckHttpClient {
    /// Creates a new HTTP client authenticated against a Readeck instance.
    pub fn new(base_url: ApiUrl, token: &ApiToken) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn create_headers(token: &ApiToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        Ok(headers)
    }

    /// Makes a GET request against an API endpoint path.
    async fn get(&self, endpoint: &str, accept: &'static str) -> Result<Response, AppError> {
        let url = format!("{}/api/{}", self.base_url.as_str(), endpoint);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        check_status(response).await
    }
}

/// Turns a non-success response into a typed error with a body preview.
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body_preview: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
    Err(AppError::ReadeckService {
        status: status.as_u16(),
        body_preview,
    })
}

#[async_trait::async_trait]
impl ReadeckRepository for ReadeckHttpClient {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, AppError> {
        let response = self.get("bookmarks", "application/json").await?;
        Ok(response.json().await?)
    }

    async fn get_article_markdown(&self, bookmark_id: &str) -> Result<String, AppError> {
        let endpoint = format!("bookmarks/{}/article.md", bookmark_id);
        let response = self.get(&endpoint, "text/markdown").await?;
        Ok(response.text().await?)
    }

    async fn get_article_multipart(&self, bookmark_id: &str) -> Result<Vec<u8>, AppError> {
        let endpoint = format!("bookmarks/{}/article", bookmark_id);
        let response = self.get(&endpoint, "multipart/mixed").await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_annotations(&self, bookmark_id: &str) -> Result<Vec<Annotation>, AppError> {
        let endpoint = format!("bookmarks/{}/annotations", bookmark_id);
        let response = self.get(&endpoint, "application/json").await?;
        Ok(response.json().await?)
    }
}
