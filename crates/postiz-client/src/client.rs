//! HTTP gateway to the Postiz public API.
//!
//! [`PostizClient`] issues exactly one authenticated request per call and maps
//! non-success responses into [`ClientError`]. There is no retry and no
//! timeout at this layer.

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{CreatePostRequest, DateRange, Integration, MediaReference, PostsResponse};

/// Endpoint receiving multipart uploads.
const UPLOAD_ENDPOINT: &str = "/upload";

/// Operations the tool handlers need from the scheduling service.
#[async_trait]
pub trait SchedulingApi: Send + Sync + std::fmt::Debug {
    /// `GET /integrations`, returned verbatim.
    async fn list_integrations(&self) -> ClientResult<Value>;

    /// `POST /posts`.
    async fn create_post(&self, request: &CreatePostRequest) -> ClientResult<Value>;

    /// `GET /posts?startDate=..&endDate=..`.
    async fn list_posts(&self, range: &DateRange) -> ClientResult<PostsResponse>;

    /// `DELETE /posts/{id}`.
    async fn delete_post(&self, post_id: &str) -> ClientResult<Value>;

    /// Multipart `POST /upload` of a local file.
    async fn upload_media(&self, file_path: &Path) -> ClientResult<MediaReference>;

    /// Connected integrations, parsed.
    async fn integrations(&self) -> ClientResult<Vec<Integration>> {
        let raw = self.list_integrations().await?;
        Ok(serde_json::from_value(raw)?)
    }
}

/// Authenticated Postiz API client.
#[derive(Debug)]
pub struct PostizClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PostizClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one JSON request against `{base}/api/public/v1{endpoint}`.
    ///
    /// An empty success body is returned as `Value::Null`.
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        self.send(&self.config.endpoint_url(endpoint), method, body)
            .await
    }

    /// `{base}/api/public/v1{collection}/{segment}` with `segment` percent-encoded
    /// as a single path segment.
    pub fn resource_url(&self, collection: &str, segment: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.config.endpoint_url(collection))
            .map_err(|e| ClientError::config_error(format!("Invalid Postiz URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::config_error("Postiz URL cannot carry a path"))?
            .push(segment);
        Ok(url)
    }

    async fn send(&self, url: &str, method: Method, body: Option<&Value>) -> ClientResult<Value> {
        debug!(%method, url, "Postiz API request");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.config.api_key())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            warn!(%method, url, status = status.as_u16(), "Postiz API request failed");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        parse_json_body(response).await
    }

    /// Upload a local file as multipart field `file`.
    pub async fn upload_file(&self, file_path: &Path) -> ClientResult<MediaReference> {
        let bytes = tokio::fs::read(file_path)
            .await
            .map_err(|source| ClientError::IoError {
                path: file_path.to_path_buf(),
                source,
            })?;
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        debug!(file = %file_path.display(), size = bytes.len(), "Uploading media");

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self
            .http
            .post(self.config.endpoint_url(UPLOAD_ENDPOINT))
            .header(AUTHORIZATION, self.config.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            warn!(status = status.as_u16(), "Postiz media upload failed");
            return Err(ClientError::upload_failed(status.as_u16(), body));
        }

        Ok(response.json::<MediaReference>().await?)
    }
}

#[async_trait]
impl SchedulingApi for PostizClient {
    async fn list_integrations(&self) -> ClientResult<Value> {
        self.request("/integrations", Method::GET, None).await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> ClientResult<Value> {
        let body = serde_json::to_value(request)?;
        self.request("/posts", Method::POST, Some(&body)).await
    }

    async fn list_posts(&self, range: &DateRange) -> ClientResult<PostsResponse> {
        let endpoint = format!("/posts?{}", range.to_query());
        let raw = self.request(&endpoint, Method::GET, None).await?;
        if raw.is_null() {
            return Ok(PostsResponse::default());
        }
        Ok(serde_json::from_value(raw)?)
    }

    async fn delete_post(&self, post_id: &str) -> ClientResult<Value> {
        let url = self.resource_url("/posts", post_id)?;
        self.send(url.as_str(), Method::DELETE, None).await
    }

    async fn upload_media(&self, file_path: &Path) -> ClientResult<MediaReference> {
        self.upload_file(file_path).await
    }
}

async fn error_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

async fn parse_json_body(response: Response) -> ClientResult<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
