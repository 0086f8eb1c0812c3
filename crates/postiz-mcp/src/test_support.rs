//! In-memory `SchedulingApi` that records every call.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use postiz_client::{
    ClientError, ClientResult, CreatePostRequest, DateRange, MediaReference, PostsResponse,
    SchedulingApi,
};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    ListIntegrations,
    CreatePost(Value),
    ListPosts(DateRange),
    DeletePost(String),
    UploadMedia(PathBuf),
}

#[derive(Debug)]
pub(crate) struct FakeApi {
    integrations: Value,
    posts: Vec<Value>,
    failure: Option<(u16, String)>,
    failing_delete: Option<String>,
    calls: Mutex<Vec<ApiCall>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self {
            integrations: json!([]),
            posts: Vec::new(),
            failure: None,
            failing_delete: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_integrations(mut self, integrations: Value) -> Self {
        self.integrations = integrations;
        self
    }

    pub(crate) fn with_posts(mut self, posts: Vec<Value>) -> Self {
        self.posts = posts;
        self
    }

    /// Every call fails with this status and body.
    pub(crate) fn failing_with(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    /// Only the DELETE of this post id fails.
    pub(crate) fn failing_delete_of(mut self, post_id: &str) -> Self {
        self.failing_delete = Some(post_id.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, body)) => Err(ClientError::api_error(*status, body.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SchedulingApi for FakeApi {
    async fn list_integrations(&self) -> ClientResult<Value> {
        self.record(ApiCall::ListIntegrations)?;
        Ok(self.integrations.clone())
    }

    async fn create_post(&self, request: &CreatePostRequest) -> ClientResult<Value> {
        self.record(ApiCall::CreatePost(serde_json::to_value(request)?))?;
        Ok(json!([{"postId": "created-1", "integration": "A"}]))
    }

    async fn list_posts(&self, range: &DateRange) -> ClientResult<PostsResponse> {
        self.record(ApiCall::ListPosts(range.clone()))?;
        Ok(serde_json::from_value(json!({ "posts": self.posts }))?)
    }

    async fn delete_post(&self, post_id: &str) -> ClientResult<Value> {
        self.record(ApiCall::DeletePost(post_id.to_string()))?;
        if self.failing_delete.as_deref() == Some(post_id) {
            return Err(ClientError::api_error(500, "delete failed"));
        }
        Ok(Value::Null)
    }

    async fn upload_media(&self, file_path: &Path) -> ClientResult<MediaReference> {
        self.record(ApiCall::UploadMedia(file_path.to_path_buf()))?;
        Ok(MediaReference {
            id: "media-1".to_string(),
            path: "https://uploads.postiz.com/media-1.png".to_string(),
        })
    }
}
