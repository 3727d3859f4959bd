use listkeeper_core::{ChecklistItem, ChecklistItemPatch};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to reach Listkeeper server: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Typed client for the checklist HTTP API
#[derive(Debug, Clone)]
pub struct ChecklistClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChecklistClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/api/checklist", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/checklist/{}", self.base_url, id)
    }

    pub async fn list_items(&self) -> ClientResult<Vec<ChecklistItem>> {
        let response = self.client.get(self.items_url()).send().await?;
        read_list(response).await
    }

    pub async fn get_item(&self, id: i64) -> ClientResult<ChecklistItem> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn create_item(&self, item: &ChecklistItem) -> ClientResult<ChecklistItem> {
        let response = self.client.post(self.items_url()).json(item).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn create_items(&self, items: &[ChecklistItem]) -> ClientResult<Vec<ChecklistItem>> {
        let response = self
            .client
            .post(format!("{}/bulk", self.items_url()))
            .json(items)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn update_item(
        &self,
        id: i64,
        patch: &ChecklistItemPatch,
    ) -> ClientResult<ChecklistItem> {
        let response = self.client.put(self.item_url(id)).json(patch).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Returns the server's confirmation text
    pub async fn delete_item(&self, id: i64) -> ClientResult<String> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Ok(check_status(response).await?.text().await?)
    }

    pub async fn search_items(&self, keyword: &str) -> ClientResult<Vec<ChecklistItem>> {
        let response = self
            .client
            .get(format!("{}/search", self.items_url()))
            .query(&[("keyword", keyword)])
            .send()
            .await?;
        read_list(response).await
    }

    /// Only the completion flag changes; absent title and description are kept
    pub async fn set_completed(&self, id: i64, completed: bool) -> ClientResult<ChecklistItem> {
        let patch = ChecklistItemPatch {
            title: None,
            description: None,
            completed,
        };
        self.update_item(id, &patch).await
    }

    /// Change title and/or description while keeping the current completion flag
    pub async fn edit_item(
        &self,
        id: i64,
        title: Option<String>,
        description: Option<String>,
    ) -> ClientResult<ChecklistItem> {
        let current = self.get_item(id).await?;
        let patch = ChecklistItemPatch {
            title,
            description,
            completed: current.completed,
        };
        self.update_item(id, &patch).await
    }
}

/// 204 means an empty list
async fn read_list(response: Response) -> ClientResult<Vec<ChecklistItem>> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Vec::new());
    }
    Ok(check_status(response).await?.json().await?)
}

async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("API error response ({}): {}", status, body);

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
