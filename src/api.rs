//! HTTP client for the kiosk API.
//!
//! Every call either yields the decoded body or a [`KioskError`]. Writes only
//! acknowledge; callers refetch to see the server's copy.

use std::time::Duration;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use crate::error::KioskError;
use crate::records::{Ack, Editable, Resource, SessionUser, StatusReport, Student};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct KioskApi {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Deserialize)]
struct LookupBody {
    #[serde(default)]
    found: bool,
    data: Option<Student>,
}

#[derive(Deserialize)]
struct LoginBody {
    user: SessionUser,
}

impl KioskApi {
    pub fn new(base_url: &str) -> Result<Self, KioskError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Base URL plus percent-encoded path segments.
    fn segment_url(&self, segments: &[&str]) -> Result<Url, KioskError> {
        let invalid = || KioskError::Network(format!("Invalid API URL: {}", self.base_url));
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn fetch_status(&self) -> Result<StatusReport, KioskError> {
        let response = self.client.get(self.url("/teacher/status")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn fetch_all<R: Resource>(&self) -> Result<Vec<R>, KioskError> {
        let response = self.client.get(self.url(R::LIST_PATH)).send().await?;
        let listing: R::Listing = check(response).await?.json().await?;
        let items = R::unpack(listing);
        tracing::debug!("Fetched {} item(s) from {}", items.len(), R::LIST_PATH);
        Ok(items)
    }

    /// `Ok(None)` when the server reports the student as missing.
    pub async fn fetch_one(&self, student_id: &str) -> Result<Option<Student>, KioskError> {
        let response = self
            .client
            .get(self.segment_url(&["student", student_id.trim()])?)
            .send()
            .await?;
        match check(response).await {
            Ok(response) => {
                let body: LookupBody = response.json().await?;
                Ok(if body.found { body.data } else { None })
            }
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn create<R: Editable>(&self, record: &R) -> Result<Ack, KioskError> {
        let response = self.client.post(self.url(R::ADD_PATH)).json(record).send().await?;
        let ack = ack(response).await?;
        tracing::info!("Created {} {}", R::NOUN, record.key());
        Ok(ack)
    }

    pub async fn update<R: Editable>(&self, record: &R) -> Result<Ack, KioskError> {
        let response = self.client.put(self.url(R::UPDATE_PATH)).json(record).send().await?;
        let ack = ack(response).await?;
        tracing::info!("Updated {} {}", R::NOUN, record.key());
        Ok(ack)
    }

    pub async fn delete_one<R: Editable>(&self, key: &str) -> Result<Ack, KioskError> {
        let response = self
            .client
            .delete(self.url(R::DELETE_PATH))
            .query(&[(R::KEY_PARAM, key)])
            .send()
            .await?;
        let ack = ack(response).await?;
        tracing::info!("Deleted {} {}", R::NOUN, key);
        Ok(ack)
    }

    /// One request for the whole batch.
    pub async fn delete_many<R: Editable>(&self, keys: &[String]) -> Result<Ack, KioskError> {
        let mut body = Map::new();
        body.insert(R::KEYS_FIELD.to_string(), json!(keys));
        let response = self
            .client
            .post(self.url(R::DELETE_MANY_PATH))
            .json(&Value::Object(body))
            .send()
            .await?;
        let ack = ack(response).await?;
        tracing::info!("Bulk deleted {:?} {}(s)", ack.deleted_count.unwrap_or(keys.len() as u64), R::NOUN);
        Ok(ack)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, KioskError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body: LoginBody = check(response).await?.json().await?;
        Ok(body.user)
    }

    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> Result<Ack, KioskError> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&json!({ "full_name": full_name, "email": email, "password": password }))
            .send()
            .await?;
        ack(response).await
    }

    pub async fn update_password(&self, email: &str, password: &str) -> Result<Ack, KioskError> {
        let response = self
            .client
            .put(self.url("/auth/update-password"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        ack(response).await
    }
}

/// Turns any non-2xx status into [`KioskError::Http`].
async fn check(response: Response) -> Result<Response, KioskError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status.canonical_reason().unwrap_or("Request failed").to_string()
        });
    tracing::warn!("API responded {}: {}", status.as_u16(), message);
    Err(KioskError::Http { status: status.as_u16(), message })
}

async fn ack(response: Response) -> Result<Ack, KioskError> {
    let response = check(response).await?;
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Ack::default());
    }
    Ok(serde_json::from_str(&text)?)
}
