// SPDX-License-Identifier: Apache-2.0

//! HTTP/JSON client for the Habitica v3 API.
//!
//! All calls are sequential blocking round-trips from the caller's point
//! of view; there is no retry or backoff, a failed call surfaces as an
//! immediate error. The [`HabiticaApi`] trait is the seam the convergence
//! loops and quest logic are written against, so tests can substitute a
//! scripted implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::Credentials;
use crate::error::HabiticaError;
use crate::models::{Content, Direction, Party, ServerStatus, Task, TaskKind, User};

/// Client identifier sent in the `x-client` header.
const CLIENT_ID: &str = "habitica-cli";

/// Convenience Result type for API calls.
pub type ApiResult<T> = Result<T, HabiticaError>;

/// A single named remote mutation for the batch-update protocol.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchOp {
    /// Operation name (`feed`, `hatch`, `sell`).
    pub op: String,
    /// Operation parameter record.
    pub params: Value,
}

impl BatchOp {
    /// Feed one food unit to one pet.
    #[must_use]
    pub fn feed(pet: &str, food: &str) -> Self {
        Self {
            op: "feed".to_string(),
            params: json!({ "pet": pet, "food": food }),
        }
    }

    /// Hatch one egg with one potion.
    #[must_use]
    pub fn hatch(egg: &str, potion: &str) -> Self {
        Self {
            op: "hatch".to_string(),
            params: json!({ "egg": egg, "hatchingPotion": potion }),
        }
    }

    /// Sell one unit of an item.
    #[must_use]
    pub fn sell(item_type: &str, key: &str) -> Self {
        Self {
            op: "sell".to_string(),
            params: json!({ "type": item_type, "key": key }),
        }
    }
}

/// The remote operations this client depends on.
#[async_trait]
pub trait HabiticaApi {
    /// `GET /status` - service health.
    async fn server_status(&self) -> ApiResult<ServerStatus>;

    /// `GET /user` - stats and inventory.
    async fn user(&self) -> ApiResult<User>;

    /// `GET /groups/party` - party state, `None` when not in a party.
    async fn party(&self) -> ApiResult<Option<Party>>;

    /// `GET /content` - static game content (large; fetch sparingly).
    async fn content(&self) -> ApiResult<Content>;

    /// `GET /tasks/user?type=...` - the user's tasks of one kind.
    async fn tasks(&self, kind: TaskKind) -> ApiResult<Vec<Task>>;

    /// `POST /tasks/{id}/score/{direction}` - score a task.
    async fn score_task(&self, id: &str, direction: Direction) -> ApiResult<()>;

    /// `PUT /tasks/{id}` - update task fields.
    async fn update_task(&self, id: &str, fields: Value) -> ApiResult<Task>;

    /// `POST /tasks/user` - create a task.
    async fn create_task(&self, fields: Value) -> ApiResult<Task>;

    /// `POST /user/batch-update` - submit an op list, returning the fresh
    /// user snapshot from the response.
    async fn batch_ops(&self, ops: Vec<BatchOp>) -> ApiResult<User>;
}

/// Concrete client over reqwest.
#[derive(Debug)]
pub struct HabiticaClient {
    http: Client,
    base: String,
}

/// Success envelope around every v3 response body.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error body shape for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HabiticaClient {
    /// Build a client from resolved credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (invalid header bytes in the credentials, TLS setup failure).
    pub fn new(creds: &Credentials, timeout: Duration) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-user", header_value(&creds.user_id)?);
        let mut key = header_value(creds.api_key.expose_secret())?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);
        headers.insert("x-client", HeaderValue::from_static(CLIENT_ID));

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base: format!("{}/api/v3", creds.url.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!(path, "GET");
        let resp = self.http.get(self.url(path)).send().await?;
        unwrap_envelope(resp).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> ApiResult<T> {
        debug!(path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        unwrap_envelope(resp).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str, body: &Value) -> ApiResult<T> {
        debug!(path, "PUT");
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        unwrap_envelope(resp).await
    }
}

fn header_value(value: &str) -> ApiResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| HabiticaError::Config {
        message: "credential contains characters not valid in an HTTP header".to_string(),
    })
}

async fn unwrap_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| status.to_string());
        return Err(HabiticaError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json::<Envelope<T>>().await?.data)
}

#[async_trait]
impl HabiticaApi for HabiticaClient {
    async fn server_status(&self) -> ApiResult<ServerStatus> {
        self.get("status").await
    }

    async fn user(&self) -> ApiResult<User> {
        self.get("user").await
    }

    async fn party(&self) -> ApiResult<Option<Party>> {
        match self.get("groups/party").await {
            Ok(party) => Ok(Some(party)),
            Err(HabiticaError::Api { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                // Not being in a party is a normal state, not an error.
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn content(&self) -> ApiResult<Content> {
        self.get("content").await
    }

    async fn tasks(&self, kind: TaskKind) -> ApiResult<Vec<Task>> {
        self.get(&format!("tasks/user?type={}", kind.api_value()))
            .await
    }

    async fn score_task(&self, id: &str, direction: Direction) -> ApiResult<()> {
        // The score response carries stat deltas we do not consume.
        let _: Value = self
            .post(
                &format!("tasks/{id}/score/{}", direction.as_str()),
                &json!({}),
            )
            .await?;
        Ok(())
    }

    async fn update_task(&self, id: &str, fields: Value) -> ApiResult<Task> {
        self.put(&format!("tasks/{id}"), &fields).await
    }

    async fn create_task(&self, fields: Value) -> ApiResult<Task> {
        self.post("tasks/user", &fields).await
    }

    async fn batch_ops(&self, ops: Vec<BatchOp>) -> ApiResult<User> {
        self.post("user/batch-update", &json!({ "ops": ops })).await
    }
}
