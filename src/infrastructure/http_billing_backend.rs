use async_trait::async_trait;
use reqwest::{header, Client, Method, Response, Url};
use serde_json::{json, Value};

use crate::domain::billing_team::BillingTeamRole;
use crate::domain::ports::{BackendError, BillingBackend};

/// REST implementation of BillingBackend
///
/// Endpoints, relative to the configured base URL:
/// - `DELETE /billing/teams/{team_id}/members/{member_id}`
/// - `PATCH  /billing/teams/{team_id}/members/{member_id}` with `{"role": ...}`
#[derive(Clone)]
pub struct HttpBillingBackend {
    client: Client,
    base_url: Url,
}

impl HttpBillingBackend {
    /// Creates a new HttpBillingBackend
    ///
    /// # Arguments
    /// * `base_url` - Root of the billing API, e.g. `http://localhost:3000/api`
    /// * `token` - Optional bearer token sent with every request
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BackendError::Transport(format!("Invalid billing API URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Transport(format!(
                "Billing API URL cannot be a base: {}",
                base_url
            )));
        }

        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn member_url(&self, team_id: &str, member_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["billing", "teams", team_id, "members", member_id]);
        }
        url
    }

    async fn send(&self, method: Method, url: Url, body: Option<Value>) -> Result<(), BackendError> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        check_status(response).await
    }
}

async fn check_status(response: Response) -> Result<(), BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .unwrap_or_else(|| status.to_string());

    Err(BackendError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl BillingBackend for HttpBillingBackend {
    async fn remove_member(&self, team_id: &str, member_id: &str) -> Result<(), BackendError> {
        let url = self.member_url(team_id, member_id);
        self.send(Method::DELETE, url, None).await
    }

    async fn update_member_role(
        &self,
        team_id: &str,
        member_id: &str,
        role: BillingTeamRole,
    ) -> Result<(), BackendError> {
        let url = self.member_url(team_id, member_id);
        self.send(Method::PATCH, url, Some(json!({ "role": role }))).await
    }
}
