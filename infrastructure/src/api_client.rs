use crate::config::Config;
use domain::session::SessionContext;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::api_error::{ApiError, ApiResult};
use shared::types::Result;
use std::time::Duration;

/// HTTP client for the MedVax backend.
///
/// Holds the session context it was built with: a bearer header is attached
/// to every request while a token is present, and a 401 response drops the
/// token before the error reaches the caller, so the whole process falls
/// back to anonymous in one place.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionContext,
}

/// List/detail payloads arrive either bare or wrapped in `{"data": ...}`
/// depending on the endpoint's age.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(value) => value,
        }
    }
}

/// Error bodies use `message` on most endpoints and `error` on the chatbot.
#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionContext) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("backend rejected the session token");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body.message.or(body.error),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.into_inner())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        let response = self
            .execute(self.http.get(self.url(path)).query(query))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_unit(&self, path: &str) -> ApiResult<()> {
        self.execute(self.http.get(self.url(path))).await?;
        Ok(())
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.http.post(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.http.put(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.http.post(self.url(path)).multipart(form))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.http.put(self.url(path)).multipart(form))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}
