//! Token-authenticated client for the ecoobra backend.

use ecoobra_forms::InspectionForm;
use serde::de::DeserializeOwned;

use crate::cancel::{abortable, AbortRegistration};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{LoginRequest, LoginResponse, Supervisor, Tecnico};

/// HTTP client for the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    pub fn with_token(config: ApiConfig, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: Some(token.into()),
        }
    }

    /// Attach the session token obtained from [`ApiClient::login`]. All
    /// subsequent requests carry it.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Token {token}")),
            None => req,
        }
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Exchange credentials for a profile and session token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http
            .post(self.config.endpoint("/api/usuarios/login/"))
            .json(&body)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// All technicians. Narrow with
    /// [`tecnicos_for_session`](crate::types::tecnicos_for_session) before
    /// offering them to the user.
    pub async fn list_tecnicos(&self) -> ApiResult<Vec<Tecnico>> {
        let resp = self
            .authed(self.http.get(self.config.endpoint("/api/tecnicos/lista/")))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Supervisors assigned to one obra.
    ///
    /// The selection this feeds can change while the request is in flight, so
    /// the caller passes an [`AbortRegistration`] and fires its handle when
    /// the obra changes; a cancelled lookup returns [`ApiError::Aborted`] and
    /// its response must be discarded.
    pub async fn list_supervisores(
        &self,
        obra_id: &str,
        registration: AbortRegistration,
    ) -> ApiResult<Vec<Supervisor>> {
        let path = format!("/api/supervisores/{obra_id}/supervisores/");
        let fut = async {
            let resp = self
                .authed(self.http.get(self.config.endpoint(&path)))
                .send()
                .await?;
            Self::read_json(resp).await
        };
        match abortable(fut, registration).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!(obra = obra_id, "supervisor lookup aborted");
                Err(ApiError::Aborted)
            }
        }
    }

    /// Post a completed inspection form. Call only after
    /// [`InspectionForm::validate`] has passed.
    pub async fn submit_inspection(&self, form: &InspectionForm) -> ApiResult<()> {
        let resp = self
            .authed(
                self.http
                    .post(self.config.endpoint("/api/formularios/crear/"))
                    .json(form),
            )
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(())
    }
}
