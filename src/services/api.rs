use crate::config::Config;
use crate::models::{
    error::AppError,
    report::{DiscrepancyRecord, ReportId, ReportSummary},
    statistics::DiseaseStatistic,
    submission::{ReportSubmission, UploadFile},
};
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

// CONSTANTS
const GENERIC_ERROR: &str = "Internal Server Error";
const CSV_MIME: &str = "text/csv";

/// Named settings stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    /// Folder the backend archives uploaded CSVs into.
    ArchivePath,
}

impl ConfigField {
    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::ArchivePath => "archive_path",
        }
    }
}

// API CONFIGURATION
/// Configuration for the reconciliation API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn reports_url(&self) -> Result<Url, AppError> {
        self.url("/reports")
    }

    pub fn report_url(&self, id: ReportId) -> Result<Url, AppError> {
        self.url(&format!("/reports/{id}"))
    }

    pub fn statistics_url(&self, id: ReportId) -> Result<Url, AppError> {
        self.url(&format!("/report_statistics/{id}"))
    }

    /// `POST /automatic_report?year=..&isCDCFilter=..` or `POST /manual_report?isCDCFilter=..`.
    pub fn submission_url<F>(&self, submission: &ReportSubmission<F>) -> Result<Url, AppError> {
        self.url_with_query(submission.endpoint(), submission.query())
    }

    pub fn config_value_url(&self, field: ConfigField) -> Result<Url, AppError> {
        self.url(&format!("/config/{}", field.name()))
    }

    pub fn set_config_url(
        &self,
        field: ConfigField,
        value: &str,
        password: &str,
    ) -> Result<Url, AppError> {
        self.url_with_query(
            "/config",
            [
                ("field_name", field.name()),
                ("value", value),
                ("password", password),
            ],
        )
    }

    fn url(&self, path: &str) -> Result<Url, AppError> {
        Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| AppError::ConfigError(format!("Invalid API URL: {e}")))
    }

    fn url_with_query<I, K, V>(&self, path: &str, query: I) -> Result<Url, AppError>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Url::parse_with_params(&format!("{}{path}", self.base_url), query)
            .map_err(|e| AppError::ConfigError(format!("Invalid API URL: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self.base_url.unwrap_or_else(|| Config::API_URL.to_string());
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// RECONCILIATION CLIENT
/// HTTP client for the reconciliation backend.
pub struct ReconClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ReconClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Lists report summaries, newest first.
    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>, AppError> {
        let url = self.config.reports_url()?;
        self.get_json(url).await
    }

    /// Fetches the discrepancy rows of one report.
    pub async fn fetch_report(&self, id: ReportId) -> Result<Vec<DiscrepancyRecord>, AppError> {
        let url = self.config.report_url(id)?;
        self.get_json(url).await
    }

    /// Fetches the per-disease statistics of one report.
    pub async fn fetch_statistics(&self, id: ReportId) -> Result<Vec<DiseaseStatistic>, AppError> {
        let url = self.config.statistics_url(id)?;
        self.get_json(url).await
    }

    /// Starts a reconciliation run. Issues exactly one multipart POST.
    pub async fn create_report(
        &self,
        submission: ReportSubmission<UploadFile>,
    ) -> Result<(), AppError> {
        let url = self.config.submission_url(&submission)?;

        let mut form = Form::new();
        for (name, value) in submission.text_fields()? {
            form = form.text(name, value);
        }
        for (name, file) in submission.into_files() {
            let part = Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str(CSV_MIME)
                .map_err(|e| AppError::ConfigError(format!("Invalid MIME type: {e}")))?;
            form = form.part(name, part);
        }

        self.execute(self.http.post(url).multipart(form)).await?;
        Ok(())
    }

    /// Deletes a report. Archived source CSVs are left in place by the backend.
    pub async fn delete_report(&self, id: ReportId) -> Result<(), AppError> {
        let url = self.config.report_url(id)?;
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }

    /// Reads a named config value; an unset value comes back empty.
    pub async fn get_config(&self, field: ConfigField) -> Result<String, AppError> {
        let url = self.config.config_value_url(field)?;
        let value: Option<String> = self.get_json(url).await?;
        Ok(value.unwrap_or_default())
    }

    /// Writes a named config value. The backend checks `password`.
    pub async fn set_config(
        &self,
        field: ConfigField,
        value: &str,
        password: &str,
    ) -> Result<(), AppError> {
        let url = self.config.set_config_url(field, value, password)?;
        self.execute(self.http.post(url)).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let response = self.execute(self.http.get(url)).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Sends a request and turns non-success statuses into errors.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, AppError> {
        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &body));
        }

        Ok(response)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

/// Creates an error based on HTTP status code, keeping the server's `detail` when present.
pub fn error_for_status(status: u16, body: &str) -> AppError {
    let detail = server_detail(body);
    match status {
        401 | 403 => AppError::AuthError(detail.unwrap_or_else(|| format!("status {status}"))),
        404 => AppError::NotFound(detail.unwrap_or_else(|| "Resource not found".to_string())),
        _ => AppError::Http {
            status,
            detail: detail.unwrap_or_else(|| GENERIC_ERROR.to_string()),
        },
    }
}

/// Extracts `detail` from an error body: a plain string, or the first `msg`
/// of a validation error list.
fn server_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg")?.as_str())
            .map(str::to_owned),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

// CONVENIENCE FUNCTIONS
/// Lists report summaries using default configuration.
pub async fn fetch_reports() -> Result<Vec<ReportSummary>, AppError> {
    ReconClient::new()?.list_reports().await
}

/// Fetches discrepancy rows using default configuration.
pub async fn fetch_report(id: ReportId) -> Result<Vec<DiscrepancyRecord>, AppError> {
    ReconClient::new()?.fetch_report(id).await
}

/// Fetches per-disease statistics using default configuration.
pub async fn fetch_statistics(id: ReportId) -> Result<Vec<DiseaseStatistic>, AppError> {
    ReconClient::new()?.fetch_statistics(id).await
}
