//! Shared HTTP request plumbing for LLM-backed adapters. Owns only the
//! outbound request/deserialize path; the 30s timeout and one-retry policy
//! from spec §4.5 live in the orchestrator so both adapters and the mock
//! share identical failure handling.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct HttpAgentConfig {
    pub endpoint: String,
    pub api_key: String,
    pub request_timeout: std::time::Duration,
}

pub struct HttpClient {
    client: reqwest::Client,
    config: HttpAgentConfig,
}

impl HttpClient {
    pub fn new(config: HttpAgentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("reqwest client builds from static config");
        Self { client, config }
    }

    pub async fn post_json<Req: Serialize + ?Sized, Resp: DeserializeOwned>(
        &self,
        body: &Req,
    ) -> Result<Resp, AppError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Agent(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Agent(format!(
                "backend returned status {}",
                response.status()
            )));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| AppError::Agent(format!("malformed response: {e}")))
    }
}
