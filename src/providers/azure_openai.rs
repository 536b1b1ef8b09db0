use crate::config::AzureOpenAiConfig;
use crate::error::ExtractError;
use crate::providers::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

/// Reply used when the API returns no message content.
const EMPTY_REPLY: &str = "{}";

pub struct AzureOpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    deployment_name: String,
    api_version: String,
    temperature: Option<f32>,
}

impl AzureOpenAIProvider {
    /// Create a new Azure OpenAI provider from configuration
    pub fn new(config: &AzureOpenAiConfig) -> Result<Self, ExtractError> {
        config.validate()?;

        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| ExtractError::Config("Azure OpenAI endpoint is required".to_string()))?;
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ExtractError::Config("Azure OpenAI API key is required".to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ExtractError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(AzureOpenAIProvider {
            client,
            api_key,
            endpoint,
            deployment_name: config.deployment().to_string(),
            api_version: config.api_version().to_string(),
            temperature: config.temperature,
        })
    }

    fn chat_url(&self) -> String {
        // https://{endpoint}/openai/deployments/{deployment-name}/chat/completions?api-version={api-version}
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment_name,
            self.api_version
        )
    }

    fn request_body(&self, system: &str, user: &str) -> Value {
        let mut body = json!({
            "model": self.deployment_name,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ],
            "response_format": {"type": "json_object"}
        });

        // gpt-4o-mini deployments reject anything but their default temperature
        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }
}

#[async_trait]
impl CompletionProvider for AzureOpenAIProvider {
    fn provider_name(&self) -> &str {
        "azure_openai"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(self.chat_url())
            .header("api-key", &self.api_key)
            .json(&self.request_body(system, user))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(e.to_string())
                } else {
                    ProviderError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        debug!("{:?}", response_body);

        Ok(message_content(&response_body))
    }
}

fn message_content(response_body: &Value) -> String {
    response_body["choices"][0]["message"]["content"]
        .as_str()
        .filter(|content| !content.is_empty())
        .unwrap_or(EMPTY_REPLY)
        .to_string()
}
