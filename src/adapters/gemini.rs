use crate::core::{ConfigProvider, ContentGenerator, GenerationRequest};
use crate::utils::error::{CheckerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini `generateContent` over HTTPS.
pub struct GeminiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GeminiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint().trim_end_matches('/'),
            self.config.model()
        )
    }
}

#[async_trait]
impl<C: ConfigProvider> ContentGenerator for GeminiClient<C> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: &request.response_mime_type,
                response_schema: &request.response_schema,
            },
        };

        let url = self.generate_url();
        tracing::debug!("Making model request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .json(&body)
            .send()
            .await?;

        tracing::debug!("Model response status: {}", response.status());
        let response = response.error_for_status()?;

        let payload: GenerateContentResponse = response.json().await?;
        payload.text().ok_or(CheckerError::EmptyResponseError)
    }
}
