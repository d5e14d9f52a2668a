use std::env;
use std::error::Error;
use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug)]
pub enum AssistantError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            AssistantError::HttpError(err) => write!(f, "HTTP error: {}", err),
            AssistantError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for AssistantError {}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::HttpError(err)
    }
}

/// Thin client over the third-party chat-completion endpoint. One shot per
/// call: no retry, no timeout tuning, no streaming. Callers surface a generic
/// notice on failure and the user retries by hand.
#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl AssistantService {
    pub fn new() -> Result<Self, AssistantError> {
        let api_url = env::var("CHAT_API_URL").map_err(|_| {
            AssistantError::EnvironmentError("CHAT_API_URL not set".to_string())
        })?;
        let api_key = env::var("CHAT_API_KEY").map_err(|_| {
            AssistantError::EnvironmentError("CHAT_API_KEY not set".to_string())
        })?;
        let model = env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: Client::new(),
            api_url,
            api_key,
            model,
        })
    }

    /// Short list of destination suggestions for an origin/interest combo.
    pub async fn destination_ideas(
        &self,
        origin: &str,
        interests: &[String],
    ) -> Result<String, AssistantError> {
        let prompt = format!(
            "Suggest 5 travel destinations reachable from {} for someone interested in {}. \
             One line each: destination, best season, and why it fits.",
            origin,
            if interests.is_empty() {
                "a general getaway".to_string()
            } else {
                interests.join(", ")
            }
        );
        self.complete(vec![
            system_message(),
            ChatMessage {
                role: "user".to_string(),
                content: prompt,
            },
        ])
        .await
    }

    /// Free-form prose itinerary. This is the text twin of the structured
    /// generator, used by the explore screens, not by the wizard.
    pub async fn itinerary_text(
        &self,
        destination: &str,
        days: u32,
        budget_per_day: u32,
    ) -> Result<String, AssistantError> {
        let prompt = format!(
            "Write a {}-day itinerary for {} on roughly {} INR per day. \
             Group it by day with morning/afternoon/evening slots.",
            days, destination, budget_per_day
        );
        self.complete(vec![
            system_message(),
            ChatMessage {
                role: "user".to_string(),
                content: prompt,
            },
        ])
        .await
    }

    /// One conversational turn for the travel chat assistant.
    pub async fn reply(&self, user_message: &str) -> Result<String, AssistantError> {
        self.complete(vec![
            system_message(),
            ChatMessage {
                role: "user".to_string(),
                content: user_message.to_string(),
            },
        ])
        .await
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, AssistantError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::ResponseError(format!(
                "Chat API returned {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssistantError::ResponseError("No choices in response".to_string()))
    }
}

fn system_message() -> ChatMessage {
    ChatMessage {
        role: "system".to_string(),
        content: "You are a concise, practical travel-planning assistant.".to_string(),
    }
}
