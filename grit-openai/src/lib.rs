use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const MAX_COMPLETION_TOKENS: u32 = 400;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("unknown category '{name}'; available categories: {available}")]
    UnknownCategory { name: String, available: String },
    #[error("OPENAI_API_KEY is not set; export it or add it to a local .env file")]
    MissingApiKey,
    #[error("error communicating with the OpenAI API: {0}")]
    Http(#[from] reqwest::Error),
}

/// External text-completion capability the generator talks through.
///
/// [`OpenAiClient`] implements it against the hosted API; tests substitute
/// an offline stand-in.
pub trait TextCompletion {
    fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, OpenAiError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ChatRequest<'a> {
    fn new(system: &'a str, user: &'a str, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: DEFAULT_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

/// Blocking client for the OpenAI chat-completions endpoint.
#[derive(Debug)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::MissingApiKey`] when the variable is unset or
    /// contains only whitespace.
    pub fn from_env() -> Result<Self, OpenAiError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(OpenAiError::MissingApiKey),
        }
    }
}

impl TextCompletion for OpenAiClient {
    fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, OpenAiError> {
        let request_body = ChatRequest::new(system, user, temperature, max_tokens);

        let response = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()?;

        let response = response.error_for_status()?;
        let parsed = response.json::<ChatResponse>()?;
        Ok(parsed.text())
    }
}

/// Generate a snippet for a registered category via the hosted API.
///
/// The category must be registered and `OPENAI_API_KEY` must be set; both
/// are checked before any network activity, in that order.
///
/// # Errors
///
/// Returns [`OpenAiError::UnknownCategory`] for an unregistered identifier,
/// [`OpenAiError::MissingApiKey`] when no credential is available, and
/// [`OpenAiError::Http`] when the API call itself fails.
pub fn generate(category: &str, temperature: f64) -> Result<String, OpenAiError> {
    if grit_categories::prompt(category).is_none() {
        return Err(unknown_category(category));
    }

    let client = OpenAiClient::from_env()?;
    generate_with(&client, category, temperature)
}

/// Like [`generate`], but over any [`TextCompletion`] implementation. The
/// reply is returned with surrounding whitespace trimmed; a reply with no
/// text at all is the empty string, not an error.
pub fn generate_with<S>(
    service: &S,
    category: &str,
    temperature: f64,
) -> Result<String, OpenAiError>
where
    S: TextCompletion,
{
    let prompt = grit_categories::prompt(category).ok_or_else(|| unknown_category(category))?;
    let text = service.complete(
        grit_categories::SYSTEM_PROMPT,
        prompt,
        temperature,
        MAX_COMPLETION_TOKENS,
    )?;
    Ok(text.trim().to_string())
}

fn unknown_category(name: &str) -> OpenAiError {
    OpenAiError::UnknownCategory {
        name: name.to_string(),
        available: grit_categories::names().collect::<Vec<_>>().join(", "),
    }
}
