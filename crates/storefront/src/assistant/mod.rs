//! Gemini-backed shopping assistant.
//!
//! "Deneth AI" answers sizing, pricing, and delivery questions in the chat
//! widget. The live catalog is embedded into the system instruction so the
//! model can only recommend products the store actually sells. The
//! assistant is strictly best-effort: any failure degrades to a fixed
//! apology rather than surfacing an error to the customer.

pub mod types;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{instrument, warn};

use deneth_core::Product;

use crate::config::AssistantConfig;

pub use types::{ChatMessage, ChatRole};
use types::{Content, GenerateContentRequest, GenerateContentResponse, Part};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Opening message shown before the customer has said anything.
pub const GREETING: &str = "Hello! I'm Deneth AI. Looking for the perfect linen fit today?";

/// Canned reply used whenever the model cannot be reached.
pub const APOLOGY: &str =
    "I'm having a little trouble connecting right now. Please try again in a moment.";

/// Errors from the assistant backend.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned no candidates")]
    EmptyResponse,
}

/// Client for the Gemini chat completion API.
///
/// Cheaply cloneable; all clones share one HTTP connection pool.
#[derive(Clone)]
pub struct AssistantClient {
    inner: Arc<AssistantClientInner>,
}

struct AssistantClientInner {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl AssistantClient {
    /// Create a new assistant client.
    #[must_use]
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            inner: Arc::new(AssistantClientInner {
                client: reqwest::Client::new(),
                api_key: config.api_key.clone(),
                model: config.model.clone(),
            }),
        }
    }

    /// Answer the customer, falling back to [`APOLOGY`] on any failure.
    #[instrument(skip_all, fields(history_len = history.len()))]
    pub async fn reply(
        &self,
        products: &[Product],
        history: &[ChatMessage],
        user_text: &str,
    ) -> String {
        match self.generate(products, history, user_text).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Assistant request failed, sending apology");
                APOLOGY.to_string()
            }
        }
    }

    /// Run one chat completion against the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects it, or the
    /// model produces no text.
    async fn generate(
        &self,
        products: &[Product],
        history: &[ChatMessage],
        user_text: &str,
    ) -> Result<String, AssistantError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|message| Content {
                role: Some(message.role),
                parts: vec![Part {
                    text: message.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: Some(ChatRole::User),
            parts: vec![Part {
                text: user_text.to_string(),
            }],
        });

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction(products),
                }],
            },
            contents,
        };

        let url = format!(
            "{GEMINI_API_BASE}/models/{}:generateContent",
            self.inner.model
        );
        let response = self
            .inner
            .client
            .post(&url)
            .header("x-goog-api-key", self.inner.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AssistantError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed
            .first_text()
            .map(ToString::to_string)
            .ok_or(AssistantError::EmptyResponse)
    }
}

/// Build the system instruction, embedding the live catalog.
#[must_use]
pub fn system_instruction(products: &[Product]) -> String {
    let catalog = products
        .iter()
        .map(|p| {
            let colors = p
                .colors
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "- {} ({} / {}): {}. Colors: {}. Sizes: {}. {}",
                p.name,
                p.category,
                p.sub_category,
                p.price,
                colors,
                p.sizes.join(", "),
                p.description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are \"Deneth AI\", a helpful and stylish fashion assistant for Deneth Fashion, \
         a premium linen clothing brand in Sri Lanka.\n\
         \n\
         Your Goal: Assist customers in choosing the right linen wear, answer questions about \
         sizing, pricing, and shipping.\n\
         \n\
         Key Information:\n\
         - **Products**: We sell premium linen pants for Men and Women.\n\
         - **Catalog**:\n{catalog}\n\
         - **Delivery**: Islandwide delivery available. Rates vary by district \
         (approx Rs. 250 - Rs. 400).\n\
         - **Payment**: We accept Cash on Delivery and Bank Transfer.\n\
         - **Tone**: Professional, polite, stylish, and concise.\n\
         - **Constraint**: If asked about topics unrelated to clothing, fashion, or our store, \
         politely steer the conversation back to Deneth Fashion products. Do not hallucinate \
         products we don't have.\n\
         \n\
         Start by being helpful. If a user asks for recommendations, ask for their preference \
         (Men/Women, color, style)."
    )
}
