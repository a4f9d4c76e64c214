use crate::utils::error::{CatalogError, Result};
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("ai4u-catalog/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub webhook_url: String,
    /// 送出時附上的頁面 URL
    pub page_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl ChatSettings {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            page_url: "https://ai4u.example.com/".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    pub message: String,
    pub session_id: String,
    pub timestamp: String,
    pub user_agent: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct WebhookReply {
    message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Webhook,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
    pub source: ReplySource,
}

/// 聊天 webhook 客戶端。請求失敗時不回傳錯誤，改用預設回覆。
pub struct ChatClient {
    client: Client,
    settings: ChatSettings,
    session_id: String,
}

impl ChatClient {
    pub fn new(settings: ChatSettings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            settings,
            session_id: generate_session_id(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// 送出訊息。空白訊息不會發出請求，回傳 `None`。
    pub async fn send(&self, message: &str) -> Option<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        match self.post(message).await {
            Ok(reply) => Some(ChatReply {
                message: reply,
                source: ReplySource::Webhook,
            }),
            Err(e) => {
                tracing::warn!("⚠️ Chat webhook failed, using fallback reply: {}", e);
                Some(ChatReply {
                    message: fallback_reply(message).to_string(),
                    source: ReplySource::Fallback,
                })
            }
        }
    }

    async fn post(&self, message: &str) -> Result<String> {
        let payload = ChatPayload {
            message: message.to_string(),
            session_id: self.session_id.clone(),
            timestamp: Utc::now().to_rfc3339(),
            user_agent: self.settings.user_agent.clone(),
            url: self.settings.page_url.clone(),
        };

        tracing::debug!("Posting chat message to: {}", self.settings.webhook_url);
        let response = self
            .client
            .post(&self.settings.webhook_url)
            .json(&payload)
            .send()
            .await?;

        tracing::debug!("Webhook response status: {}", response.status());
        if !response.status().is_success() {
            return Err(CatalogError::WebhookStatusError {
                status: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        extract_message(body)
    }
}

/// 回應可以是 `{"message": ...}` 或其陣列（取第一個）
fn extract_message(body: serde_json::Value) -> Result<String> {
    let reply = match body {
        serde_json::Value::Array(mut items) if !items.is_empty() => {
            serde_json::from_value::<WebhookReply>(items.swap_remove(0))?
        }
        other => serde_json::from_value::<WebhookReply>(other)?,
    };

    reply
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .ok_or_else(|| CatalogError::WebhookResponseError {
            message: "response has no 'message' field".to_string(),
        })
}

fn generate_session_id() -> String {
    let now = Utc::now();
    format!(
        "session_{}_{:x}",
        now.timestamp_millis(),
        now.timestamp_subsec_nanos() ^ std::process::id()
    )
}

const FALLBACK_RULES: &[(&[&str], &str)] = &[
    (
        &["precio", "costo", "coste", "cuánto", "cuanto", "tarifa", "presupuesto"],
        "Nuestros precios dependen del alcance de cada proyecto. Cuéntanos qué necesitas y te enviaremos un presupuesto sin compromiso.",
    ),
    (
        &["servicio", "ofrecen", "hacen", "chatbot", "automatiz", "leads"],
        "Ofrecemos chatbots inteligentes, automatización de procesos, captación de leads, analítica y formación en IA. ¿Sobre cuál quieres saber más?",
    ),
    (
        &["contacto", "llamar", "reunión", "reunion", "agendar", "cita", "email"],
        "Puedes agendar una reunión gratuita desde la sección de contacto o escribirnos a hola@ai4u.example.com.",
    ),
    (
        &["hola", "buenas", "buenos días", "buenos dias", "saludos"],
        "¡Hola! Soy el asistente de AI4U. ¿En qué puedo ayudarte hoy?",
    ),
];

const DEFAULT_FALLBACK: &str =
    "Ahora mismo no puedo responder, pero un miembro de nuestro equipo te contactará muy pronto. ¡Gracias por escribirnos!";

/// 依使用者訊息中的關鍵字挑選預設回覆
pub fn fallback_reply(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    FALLBACK_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_FALLBACK)
}
