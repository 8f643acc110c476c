use crate::domain::error::OdlError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// 一次翻译请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub from_lang: String, // 源语言, 小写
    pub to_lang: String,   // 目标语言, 小写
    pub text: String,
}

impl TranslationRequest {
    pub fn new(from_lang: &str, to_lang: &str, text: &str) -> Self {
        Self {
            from_lang: from_lang.to_lowercase(),
            to_lang: to_lang.to_lowercase(),
            text: text.to_string(),
        }
    }
}

// 响应状态 ("OK" / "ERR")
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Ok,
    Err,
}

/// JSON body written by the translation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointResponse {
    pub msg: ResponseStatus,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
}

impl EndpointResponse {
    pub fn ok(content: impl Into<String>, additional: impl Into<String>) -> Self {
        Self {
            msg: ResponseStatus::Ok,
            content: content.into(),
            additional: Some(additional.into()),
        }
    }

    pub fn err(content: impl Into<String>) -> Self {
        Self {
            msg: ResponseStatus::Err,
            content: content.into(),
            additional: None,
        }
    }
}

/// Raw reply as the client received it: status code plus decoded body.
///
/// The body is kept untyped because the client only relies on `content`.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointReply {
    pub status: u16,
    pub body: Value,
}

impl EndpointReply {
    /// 200 is success, every other status is an error.
    ///
    /// Only an absent `content` key is a fault; strings are taken as they are,
    /// any other value in its JSON form (`42`, `true`, `null`).
    pub fn outcome(&self) -> Result<Outcome, OdlError> {
        let content = match self.body.get("content") {
            None => return Err(OdlError::MissingContent),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };

        if self.status == 200 {
            Ok(Outcome::Translated(content))
        } else {
            Ok(Outcome::Failed {
                status: self.status,
                content,
            })
        }
    }
}

// 客户端看到的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Translated(String),
    Failed { status: u16, content: String },
}
