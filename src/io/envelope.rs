//! JSON envelope printed by `eval --json` and `ops --json`.
//!
//! Both commands share one outer shape so scripts can branch on `status` and
//! `code` first and only then look at `data`.

use serde::Serialize;

use crate::error::CalcError;

pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Result,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable outcome, serialized as `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    UnsupportedOperator,
    DivisionByZero,
    InvalidNumber,
    MissingInput,
    InternalError,
}

impl From<&CalcError> for ResultCode {
    fn from(error: &CalcError) -> Self {
        match error {
            CalcError::UnsupportedOperator(_) => Self::UnsupportedOperator,
            CalcError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

/// What `data` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Evaluation,
    Operator,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub status: Status,
    pub code: ResultCode,
    /// Exit status the process ends with
    pub exit_code: u8,
    pub message: String,
    /// `null` on error
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    /// How the caller can fix the input
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub schema_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    /// Item count for list payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// The expression as given, e.g. `10 / 0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl<T> Envelope<T> {
    fn new(message_type: MessageType, status: Status, code: ResultCode, exit_code: u8) -> Self {
        Self {
            message_type,
            status,
            code,
            exit_code,
            message: String::new(),
            data: None,
            error: None,
            meta: Meta {
                schema_version: SCHEMA_VERSION,
                entity_type: None,
                count: None,
                query: None,
            },
        }
    }

    pub fn success(data: T) -> Self {
        let mut envelope = Self::new(MessageType::Result, Status::Success, ResultCode::Ok, 0);
        envelope.data = Some(data);
        envelope
    }

    /// Failure with exit status 1 and no payload.
    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self::new(MessageType::Error, Status::Error, code, 1).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.meta.entity_type = Some(entity_type);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.meta.query = Some(query.into());
        self
    }

    /// Attach fix-it hints. An empty list leaves `error` unset.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        if !suggestions.is_empty() {
            self.error = Some(ErrorDetails { suggestions });
        }
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}
