use crate::pipeline::runner::RECORD_VERSION;
use serde::Serialize;

/// Reasons a run is refused outright (exit 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefusalCode {
    /// Suite file missing, unreadable or not valid YAML.
    #[serde(rename = "E_BAD_INPUT")]
    BadInput,
    /// A check or count request failed validation.
    #[serde(rename = "E_INVALID_CHECK")]
    InvalidCheck,
}

/// Refusal envelope emitted to stdout on exit 2.
#[derive(Debug, Clone, Serialize)]
pub struct RefusalEnvelope {
    pub version: &'static str,
    pub outcome: &'static str,
    pub refusal: RefusalBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefusalBody {
    pub code: RefusalCode,
    pub message: String,
    pub detail: RefusalDetail,
    pub next_command: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RefusalDetail {
    BadInput(BadInputDetail),
    InvalidCheck(InvalidCheckDetail),
}

#[derive(Debug, Clone, Serialize)]
pub struct BadInputDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidCheckDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    pub error: String,
}

pub fn build_envelope(
    code: RefusalCode,
    message: &str,
    detail: RefusalDetail,
    next_command: Option<String>,
) -> RefusalEnvelope {
    RefusalEnvelope {
        version: RECORD_VERSION,
        outcome: "REFUSAL",
        refusal: RefusalBody {
            code,
            message: message.to_owned(),
            detail,
            next_command,
        },
    }
}
