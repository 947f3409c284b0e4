//! Single-field message envelope shared by informational and error replies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body of the form `{"msg": "..."}`.
///
/// # Examples
/// ```
/// use signup::inbound::http::envelope::Envelope;
///
/// let body = serde_json::to_string(&Envelope::new("name available")).expect("serialise");
/// assert_eq!(body, r#"{"msg":"name available"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Human-readable outcome or failure message.
    #[schema(example = "name available")]
    pub msg: String,
}

impl Envelope {
    /// Wrap `msg` in an envelope.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
