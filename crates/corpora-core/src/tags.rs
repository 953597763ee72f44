//! Knowledge tag domain types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum length of a tag name, in characters.
pub const TAG_NAME_MAX_CHARS: usize = 50;

/// A classification tag bindable to one or more datasets.
///
/// Returned by the tag endpoints. Fields beyond `id` and `name` are
/// server-populated and may be absent depending on the endpoint; unknown
/// response fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeTag {
    /// Tag ID.
    pub id: String,
    /// Tag name.
    pub name: String,
    /// Display color, when the server assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Creation timestamp (epoch seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Last update timestamp (epoch seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Number of datasets currently bound to this tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_count: Option<u64>,
}

/// Validate a tag name against the server's length limit.
///
/// The limit counts characters, not bytes, matching the server-side rule.
pub fn validate_tag_name(name: &str) -> Result<()> {
    let chars = name.chars().count();
    if chars > TAG_NAME_MAX_CHARS {
        return Err(Error::InvalidInput(format!(
            "tag name exceeds {} characters (got {})",
            TAG_NAME_MAX_CHARS, chars
        )));
    }
    Ok(())
}
