use serde::{Deserialize, Deserializer};

/// Accepts either a JSON string or a JSON number and keeps it as a string.
///
/// Older payloads number their records (`"id": 3`) where newer ones use
/// string ids.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}
