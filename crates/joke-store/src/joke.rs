use serde::{Deserialize, Deserializer, Serialize};

/// A single joke record.
///
/// The id is chosen by the client and is not checked for uniqueness.
/// On the wire the text is carried in the `jokeText` field. Missing or
/// `null` fields decode as empty strings; only wrong types are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "jokeText", default, deserialize_with = "null_as_empty")]
    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Joke {
    /// Creates a joke from an id and its text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
