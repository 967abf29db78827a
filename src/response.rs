use serde::Deserialize;
use serde_json::{Map, Value};

/// Envelope wraps every Jotform API response.
/// The payload lives under `content`; other fields are kept but not interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    /// Response payload; `null` when the server omits it
    #[serde(default)]
    pub content: Value,

    /// Remaining envelope fields (`responseCode`, `message`, `limit-left`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// Consume the envelope and return its payload
    pub fn into_content(self) -> Value {
        self.content
    }

    /// Get the raw payload
    pub fn raw(&self) -> &Value {
        &self.content
    }

    /// Get an uninterpreted envelope field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Apply unmarshals the payload into the provided type
    pub fn apply<T>(&self) -> Result<T, crate::error::JotFormError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.content.clone()).map_err(|e| e.into())
    }

    /// Get a value from the payload by a slash-separated path.
    /// For example, "0/title" reads the title of the first entry of a list.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.content;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the payload by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }
}
