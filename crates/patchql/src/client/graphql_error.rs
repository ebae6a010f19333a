use serde::Deserialize;
use serde::Serialize;

/// An entry of the `errors` list in a GraphQL response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    /// Render `path` as e.g. `users[0].name`.
    pub fn path_string(&self) -> Option<String> {
        let path = self.path.as_deref().filter(|p| !p.is_empty())?;
        let mut rendered = String::new();
        for segment in path {
            match segment {
                PathSegment::Field(name) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }
                    rendered.push_str(name);
                },
                PathSegment::Index(idx) => rendered.push_str(&format!("[{idx}]")),
            }
        }
        Some(rendered)
    }
}

/// Formats as `<file>[:<line>]: [<path> ]<message>`, where `<file>` comes
/// from a `file` extension and defaults to `input`.
impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = self.extensions.as_ref()
            .and_then(|ext| ext.get("file"))
            .and_then(serde_json::Value::as_str)
            .filter(|file| !file.is_empty())
            .unwrap_or("input");
        f.write_str(file)?;
        if let Some(first) = self.locations.as_deref().and_then(<[_]>::first) {
            write!(f, ":{}", first.line)?;
        }
        f.write_str(": ")?;
        if let Some(path) = self.path_string() {
            write!(f, "{path} ")?;
        }
        f.write_str(self.message.as_str())
    }
}
impl std::error::Error for GraphQLError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Field(String),
}
