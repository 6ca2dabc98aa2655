use serde::Deserialize;
use serde_yaml::Value;

/// The manifest text could not be read as a YAML document stream.
#[derive(Debug, thiserror::Error)]
pub enum ManifestParseError {
    #[error("YAML document #{} is malformed: {source}", .index + 1)]
    Document {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("YAML document #{} has an invalid merge key: {source}", .index + 1)]
    Merge {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parse every `---`-separated document in `content`, in order.
///
/// Merge keys (`<<: *anchor`) are resolved so merged fields read like inline ones. One malformed
/// document fails the whole stream.
pub fn parse_documents(content: &str) -> Result<Vec<Value>, ManifestParseError> {
    let mut documents = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let mut value = Value::deserialize(document)
            .map_err(|source| ManifestParseError::Document { index, source })?;
        value
            .apply_merge()
            .map_err(|source| ManifestParseError::Merge { index, source })?;
        documents.push(value);
    }
    Ok(documents)
}
