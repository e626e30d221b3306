use serde::{Deserialize, Serialize};

/// Handle to a declared resource's provider identifier.
///
/// Serializes as the placeholder token `${<logical-name>.id}`; the external
/// reconciliation engine substitutes the real provider identifier when the
/// resource is materialized. Handles are the only way one resource may point
/// at another, which keeps the dependency graph explicit in the payloads.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    /// Handle to the identifier of the resource declared under `logical_name`.
    pub fn id(logical_name: &str) -> Self {
        ResourceRef(format!("${{{logical_name}.id}}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Logical name this handle points at.
    pub fn logical_name(&self) -> &str {
        Self::referenced_name(&self.0).unwrap_or(&self.0)
    }

    /// The logical name a placeholder token points at, if `value` is one.
    pub fn referenced_name(value: &str) -> Option<&str> {
        value.strip_prefix("${")?.strip_suffix(".id}")
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let vcn = ResourceRef::id("vcn");
        assert_eq!(vcn.as_str(), "${vcn.id}");
        assert_eq!(vcn.logical_name(), "vcn");
    }

    #[test]
    fn test_referenced_name() {
        assert_eq!(ResourceRef::referenced_name("${node-subnet.id}"), Some("node-subnet"));
        assert_eq!(ResourceRef::referenced_name("10.0.0.0/16"), None);
        assert_eq!(ResourceRef::referenced_name("${unterminated"), None);
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&ResourceRef::id("oke-cluster")).unwrap();
        assert_eq!(json, "\"${oke-cluster.id}\"");
    }
}
