//! Output record types.
//!
//! One [`ApiEntry`] is emitted per documented top-level function. Entries are
//! built once during extraction and serialized immediately; nothing mutates
//! them afterwards.

use serde::{Deserialize, Serialize};

/// A single documented API function.
///
/// Field order matches the serialized JSON object shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEntry {
    /// Display signature text of the function header, taken verbatim.
    pub name: String,

    /// Alternate names declared for the function, in declaration order.
    /// Empty if none declared.
    pub aliases: Vec<String>,

    /// Parameter names/expressions from the code signature, in order.
    /// Empty for zero-argument functions.
    pub arguments: Vec<String>,

    /// Free-form description with structural newlines collapsed away.
    /// May contain one embedded `\n` separating a continuation paragraph.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_expected_keys() {
        let entry = ApiEntry {
            name: "map".to_string(),
            aliases: vec!["collect".to_string()],
            arguments: vec!["list".to_string(), "iteratee".to_string()],
            description: "Produces a new array of values.".to_string(),
        };

        let value = serde_json::to_value(&entry).expect("entry serializes");
        let obj = value.as_object().expect("entry is an object");

        assert_eq!(obj.len(), 4);
        assert_eq!(obj["name"], "map");
        assert_eq!(obj["aliases"][0], "collect");
        assert_eq!(obj["arguments"][1], "iteratee");
        assert!(obj["description"].as_str().is_some());
    }

    #[test]
    fn default_entry_is_empty() {
        let entry = ApiEntry::default();
        assert!(entry.name.is_empty());
        assert!(entry.aliases.is_empty());
        assert!(entry.arguments.is_empty());
        assert!(entry.description.is_empty());
    }
}
