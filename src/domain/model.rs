use crate::utils::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One item of the remote collection. Fields beyond the projected one are carried but unused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(|v| v.as_str())
    }
}

/// Projected field values, in the order the remote API returned the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleList(Vec<String>);

impl TitleList {
    /// All-or-nothing: a single record without the field fails the whole projection.
    pub fn from_records(records: &[Record], field: &str) -> Result<Self> {
        let titles = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .field_str(field)
                    .map(str::to_string)
                    .ok_or_else(|| LoaderError::MissingFieldError {
                        index,
                        field: field.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self(titles))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TitleList {
    fn from(titles: Vec<String>) -> Self {
        Self(titles)
    }
}

impl IntoIterator for TitleList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TitleList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(obj) => Record {
                data: obj.into_iter().collect(),
            },
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn test_projection_keeps_response_order() {
        let records = vec![
            record(json!({"userId": 1, "id": 1, "title": "quidem molestiae enim"})),
            record(json!({"userId": 1, "id": 2, "title": "sunt qui excepturi"})),
            record(json!({"userId": 1, "id": 3, "title": "omnis laborum odio"})),
        ];

        let titles = TitleList::from_records(&records, "title").unwrap();

        assert_eq!(titles.len(), records.len());
        assert_eq!(
            titles.as_slice(),
            ["quidem molestiae enim", "sunt qui excepturi", "omnis laborum odio"]
        );
    }

    #[test]
    fn test_projection_of_empty_response() {
        let titles = TitleList::from_records(&[], "title").unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn test_projection_other_field() {
        let records = vec![
            record(json!({"title": "a", "slug": "first"})),
            record(json!({"title": "b", "slug": "second"})),
        ];

        let slugs = TitleList::from_records(&records, "slug").unwrap();
        assert_eq!(slugs.into_inner(), vec!["first", "second"]);
    }

    #[test]
    fn test_projection_fails_on_missing_field() {
        let records = vec![
            record(json!({"title": "a"})),
            record(json!({"id": 2})),
        ];

        let err = TitleList::from_records(&records, "title").unwrap_err();
        match err {
            LoaderError::MissingFieldError { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_projection_fails_on_non_string_field() {
        let records = vec![record(json!({"title": 42}))];
        assert!(TitleList::from_records(&records, "title").is_err());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let titles = TitleList::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_string(&titles).unwrap(), r#"["a","b"]"#);
    }
}
