//! Submitted form data

use serde::{Deserialize, Serialize};

/// Key/value pairs of a submitted form, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedForm {
    pairs: Vec<(String, String)>,
}

impl SubmittedForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Self {
        url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect()
    }

    /// Append a pair
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Value submitted under `key`
    ///
    /// A key submitted more than once resolves to its last value, matching
    /// how hosts decode repeated form fields.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether nothing was submitted
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_urlencoded() {
        let form = SubmittedForm::from_urlencoded(
            "post_title=Hi+there&ns-postmeta-image_url=http%3A%2F%2Fx%2Fimg.png&empty=",
        );

        assert_eq!(form.len(), 3);
        assert_eq!(form.get("post_title"), Some("Hi there"));
        assert_eq!(form.get("ns-postmeta-image_url"), Some("http://x/img.png"));
        assert_eq!(form.get("empty"), Some(""));
        assert_eq!(form.get("missing"), None);
    }

    #[test]
    fn test_repeated_key_resolves_to_last() {
        let form = SubmittedForm::from_urlencoded("title=first&other=x&title=last");

        assert_eq!(form.get("title"), Some("last"));
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let form: SubmittedForm = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&str> = form.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
