/// Decoded `application/x-www-form-urlencoded` body, keeping repeated keys
/// (checkbox groups submit one pair per checked box).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `key`, as sent.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key` with surrounding whitespace removed; missing keys read as "".
    pub fn text(&self, key: &str) -> String {
        self.raw(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Like `text`, but a blank value reads as absent.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        let value = self.text(key);
        if value.is_empty() { None } else { Some(value) }
    }

    /// Every value for `key` that parses as an id, in submission order
    /// without duplicates.
    pub fn ids(&self, key: &str) -> Vec<i32> {
        let mut ids = Vec::new();
        for (_, value) in self.0.iter().filter(|(k, _)| k == key) {
            match value.trim().parse::<i32>() {
                Ok(id) if !ids.contains(&id) => ids.push(id),
                Ok(_) => {}
                Err(_) => tracing::debug!("Ignoring non-numeric {} value {:?}", key, value),
            }
        }
        ids
    }
}

/// Builds a typed form from the decoded pairs.
pub trait FromFormData: Sized {
    fn from_form_data(form: &FormData) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn text_trims_and_defaults_to_empty() {
        let data = form(&[("first_name", "  Alan ")]);
        assert_eq!(data.text("first_name"), "Alan");
        assert_eq!(data.text("last_name"), "");
    }

    #[test]
    fn blank_optional_text_is_none() {
        let data = form(&[("image_url", "   ")]);
        assert_eq!(data.optional_text("image_url"), None);
        assert_eq!(data.optional_text("missing"), None);
    }

    #[test]
    fn ids_collects_repeated_keys() {
        let data = form(&[("tags", "1"), ("title", "x"), ("tags", "2"), ("tags", "999")]);
        assert_eq!(data.ids("tags"), vec![1, 2, 999]);
    }

    #[test]
    fn ids_skips_garbage_and_duplicates() {
        let data = form(&[("posts", "3"), ("posts", "abc"), ("posts", "3"), ("posts", "")]);
        assert_eq!(data.ids("posts"), vec![3]);
        assert!(data.ids("tags").is_empty());
    }
}
