use serde::{Deserialize, Serialize};

/// Localized text with Finnish as the primary language
///
/// `fi` is required by the upstream API; `sv` and `en` fall back to it when
/// missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MultilingualString {
    pub fi: String,
    pub sv: Option<String>,
    pub en: Option<String>,
}

impl MultilingualString {
    pub fn new(fi: impl Into<String>) -> Self {
        Self {
            fi: fi.into(),
            sv: None,
            en: None,
        }
    }

    /// Display text: Finnish first, then Swedish, then English
    pub fn text(&self) -> &str {
        if !self.fi.is_empty() {
            return &self.fi;
        }
        if let Some(sv) = self.sv.as_deref() {
            if !sv.is_empty() {
                return sv;
            }
        }
        self.en.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_in_language_order() {
        let mut name = MultilingualString::new("Keskusta");
        assert_eq!(name.text(), "Keskusta");

        name.fi.clear();
        name.sv = Some("Centrum".to_string());
        name.en = Some("Center".to_string());
        assert_eq!(name.text(), "Centrum");

        name.sv = None;
        assert_eq!(name.text(), "Center");
    }

    #[test]
    fn empty_when_no_language_set() {
        assert!(MultilingualString::default().is_empty());
    }
}
