use serde::Deserialize;

/// The locale pages are being migrated to.
///
/// Every field can be overridden from the `[locale]` table of `relocale.toml`;
/// fields left out keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Locale {
    pub city: String,
    /// Two-letter region code, e.g. `OH`.
    pub state: String,
    pub state_name: String,
    pub zip: String,
    pub street: String,
    pub county: String,
    pub river: String,
    /// Kept as text so coordinates are written exactly as configured.
    pub latitude: String,
    pub longitude: String,
    /// Brand handle used for the site domain and social profiles.
    pub handle: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            city: "Belpre".to_string(),
            state: "OH".to_string(),
            state_name: "Ohio".to_string(),
            zip: "45714".to_string(),
            street: "123 Main St".to_string(),
            county: "Washington County".to_string(),
            river: "Ohio River".to_string(),
            latitude: "39.2742".to_string(),
            longitude: "-81.5734".to_string(),
            handle: "belpreductless".to_string(),
        }
    }
}

impl Locale {
    /// `City, ST`
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    pub fn domain(&self) -> String {
        format!("{}.com", self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let locale: Locale = toml::from_str(
            r#"
city = "Marietta"
zip = "45750"
"#,
        )
        .unwrap();

        assert_eq!(locale.city, "Marietta");
        assert_eq!(locale.zip, "45750");
        assert_eq!(locale.state, "OH");
        assert_eq!(locale.full_name(), "Marietta, OH");
        assert_eq!(locale.domain(), "belpreductless.com");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<Locale>("country = \"US\"").is_err());
    }
}
