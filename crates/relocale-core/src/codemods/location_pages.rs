use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::{file_name, hero_rules, in_directory, Codemod, RewriteContext, META_DESCRIPTION, TITLE};
use crate::rule::{apply_all, escape_template, Rule};
use crate::tables::{location_info, LocationInfo};

// The siren is matched both as-is and in its mis-decoded form, and kept as found.
static EMERGENCY_BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(🚨|ðŸš¨) 24/7 Emergency HVAC Services Available in [^-<]* - Call Now!")
        .expect("valid emergency banner regex")
});

/// Point each known `locations/` page at its town
pub struct LocationPages;

impl Codemod for LocationPages {
    fn name(&self) -> &'static str {
        "location-pages"
    }

    fn apply(&self, _ctx: &RewriteContext, path: &Path, content: &str) -> Result<Option<String>> {
        if !in_directory(path, "locations") {
            return Ok(None);
        }
        let Some(info) = file_name(path).and_then(location_info) else {
            return Ok(None);
        };

        Ok(apply_all(&rules(info), content))
    }
}

fn rules(info: &LocationInfo) -> Vec<Rule> {
    let mut rules = vec![
        Rule::pattern("location title", &TITLE, format!("<title>{}</title>", info.title)),
        Rule::pattern(
            "location description",
            &META_DESCRIPTION,
            format!(r#"<meta name="description" content="{}""#, info.description),
        ),
        Rule::template(
            "emergency banner",
            &EMERGENCY_BANNER,
            format!(
                "${{1}} 24/7 Emergency HVAC Services Available in {} - Call Now!",
                escape_template(info.city)
            ),
        ),
    ];
    rules.extend(hero_rules(info.city));
    rules
}
