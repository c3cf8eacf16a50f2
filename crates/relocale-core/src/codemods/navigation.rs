use anyhow::Result;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::{file_name, hero_rules, in_directory, Codemod, RewriteContext};
use crate::rule::{apply_all, Rule};
use crate::tables::{
    location_mapping, DEPRECATED_PAGES, DROPDOWN_ENTRIES, SECTION_LABELS, ZIP_CODES,
};

/// Number of anchors a dropdown must have to be swapped for the canonical one.
pub const DROPDOWN_SIZE: usize = DROPDOWN_ENTRIES.len();

static DROPDOWN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"<div class="dropdown-content">\s*(?:<a href="[^"]*">[^<]*</a>\s*){{{DROPDOWN_SIZE}}}</div>"#
    );
    Regex::new(&pattern).expect("valid dropdown regex")
});

static ANY_DROPDOWN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div class="dropdown-content">(.*?)</div>"#).expect("valid dropdown regex")
});

static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]*)""#).expect("valid href regex"));

static DEPRECATED_LINK: Lazy<Regex> = Lazy::new(|| {
    let pages = DEPRECATED_PAGES
        .iter()
        .map(|page| regex::escape(page))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r#"<a href="[^"]*(?:{pages})">[^<]*</a>\s*"#))
        .expect("valid deprecated link regex")
});

static CANONICAL_DROPDOWN: Lazy<String> = Lazy::new(|| {
    let mut block = String::from("<div class=\"dropdown-content\">\n");
    for (href, label) in DROPDOWN_ENTRIES {
        block.push_str(&format!("                        <a href=\"{href}\">{label}</a>\n"));
    }
    block.push_str("                    </div>");
    block
});

/// Fix navigation menus, drop dead links and retitle location heroes
pub struct Navigation;

impl Codemod for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn apply(&self, _ctx: &RewriteContext, path: &Path, content: &str) -> Result<Option<String>> {
        let mut rules = vec![
            Rule::pattern("locations dropdown", &DROPDOWN, CANONICAL_DROPDOWN.as_str()),
            Rule::pattern("deprecated links", &DEPRECATED_LINK, ""),
        ];
        for &(old, new) in SECTION_LABELS {
            rules.push(Rule::literal("section label", old, new));
        }
        for &(old, new) in ZIP_CODES {
            rules.push(Rule::literal("zip code", format!("({old})"), format!("({new})")));
        }
        if in_directory(path, "locations") {
            if let Some((city, _zip)) = file_name(path).and_then(location_mapping) {
                rules.extend(hero_rules(city));
            }
        }

        let updated = apply_all(&rules, content);

        let result = updated.as_deref().unwrap_or(content);
        for anchors in stale_dropdowns(result) {
            warn!(
                "{}: dropdown with {anchors} links left as is (expected {DROPDOWN_SIZE})",
                path.display()
            );
        }

        Ok(updated)
    }
}

/// Anchor counts of locations dropdowns the canonical replacement cannot match.
///
/// Only blocks linking to at least one mapped location page count; other
/// menus such as the services dropdown are never flagged.
pub fn stale_dropdowns(content: &str) -> Vec<usize> {
    ANY_DROPDOWN
        .captures_iter(content)
        .map(|caps| caps.get(1).map_or("", |body| body.as_str()))
        .filter(|body| links_to_locations(body))
        .map(|body| body.matches("<a ").count())
        .filter(|&anchors| anchors != DROPDOWN_SIZE)
        .collect()
}

fn links_to_locations(block: &str) -> bool {
    HREF.captures_iter(block).any(|caps| {
        let href = caps.get(1).map_or("", |href| href.as_str());
        let page = href.rsplit('/').next().unwrap_or(href);
        location_mapping(page).is_some()
    })
}
