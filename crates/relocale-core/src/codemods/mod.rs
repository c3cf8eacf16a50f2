use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::rule::{escape_template, Rule};

pub mod cleanup;
pub mod location_pages;
pub mod navigation;
pub mod rebrand;
pub mod service_pages;

/// Context passed to all codemods during a rewrite
#[derive(Debug, Clone)]
pub struct RewriteContext {
    /// Root of the page corpus on disk
    pub root: PathBuf,
    /// Locale the pages are migrated to
    pub locale: Locale,
}

impl RewriteContext {
    pub fn new(root: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            root: root.into(),
            locale,
        }
    }
}

pub trait Codemod {
    fn name(&self) -> &'static str;
    fn apply(&self, ctx: &RewriteContext, path: &Path, content: &str) -> Result<Option<String>>;
}

pub(crate) static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<title>[^<]*</title>").expect("valid title regex"));

pub(crate) static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta name="description" content="[^"]*""#).expect("valid description regex")
});

pub(crate) static META_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta name="keywords" content="[^"]*""#).expect("valid keywords regex")
});

static HERO_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<h1>Professional <span class="hero-highlight">HVAC Services</span> in [^<]*</h1>"#)
        .expect("valid hero heading regex")
});

// The lead ends at the first period that is neither part of an
// abbreviation like "St." or "D.C." nor followed directly by text.
static HERO_LEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"<p>Expert ductless mini split installation, HVAC repair, and air conditioning services for (?:\b[A-Z][a-z]{0,2}\.|[^.<]|\.[^\s<])*\.",
    )
    .expect("valid hero lead regex")
});

/// File name of `path` as UTF-8, if it has one.
pub(crate) fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// True when the file sits directly inside a directory called `dir`.
pub(crate) fn in_directory(path: &Path, dir: &str) -> bool {
    path.parent()
        .and_then(|parent| parent.file_name())
        .is_some_and(|name| name == dir)
}

/// Rules that point a location page's hero at `city`.
///
/// The location and navigation passes both render the hero through this, so
/// running either one again leaves the other's output alone.
pub(crate) fn hero_rules(city: &str) -> Vec<Rule> {
    vec![
        Rule::pattern(
            "hero heading",
            &HERO_HEADING,
            format!(
                r#"<h1>Professional <span class="hero-highlight">HVAC Services</span> in {city}</h1>"#
            ),
        ),
        Rule::template(
            "hero lead",
            &HERO_LEAD,
            format!(
                "<p>Expert ductless mini split installation, HVAC repair, and air conditioning services for {} residents.",
                escape_template(city)
            ),
        ),
    ]
}
