use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::{Codemod, RewriteContext};
use crate::locale::Locale;
use crate::rule::{apply_all, escape_template, Rule};
use crate::tables::NEIGHBORHOOD_RENAMES;

const OLD_BOROUGH: &str = "Staten Island";
const OLD_HANDLE: &str = "statenislandductless";

static BOROUGH_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<title>[^<]*Staten Island[^<]*</title>").expect("valid regex"));

static BOROUGH_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta name="description" content="[^"]*Staten Island[^"]*""#)
        .expect("valid regex")
});

static BOROUGH_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta name="keywords" content="[^"]*Staten Island[^"]*""#).expect("valid regex")
});

static BOROUGH_EXPERTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Staten Island's #1 <span class="hero-highlight">([^<]*)</span> Experts"#)
        .expect("valid regex")
});

static ZIP_CODE_COVERAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"across all Staten Island zip codes including [^.<]*\.").expect("valid regex")
});

/// Rebrand pages from Staten Island to the configured locale.
///
/// Rules that mention the borough by name run before the blanket borough
/// swap, otherwise they would never see their text.
pub struct Rebrand;

impl Codemod for Rebrand {
    fn name(&self) -> &'static str {
        "rebrand"
    }

    fn apply(&self, ctx: &RewriteContext, _path: &Path, content: &str) -> Result<Option<String>> {
        Ok(apply_all(&rules(&ctx.locale), content))
    }
}

fn rules(locale: &Locale) -> Vec<Rule> {
    let city = &locale.city;
    let full = locale.full_name();
    let county = &locale.county;

    let mut rules = vec![
        // Head
        Rule::pattern(
            "title",
            &BOROUGH_TITLE,
            format!("<title>{full} Ductless Mini Splits | Professional HVAC Services</title>"),
        ),
        Rule::pattern(
            "description",
            &BOROUGH_DESCRIPTION,
            format!(
                r#"<meta name="description" content="Professional ductless mini split installation, repair, and maintenance in {full}. 24/7 emergency HVAC services. Expert technicians.""#
            ),
        ),
        Rule::pattern(
            "keywords",
            &BOROUGH_KEYWORDS,
            format!(
                r#"<meta name="keywords" content="ductless mini splits {full}, HVAC services, air conditioning repair, heating installation, emergency HVAC""#
            ),
        ),
        // Structured data
        Rule::literal(
            "street address",
            r#""streetAddress": "123 Victory Blvd""#,
            format!(r#""streetAddress": "{}""#, locale.street),
        ),
        Rule::literal(
            "locality",
            r#""addressLocality": "Staten Island""#,
            format!(r#""addressLocality": "{city}""#),
        ),
        Rule::literal(
            "region",
            r#""addressRegion": "NY""#,
            format!(r#""addressRegion": "{}""#, locale.state),
        ),
        Rule::literal(
            "postal code",
            r#""postalCode": "10301""#,
            format!(r#""postalCode": "{}""#, locale.zip),
        ),
        Rule::literal(
            "latitude",
            r#""latitude": 40.6282"#,
            format!(r#""latitude": {}"#, locale.latitude),
        ),
        Rule::literal(
            "longitude",
            r#""longitude": -74.0776"#,
            format!(r#""longitude": {}"#, locale.longitude),
        ),
        // Body copy naming the borough
        Rule::template(
            "hero experts",
            &BOROUGH_EXPERTS,
            format!(
                r#"{}'s #1 <span class="hero-highlight">${{1}}</span> Experts"#,
                escape_template(city)
            ),
        ),
        Rule::literal(
            "footer address",
            "123 Victory Blvd, Staten Island, NY 10301",
            format!("{}, {full} {}", locale.street, locale.zip),
        ),
        Rule::literal(
            "copyright",
            "Staten Island Ductless Mini Splits. All rights reserved.",
            format!("{full} Ductless Mini Splits. All rights reserved."),
        ),
        Rule::literal(
            "business name",
            "Staten Island Ductless Mini Splits",
            format!("{full} Ductless Mini Splits"),
        ),
        Rule::literal("brand", "SI Ductless Pro", format!("{city} Ductless Pro")),
        Rule::literal(
            "service area",
            "serving all Staten Island zip codes",
            format!("serving {full} and surrounding {county} areas"),
        ),
        Rule::pattern(
            "zip code coverage",
            &ZIP_CODE_COVERAGE,
            format!("throughout the {full} area and surrounding {county} communities."),
        ),
        // Blanket place-name swaps
        Rule::literal("borough", OLD_BOROUGH, full.as_str()),
        Rule::literal("harbor", "New York Harbor", locale.river.as_str()),
        Rule::literal("ferry terminal", "St. George", city.as_str()),
    ];

    for &(old, new) in NEIGHBORHOOD_RENAMES {
        rules.push(Rule::literal("neighborhood", old, new));
    }

    rules.extend([
        Rule::literal("zip code", "(10301)", format!("({})", locale.zip)),
        Rule::literal("zip code", "(10304)", "(45750)"),
        Rule::literal("zip code", "(10302)", "(45742)"),
        // Contact details
        Rule::literal("domain", format!("{OLD_HANDLE}.com"), locale.domain()),
        Rule::literal(
            "facebook",
            format!("facebook.com/{OLD_HANDLE}"),
            format!("facebook.com/{}", locale.handle),
        ),
        Rule::literal(
            "instagram",
            format!("instagram.com/{OLD_HANDLE}"),
            format!("instagram.com/{}", locale.handle),
        ),
    ]);

    rules
}
