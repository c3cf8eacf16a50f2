use anyhow::Result;
use std::path::Path;

use super::{Codemod, RewriteContext};
use crate::locale::Locale;
use crate::rule::{apply_all, Rule};

/// Sweep up old-locale tokens the targeted passes left behind.
///
/// Order matters: the doubled-suffix fixes assume the region code has
/// already been swapped.
pub struct Cleanup;

impl Codemod for Cleanup {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    fn apply(&self, ctx: &RewriteContext, _path: &Path, content: &str) -> Result<Option<String>> {
        Ok(apply_all(&rules(&ctx.locale), content))
    }
}

fn rules(locale: &Locale) -> Vec<Rule> {
    let state = &locale.state;
    let full = locale.full_name();
    vec![
        Rule::literal("region code", "NY", state.as_str()),
        Rule::literal("region name", "New York", locale.state_name.as_str()),
        Rule::literal("waterway", "Harbor", "River"),
        Rule::literal("doubled region", format!(", {state}, {state}"), format!(", {state}")),
        // A no-op once the region code swap has run; it only holds its place in the sweep order.
        Rule::literal("stale region", format!("{full}, NY"), full.as_str()),
        Rule::literal("borough", "Staten Island", locale.city.as_str()),
        Rule::literal(
            "business name",
            format!("{full} Ductless Mini Splits"),
            format!("{} {state} Ductless Mini Splits", locale.city),
        ),
    ]
}
