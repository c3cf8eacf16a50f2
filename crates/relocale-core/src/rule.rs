use log::debug;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// What a [`Rule`] looks for.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact substring, replaced everywhere it occurs.
    Literal(String),
    /// Compiled pattern, replaced at every non-overlapping match.
    Pattern(&'static Regex),
}

/// What a [`Rule`] puts in place of a match.
#[derive(Debug, Clone)]
pub enum Replacement {
    /// Inserted verbatim. `$` has no special meaning.
    Literal(String),
    /// Expanded against the match's capture groups (`$1`, `${name}`).
    Template(String),
}

impl Replacement {
    fn text(&self) -> &str {
        match self {
            Replacement::Literal(s) | Replacement::Template(s) => s,
        }
    }
}

/// A single matcher + replacement step of a pass.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    matcher: Matcher,
    replacement: Replacement,
}

impl Rule {
    pub fn literal(name: &'static str, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name,
            matcher: Matcher::Literal(from.into()),
            replacement: Replacement::Literal(to.into()),
        }
    }

    pub fn pattern(name: &'static str, re: &'static Regex, to: impl Into<String>) -> Self {
        Self {
            name,
            matcher: Matcher::Pattern(re),
            replacement: Replacement::Literal(to.into()),
        }
    }

    pub fn template(name: &'static str, re: &'static Regex, template: impl Into<String>) -> Self {
        Self {
            name,
            matcher: Matcher::Pattern(re),
            replacement: Replacement::Template(template.into()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to `content`, borrowing when nothing matched.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match &self.matcher {
            Matcher::Literal(from) => {
                if from.is_empty() || !content.contains(from.as_str()) {
                    Cow::Borrowed(content)
                } else {
                    Cow::Owned(content.replace(from.as_str(), self.replacement.text()))
                }
            }
            Matcher::Pattern(re) => match &self.replacement {
                Replacement::Literal(to) => re.replace_all(content, NoExpand(to)),
                Replacement::Template(template) => re.replace_all(content, template.as_str()),
            },
        }
    }
}

/// Run `rules` over `content` in order. Returns `None` when the text is unchanged.
pub fn apply_all(rules: &[Rule], content: &str) -> Option<String> {
    let mut current = Cow::Borrowed(content);
    for rule in rules {
        let next = rule.apply(&current);
        if let Cow::Owned(updated) = next {
            debug!("rule '{}' matched", rule.name());
            current = Cow::Owned(updated);
        }
    }

    match current {
        Cow::Owned(updated) if updated != content => Some(updated),
        _ => None,
    }
}

/// Escape `$` so a value can be spliced into a [`Replacement::Template`].
pub fn escape_template(value: &str) -> String {
    value.replace('$', "$$")
}
