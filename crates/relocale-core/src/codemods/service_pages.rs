use anyhow::Result;
use std::path::Path;

use super::{file_name, in_directory, Codemod, RewriteContext, META_DESCRIPTION, META_KEYWORDS, TITLE};
use crate::rule::{apply_all, Rule};
use crate::tables::{service_info, ServiceInfo};

/// Set the title, description and keywords of each known `services/` page
pub struct ServicePages;

impl Codemod for ServicePages {
    fn name(&self) -> &'static str {
        "service-pages"
    }

    fn apply(&self, _ctx: &RewriteContext, path: &Path, content: &str) -> Result<Option<String>> {
        if !in_directory(path, "services") {
            return Ok(None);
        }
        let Some(info) = file_name(path).and_then(service_info) else {
            return Ok(None);
        };

        Ok(apply_all(&rules(info), content))
    }
}

fn rules(info: &ServiceInfo) -> Vec<Rule> {
    vec![
        Rule::pattern("service title", &TITLE, format!("<title>{}</title>", info.title)),
        Rule::pattern(
            "service description",
            &META_DESCRIPTION,
            format!(r#"<meta name="description" content="{}""#, info.description),
        ),
        Rule::pattern(
            "service keywords",
            &META_KEYWORDS,
            format!(r#"<meta name="keywords" content="{}""#, info.keywords),
        ),
    ]
}
