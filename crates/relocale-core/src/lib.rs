//! Table-driven rewriting of static marketing pages from one locale to another.
//!
//! Each pass is a [`Codemod`]: an ordered list of [`Rule`]s applied to a
//! page's text. Passes are pure and idempotent, so running them again over
//! already migrated pages leaves those pages untouched.

pub mod codemods;
pub mod error;
pub mod locale;
pub mod rule;
pub mod runner;
pub mod tables;

pub use codemods::{Codemod, RewriteContext};
pub use error::RewriteError;
pub use locale::Locale;
pub use rule::{Matcher, Replacement, Rule};
pub use runner::{FileOutcome, Mode, Summary};
