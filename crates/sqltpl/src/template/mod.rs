//! Template parsing and assembly.
//!
//! A template is opaque SQL text with two kinds of markup:
//!
//! - placeholders `?`, `?d`, `?f`, `?a`, `?#`, one per argument, and
//! - flat `{...}` fragments, dropped as a whole when one of their
//!   placeholders receives [`skip()`](crate::skip()).
//!
//! [`Template::parse`] validates the markup once; the parsed template can then
//! be rendered with any number of argument lists.

mod assemble;
mod brackets;
mod fragment;
mod placeholder;

#[cfg(test)]
mod tests;

pub use brackets::validate;
pub use fragment::Fragment;
pub use placeholder::{Placeholder, PlaceholderKind};

use crate::arg::Arg;
use crate::error::TemplateResult;
use crate::escape::{Escape, MySqlEscape};
use crate::render::{Rendered, render};

/// A validated query template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    placeholders: Vec<Placeholder>,
    fragments: Vec<Fragment>,
}

impl Template {
    /// Validate fragment delimiters and placeholder tags.
    pub fn parse(source: impl Into<String>) -> TemplateResult<Self> {
        let source = source.into();
        brackets::validate(&source)?;
        let placeholders = placeholder::scan(&source)?;
        let fragments = fragment::scan(&source);
        Ok(Self {
            source,
            placeholders,
            fragments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholders in template order.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Conditional fragments in template order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of arguments the template expects.
    pub fn arity(&self) -> usize {
        self.placeholders.len()
    }

    /// Render with the built-in MySQL escaping.
    pub fn render(&self, args: &[Arg]) -> TemplateResult<String> {
        self.render_with(&MySqlEscape, args)
    }

    /// Render with a driver-supplied escaper.
    pub fn render_with<E: Escape + ?Sized>(
        &self,
        escape: &E,
        args: &[Arg],
    ) -> TemplateResult<String> {
        placeholder::check_arity(&self.placeholders, args.len())?;

        let rendered = self
            .placeholders
            .iter()
            .zip(args)
            .map(|(p, arg)| render(arg, p.kind, escape))
            .collect::<TemplateResult<Vec<Rendered>>>()?;

        let plan = fragment::plan(&self.source, &self.placeholders, &rendered, &self.fragments);
        let sql = assemble::assemble(&plan.segments);

        tracing::debug!(
            target: "sqltpl.compile",
            placeholders = self.placeholders.len(),
            fragments = self.fragments.len(),
            elided = plan.elided,
            sql_len = sql.len(),
            "compiled template"
        );

        Ok(sql)
    }
}
