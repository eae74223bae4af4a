//! One-shot compilation entry points.

use crate::arg::Arg;
use crate::error::TemplateResult;
use crate::escape::{Escape, MySqlEscape};
use crate::template::Template;

/// Compile `template` with `args` using MySQL string escaping.
///
/// # Example
/// ```
/// use sqltpl::{args, build_query, skip};
///
/// let sql = build_query("SELECT ?# FROM users WHERE 1=1 {AND id = ?d}", args![vec!["id", "name"], skip()])?;
/// assert_eq!(sql, "SELECT `id`, `name` FROM users WHERE 1=1");
/// # Ok::<(), sqltpl::TemplateError>(())
/// ```
pub fn build_query<I>(template: &str, args: I) -> TemplateResult<String>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Compiler::new(MySqlEscape).build(template, args)
}

/// Template compiler bound to a driver's escaping rules.
#[derive(Debug, Clone, Default)]
pub struct Compiler<E = MySqlEscape> {
    escape: E,
}

impl<E: Escape> Compiler<E> {
    pub fn new(escape: E) -> Self {
        Self { escape }
    }

    pub fn escape(&self) -> &E {
        &self.escape
    }

    /// Parse `template` and render it with `args` in one go.
    pub fn build<I>(&self, template: &str, args: I) -> TemplateResult<String>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let template = Template::parse(template)?;
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        template.render_with(&self.escape, &args)
    }

    /// Render an already parsed template.
    pub fn render(&self, template: &Template, args: &[Arg]) -> TemplateResult<String> {
        template.render_with(&self.escape, args)
    }
}
