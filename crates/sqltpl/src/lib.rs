//! # sqltpl
//!
//! Compile SQL templates with typed `?` placeholders and optional `{...}`
//! fragments into a single literal SQL string.
//!
//! ## Placeholders
//!
//! - `?`  : string, number, bool or `NULL`, chosen from the argument
//! - `?d` : integer (`NULL` stays `NULL`)
//! - `?f` : float (`NULL` stays `NULL`)
//! - `?a` : value list, or `` `column` = value `` pairs for keyed arguments
//! - `?#` : backtick-quoted identifier list
//!
//! ## Optional fragments
//!
//! A `{...}` fragment is kept with its braces removed, unless one of its
//! placeholders receives [`skip()`], in which case the whole fragment goes:
//!
//! ```
//! use sqltpl::{args, build_query, skip};
//!
//! let by_id = |id: Option<i64>| {
//!     build_query(
//!         "SELECT ?# FROM users WHERE active = ? {AND id = ?d}",
//!         args![vec!["id", "name"], true, id.map_or(skip(), Into::into)],
//!     )
//! };
//!
//! assert_eq!(by_id(None)?, "SELECT `id`, `name` FROM users WHERE active = 1");
//! assert_eq!(by_id(Some(7))?, "SELECT `id`, `name` FROM users WHERE active = 1 AND id = 7");
//! # Ok::<(), sqltpl::TemplateError>(())
//! ```
//!
//! String literals and identifiers are escaped through an [`Escape`]
//! implementation; [`MySqlEscape`] is used unless a [`Compiler`] is built with
//! another one.

pub mod arg;
pub mod compiler;
pub mod error;
pub mod escape;
pub mod render;
pub mod skip;
pub mod template;

pub use arg::Arg;
pub use compiler::{Compiler, build_query};
pub use error::{TemplateError, TemplateResult};
pub use escape::{Escape, MySqlEscape};
pub use render::Rendered;
pub use skip::{skip, skip_token};
pub use template::{Fragment, Placeholder, PlaceholderKind, Template};
