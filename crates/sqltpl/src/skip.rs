//! The skip marker.
//!
//! Passing [`skip()`] as an argument omits its placeholder, together with the
//! enclosing `{...}` fragment when there is one:
//!
//! ```
//! use sqltpl::{build_query, skip};
//!
//! let sql = build_query("SELECT * FROM t WHERE 1=1 {AND col = ?}", [skip()])?;
//! assert_eq!(sql, "SELECT * FROM t WHERE 1=1");
//! # Ok::<(), sqltpl::TemplateError>(())
//! ```
//!
//! Inside Rust the marker is the [`Arg::Skip`] variant, so an ordinary string
//! can never be mistaken for it. Text-based sources (JSON, config files) have
//! no such variant; they agree on a token string instead and translate it at
//! the boundary, see [`skip_token`].

use sha2::{Digest, Sha256};
use std::sync::OnceLock;

use crate::arg::Arg;

const SKIP_SEED: &str = "skip";

/// The argument that means "omit this placeholder".
pub fn skip() -> Arg {
    Arg::Skip
}

/// Process-wide skip token for text-based argument sources.
///
/// Computed on first use as `skip@<sha256(seed)>` and identical on every call
/// afterwards.
pub fn skip_token() -> &'static str {
    static TOKEN: OnceLock<String> = OnceLock::new();
    TOKEN.get_or_init(|| format!("skip@{}", hex::encode(Sha256::digest(SKIP_SEED))))
}
