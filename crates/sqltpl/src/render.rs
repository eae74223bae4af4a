//! Argument rendering.
//!
//! Turns one [`Arg`] into the literal SQL that replaces its placeholder. The
//! placeholder kind picks the rule:
//!
//! | Placeholder | Output |
//! |---|---|
//! | `?`  | `'escaped'`, number, `0`/`1` for booleans, `NULL` |
//! | `?d` | integer or `NULL` |
//! | `?f` | float or `NULL` |
//! | `?a` | `v1, v2` for lists, `` `k1` = v1, `k2` = v2 `` for maps |
//! | `?#` | `` `a`, `b` `` |

use std::borrow::Cow;

use crate::arg::Arg;
use crate::error::{TemplateError, TemplateResult};
use crate::escape::Escape;
use crate::template::PlaceholderKind;

/// Rendered form of one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Literal SQL text.
    Sql(String),
    /// The argument was [`Arg::Skip`]; resolved during fragment elision.
    Skip,
}

impl Rendered {
    pub fn is_skip(&self) -> bool {
        matches!(self, Rendered::Skip)
    }

    pub fn as_sql(&self) -> Option<&str> {
        match self {
            Rendered::Sql(sql) => Some(sql),
            Rendered::Skip => None,
        }
    }
}

/// Render `arg` for a placeholder of type `kind`.
///
/// A skip marker passes through untouched whatever the kind.
pub fn render<E: Escape + ?Sized>(
    arg: &Arg,
    kind: PlaceholderKind,
    escape: &E,
) -> TemplateResult<Rendered> {
    if arg.is_skip() {
        return Ok(Rendered::Skip);
    }

    let sql = match kind {
        PlaceholderKind::Generic => scalar(arg, kind, escape)?,
        PlaceholderKind::Int => match arg {
            Arg::Null => "NULL".to_string(),
            _ => to_int(arg).to_string(),
        },
        PlaceholderKind::Float => match arg {
            Arg::Null => "NULL".to_string(),
            _ => float_literal(to_float(arg)),
        },
        PlaceholderKind::ArrayAssign => array_assign(arg, escape)?,
        PlaceholderKind::IdentList => ident_list(arg, escape)?,
    };
    Ok(Rendered::Sql(sql))
}

/// The `?` rule; also used for values inside `?a`.
fn scalar<E: Escape + ?Sized>(
    arg: &Arg,
    kind: PlaceholderKind,
    escape: &E,
) -> TemplateResult<String> {
    match arg {
        Arg::Text(s) => Ok(format!("'{}'", escape.escape_str(s))),
        Arg::Float(f) => Ok(float_literal(*f)),
        Arg::Int(i) => Ok(i.to_string()),
        Arg::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        Arg::Null => Ok("NULL".to_string()),
        Arg::List(_) | Arg::Map(_) | Arg::Skip => {
            Err(TemplateError::denied(kind, arg.type_name()))
        }
    }
}

fn array_assign<E: Escape + ?Sized>(arg: &Arg, escape: &E) -> TemplateResult<String> {
    let kind = PlaceholderKind::ArrayAssign;
    let entries = entries(arg);
    if entries.is_empty() {
        return Err(TemplateError::EmptyArgumentCollection { kind });
    }

    let keyed = entries
        .iter()
        .any(|(key, _)| key.is_some_and(|k| !is_index_key(k)));

    let parts = entries
        .into_iter()
        .map(|(key, value)| -> TemplateResult<String> {
            match key {
                Some(key) if keyed => Ok(format!(
                    "`{}` = {}",
                    column(&Arg::Text(key.to_string()), kind, escape)?,
                    scalar(value, kind, escape)?
                )),
                _ => scalar(value, kind, escape),
            }
        })
        .collect::<TemplateResult<Vec<_>>>()?;
    Ok(parts.join(", "))
}

fn ident_list<E: Escape + ?Sized>(arg: &Arg, escape: &E) -> TemplateResult<String> {
    let kind = PlaceholderKind::IdentList;
    let entries = entries(arg);
    if entries.is_empty() {
        return Err(TemplateError::EmptyArgumentCollection { kind });
    }

    let parts = entries
        .into_iter()
        .map(|(_, value)| -> TemplateResult<String> {
            Ok(format!("`{}`", column(value, kind, escape)?))
        })
        .collect::<TemplateResult<Vec<_>>>()?;
    Ok(parts.join(", "))
}

/// Identifier rule: non-empty name with backticks escaped, left unquoted.
fn column<E: Escape + ?Sized>(
    arg: &Arg,
    kind: PlaceholderKind,
    escape: &E,
) -> TemplateResult<String> {
    let name: Cow<'_, str> = match arg {
        Arg::Text(s) => Cow::Borrowed(s.as_str()),
        Arg::Int(i) => Cow::Owned(i.to_string()),
        Arg::Float(f) => Cow::Owned(f.to_string()),
        Arg::Bool(true) => Cow::Borrowed("1"),
        Arg::Bool(false) | Arg::Null => Cow::Borrowed(""),
        Arg::List(_) | Arg::Map(_) | Arg::Skip => {
            return Err(TemplateError::denied(kind, arg.type_name()));
        }
    };
    if name.is_empty() {
        return Err(TemplateError::EmptyColumnName);
    }
    Ok(escape.escape_ident(&name))
}

/// View any argument as a collection; a scalar is a one-element list and
/// `NULL` is empty.
fn entries(arg: &Arg) -> Vec<(Option<&str>, &Arg)> {
    match arg {
        Arg::List(items) => items.iter().map(|v| (None, v)).collect(),
        Arg::Map(items) => items.iter().map(|(k, v)| (Some(k.as_str()), v)).collect(),
        Arg::Null => Vec::new(),
        scalar => vec![(None, scalar)],
    }
}

/// Positional keys are non-empty runs of ASCII digits.
fn is_index_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn float_literal(f: f64) -> String {
    if f.is_finite() {
        f.to_string()
    } else {
        "NULL".to_string()
    }
}

fn to_int(arg: &Arg) -> i64 {
    match arg {
        Arg::Int(i) => *i,
        // `as` truncates toward zero, saturates, and maps NaN to 0.
        Arg::Float(f) => *f as i64,
        Arg::Bool(b) => i64::from(*b),
        Arg::Text(s) => {
            let prefix = numeric_prefix(s);
            if prefix.contains(['.', 'e', 'E']) {
                prefix.parse::<f64>().map_or(0, |f| f as i64)
            } else {
                prefix
                    .parse::<i64>()
                    .or_else(|_| prefix.parse::<f64>().map(|f| f as i64))
                    .unwrap_or(0)
            }
        }
        Arg::List(items) => i64::from(!items.is_empty()),
        Arg::Map(items) => i64::from(!items.is_empty()),
        Arg::Null | Arg::Skip => 0,
    }
}

fn to_float(arg: &Arg) -> f64 {
    match arg {
        Arg::Float(f) => *f,
        Arg::Int(i) => *i as f64,
        Arg::Text(s) => numeric_prefix(s).parse::<f64>().unwrap_or(0.0),
        other => to_int(other) as f64,
    }
}

/// Longest leading decimal number in `s`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns an empty string when `s` does not start with a number.
fn numeric_prefix(s: &str) -> &str {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}
