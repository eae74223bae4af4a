//! Template arguments.
//!
//! [`Arg`] is the closed set of value shapes a placeholder can receive. Plain
//! Rust values convert into it via `From`, and the [`args!`](crate::args)
//! macro builds an argument list from mixed values:
//!
//! ```
//! use sqltpl::{Arg, args, skip};
//!
//! let list = args![
//!     vec!["id", "name"],
//!     Arg::map([("status", "active")]),
//!     42,
//!     skip(),
//! ];
//! ```

/// One template argument.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arg {
    /// SQL `NULL`.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Indexed collection: rendered as a value list.
    List(Vec<Arg>),
    /// Keyed collection in insertion order.
    ///
    /// Keys made only of ASCII digits are positional; a map whose keys are
    /// all positional renders like a [`Arg::List`].
    Map(Vec<(String, Arg)>),
    /// Omit the placeholder (and its enclosing fragment).
    Skip,
}

impl Arg {
    /// Build a keyed collection from `(key, value)` pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Arg>,
    {
        Arg::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an indexed collection.
    pub fn list<V: Into<Arg>>(values: impl IntoIterator<Item = V>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Arg::Skip)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Arg::List(_) | Arg::Map(_))
    }

    /// Short name of the value shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "bool",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Text(_) => "string",
            Arg::List(_) => "list",
            Arg::Map(_) => "map",
            Arg::Skip => "skip",
        }
    }

    /// Convert a JSON value, treating strings equal to `skip_token` as [`Arg::Skip`].
    ///
    /// Arrays become lists, objects become maps in document order and numbers
    /// become `Int` when they fit an `i64`, `Float` otherwise.
    #[cfg(feature = "json")]
    pub fn from_json(value: serde_json::Value, skip_token: &str) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Arg::Null,
            Value::Bool(b) => Arg::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Arg::Int(i),
                None => Arg::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) if s == skip_token => Arg::Skip,
            Value::String(s) => Arg::Text(s),
            Value::Array(items) => Arg::List(
                items
                    .into_iter()
                    .map(|v| Arg::from_json(v, skip_token))
                    .collect(),
            ),
            Value::Object(entries) => Arg::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Arg::from_json(v, skip_token)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Float(f64::from(v))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Text(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Arg::Text(v.clone())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::Null, Into::into)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        Arg::list(v)
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(v: [T; N]) -> Self {
        Arg::list(v)
    }
}

/// Build a `Vec<Arg>` from values convertible into [`Arg`].
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}
