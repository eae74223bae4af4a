use std::fmt;
use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};

/// Placeholder type, selected by the tag after `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `?`: escaping chosen from the argument's own shape.
    Generic,
    /// `?d`
    Int,
    /// `?f`
    Float,
    /// `?a`: value list or `` `key` = value `` assignments.
    ArrayAssign,
    /// `?#`: backtick-quoted identifier list.
    IdentList,
}

impl PlaceholderKind {
    /// Parse the tag following `?` (empty for the generic placeholder).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "" => Some(Self::Generic),
            "d" => Some(Self::Int),
            "f" => Some(Self::Float),
            "a" => Some(Self::ArrayAssign),
            "#" => Some(Self::IdentList),
            _ => None,
        }
    }

    /// The placeholder as written in a template.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "?",
            Self::Int => "?d",
            Self::Float => "?f",
            Self::ArrayAssign => "?a",
            Self::IdentList => "?#",
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placeholder occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte range of the whole token, `?` included.
    pub span: Range<usize>,
    pub kind: PlaceholderKind,
}

impl Placeholder {
    /// Byte offset of the `?`.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\?[#\w]*").expect("invalid built-in placeholder regex"))
}

/// Find every placeholder, left to right.
///
/// A placeholder is `?` followed by any run of word characters or `#`; a run
/// that is not one of the known tags is rejected rather than treated as text.
pub fn scan(template: &str) -> TemplateResult<Vec<Placeholder>> {
    placeholder_re()
        .find_iter(template)
        .map(|m| {
            let kind = PlaceholderKind::from_tag(&m.as_str()[1..]).ok_or_else(|| {
                TemplateError::InvalidPlaceholderSyntax {
                    token: m.as_str().to_string(),
                    offset: m.start(),
                }
            })?;
            Ok(Placeholder {
                span: m.range(),
                kind,
            })
        })
        .collect()
}

/// Fail unless there is exactly one argument per placeholder.
pub fn check_arity(placeholders: &[Placeholder], args: usize) -> TemplateResult<()> {
    if placeholders.len() != args {
        return Err(TemplateError::ArgumentCountMismatch {
            expected: placeholders.len(),
            actual: args,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(template: &str) -> Vec<PlaceholderKind> {
        scan(template).unwrap().into_iter().map(|p| p.kind).collect()
    }

    #[test]
    fn scans_all_kinds_in_order() {
        use PlaceholderKind::*;
        assert_eq!(
            kinds("SELECT ?# FROM t WHERE a = ?d AND b = ?f AND c IN (?a) AND d = ?"),
            vec![IdentList, Int, Float, ArrayAssign, Generic]
        );
    }

    #[test]
    fn records_byte_spans() {
        let found = scan("a = ?d, b = ?").unwrap();
        assert_eq!(found[0].span, 4..6);
        assert_eq!(found[1].span, 12..13);
        assert_eq!(found[1].position(), 12);
    }

    #[test]
    fn adjacent_placeholders_do_not_overlap() {
        let found = scan("??d").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, PlaceholderKind::Generic);
        assert_eq!(found[1].kind, PlaceholderKind::Int);
    }

    #[test]
    fn punctuation_ends_the_tag() {
        assert_eq!(kinds("(?d)"), vec![PlaceholderKind::Int]);
        assert_eq!(kinds("?,?"), vec![PlaceholderKind::Generic; 2]);
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = scan("SELECT ?x").unwrap_err();
        assert_eq!(
            err,
            TemplateError::InvalidPlaceholderSyntax {
                token: "?x".to_string(),
                offset: 7
            }
        );
        assert!(scan("WHERE id = ?dd").is_err());
        assert!(scan("WHERE id = ?d1").is_err());
        assert!(scan("WHERE id = ?_").is_err());
    }

    #[test]
    fn no_placeholders() {
        assert!(scan("SELECT 1").unwrap().is_empty());
    }

    #[test]
    fn arity_check() {
        let found = scan("? ?").unwrap();
        assert!(check_arity(&found, 2).is_ok());
        assert_eq!(
            check_arity(&found, 3),
            Err(TemplateError::ArgumentCountMismatch {
                expected: 2,
                actual: 3
            })
        );
    }
}
