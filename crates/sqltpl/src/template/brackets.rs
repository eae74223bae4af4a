use crate::error::{TemplateError, TemplateResult};

/// Reject unbalanced or nested `{}` fragment delimiters.
///
/// Only `{` and `}` are looked at; the depth has to stay within `0..=1` and be
/// back at zero at the end of the template.
pub fn validate(template: &str) -> TemplateResult<()> {
    let mut open: Option<usize> = None;

    for (offset, byte) in template.bytes().enumerate() {
        match (byte, open) {
            (b'{', None) => open = Some(offset),
            (b'}', Some(_)) => open = None,
            (b'{', Some(_)) | (b'}', None) => {
                return Err(TemplateError::InvalidFragmentSyntax { offset });
            }
            _ => {}
        }
    }

    match open {
        Some(_) => Err(TemplateError::InvalidFragmentSyntax {
            offset: template.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_of(template: &str) -> Option<usize> {
        match validate(template) {
            Err(TemplateError::InvalidFragmentSyntax { offset }) => Some(offset),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(()) => None,
        }
    }

    #[test]
    fn accepts_flat_fragments() {
        assert!(validate("SELECT 1").is_ok());
        assert!(validate("a {b} c {d}").is_ok());
        assert!(validate("{}").is_ok());
    }

    #[test]
    fn rejects_nesting() {
        assert_eq!(offset_of("{{x}}"), Some(1));
        assert_eq!(offset_of("a {b {c} d}"), Some(5));
    }

    #[test]
    fn rejects_unmatched_close() {
        assert_eq!(offset_of("a } b"), Some(2));
        assert_eq!(offset_of("{a}}"), Some(3));
    }

    #[test]
    fn rejects_unclosed_fragment() {
        assert_eq!(offset_of("a {b"), Some(4));
    }

    #[test]
    fn multibyte_text_is_opaque() {
        assert!(validate("SELECT 'ё' {AND x = ?}").is_ok());
    }
}
