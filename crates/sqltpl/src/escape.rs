//! Driver escaping primitives.
//!
//! The compiler never decides on its own how a string literal or an
//! identifier is made safe; it delegates to an [`Escape`] implementation
//! supplied by the database driver. [`MySqlEscape`] is the built-in
//! implementation for MySQL-compatible servers on a UTF-8 connection.

/// Escaping primitives supplied by a database driver.
pub trait Escape {
    /// Escape `raw` for inclusion between single quotes in a string literal.
    fn escape_str(&self, raw: &str) -> String;

    /// Escape an identifier for inclusion between backticks.
    ///
    /// The default doubles every embedded backtick.
    fn escape_ident(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        for ch in name.chars() {
            if ch == '`' {
                out.push('`');
            }
            out.push(ch);
        }
        out
    }
}

impl<E: Escape + ?Sized> Escape for &E {
    fn escape_str(&self, raw: &str) -> String {
        (**self).escape_str(raw)
    }

    fn escape_ident(&self, name: &str) -> String {
        (**self).escape_ident(name)
    }
}

/// Escaping as done by `mysql_real_escape_string` for a UTF-8 connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlEscape;

impl Escape for MySqlEscape {
    fn escape_str(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        for ch in raw.chars() {
            match ch {
                '\0' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\x1a' => out.push_str("\\Z"),
                c => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mysql_escapes_quotes_and_controls() {
        let e = MySqlEscape;
        assert_eq!(e.escape_str("O'Brien"), "O\\'Brien");
        assert_eq!(e.escape_str(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(e.escape_str("a\\b"), "a\\\\b");
        assert_eq!(e.escape_str("l1\nl2\r"), "l1\\nl2\\r");
        assert_eq!(e.escape_str("nul\0sub\x1a"), "nul\\0sub\\Z");
    }

    #[test]
    fn mysql_keeps_plain_text() {
        assert_eq!(MySqlEscape.escape_str("Привет, мир"), "Привет, мир");
        assert_eq!(MySqlEscape.escape_str(""), "");
    }

    #[test]
    fn ident_doubles_backticks() {
        assert_eq!(MySqlEscape.escape_ident("col"), "col");
        assert_eq!(MySqlEscape.escape_ident("we`ird"), "we``ird");
        assert_eq!(MySqlEscape.escape_ident("``"), "````");
    }

    #[test]
    fn custom_escaper_overrides_string_rule() {
        struct Doubling;
        impl Escape for Doubling {
            fn escape_str(&self, raw: &str) -> String {
                raw.replace('\'', "''")
            }
        }
        assert_eq!(Doubling.escape_str("it's"), "it''s");
        assert_eq!(Doubling.escape_ident("a`b"), "a``b");
    }
}
