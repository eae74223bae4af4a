use super::fragment::Segment;

/// Join planned segments into the final single-line SQL.
///
/// Every whitespace run, in template text and rendered values alike, becomes
/// one space. Leading and trailing whitespace is dropped.
pub(crate) fn assemble(segments: &[Segment<'_>]) -> String {
    let cap = segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) | Segment::Value(t) => t.len(),
            Segment::Gap => 1,
        })
        .sum();
    let mut out = Writer {
        out: String::with_capacity(cap),
        pending_space: false,
    };

    for segment in segments {
        match segment {
            Segment::Text(text) | Segment::Value(text) => out.push(text),
            Segment::Gap => out.pending_space = true,
        }
    }
    out.out
}

struct Writer {
    out: String,
    pending_space: bool,
}

impl Writer {
    fn push(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.pending_space = true;
            } else {
                self.flush_space();
                self.out.push(ch);
            }
        }
    }

    fn flush_space(&mut self) {
        if self.pending_space && !self.out.is_empty() {
            self.out.push(' ');
        }
        self.pending_space = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims_template_whitespace() {
        let out = assemble(&[Segment::Text("  SELECT\n\t*   FROM t  ")]);
        assert_eq!(out, "SELECT * FROM t");
    }

    #[test]
    fn whitespace_spans_segment_boundaries() {
        let out = assemble(&[
            Segment::Text("WHERE 1=1 "),
            Segment::Gap,
            Segment::Text(" ORDER BY id"),
        ]);
        assert_eq!(out, "WHERE 1=1 ORDER BY id");
    }

    #[test]
    fn values_are_collapsed_too() {
        let out = assemble(&[
            Segment::Text("a = "),
            Segment::Value("'x \t\n y'"),
            Segment::Text(" AND "),
            Segment::Value("`c\nd`"),
        ]);
        assert_eq!(out, "a = 'x y' AND `c d`");
    }

    #[test]
    fn value_edge_whitespace_merges_with_text() {
        let out = assemble(&[Segment::Text("a "), Segment::Value("  1  "), Segment::Text(" b")]);
        assert_eq!(out, "a 1 b");
    }

    #[test]
    fn adjacent_text_is_not_separated() {
        let out = assemble(&[Segment::Text("a"), Segment::Text("b"), Segment::Value("1")]);
        assert_eq!(out, "ab1");
    }

    #[test]
    fn only_gaps_yield_empty_output() {
        assert_eq!(assemble(&[Segment::Gap, Segment::Gap]), "");
    }
}
