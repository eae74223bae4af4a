use std::ops::Range;

use super::placeholder::Placeholder;
use crate::render::Rendered;

/// A `{...}` conditional fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Byte range including both braces.
    pub span: Range<usize>,
}

impl Fragment {
    /// Byte range between the braces.
    pub fn interior(&self) -> Range<usize> {
        self.span.start + 1..self.span.end - 1
    }

    pub fn contains(&self, placeholder: &Placeholder) -> bool {
        self.span.start <= placeholder.span.start && placeholder.span.end <= self.span.end
    }
}

/// Locate the fragments of a template that passed bracket validation.
pub fn scan(template: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut open = None;
    for (offset, byte) in template.bytes().enumerate() {
        match byte {
            b'{' => open = Some(offset),
            b'}' => {
                if let Some(start) = open.take() {
                    fragments.push(Fragment {
                        span: start..offset + 1,
                    });
                }
            }
            _ => {}
        }
    }
    fragments
}

/// A piece of output, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Template text.
    Text(&'a str),
    /// Rendered argument.
    Value(&'a str),
    /// Where an elided fragment used to be; reads as whitespace.
    Gap,
}

/// Output layout after fragment elision.
#[derive(Debug, Default)]
pub(crate) struct Plan<'a> {
    pub segments: Vec<Segment<'a>>,
    pub elided: usize,
}

/// Decide every fragment and lay out the output over original offsets.
///
/// A fragment is elided when any placeholder inside it rendered as a skip;
/// otherwise only its braces are dropped. A skipped placeholder outside every
/// fragment is dropped on its own.
pub(crate) fn plan<'a>(
    template: &'a str,
    placeholders: &[Placeholder],
    rendered: &'a [Rendered],
    fragments: &[Fragment],
) -> Plan<'a> {
    let mut layout = Layout {
        template,
        placeholders,
        rendered,
        next: 0,
        plan: Plan::default(),
    };

    let mut cursor = 0;
    for fragment in fragments {
        layout.copy(cursor..fragment.span.start);

        let inside = placeholders
            .iter()
            .zip(rendered)
            .filter(|(p, _)| fragment.contains(p));
        if inside.clone().any(|(_, r)| r.is_skip()) {
            tracing::trace!(
                target: "sqltpl.compile",
                start = fragment.span.start,
                end = fragment.span.end,
                placeholders = inside.count(),
                "elided fragment"
            );
            layout.drop_until(fragment.span.end);
            layout.plan.segments.push(Segment::Gap);
            layout.plan.elided += 1;
        } else {
            layout.copy(fragment.interior());
        }
        cursor = fragment.span.end;
    }
    layout.copy(cursor..template.len());

    layout.plan
}

struct Layout<'t, 'p> {
    template: &'t str,
    placeholders: &'p [Placeholder],
    rendered: &'t [Rendered],
    next: usize,
    plan: Plan<'t>,
}

impl<'t> Layout<'t, '_> {
    /// Emit `range` of the template, substituting the placeholders in it.
    fn copy(&mut self, range: Range<usize>) {
        let (placeholders, rendered) = (self.placeholders, self.rendered);
        let mut cursor = range.start;
        while let Some(placeholder) = placeholders.get(self.next) {
            if placeholder.span.start >= range.end {
                break;
            }
            self.push_text(cursor..placeholder.span.start);
            if let Some(sql) = rendered[self.next].as_sql() {
                self.plan.segments.push(Segment::Value(sql));
            }
            cursor = placeholder.span.end;
            self.next += 1;
        }
        self.push_text(cursor..range.end);
    }

    /// Skip placeholders that start before `end` without emitting them.
    fn drop_until(&mut self, end: usize) {
        while self
            .placeholders
            .get(self.next)
            .is_some_and(|p| p.span.start < end)
        {
            self.next += 1;
        }
    }

    fn push_text(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            let template = self.template;
            self.plan.segments.push(Segment::Text(&template[range]));
        }
    }
}
