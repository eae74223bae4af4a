use super::*;
use crate::error::TemplateError;
use crate::{args, skip};

#[test]
fn parse_collects_markup() {
    let source = "SELECT ?# FROM t WHERE 1=1 {AND a = ?d} {AND b IN (?a)}";
    let t = Template::parse(source).unwrap();
    assert_eq!(t.source(), source);
    assert_eq!(t.arity(), 3);
    assert_eq!(t.fragments().len(), 2);
    assert_eq!(
        t.placeholders()
            .iter()
            .map(|p| p.kind)
            .collect::<Vec<_>>(),
        vec![
            PlaceholderKind::IdentList,
            PlaceholderKind::Int,
            PlaceholderKind::ArrayAssign
        ]
    );
    assert!(t.fragments()[0].contains(&t.placeholders()[1]));
    assert!(!t.fragments()[0].contains(&t.placeholders()[2]));
}

#[test]
fn brackets_are_checked_before_placeholders() {
    assert!(matches!(
        Template::parse("{?x"),
        Err(TemplateError::InvalidFragmentSyntax { .. })
    ));
}

#[test]
fn parsed_template_renders_many_times() {
    let t = Template::parse("SELECT * FROM t WHERE 1=1 {AND a = ?}").unwrap();
    assert_eq!(
        t.render(&args![1]).unwrap(),
        "SELECT * FROM t WHERE 1=1 AND a = 1"
    );
    assert_eq!(
        t.render(&args![skip()]).unwrap(),
        "SELECT * FROM t WHERE 1=1"
    );
    assert_eq!(
        t.render(&args!["x"]).unwrap(),
        "SELECT * FROM t WHERE 1=1 AND a = 'x'"
    );
}

#[test]
fn skip_in_one_fragment_keeps_the_other() {
    let t = Template::parse("SELECT * FROM t WHERE 1=1 {AND a = ?} {AND b = ?d} ORDER BY id")
        .unwrap();
    assert_eq!(
        t.render(&args![skip(), 2]).unwrap(),
        "SELECT * FROM t WHERE 1=1 AND b = 2 ORDER BY id"
    );
    assert_eq!(
        t.render(&args!["a", skip()]).unwrap(),
        "SELECT * FROM t WHERE 1=1 AND a = 'a' ORDER BY id"
    );
    assert_eq!(
        t.render(&args![skip(), skip()]).unwrap(),
        "SELECT * FROM t WHERE 1=1 ORDER BY id"
    );
}

#[test]
fn one_skip_removes_every_placeholder_in_its_fragment() {
    let t = Template::parse("SELECT * FROM t {WHERE a = ? AND b = ?d} LIMIT ?d").unwrap();
    assert_eq!(
        t.render(&args!["x", skip(), 10]).unwrap(),
        "SELECT * FROM t LIMIT 10"
    );
}

#[test]
fn braces_inside_values_survive() {
    let t = Template::parse("SELECT ? {, ?}").unwrap();
    assert_eq!(t.render(&args!["{x}", "}"]).unwrap(), "SELECT '{x}' , '}'");
}

#[test]
fn output_is_single_line_including_values() {
    let t = Template::parse("SELECT   ?# FROM t WHERE a = ?").unwrap();
    let sql = t.render(&args![vec!["a\nb"], "x\t\t  y"]).unwrap();
    assert_eq!(sql, "SELECT `a b` FROM t WHERE a = 'x y'");
    assert!(!sql.contains(['\n', '\t']));
}

#[test]
fn keyed_assignment_names_are_collapsed() {
    let t = Template::parse("UPDATE t SET ?a").unwrap();
    assert_eq!(
        t.render(&[Arg::map([("na  me", "v")])]).unwrap(),
        "UPDATE t SET `na me` = 'v'"
    );
}

#[test]
fn empty_fragment_is_stripped() {
    let t = Template::parse("SELECT 1 {}").unwrap();
    assert_eq!(t.arity(), 0);
    assert_eq!(t.render(&[]).unwrap(), "SELECT 1");
}

#[test]
fn multiline_template_is_flattened() {
    let t = Template::parse(
        "SELECT ?#
         FROM users
         WHERE 1=1
         {
            AND id = ?d
         }",
    )
    .unwrap();
    assert_eq!(
        t.render(&args!["name", 3]).unwrap(),
        "SELECT `name` FROM users WHERE 1=1 AND id = 3"
    );
}

#[test]
fn render_errors_abort_the_compile() {
    let t = Template::parse("SELECT ?# FROM t {WHERE a = ?}").unwrap();
    assert_eq!(
        t.render(&args![Vec::<&str>::new(), skip()]),
        Err(TemplateError::EmptyArgumentCollection {
            kind: PlaceholderKind::IdentList
        })
    );
}
