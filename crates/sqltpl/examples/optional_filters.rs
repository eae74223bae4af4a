//! Optional filters with `{...}` fragments
//!
//! Run with: cargo run --example optional_filters -p sqltpl

use sqltpl::{Arg, Template, TemplateResult, args, skip};

/// Search parameters - all optional
struct TaskFilter {
    status: Option<String>,
    min_priority: Option<i32>,
    assignees: Vec<String>,
}

/// `None` drops the fragment the value would have gone into.
fn or_skip<T: Into<Arg>>(value: Option<T>) -> Arg {
    value.map_or_else(skip, Into::into)
}

fn search_sql(template: &Template, filter: &TaskFilter) -> TemplateResult<String> {
    let assignees = if filter.assignees.is_empty() {
        skip()
    } else {
        Arg::from(filter.assignees.clone())
    };

    template.render(&args![
        vec!["id", "title", "status", "priority"],
        or_skip(filter.status.clone()),
        or_skip(filter.min_priority),
        assignees,
    ])
}

fn main() -> TemplateResult<()> {
    let template = Template::parse(
        "SELECT ?# FROM tasks
         WHERE 1=1
         {AND status = ?}
         {AND priority >= ?d}
         {AND assignee IN (?a)}
         ORDER BY priority DESC, id",
    )?;

    let filters = [
        TaskFilter {
            status: None,
            min_priority: None,
            assignees: Vec::new(),
        },
        TaskFilter {
            status: Some("open".to_string()),
            min_priority: Some(3),
            assignees: Vec::new(),
        },
        TaskFilter {
            status: Some("it's done".to_string()),
            min_priority: None,
            assignees: vec!["alice".to_string(), "bob".to_string()],
        },
    ];

    for filter in &filters {
        println!("{}", search_sql(&template, filter)?);
    }

    let update = sqltpl::build_query(
        "UPDATE tasks SET ?a WHERE id = ?d",
        args![Arg::map([("status", "closed"), ("assignee", "alice")]), 42],
    )?;
    println!("{update}");

    Ok(())
}
