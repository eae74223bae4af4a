use crate::cli::EvalArgs;
use crate::config::DEFAULT_SKIP;
use sqltpl::{Arg, Template};

pub fn run(args: EvalArgs) -> anyhow::Result<()> {
    let sql = eval(&args)?;
    println!("{sql}");
    Ok(())
}

fn eval(args: &EvalArgs) -> anyhow::Result<String> {
    let skip = args.skip.as_deref().unwrap_or(DEFAULT_SKIP);
    let values: Vec<serde_json::Value> = match args.args.as_deref() {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("--args must be a JSON array: {e}"))?,
        None => Vec::new(),
    };
    let values: Vec<Arg> = values
        .into_iter()
        .map(|v| Arg::from_json(v, skip))
        .collect();

    let template = Template::parse(args.template.as_str())?;
    Ok(template.render(&values)?)
}
