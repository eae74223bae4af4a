use crate::cli::RenderArgs;
use crate::config::QueryFile;
use std::io::Write;

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let file = QueryFile::load(&args.config)?;
    let queries = file.select(&args.names)?;

    let mut out = std::io::stdout().lock();
    for query in queries {
        let sql = query
            .render(&file.skip)
            .map_err(|e| anyhow::anyhow!("failed to render query {}: {e}", query.name))?;
        writeln!(out, "-- {}\n{sql};", query.name)?;
    }
    Ok(())
}
