use crate::cli::CheckArgs;
use crate::config::QueryFile;

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let file = QueryFile::load(&args.config)?;

    let failed = check_file(&file, |name, outcome| match outcome {
        Ok(()) => println!("ok     {name}"),
        Err(e) => println!("error  {name}: {e}"),
    });

    if failed > 0 {
        anyhow::bail!("template check failed ({failed} of {} queries)", file.queries.len());
    }
    Ok(())
}

/// Check every query; reports each outcome and returns the failure count.
fn check_file(file: &QueryFile, mut report: impl FnMut(&str, Result<(), String>)) -> usize {
    let mut failed = 0;
    for query in &file.queries {
        let outcome = query
            .render(&file.skip)
            .map(|sql| {
                tracing::debug!(target: "sqltpl.cli", name = %query.name, %sql, "query ok");
            })
            .map_err(|e| e.to_string());
        if outcome.is_err() {
            failed += 1;
        }
        report(&query.name, outcome);
    }
    failed
}
