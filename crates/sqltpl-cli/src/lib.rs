mod check;
mod cli;
mod config;
mod eval;
mod logging;
mod render;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let invocation = cli::parse_args(&args)?;
    logging::init(invocation.verbose);

    match invocation.command {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Render(args) => render::run(args),
        cli::Command::Check(args) => check::run(args),
        cli::Command::Eval(args) => eval::run(args),
    }
}
