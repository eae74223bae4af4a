use std::path::PathBuf;

pub const DEFAULT_CONFIG: &str = "sqltpl.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
    Check,
    Eval,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
    Check(CheckArgs),
    Eval(EvalArgs),
}

#[derive(Debug, Clone)]
pub struct Invocation {
    pub verbose: bool,
    pub command: Command,
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub config: PathBuf,
    pub names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub config: PathBuf,
}

#[derive(Debug, Clone)]
pub struct EvalArgs {
    pub template: String,
    pub args: Option<String>,
    pub skip: Option<String>,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Invocation> {
    let verbose = args
        .iter()
        .skip(1)
        .any(|a| a == "-v" || a == "--verbose");
    let mut it = args
        .iter()
        .skip(1)
        .map(|s| s.as_str())
        .filter(|a| *a != "-v" && *a != "--verbose");

    let command = match it.next() {
        None | Some("-h" | "--help") => Command::Help(HelpTopic::Root),
        Some("render") => parse_render(it)?,
        Some("check") => parse_check(it)?,
        Some("eval") => parse_eval(it)?,
        Some(other) => anyhow::bail!("unknown command: {other}"),
    };

    Ok(Invocation { verbose, command })
}

/// Value of `--flag value` or `--flag=value`, when `token` is that flag.
fn flag_value<'a>(
    flag: &str,
    token: &'a str,
    it: &mut impl Iterator<Item = &'a str>,
) -> anyhow::Result<Option<&'a str>> {
    if token == flag {
        let Some(v) = it.next() else {
            anyhow::bail!("{flag} requires a value");
        };
        return Ok(Some(v));
    }
    Ok(token
        .strip_prefix(flag)
        .and_then(|rest| rest.strip_prefix('=')))
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut names = Vec::new();

    while let Some(token) = it.next() {
        if matches!(token, "-h" | "--help") {
            return Ok(Command::Help(HelpTopic::Render));
        }
        if let Some(v) = flag_value("--config", token, &mut it)? {
            config = PathBuf::from(v);
        } else if let Some(v) = flag_value("--name", token, &mut it)? {
            names.push(v.to_string());
        } else {
            anyhow::bail!("unknown argument: {token}");
        }
    }

    Ok(Command::Render(RenderArgs { config, names }))
}

fn parse_check<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        if matches!(token, "-h" | "--help") {
            return Ok(Command::Help(HelpTopic::Check));
        }
        if let Some(v) = flag_value("--config", token, &mut it)? {
            config = PathBuf::from(v);
        } else {
            anyhow::bail!("unknown argument: {token}");
        }
    }

    Ok(Command::Check(CheckArgs { config }))
}

fn parse_eval<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut template: Option<String> = None;
    let mut args: Option<String> = None;
    let mut skip: Option<String> = None;

    while let Some(token) = it.next() {
        if matches!(token, "-h" | "--help") {
            return Ok(Command::Help(HelpTopic::Eval));
        }
        if let Some(v) = flag_value("--template", token, &mut it)? {
            template = Some(v.to_string());
        } else if let Some(v) = flag_value("--args", token, &mut it)? {
            args = Some(v.to_string());
        } else if let Some(v) = flag_value("--skip", token, &mut it)? {
            skip = Some(v.to_string());
        } else {
            anyhow::bail!("unknown argument: {token}");
        }
    }

    let Some(template) = template else {
        // `sqltpl eval` with nothing else reads as a request for help.
        if args.is_none() && skip.is_none() {
            return Ok(Command::Help(HelpTopic::Eval));
        }
        anyhow::bail!("missing --template");
    };

    Ok(Command::Eval(EvalArgs {
        template,
        args,
        skip,
    }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqltpl - compile SQL templates into literal SQL

USAGE:
  sqltpl [-v] <COMMAND> [OPTIONS]

COMMANDS:
  render    Render queries from a query file
  check     Validate every query in a query file
  eval      Render an inline template

OPTIONS:
  -v, --verbose         Log compile details to stderr
  -h, --help            Print help

Run `sqltpl <COMMAND> --help` for command options."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  sqltpl render [OPTIONS]

OPTIONS:
  --config <FILE>       Query file path (default: sqltpl.toml)
  --name <NAME>         Render only this query (repeatable)
  -h, --help            Print help"
            );
        }
        HelpTopic::Check => {
            println!(
                "\
USAGE:
  sqltpl check [OPTIONS]

OPTIONS:
  --config <FILE>       Query file path (default: sqltpl.toml)
  -h, --help            Print help"
            );
        }
        HelpTopic::Eval => {
            println!(
                "\
USAGE:
  sqltpl eval --template <SQL> [OPTIONS]

OPTIONS:
  --template <SQL>      Template text
  --args <JSON>         Arguments as a JSON array (default: [])
  --skip <TOKEN>        String that stands for the skip marker (default: @skip)
  -h, --help            Print help"
            );
        }
    }
}
