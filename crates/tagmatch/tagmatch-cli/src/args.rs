//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "\
usage: tagmatch [--config <path>] [--db <path>]

Reads one message per line from stdin:

    user_id|display name|free text about the games you play

and prints the best-matching players for each.

options:
    --config <path>   TOML configuration file
    --db <path>       SQLite database path (overrides storage.db_path)
    -h, --help        print this help";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub db: Option<String>,
    pub help: bool,
}

impl Args {
    pub fn parse<I>(raw: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = Args::default();
        let mut raw = raw.into_iter();
        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "-h" | "--help" => args.help = true,
                "--config" => {
                    let value = raw.next().ok_or("--config needs a path")?;
                    args.config = Some(PathBuf::from(value));
                }
                "--db" => {
                    args.db = Some(raw.next().ok_or("--db needs a path")?);
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(args)
    }
}

/// One stdin message: `user_id|display name|text`.
#[derive(Debug, PartialEq)]
pub struct InputLine<'a> {
    pub user_id: &'a str,
    pub display_name: Option<&'a str>,
    pub text: &'a str,
}

pub fn parse_line(line: &str) -> Option<InputLine<'_>> {
    let mut parts = line.splitn(3, '|');
    let user_id = parts.next()?.trim();
    let display_name = parts.next()?.trim();
    let text = parts.next()?.trim();
    if user_id.is_empty() {
        return None;
    }
    Some(InputLine {
        user_id,
        display_name: (!display_name.is_empty()).then_some(display_name),
        text,
    })
}
