use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "codepoint",
    version,
    about = "Scalar-value-safe first/last character operations for index edge labels"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Storage encoding the boundary operations work on
    #[arg(long, global = true, value_enum, default_value_t, env = "CODEPOINT_ENCODING")]
    pub encoding: Encoding,

    #[arg(long, global = true, value_enum, default_value_t, env = "CODEPOINT_FORMAT")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the first scalar value
    First(TextArgs),
    /// Print the last scalar value
    Last(TextArgs),
    /// Print the text without its first scalar value
    DropFirst(TextArgs),
    /// Print the text without its last scalar value
    DropLast(TextArgs),
    /// Print the scalar-value and storage-unit lengths
    Len(TextArgs),
    /// Lower-case and keep only ASCII letters and digits
    Normalize(TextArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct TextArgs {
    /// Input text, or `-` to read stdin (one trailing newline is stripped)
    pub text: String,

    /// Treat TEXT as whitespace-separated hex UTF-16 code units (e.g. "d83d de00").
    /// Implies --encoding utf16 and allows unpaired surrogates.
    #[arg(long)]
    pub units: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "codepoint",
            "last",
            "abc",
            "--encoding",
            "utf16",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.global.encoding, Encoding::Utf16);
        assert_eq!(cli.global.format, OutputFormat::Json);
        assert!(matches!(cli.cmd, Command::Last(ref a) if a.text == "abc" && !a.units));
    }

    #[test]
    fn kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["codepoint", "drop-last", "--units", "61 d83d"]).unwrap();
        assert!(matches!(cli.cmd, Command::DropLast(ref a) if a.units));
    }
}
