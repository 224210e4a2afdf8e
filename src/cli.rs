#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Start from an empty builtins table instead of the standard one
    #[arg(long, global = true)]
    pub bare: bool,

    /// Raise the log level (`-v` debug, `-vv` trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate a single expression
    Eval {
        /// The expression; separate words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        expr: Vec<String>,
    },

    /// Evaluate every non-blank line of a file
    Run { file: std::path::PathBuf },

    /// Evaluate expressions read from standard input, one per line
    Repl,
}
