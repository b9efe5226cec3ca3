use clap::Parser;

/// Writes messages in the `timestamp hostname tag[pid]: SEVERITY message`
/// layout.
#[derive(Debug, Parser)]
#[command(name = "taglog", version)]
pub struct Cli {
    /// Tag identifying the application; defaults to the invocation name.
    #[arg(short, long, env = "TAGLOG_TAG")]
    pub tag: Option<String>,

    /// Minimum severity that is written.
    #[arg(short = 'l', long, env = "TAGLOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Severity of the messages being logged.
    #[arg(short, long, default_value = "info")]
    pub severity: String,

    #[arg(long, hide = true)]
    pub quiet: bool,

    #[arg(long, hide = true)]
    pub debug: bool,

    #[arg(long, hide = true)]
    pub verbose: bool,

    /// Message to log. Lines are read from stdin when omitted.
    pub message: Vec<String>,
}
