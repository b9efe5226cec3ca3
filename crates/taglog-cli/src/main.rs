mod cli;

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use taglog::{Level, OrFatal};

fn main() -> Result<()> {
    let cli = Cli::parse();
    taglog::init()?;

    apply_deprecated_flags(&cli);
    if let Some(tag) = &cli.tag {
        taglog::set_tag(tag.as_str());
    }
    taglog::set_level(&cli.log_level).or_fatal();
    let severity = cli.severity.parse::<Level>().or_fatal();

    if cli.message.is_empty() {
        for line in io::stdin().lock().split(b'\n') {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            emit(severity, &String::from_utf8_lossy(line));
        }
    } else {
        emit(severity, &cli.message.join(" "));
    }
    Ok(())
}

#[allow(deprecated)]
fn apply_deprecated_flags(cli: &Cli) {
    if cli.quiet {
        taglog::set_quiet().or_fatal();
    }
    if cli.debug {
        taglog::set_debug().or_fatal();
    }
    if cli.verbose {
        taglog::set_verbose().or_fatal();
    }
}

fn emit(severity: Level, message: &str) {
    match severity {
        Level::Fatal => taglog::fatal(message),
        level => taglog::log(level, message),
    }
}
