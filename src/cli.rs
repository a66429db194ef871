use std::path::PathBuf;

use clap::Parser;

/// Scan a page to PDF, then optionally open or print it.
#[derive(Parser, Debug, Default)]
#[command(name = "hscan", version)]
pub struct Cli {
    /// Print the configuration and every external command before it runs
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Skip the scanner and convert a generated diagnostic report instead
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Name the document after the current timestamp instead of prompting
    #[arg(short = 'a', long = "auto")]
    pub auto: bool,

    /// Write documents here instead of ~/Documents/HScan/<ext>
    #[arg(short = 'd', long = "directory", value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Open the output directory and the document when done
    #[arg(short = 'o', long = "open")]
    pub open: bool,

    /// Send the document to the default printer when done
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Print a generated blank page instead of the scanned document
    #[arg(short = 'b', long = "blank-pages")]
    pub blank_pages: bool,

    /// Wait this many seconds before scanning
    #[arg(short = 'w', long = "wait", value_name = "SECONDS")]
    pub wait: Option<String>,

    #[command(flatten)]
    pub tools: ToolArgs,
}

/// External programs, overridable from the environment.
#[derive(clap::Args, Debug, Default)]
pub struct ToolArgs {
    #[arg(long = "scanner-cmd", env = "HSCAN_SCANNER", hide = true)]
    pub scanner: Option<String>,

    #[arg(long = "converter-cmd", env = "HSCAN_CONVERTER", hide = true)]
    pub converter: Option<String>,

    #[arg(long = "spooler-cmd", env = "HSCAN_SPOOLER", hide = true)]
    pub spooler: Option<String>,

    #[arg(long = "opener-cmd", env = "HSCAN_OPENER", hide = true)]
    pub opener: Option<String>,
}

pub fn help_text() -> String {
    use clap::CommandFactory;

    Cli::command().render_help().to_string()
}
