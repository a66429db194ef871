use std::path::PathBuf;

use crate::cli;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tools {
    pub scanner: String,
    pub converter: String,
    pub spooler: String,
    pub opener: String,
}

impl Tools {
    fn from_args(args: cli::ToolArgs) -> Self {
        Self {
            scanner: non_empty_or(args.scanner, "scanimage"),
            converter: non_empty_or(args.converter, "convert"),
            spooler: non_empty_or(args.spooler, "lp"),
            opener: non_empty_or(args.opener, default_opener()),
        }
    }
}

impl Default for Tools {
    fn default() -> Self {
        Self::from_args(cli::ToolArgs::default())
    }
}

#[derive(Debug)]
pub struct RunConfig {
    pub verbose: bool,
    pub test_mode: bool,
    pub auto_name: bool,
    pub target_directory: Option<PathBuf>,
    pub open_after: bool,
    pub print_after: bool,
    pub print_blank: bool,
    pub wait: Option<String>,
    pub tools: Tools,
}

impl RunConfig {
    pub fn from_cli(cli: cli::Cli) -> Self {
        Self {
            verbose: cli.verbose,
            test_mode: cli.test,
            auto_name: cli.auto,
            target_directory: cli.directory,
            open_after: cli.open,
            print_after: cli.print,
            print_blank: cli.blank_pages,
            wait: cli.wait,
            tools: Tools::from_args(cli.tools),
        }
    }

    pub fn print_summary(&self) {
        if !self.verbose {
            return;
        }

        tracing::debug!("----------------------------------------");
        tracing::debug!("Configuration:");
        tracing::debug!("Test Mode: {}", self.test_mode);
        tracing::debug!("Auto Name: {}", self.auto_name);

        match &self.target_directory {
            Some(path) => tracing::debug!("Target Directory: \"{}\"", path.display()),
            None => tracing::debug!("Target Directory: <default>"),
        }

        tracing::debug!("Open After: {}", self.open_after);
        tracing::debug!("Print After: {}", self.print_after);
        tracing::debug!("Print Blank Page: {}", self.print_blank);

        match &self.wait {
            Some(wait) => tracing::debug!("Wait: {wait}"),
            None => tracing::debug!("Wait: none"),
        }

        tracing::debug!(
            "Tools: scanner={} converter={} spooler={} opener={}",
            self.tools.scanner,
            self.tools.converter,
            self.tools.spooler,
            self.tools.opener
        );
        tracing::debug!("----------------------------------------");
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}
