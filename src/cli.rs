use std::path::PathBuf;

use crate::config::{ConfigError, Language, ReportConfig, ReportLabels, ENV_LANG};
use crate::report::{generate_report, inspect_workbook};

const USAGE: &str = "usage: workbook-report <summarize|inspect> [input] [output] [--config path]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Summarize,
    Inspect,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("summarize") => Some(Command::Summarize),
        Some("inspect") => Some(Command::Inspect),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let command = parse_command(args);
    let Some(command) = command else {
        eprintln!("{USAGE}");
        return 2;
    };
    let options = match CommandOptions::parse(&args[2..]) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{USAGE}");
            return 2;
        }
    };
    match command {
        Command::Summarize => handle_summarize(&options),
        Command::Inspect => handle_inspect(&options),
    }
}

/// Positional paths plus the optional `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    pub positional: Vec<String>,
    pub config_path: Option<PathBuf>,
}

impl CommandOptions {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--config" {
                let path = iter.next().ok_or("--config requires a path")?;
                options.config_path = Some(PathBuf::from(path));
            } else if let Some(path) = arg.strip_prefix("--config=") {
                options.config_path = Some(PathBuf::from(path));
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                options.positional.push(arg.clone());
            }
        }
        Ok(options)
    }

    pub fn build_config(&self) -> Result<ReportConfig, ConfigError> {
        self.build_config_with(|key| std::env::var(key).ok())
    }

    /// Defaults, then the config file, then environment (through `lookup`),
    /// then positional paths.
    pub fn build_config_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ReportConfig, ConfigError> {
        let mut config = ReportConfig::default();
        if let Some(path) = &self.config_path {
            config.merge_file(path)?;
        }
        config.merge_env_with(lookup);
        if let Some(input) = self.positional.first() {
            config.input_path = PathBuf::from(input);
        }
        if let Some(output) = self.positional.get(1) {
            config.output_path = PathBuf::from(output);
        }
        config.validate()?;
        Ok(config)
    }
}

fn handle_summarize(options: &CommandOptions) -> i32 {
    let config = match options.build_config() {
        Ok(config) => config,
        Err(err) => {
            let labels = fallback_labels(|key| std::env::var(key).ok());
            eprintln!("{}: {err}", labels.failure);
            return 1;
        }
    };
    let labels = config.labels();

    match generate_report(&config) {
        Ok(summary) => {
            println!("{}: {}", labels.success, summary.output_path.display());
            0
        }
        Err(err) => {
            eprintln!("{}: {err}", labels.failure);
            1
        }
    }
}

/// Labels for errors raised before a config exists: the environment language
/// if it names one, otherwise the default.
fn fallback_labels(lookup: impl Fn(&str) -> Option<String>) -> ReportLabels {
    lookup(ENV_LANG)
        .and_then(|raw| Language::parse(&raw))
        .unwrap_or_default()
        .labels()
}

fn handle_inspect(options: &CommandOptions) -> i32 {
    if options.positional.is_empty() {
        eprintln!("usage: workbook-report inspect <path-to-workbook> [--config path]");
        return 2;
    }
    let config = match options.build_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("inspect failed: {err}");
            return 1;
        }
    };

    let report = match inspect_workbook(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("inspect failed: {err}");
            return 1;
        }
    };
    match serde_json::to_string_pretty(&report) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize workbook summary: {err}");
            1
        }
    }
}
