use clap::{Parser, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Generate a git commit message from your current changes
#[derive(Parser, Debug)]
#[command(name = "wizard-commit")]
#[command(author, version, about, long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    /// Commit with the generated message
    #[arg(short = 'a', long = "commit")]
    pub commit: bool,

    /// Skip confirmation before committing
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Provider to use (ollama, deepseek, gemini, or a configured name)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model to use for this run
    #[arg(short, long)]
    pub model: Option<String>,

    /// Endpoint URL for this run
    #[arg(long)]
    pub url: Option<String>,

    /// API key for this run
    #[arg(long)]
    pub api_key: Option<String>,

    /// Save the effective settings to the user config file and exit
    #[arg(long)]
    pub save_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
