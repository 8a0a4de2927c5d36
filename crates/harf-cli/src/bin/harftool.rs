use clap::{Parser, Subcommand};

use harf_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "harftool", about = "Arabizi transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a block of text ("-" reads stdin)
    Convert {
        /// Text to convert
        text: String,
        /// Path to a configuration JSON file (default: embedded table)
        #[arg(long)]
        config: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Transliterate a single word
    Word {
        /// Word to convert
        word: String,
        /// Path to a configuration JSON file (default: embedded table)
        #[arg(long)]
        config: Option<String>,
    },

    /// Parse a configuration file and compile its rules
    CheckConfig {
        /// Path to the configuration JSON file
        file: String,
    },

    /// Print the embedded default configuration JSON
    DefaultConfig,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("harf_core=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, config, json } => {
            convert_ops::convert_cmd(&text, config.as_deref(), json)
        }
        Command::Word { word, config } => convert_ops::word_cmd(&word, config.as_deref()),
        Command::CheckConfig { file } => config_ops::config_validate(&file),
        Command::DefaultConfig => config_ops::config_export(),
    }
}
