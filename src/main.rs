// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use termshift::app_config::{self, Config};
use termshift::app_controller::{Controller, DocumentCommand};
use termshift::language_utils;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Parser, Debug)]
struct DocumentArgs {
    /// Document to translate in place
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a document into the target language
    ToTarget(DocumentArgs),

    /// Translate a document back into its original language
    ToOriginal(DocumentArgs),

    /// Switch a document to the other language
    Toggle(DocumentArgs),

    /// Show the stored translation state of a document
    Status {
        /// Document to inspect
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,
    },

    /// Generate shell completions for termshift
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// termshift - position-aware dictionary translation
///
/// Translates a document into a target language with a dictionary, lets it be
/// edited there, and translates it back without losing which word was which.
#[derive(Parser, Debug)]
#[command(name = "termshift")]
#[command(version)]
#[command(about = "Position-aware dictionary translation of documents")]
#[command(long_about = "termshift swaps every word of a document for its dictionary translation and back.

EXAMPLES:
    termshift toggle src/main.rs                # Switch a document to the other language
    termshift to-target -l ru notes.txt         # Translate into Russian
    termshift to-original notes.txt             # Restore the original, keeping edits
    termshift status notes.txt                  # Show mode and stored terms
    termshift completions bash > termshift.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. Dictionaries are read from
    <dictionary_dir>/<language>.json.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: PathBuf,

    /// Target language code (e.g., 'de', 'ru', 'hi')
    #[arg(short = 'l', long, global = true)]
    language: Option<String>,

    /// Dictionary directory
    #[arg(short, long, global = true)]
    dictionary_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger with the most verbose level; the effective level
    // is applied through set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "termshift", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    match cli.command {
        Commands::ToTarget(args) => run_document(&controller, args, DocumentCommand::ToTarget),
        Commands::ToOriginal(args) => run_document(&controller, args, DocumentCommand::ToOriginal),
        Commands::Toggle(args) => run_document(&controller, args, DocumentCommand::Toggle),
        Commands::Status { document } => {
            let info = controller.status(&document)?;
            let language = language_utils::get_language_name(&info.language)
                .unwrap_or_else(|_| info.language.clone());
            println!("{}", info);
            println!("Target language: {}", language);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_document(controller: &Controller, args: DocumentArgs, command: DocumentCommand) -> Result<()> {
    controller.run_with_progress(&args.document, command, !args.quiet)?;
    Ok(())
}

/// Load or create the configuration and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(dir) = &cli.dictionary_dir {
        config.dictionary_dir = dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}
