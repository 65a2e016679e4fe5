use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::session::{DisplayMode, DocumentSession, SessionInfo, SessionOutcome};
use crate::translation::ReconcileOutcome;

// @module: Application controller for document translation

/// Document operations the controller can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCommand {
    ToTarget,
    ToOriginal,
    Toggle,
}

/// Main application controller for document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a command on a document and rewrite it in place when it changed
    pub fn run(&self, document: &Path, command: DocumentCommand) -> Result<SessionOutcome> {
        self.run_with_progress(document, command, true)
    }

    /// Same as `run`; `show_progress` toggles the terminal progress bar
    pub fn run_with_progress(
        &self,
        document: &Path,
        command: DocumentCommand,
        show_progress: bool,
    ) -> Result<SessionOutcome> {
        if !FileManager::file_exists(document) {
            return Err(anyhow!("Document does not exist: {:?}", document));
        }

        let text = FileManager::read_to_string(document)?;
        let mut session = DocumentSession::open(&self.config, document)?;
        debug!("Running {:?} on {:?} ({})", command, document, session.info());

        let progress_bar = if show_progress {
            Self::create_progress_bar(text.chars().count() as u64)
        } else {
            ProgressBar::hidden()
        };
        let pb = progress_bar.clone();
        let reporter = move |processed: usize, total: usize| {
            pb.set_length(total as u64);
            pb.set_position(processed as u64);
        };

        let outcome = match command {
            DocumentCommand::ToTarget => session.to_target_with_progress(&text, &reporter),
            DocumentCommand::ToOriginal => session.to_original_with_progress(&text, &reporter),
            DocumentCommand::Toggle => session.toggle_with_progress(&text, &reporter),
        }
        .with_context(|| format!("Failed to translate {:?}", document))?;
        progress_bar.finish_and_clear();

        Self::log_outcome(&outcome);
        if outcome.changed {
            FileManager::write_atomic(document, &outcome.text)?;
            info!("Success: {:?} is now in {} mode", document, outcome.mode);
        }
        Ok(outcome)
    }

    /// Session information of a document without translating it
    pub fn status(&self, document: &Path) -> Result<SessionInfo> {
        let session = DocumentSession::open(&self.config, document)?;
        Ok(session.info())
    }

    fn create_progress_bar(length: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(length);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tokens ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("=>-"));
        progress_bar.set_message("Translating");
        progress_bar
    }

    fn log_outcome(outcome: &SessionOutcome) {
        if !outcome.changed {
            warn!("Document already in {} mode, nothing to do", outcome.mode);
            return;
        }

        match outcome.reconciliation {
            Some(ReconcileOutcome::Rebuilt(summary)) => info!(
                "Edits reconciled: {} terms kept, {} pruned, {} relocated",
                summary.kept_terms, summary.pruned_terms, summary.relocated
            ),
            Some(ReconcileOutcome::Skipped) => warn!("Reconciliation skipped: another rebuild was running"),
            None if outcome.mode == DisplayMode::Original => debug!("No edits since the forward pass"),
            None => {}
        }
        if outcome.compounds_detected > 0 {
            info!("{} new compounds detected", outcome.compounds_detected);
        }
    }
}
