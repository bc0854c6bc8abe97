use crate::cli::command_handlers::{ColumnsHandler, ConfigHandler, ContactHandler, ShowHandler};
use crate::cli::main_types::Commands;
use folio_core::content::Content;
use folio_core::error::AppError;
use folio_core::storage::config::Config;
use std::path::PathBuf;

/// How a command finished when it did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Reported to the user already; exit non-zero.
    Failure,
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    content_override: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, content_override: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            content_override,
        }
    }

    // CLI flag > FOLIO_CONTENT > config file > built-in
    fn load_content(&self) -> Result<Content, AppError> {
        let path = self
            .content_override
            .clone()
            .or_else(|| self.config.content_path());
        if let Some(ref p) = path {
            log::info!("Using content file {}", p.display());
        }
        Ok(Content::load_or_builtin(path.as_deref())?)
    }

    pub async fn dispatch(&self, command: Commands) -> Result<Outcome, AppError> {
        match command {
            Commands::Columns(args) => {
                let handler = ColumnsHandler::new();
                let content = self.load_content()?;
                handler.handle(args, &self.config, &content)?;
                Ok(Outcome::Success)
            }
            Commands::Show(args) => {
                let handler = ShowHandler::new();
                let content = self.load_content()?;
                handler.handle(args, &content)?;
                Ok(Outcome::Success)
            }
            Commands::Contact(args) => {
                let handler = ContactHandler::new();
                let content = self.load_content()?;
                handler.handle(args, &self.config, &content).await
            }
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                // config commands work on the file only, env overrides shown separately
                let mut config = self.config.clone();
                handler.handle(command, &mut config, self.config_path.clone())?;
                Ok(Outcome::Success)
            }
        }
    }
}
