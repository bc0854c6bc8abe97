use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::layout::LayoutConstants;
use std::path::PathBuf;

/// Upper bound for `columns --width`.
pub const MAX_VIEWPORT_WIDTH: i64 = 1_000_000;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio content, responsive layout and contact relay from the terminal")]
#[command(version)]
#[command(after_help = "Examples:
  folio columns --width 3000            # Side columns at a 3000px viewport
  folio columns --width 200 --preset terminal
  folio show projects                   # Project table
  folio show all --format json          # Whole document as JSON
  folio contact --name Ada --email ada@example.com --subject Hi --message Hello
  folio config show                     # Show current configuration

Environment Variables:
  FOLIO_CONTENT            Content file replacing the built-in one
  FOLIO_RELAY_SERVICE_ID   Mail relay service id
  FOLIO_RELAY_TEMPLATE_ID  Mail relay template id
  FOLIO_RELAY_PUBLIC_KEY   Mail relay public key
  FOLIO_RELAY_ENDPOINT     Mail relay endpoint URL
  FOLIO_RELAY_TO_EMAIL     Destination address for contact messages")]
pub struct Cli {
    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Content file (overrides FOLIO_CONTENT and the config file)
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute side columns and project placement for a viewport width
    Columns(ColumnsArgs),
    /// Print portfolio content
    Show(ShowArgs),
    /// Send a message through the configured mail relay
    Contact(ContactArgs),
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Browser pixels
    Web,
    /// Terminal cells
    Terminal,
}

impl Preset {
    pub fn constants(self) -> LayoutConstants {
        match self {
            Preset::Web => LayoutConstants::WEB,
            Preset::Terminal => LayoutConstants::TERMINAL,
        }
    }
}

#[derive(Args, Debug)]
#[command(after_help = "Examples:
  folio columns --width 2200            # Center group only
  folio columns --width 3000            # One column per side
  folio columns --width 3000 --projects 20 --format json")]
pub struct ColumnsArgs {
    /// Viewport width (pixels for web, cells for terminal)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(0..=MAX_VIEWPORT_WIDTH))]
    pub width: u32,

    /// Measurement preset
    #[arg(long, value_enum, default_value = "web")]
    pub preset: Preset,

    /// Project count to place (defaults to the content's projects)
    #[arg(long)]
    pub projects: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// hero, about, skills, experience, projects, contact or all
    #[arg(default_value = "all")]
    pub section: String,

    /// Project ids to show expanded (projects section only)
    #[arg(long, value_delimiter = ',')]
    pub expand: Vec<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub subject: String,

    #[arg(long)]
    pub message: String,

    /// Relay endpoint for this call only
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  folio config set --service-id service_x --template-id template_y --public-key pk
  folio config set --content ~/portfolio.toml")]
    Set {
        /// Mail relay endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        service_id: Option<String>,
        #[arg(long)]
        template_id: Option<String>,
        #[arg(long)]
        public_key: Option<String>,
        /// Destination address for contact messages
        #[arg(long)]
        to_email: Option<String>,
        /// Content file replacing the built-in one
        #[arg(long)]
        content: Option<PathBuf>,
    },
}
