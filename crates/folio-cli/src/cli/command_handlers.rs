use crate::cli::dispatcher::Outcome;
use crate::cli::main_types::{ColumnsArgs, ConfigCommands, ContactArgs, OutputFormat, ShowArgs};
use folio_core::contact::{ContactForm, EmailJsRelay, SubmitOutcome, submit};
use folio_core::content::{Content, Section};
use folio_core::display::TableDisplay;
use folio_core::error::{AppError, CliError};
use folio_core::layout::LayoutMode;
use folio_core::storage::config::Config;
use folio_core::toggle::ToggleSet;
use folio_core::utils::validation::{validate_email, validate_url};
use serde::Serialize;
use std::path::PathBuf;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Output(e.to_string()).into())
}

#[derive(Default)]
pub struct ColumnsHandler;

#[derive(Serialize)]
struct ColumnsReport {
    viewport_width: u32,
    layout: LayoutMode,
    placement: folio_core::layout::ProjectPlacement,
}

impl ColumnsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        args: ColumnsArgs,
        config: &Config,
        content: &Content,
    ) -> Result<(), AppError> {
        config.layout.validate()?;
        let constants = config.layout_constants(args.preset.constants());
        let total = args.projects.unwrap_or(content.projects.len());
        let layout = LayoutMode::resolve(args.width, &constants);
        let placement = layout.place(total);

        log::debug!(
            "columns: width={} preset={:?} total={} -> {:?}",
            args.width,
            args.preset,
            total,
            layout
        );

        match args.format {
            OutputFormat::Json => {
                let report = ColumnsReport {
                    viewport_width: args.width,
                    layout,
                    placement,
                };
                println!("{}", to_json(&report)?);
            }
            OutputFormat::Table => {
                let display = TableDisplay::new();
                println!(
                    "{}",
                    display.render_layout(
                        args.width,
                        &constants,
                        &layout,
                        &placement,
                        &content.projects
                    )
                );
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ShowHandler;

impl ShowHandler {
    pub fn new() -> Self {
        Self
    }

    fn sections(name: &str) -> Result<Vec<Section>, AppError> {
        if name.eq_ignore_ascii_case("all") {
            return Ok(Section::ALL.to_vec());
        }
        Ok(vec![name.parse::<Section>()?])
    }

    fn section_json(content: &Content, section: Section) -> Result<String, AppError> {
        match section {
            Section::Hero => to_json(&content.hero),
            Section::About => to_json(&content.about),
            Section::Skills => to_json(&content.skills),
            Section::Experience => to_json(&content.experiences),
            Section::Projects => to_json(&content.projects),
            Section::Contact => to_json(&content.contact),
        }
    }

    pub fn handle(&self, args: ShowArgs, content: &Content) -> Result<(), AppError> {
        let sections = Self::sections(&args.section)?;

        if args.format == OutputFormat::Json {
            if sections.len() == Section::ALL.len() {
                println!("{}", to_json(content)?);
            } else {
                for section in sections {
                    println!("{}", Self::section_json(content, section)?);
                }
            }
            return Ok(());
        }

        for id in Self::unknown_ids(content, &args.expand) {
            log::warn!("--expand {}: no project or experience has this id", id);
        }

        let display = TableDisplay::new();
        let expanded: ToggleSet<u32> = args.expand.into_iter().collect();
        for section in sections {
            let rendered = match section {
                Section::Projects => display.render_projects(&content.projects, &expanded),
                Section::Experience => {
                    let mut out = display.render_experiences(&content.experiences);
                    for exp in expanded.iter().filter_map(|id| content.experience(*id)) {
                        out.push_str("\n\n");
                        out.push_str(&display.render_experience_detail(exp));
                    }
                    out
                }
                other => display.render_section(content, other),
            };
            println!("{}\n", rendered);
        }
        Ok(())
    }

    fn unknown_ids(content: &Content, ids: &[u32]) -> Vec<u32> {
        ids.iter()
            .copied()
            .filter(|id| content.project(*id).is_none() && content.experience(*id).is_none())
            .collect()
    }
}

#[derive(Default)]
pub struct ContactHandler;

impl ContactHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: ContactArgs,
        config: &Config,
        content: &Content,
    ) -> Result<Outcome, AppError> {
        let form = ContactForm::new(args.name, args.email, args.subject, args.message);
        form.validate()?;

        let mut settings = config.relay_settings();
        if let Some(endpoint) = args.endpoint {
            validate_url(&endpoint)?;
            settings.endpoint = Some(endpoint);
        }
        let relay = EmailJsRelay::new(&settings, &content.contact.email)?;

        println!("Sending message to {}...", relay.to_email());
        let outcome = submit(&relay, &form).await;
        let message = outcome.message(&content.contact.email);
        match outcome {
            SubmitOutcome::Sent => {
                println!("✅ {}", message);
                Ok(Outcome::Success)
            }
            SubmitOutcome::Failed => {
                eprintln!("❌ {}", message);
                Ok(Outcome::Failure)
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    fn mask(value: &Option<String>) -> String {
        match value.as_deref() {
            Some(v) if v.chars().count() > 4 => {
                format!("{}****", v.chars().take(4).collect::<String>())
            }
            Some(v) if !v.is_empty() => "****".to_string(),
            _ => "(not set)".to_string(),
        }
    }

    fn show_value(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("(not set)")
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &mut Config,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                let effective = config.relay_settings();

                println!("Current Configuration:");
                println!("=====================");
                match config.content_path() {
                    Some(path) => println!("Content: {}", path.display()),
                    None => println!("Content: (built-in)"),
                }

                println!("\nRelay:");
                println!("  Endpoint: {}", effective.endpoint());
                println!("  Service ID: {}", Self::show_value(&effective.service_id));
                println!("  Template ID: {}", Self::show_value(&effective.template_id));
                println!("  Public Key: {}", Self::mask(&effective.public_key));
                println!("  To: {}", Self::show_value(&effective.to_email));
                if effective.is_complete() {
                    println!("  Status: ✅ Ready");
                } else {
                    println!(
                        "  Status: ❌ Missing {}",
                        effective.missing_fields().join(", ")
                    );
                }

                if !config.layout.is_empty() {
                    println!("\nLayout overrides:");
                    let constants = config.layout_constants(Default::default());
                    println!(
                        "  column_width={} gap={} padding={} est_center_a={} est_center_b={} breakpoint={}",
                        constants.column_width,
                        constants.gap,
                        constants.padding,
                        constants.est_center_a,
                        constants.est_center_b,
                        constants.breakpoint
                    );
                }
                Ok(())
            }
            ConfigCommands::Set {
                endpoint,
                service_id,
                template_id,
                public_key,
                to_email,
                content,
            } => {
                let mut updated_fields = Vec::new();

                if let Some(value) = endpoint {
                    validate_url(&value)?;
                    updated_fields.push(format!("endpoint to: {}", value));
                    config.relay.endpoint = Some(value);
                }
                if let Some(value) = service_id {
                    updated_fields.push(format!("service_id to: {}", value));
                    config.relay.service_id = Some(value);
                }
                if let Some(value) = template_id {
                    updated_fields.push(format!("template_id to: {}", value));
                    config.relay.template_id = Some(value);
                }
                if let Some(value) = public_key {
                    updated_fields.push("public_key".to_string());
                    config.relay.public_key = Some(value);
                }
                if let Some(value) = to_email {
                    validate_email(&value)?;
                    updated_fields.push(format!("to_email to: {}", value));
                    config.relay.to_email = Some(value);
                }
                if let Some(value) = content {
                    updated_fields.push(format!("content to: {}", value.display()));
                    config.content = Some(value);
                }

                if updated_fields.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "No configuration values provided. Use --service-id, --template-id, --public-key, --endpoint, --to-email or --content".to_string(),
                    )
                    .into());
                }

                config.save(config_path)?;
                println!("✅ Set {}", updated_fields.join(", "));
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}
