//! multiselect CLI - load, reconcile and pick dropdown options
//!
//! Usage: multiselect <COMMAND>
//!
//! Commands:
//!   options  Print the option list for a model with the current selection
//!   pick     Pick options and print the resulting selection value

mod presentation;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use multiselect::{
    Config, DropdownEventSink, EventsMode, JsonEventSink, JsonFileModel, MultiselectDropdown,
    NoopEventSink, ObjectCache, ObjectId, OptionRecord, SelectionChange, SelectionEntry,
    TracingEventSink, Verbosity,
};
use presentation::cli::{Cli, Commands};
use presentation::output::{render_options, render_value, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(config.output.verbosity, cli.verbose);

    let format = OutputFormat::from_flag(cli.json);
    match cli.command {
        Commands::Options { source, selected } => {
            cmd_options(&config, &source, &selected, format).await
        }
        Commands::Pick {
            source,
            selected,
            choose,
        } => cmd_pick(&config, &source, &selected, choose, format).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        let cwd = std::env::current_dir().ok();
        return Ok(Config::load_or_default(cwd.as_deref()));
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    for warning in warnings {
        let line = warning.line.map(|l| format!(":{}", l)).unwrap_or_default();
        match warning.suggestion {
            Some(s) => eprintln!(
                "warning: unknown key '{}' in {}{} (did you mean '{}'?)",
                warning.key,
                warning.file.display(),
                line,
                s
            ),
            None => eprintln!(
                "warning: unknown key '{}' in {}{}",
                warning.key,
                warning.file.display(),
                line
            ),
        }
    }
    Ok(config.with_env_overrides())
}

fn init_tracing(verbosity: Verbosity, verbose: u8) {
    let level = match verbose {
        0 => verbosity,
        1 => Verbosity::Verbose,
        _ => Verbosity::Debug,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn event_sink(config: &Config) -> Arc<dyn DropdownEventSink> {
    match config.output.events {
        EventsMode::Tracing => Arc::new(TracingEventSink),
        EventsMode::Json => Arc::new(JsonEventSink::with_writer(std::io::stderr())),
        EventsMode::None => Arc::new(NoopEventSink),
    }
}

/// Load the model and check the options named in `selected`.
async fn load_dropdown(
    config: &Config,
    source: &Path,
    selected: &[String],
) -> Result<(MultiselectDropdown, Arc<JsonFileModel>)> {
    let dropdown = MultiselectDropdown::from_config(config, event_sink(config));
    let model = Arc::new(JsonFileModel::new(source));

    let handle = dropdown.set_model_constructor(model.clone())?;
    let name = handle.model().to_string();
    handle
        .settled()
        .await
        .with_context(|| format!("loading {} options from {}", name, model.path().display()))?;

    if !selected.is_empty() {
        let value = parse_ids(selected)
            .into_iter()
            .map(|id| match model.find_by_id(&id) {
                Some(object) => SelectionEntry::Resolved(object),
                None => SelectionEntry::CacheMiss { id },
            })
            .collect();
        dropdown.set_value(value);
        dropdown.refresh_selection();
    }

    Ok((dropdown, model))
}

async fn cmd_options(
    config: &Config,
    source: &Path,
    selected: &[String],
    format: OutputFormat,
) -> Result<()> {
    let (dropdown, _model) = load_dropdown(config, source, selected).await?;
    print!("{}", with_newline(render_options(&dropdown.snapshot(), format)));
    Ok(())
}

async fn cmd_pick(
    config: &Config,
    source: &Path,
    selected: &[String],
    choose: Option<Vec<String>>,
    format: OutputFormat,
) -> Result<()> {
    let (dropdown, _model) = load_dropdown(config, source, selected).await?;
    let options = dropdown.options();

    let picked = match choose {
        Some(ids) => choose_by_id(&options, &parse_ids(&ids)),
        None if format == OutputFormat::Text && std::io::stdin().is_terminal() => {
            match presentation::menu::pick_options(&options) {
                Some(picked) => picked,
                None => anyhow::bail!("selection aborted"),
            }
        }
        None => dropdown.selected(),
    };

    dropdown.selected_changed(SelectionChange::new(picked))?;

    print!("{}", with_newline(render_value(&dropdown.value(), format)));
    dropdown.value_for_persistence()?;
    Ok(())
}

/// Rows for the requested ids, in request order.
///
/// Ids without a row are still passed on so the cache decides about them.
fn choose_by_id(options: &[OptionRecord], ids: &[ObjectId]) -> Vec<OptionRecord> {
    ids.iter()
        .map(|id| match options.iter().find(|o| &o.id == id) {
            Some(option) => OptionRecord {
                checked: true,
                ..option.clone()
            },
            None => OptionRecord::new(id.clone(), id.to_string(), true),
        })
        .collect()
}

fn parse_ids(raw: &[String]) -> Vec<ObjectId> {
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

fn with_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
