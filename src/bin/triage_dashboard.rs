use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use log::info;

use triage_dashboard::api::{EmailSource, HttpApi, JsonFileSource};
use triage_dashboard::config::{Config, config_path, load_config};
use triage_dashboard::controller::{FetchController, RefreshOutcome};
use triage_dashboard::domain::bucket::Bucket;
use triage_dashboard::notify::desktop_alert;
use triage_dashboard::page::HtmlPage;
use triage_dashboard::terminal::run_tui;

#[derive(Parser)]
#[command(name = "triage_dashboard")]
#[command(about = "Email triage dashboard (fetch, render, TUI)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the latest analyzed batch and render it as HTML
    Fetch {
        /// Backend base URL (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a saved /api/fetch-emails response
    Render {
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the interactive terminal dashboard
    Tui {
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Correct the category of one email
    Reclassify {
        #[arg(long)]
        email_id: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write the page here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print a plain-text rendering instead of HTML
    #[arg(long)]
    text: bool,

    /// Line width for --text
    #[arg(long, default_value_t = 100)]
    width: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Fetch { base_url, output } => {
            let cfg = resolve_config(base_url)?;
            let api = HttpApi::new(&cfg.base_url)?;
            run_cycle(Arc::new(api), &cfg, &output)
        }

        Command::Render { input, output } => {
            let cfg = optional_config()?;
            run_cycle(Arc::new(JsonFileSource::new(input)), &cfg, &output)
        }

        Command::Tui { base_url } => {
            let cfg = resolve_config(base_url)?;
            let api = HttpApi::new(&cfg.base_url)?;
            run_tui(FetchController::new(Arc::new(api))).map_err(|e| anyhow!("{e:?}"))
        }

        Command::Reclassify {
            email_id,
            category,
            base_url,
        } => {
            if Bucket::from_category(&category).is_none() {
                return Err(anyhow!("unknown category: {category}"));
            }
            let cfg = resolve_config(base_url)?;
            let api = HttpApi::new(&cfg.base_url)?;
            let message = api.reclassify(&email_id, &category)?;
            println!("{message}");
            Ok(())
        }
    }
}

/// Config file values, with `--base-url` taking precedence. With an override
/// the config file is optional.
fn resolve_config(base_url: Option<String>) -> Result<Config> {
    match base_url {
        Some(url) => {
            let mut cfg = optional_config()?;
            cfg.base_url = url;
            Ok(cfg)
        }
        None => load_config().map_err(|e| anyhow!("Configuration error: {e}")),
    }
}

fn optional_config() -> Result<Config> {
    if config_path()?.exists() {
        Ok(load_config()?)
    } else {
        Ok(Config::default())
    }
}

fn run_cycle(source: Arc<dyn EmailSource>, cfg: &Config, output: &OutputArgs) -> Result<()> {
    let mut controller = FetchController::new(source);
    let mut page = HtmlPage::new();

    let outcome = controller.refresh(&mut page);

    for alert in page.take_alerts() {
        eprintln!("{alert}");
        if cfg.desktop_notifications() {
            desktop_alert(&alert);
        }
    }

    match outcome {
        RefreshOutcome::Rendered { emails, violations } => {
            for v in &violations {
                eprintln!("Warning: skipped {v}");
            }
            info!("rendered {emails} emails");
        }
        RefreshOutcome::ApplicationError(message) => {
            return Err(anyhow!("backend reported an error: {message}"));
        }
        RefreshOutcome::TransportError(message) => {
            return Err(anyhow!("could not fetch emails: {message}"));
        }
        RefreshOutcome::Ignored => return Ok(()),
    }

    let document = page.document();
    let rendered = if output.text {
        html2text::from_read(document.as_bytes(), output.width)?
    } else {
        document
    };

    let out = output
        .out
        .clone()
        .or_else(|| cfg.html_out.as_ref().map(PathBuf::from));
    match out {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!("Wrote dashboard to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
