//! Storybook - Static catalogue and interaction runner for ui-kit buttons.
//!
//! Renders the Button stories to HTML, builds a static site, and simulates
//! clicks the way a user would.

mod config;
mod pages;
mod response;
mod stories;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use response::ApiResponse;
use serde_json::json;
use std::path::PathBuf;
use stories::{Alerts, Story};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ui_kit::{use_engines, EnginesClient, Screen};

#[derive(Parser)]
#[command(name = "storybook")]
#[command(about = "ui-kit Button stories - render, build and click")]
#[command(version)]
struct Cli {
    /// Path to storybook.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available stories
    List,
    /// Print the rendered button of a story
    Render {
        /// Story name or id
        story: String,
        /// Print the render tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Write every story page, an index and stories.json
    Build {
        /// Output directory (overrides the configured one)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Click a story's button and report what happened
    Click {
        /// Story name or id
        story: String,
        /// Number of clicks
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },
    /// Fetch the engine list from a backend
    Engines {
        /// Backend base URL
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::List => handle_list()?,
        Commands::Render { story, json } => handle_render(&story, json)?,
        Commands::Build { out } => handle_build(&config, out)?,
        Commands::Click { story, times } => handle_click(&story, times)?,
        Commands::Engines { base_url } => handle_engines(&base_url)?,
    };

    println!("{}", output);
    Ok(())
}

fn find_story(key: &str) -> Result<Story> {
    stories::find(key).ok_or_else(|| anyhow!("Unknown story: {}", key))
}

fn handle_list() -> Result<String> {
    let entries: Vec<_> = stories::all().iter().map(Story::entry).collect();
    Ok(serde_json::to_string_pretty(&ApiResponse::ok(json!({
        "stories": entries,
    })))?)
}

/// Envelope a command failure as JSON output.
fn error_output(error: anyhow::Error) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ApiResponse::<()>::from(error))?)
}

fn handle_render(key: &str, as_json: bool) -> Result<String> {
    let story = match find_story(key) {
        Ok(story) => story,
        Err(e) => return error_output(e),
    };
    let element = story.button(&Alerts::default()).render();
    if as_json {
        Ok(serde_json::to_string_pretty(&element)?)
    } else {
        Ok(element.to_html())
    }
}

fn handle_build(config: &Config, out: Option<PathBuf>) -> Result<String> {
    let out_dir = out.unwrap_or_else(|| config.out_dir.clone());
    let count = pages::build(config, &stories::all(), &out_dir)
        .with_context(|| format!("Failed to build storybook into {}", out_dir.display()))?;
    Ok(format!("Built {} stories into {}", count, out_dir.display()))
}

fn handle_click(key: &str, times: u32) -> Result<String> {
    let story = match find_story(key) {
        Ok(story) => story,
        Err(e) => return error_output(e),
    };

    let alerts = Alerts::default();
    let screen = Screen::render(story.button(&alerts).render());
    let delivered = (0..times)
        .filter(|_| screen.click("button", &story.args.text))
        .count();

    let disabled = screen
        .get_by_role("button", &story.args.text)
        .is_some_and(|button| button.is_disabled());
    let alerts = alerts.borrow().clone();

    Ok(serde_json::to_string_pretty(&ApiResponse::ok(json!({
        "story": story.name,
        "clicks": times,
        "delivered": delivered,
        "disabled": disabled,
        "alerts": alerts,
    })))?)
}

fn handle_engines(base_url: &str) -> Result<String> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start Tokio runtime")?;
    let client = EnginesClient::new(base_url);
    let state = runtime.block_on(use_engines(&client));

    let response = match state.error.clone() {
        Some(error) => ApiResponse::err(error),
        None => ApiResponse::ok(state),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}
