//! Userbot Panel - Main Entry Point
//!
//! Shows the state of your SharkHost userbot and its host servers,
//! and lets you start, stop, restart or delete it.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use userbot_panel::api::{BotAction, HttpPanelApi};
use userbot_panel::commands::CommandHandler;
use userbot_panel::config::{PanelSettings, WebAppConfig};
use userbot_panel::controller::{AutoConfirm, Confirm, PanelController, TerminalConfirm};
use userbot_panel::ui::{Locale, Page, Renderer};
use userbot_panel::webapp::StaticWebApp;

/// Control panel for your SharkHost userbot.
#[derive(Parser, Debug)]
#[command(name = "userbot_panel")]
#[command(about = "View and control your userbot and its host servers")]
#[command(version)]
struct Args {
    /// Base URL of the panel backend (overrides PANEL_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Telegram Mini App initData string (overrides TG_INIT_DATA).
    #[arg(long)]
    init_data: Option<String>,

    /// Interface language: ru or en (overrides PANEL_LOCALE).
    #[arg(long)]
    locale: Option<Locale>,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Interactive panel (default).
    Shell,
    /// Show the userbot status.
    Status,
    /// Show host servers status.
    Servers,
    /// Start the userbot.
    Start,
    /// Stop the userbot.
    Stop,
    /// Restart the userbot.
    Restart,
    /// Delete the userbot.
    Delete {
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    // Load configuration, CLI flags win over the environment
    let mut settings = PanelSettings::from_env_with_defaults();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    if args.no_color {
        settings.color = false;
    }

    let webapp_config = match args.init_data {
        Some(init_data) => WebAppConfig::new(init_data),
        None => WebAppConfig::from_env(),
    };

    let base_url = settings
        .parsed_base_url()
        .context("Failed to load panel configuration")?;
    info!("Using panel backend at {}", base_url);

    let api = HttpPanelApi::new(base_url);
    let webapp = StaticWebApp::from_config(&webapp_config);
    let strings = settings.locale.strings();
    let renderer = Renderer::new(strings, settings.color);

    let confirm: Box<dyn Confirm> = match args.command {
        Some(Command::Delete { yes: true }) => Box::new(AutoConfirm(true)),
        _ => Box::new(TerminalConfirm),
    };

    let controller = Arc::new(PanelController::new(api, webapp, confirm, strings));

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(controller, renderer).await,
        Command::Status => {
            controller.start().await;
            print_page(&controller, &renderer, Page::Home).await;
            Ok(())
        }
        Command::Servers => {
            controller.fetch_servers_status().await;
            print_page(&controller, &renderer, Page::Servers).await;
            Ok(())
        }
        Command::Start => run_action(&controller, &renderer, BotAction::Start).await,
        Command::Stop => run_action(&controller, &renderer, BotAction::Stop).await,
        Command::Restart => run_action(&controller, &renderer, BotAction::Restart).await,
        Command::Delete { .. } => run_action(&controller, &renderer, BotAction::Delete).await,
    }
}

type Controller = PanelController<HttpPanelApi, StaticWebApp, Box<dyn Confirm>>;

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the interactive panel until the user quits or input ends.
async fn run_shell(controller: Arc<Controller>, renderer: Renderer) -> Result<()> {
    controller.start().await;

    let handler = CommandHandler::new(Arc::clone(&controller), renderer);
    println!("{}", handler.render().await);
    println!("Type 'help' for commands.");

    loop {
        let line = match read_line().await {
            Ok(line) => line,
            Err(e) => {
                debug!("Input closed: {:#}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match handler.try_handle(&line).await {
            Some(result) if result.quit => break,
            Some(result) => println!("{}", result.message),
            None => println!("Unknown command: '{}'. Type 'help' for commands.", line.trim()),
        }
    }

    Ok(())
}

/// Reads one line from the terminal without blocking the runtime.
async fn read_line() -> Result<String> {
    tokio::task::spawn_blocking(|| {
        Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
    })
    .await
    .context("Input task failed")?
    .context("Failed to read input")
}

/// Sends one lifecycle command and prints the resulting home page.
async fn run_action(controller: &Controller, renderer: &Renderer, action: BotAction) -> Result<()> {
    controller.start().await;
    let outcome = controller.request_action(action).await;
    print_page(controller, renderer, Page::Home).await;

    if outcome.is_success() {
        Ok(())
    } else {
        anyhow::bail!("'{action}' was not applied ({outcome:?})")
    }
}

async fn print_page(controller: &Controller, renderer: &Renderer, page: Page) {
    controller.switch_page(page.id()).await;
    let view = controller.snapshot().await;
    println!("{}", renderer.render(&view));
}
