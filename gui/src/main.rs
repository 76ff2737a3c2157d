// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

const STYLESHEET: &str = include_str!("../assets/styles/main.css");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting price calculator (Dioxus Desktop)...");

    let app_config = AppConfig::load_default().inspect_err(|e| {
        tracing::error!("Failed to load embedded configuration: {}", e);
    })?;
    tracing::info!(
        "Loaded configuration version {} (currency {}, locale {})",
        app_config.version,
        app_config.currency.currency_code,
        app_config.currency.locale
    );
    let formatter = app_config.formatter()?;

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.title.clone())
                .with_inner_size(LogicalSize::new(app_config.app.window_width, app_config.app.window_height)),
        )
        .with_custom_head(format!("<style>{}</style>", STYLESHEET));

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(formatter)
        .launch(App);

    Ok(())
}
