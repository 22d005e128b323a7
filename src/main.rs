#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use guide_core::{DataStore, GuideConfig, LoggingBuilder};

/// Campaign Guide - browse a tabletop campaign
#[derive(Parser, Debug)]
#[command(name = "campaign-guide")]
#[command(about = "Campaign Guide - settlements, NPCs, threats, events, and locations at the table")]
struct Args {
    /// Campaign JSON file (defaults to the bundled sample campaign)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Config file (defaults to <config dir>/campaign-guide/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directives, e.g. "guide_core=debug"
    #[arg(short, long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = GuideConfig::load_or_default(args.config.as_deref())
        .context("failed to load config")?;

    LoggingBuilder::new()
        .with_filter(args.log.clone().unwrap_or_else(|| config.log_filter.clone()))
        .init()
        .context("failed to initialize logging")?;

    let data_path = args.data.or_else(|| config.data_path.clone());
    let store = match &data_path {
        Some(path) => DataStore::from_path(path)
            .with_context(|| format!("failed to load campaign from {}", path.display()))?,
        None => DataStore::embedded().context("bundled campaign is invalid")?,
    };

    tracing::info!(
        "Starting '{}' ({} settlements, {} NPCs) from {}",
        store.title(),
        store.settlements().len(),
        store.npcs().len(),
        data_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled data".to_string())
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(store.title())
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(Arc::new(store))
        .with_context(config)
        .launch(app::App);

    Ok(())
}
