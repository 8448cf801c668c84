//! Trimkit - video trimmer demo
//!
//! Hosts the trimmer widget over a synthetic asset and a simulated player.

mod cli;
mod player;
mod thumbnails;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use eframe::egui;
use player::Player;
use std::path::PathBuf;
use std::sync::Arc;
use thumbnails::GradientThumbnails;
use tracing::{debug, info, trace};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trimkit_core::{format_timestamp, Asset, FrameRate, RationalTime, TrimmerConfig};
use trimkit_ui::{FilmstripPreview, Trimmer, TrimmerEvent};

/// An explicit path must exist; the per-user file is optional.
fn load_config(explicit: Option<PathBuf>) -> Result<TrimmerConfig> {
    if let Some(path) = explicit {
        info!("Loading config: {:?}", path);
        return TrimmerConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match dirs::config_dir().map(|dir| dir.join("trimkit").join("trimmer.json")) {
        Some(path) if path.exists() => {
            info!("Loading config: {:?}", path);
            TrimmerConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        path => {
            debug!(?path, "No config file, using defaults");
            Ok(TrimmerConfig::default())
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Trimkit starting...");

    let args = Args::parse();
    let config = load_config(args.config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 360.0])
            .with_title("Trimkit"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Trimkit",
        options,
        Box::new(move |_cc| Ok(Box::new(TrimkitApp::new(config, args.duration)))),
    )?;

    Ok(())
}

struct TrimkitApp {
    trimmer: Trimmer,
    player: Player,
    /// Duration of the next synthetic asset, edited in the toolbar.
    asset_seconds: f64,
    min_duration: f64,
}

impl TrimkitApp {
    fn new(config: TrimmerConfig, duration: f64) -> Self {
        let preview = FilmstripPreview::new(config.max_visible_duration)
            .with_provider(Box::new(GradientThumbnails::default()));
        let mut trimmer = Trimmer::with_preview(preview, &config);
        let placeholder = trimmer.colors().placeholder;
        trimmer.preview_mut().set_placeholder_color(placeholder);

        let mut app = Self {
            trimmer,
            player: Player::new(FrameRate::FPS_30, RationalTime::ZERO),
            asset_seconds: duration,
            min_duration: config.min_duration,
        };
        app.load_asset();
        app
    }

    fn load_asset(&mut self) {
        let duration = RationalTime::from_seconds_f64(self.asset_seconds);
        let asset = Arc::new(Asset::new(
            format!("Synthetic {}", format_timestamp(self.asset_seconds)),
            duration,
        ));
        info!(name = %asset.name, %duration, "Loading asset");
        self.player.load(duration);
        self.trimmer.set_asset(Some(asset));
        self.player.sync_range(self.trimmer.selected_range());
    }

    fn log_events(events: &[TrimmerEvent]) {
        for event in events {
            match event {
                TrimmerEvent::PositionChanged(time) => trace!(%time, "position changed"),
                TrimmerEvent::PositionSettled(time) => info!(%time, "position settled"),
                TrimmerEvent::HandleRangeChanged { start, end } => {
                    debug!(%start, %end, "handle range changed")
                }
                TrimmerEvent::DragStarted => trace!("drag started"),
            }
        }
    }
}

impl eframe::App for TrimkitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle playback
        let dt = ctx.input(|i| i.stable_dt) as f64;
        if self.player.tick(dt) {
            self.trimmer.seek(self.player.position());
        }
        if self.player.is_playing() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("transport").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let play_text = if self.player.is_playing() { "⏸" } else { "▶" };
                if ui.button(play_text).clicked() {
                    let playing = !self.player.is_playing();
                    self.player.set_playing(playing);
                }
                if ui.button("Reset").clicked() {
                    self.trimmer.reset();
                    self.player.sync_range(self.trimmer.selected_range());
                }

                ui.separator();
                ui.add(
                    egui::DragValue::new(&mut self.asset_seconds)
                        .range(0.0..=7200.0)
                        .speed(1.0)
                        .suffix(" s"),
                );
                if ui.button("Load asset").clicked() {
                    self.load_asset();
                }

                ui.separator();
                ui.label(format!(
                    "{} / {}",
                    format_timestamp(self.player.position().to_seconds_f64()),
                    format_timestamp(self.player.range().end().to_seconds_f64()),
                ));
            });
        });

        egui::SidePanel::right("settings")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Trimmer");
                ui.separator();

                let slider = egui::Slider::new(&mut self.min_duration, 0.0..=30.0)
                    .text("Min duration")
                    .suffix(" s");
                if ui.add(slider).changed() {
                    self.trimmer.set_min_duration(self.min_duration);
                }

                let mut colors = *self.trimmer.colors();
                ui.horizontal(|ui| {
                    if ui.color_edit_button_srgba(&mut colors.main).changed() {
                        self.trimmer.set_main_color(colors.main);
                    }
                    ui.label("Main");
                });
                ui.horizontal(|ui| {
                    if ui.color_edit_button_srgba(&mut colors.handle).changed() {
                        self.trimmer.set_handle_color(colors.handle);
                    }
                    ui.label("Handle");
                });
                ui.horizontal(|ui| {
                    if ui.color_edit_button_srgba(&mut colors.position_bar).changed() {
                        self.trimmer.set_position_bar_color(colors.position_bar);
                    }
                    ui.label("Position bar");
                });

                ui.separator();
                match self.trimmer.selected_range() {
                    Some(range) => {
                        ui.label(format!(
                            "Start: {}",
                            format_timestamp(range.start.to_seconds_f64())
                        ));
                        ui.label(format!(
                            "End: {}",
                            format_timestamp(range.end().to_seconds_f64())
                        ));
                        ui.label(format!("Length: {:.2}s", range.duration.to_seconds_f64()));
                    }
                    None => {
                        ui.label("No media selected");
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            let events = self.trimmer.show(ui);
            Self::log_events(&events);
            self.player.follow(&self.trimmer, &events);
        });
    }
}
