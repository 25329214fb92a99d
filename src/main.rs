use std::fs;

use anyhow::Context;
use egui::{FontData, FontDefinitions, FontFamily};

use brick_breaker::app::{BreakoutApp, FRAME_SIZE_X, FRAME_SIZE_Y};
use brick_breaker::util::init_logging;

/// one font for score and prompts, looked up relative to the working directory
const FONT_PATH: &str = "font.ttf";
const FONT_NAME: &str = "game_font";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let font = load_game_font()?;

    let mut native_options = eframe::NativeOptions::default();
    native_options.initial_window_size = Some(egui::Vec2::new(FRAME_SIZE_X, FRAME_SIZE_Y));
    native_options.resizable = false;
    native_options.default_theme = eframe::Theme::Dark;
    eframe::run_native("Brick Breaker", native_options, Box::new(move |cc| {
        install_game_font(&cc.egui_ctx, font);
        Box::new(BreakoutApp::new(cc))
    }))?;
    Ok(())
}

fn load_game_font() -> anyhow::Result<FontData> {
    let bytes = fs::read(FONT_PATH).with_context(|| format!("could not load font: {FONT_PATH}"))?;
    log::info!("font {} loaded ({} bytes)", FONT_PATH, bytes.len());
    Ok(FontData::from_owned(bytes))
}

/// puts the game font in front of egui's default proportional fonts
fn install_game_font(ctx: &egui::Context, font: FontData) {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(FONT_NAME.to_owned(), font);
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, FONT_NAME.to_owned());
    ctx.set_fonts(fonts);
}
