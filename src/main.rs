use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use raylib::prelude::*;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

mod constants;
mod deck;
mod navigator;
mod texture_loader;
mod widget;

use crate::constants::*;
use crate::deck::Deck;
use crate::texture_loader::load_deck_textures;
use crate::widget::SliderWidget;

#[derive(Parser)]
#[command(name = "tutorial-slider", about = "Keyboard-driven image/text slideshow")]
struct Args {
    /// Build the deck from the images in this directory instead of the
    /// built-in tutorial deck
    #[arg(value_name = "IMAGE_DIR")]
    images: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("tutorial-slider.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let deck = match &args.images {
        Some(dir) => Deck::from_directory(dir)?,
        None => Deck::tutorial(),
    };
    log::info!("starting with {} slides", deck.len());

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Tutorial Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_deck_textures(&mut rl, &thread, &deck);
    let mut widget = SliderWidget::new(deck.len());

    while !rl.window_should_close() {
        // --- Input ---
        while let Some(key) = rl.get_key_pressed() {
            widget.handle_key(key);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let layout = widget::layout(rl.get_screen_width(), rl.get_screen_height());
            widget.handle_click(rl.get_mouse_position(), &layout);
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        let screen_width = d.get_screen_width();
        let screen_height = d.get_screen_height();

        d.draw_rectangle_gradient_v(
            0,
            0,
            screen_width,
            screen_height,
            BACKGROUND_TOP,
            BACKGROUND_BOTTOM,
        );

        let header = "Interactive Tutorial";
        let header_width = d.measure_text(header, HEADER_FONT_SIZE);
        d.draw_text(
            header,
            (screen_width - header_width) / 2,
            24,
            HEADER_FONT_SIZE,
            TITLE_COLOR,
        );

        widget.draw(&mut d, &deck, &textures);
    }

    // Window is closing; release the key bindings with it.
    widget.unmount();
    log::info!("shutting down");
    Ok(())
}
