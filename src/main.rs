use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pixelwin::backend::headless::{HeadlessBackend, Notification};
use pixelwin::present::Interpolation;
use pixelwin::{App, AppState, Config};

#[derive(Parser, Debug)]
#[command(name = "pixelwin")]
#[command(version, about = "Single-window framebuffer shim demo (headless backend)")]
struct Cli {
    /// Bitmap width in pixels
    #[arg(long, default_value_t = 320)]
    width: i32,

    /// Bitmap height in pixels
    #[arg(long, default_value_t = 200)]
    height: i32,

    /// Number of frames to present before exiting
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Interpolation mode (none or linear), overrides the config file
    #[arg(long, value_name = "MODE")]
    interpolation: Option<String>,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn parse_interpolation(name: &str) -> anyhow::Result<Interpolation> {
    match name {
        "none" => Ok(Interpolation::None),
        "linear" => Ok(Interpolation::Linear),
        other => anyhow::bail!("unknown interpolation mode '{other}' (use none or linear)"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::debug!(
        "pixelwin {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("PIXELWIN_GIT_HASH")
    );

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let interpolation = match &cli.interpolation {
        Some(name) => parse_interpolation(name)?,
        None => config.present.interpolation,
    };

    let mut backend = HeadlessBackend::new(config.window.width, config.window.height);
    // Scripted session standing in for the OS: focus, a keystroke, some
    // scrolling, then a close request on the final frame.
    backend.script([
        Notification::FocusGained,
        Notification::KeyDown { vk: 0x41, extended: false },
        Notification::Char { ch: 'a' },
        Notification::KeyUp { vk: 0x41, extended: false },
        Notification::Wheel { delta: 1.0 },
        Notification::Wheel { delta: 2.0 },
        Notification::MouseMove { x: 10, y: 20 },
    ]);

    let mut app = App::new(backend);
    app.set_title(&config.window.title);
    app.set_interpolation(interpolation);
    app.set_sound_volume(config.sound.volume);

    let (width, height) = (cli.width, cli.height);
    let mut canvas = vec![0u32; width as usize * height as usize];
    let mut events_seen = 0usize;
    let mut frame = 0u32;

    while app.poll()? != AppState::ExitRequested {
        for event in app.input() {
            log::info!("input: {event:?}");
            events_seen += 1;
        }

        // Scrolling gradient test pattern.
        for y in 0..height as usize {
            for x in 0..width as usize {
                let shade = ((x + y + frame as usize) & 0xFF) as u32;
                canvas[y * width as usize + x] = shade | (shade << 8) | (shade << 16);
            }
        }
        app.present(&canvas, width, height)?;

        frame += 1;
        if frame >= cli.frames {
            app.backend_mut().notify(Notification::CloseRequested);
        }
    }

    let presented = app.backend_mut().present_count();
    let rect = app.backend_mut().last_rect().unwrap_or([-1.0, -1.0, 1.0, 1.0]);
    println!(
        "presented {presented} frames of {width}x{height} ({interpolation:?}) in a {}x{} window",
        app.window_size().0,
        app.window_size().1,
    );
    println!(
        "letterbox rect [{:.3}, {:.3}, {:.3}, {:.3}], {events_seen} input events, {} dropped",
        rect[0],
        rect[1],
        rect[2],
        rect[3],
        app.input_overflow_count(),
    );

    Ok(())
}
