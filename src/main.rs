use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forecast_cards::app::App;
use forecast_cards::config::{Cli, Config};
use forecast_cards::constants::*;
use forecast_cards::forecast::{FileForecastProvider, ForecastProvider};
use forecast_cards::renderer::RaylibRenderer;
use forecast_cards::texture_loader::load_icons;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli).context("Failed to read configuration")?;

    let provider = FileForecastProvider::new(&config.display.forecast, config.noaa.office.clone());
    let periods = provider
        .periods()
        .with_context(|| format!("Failed to load the forecast from {:?}", provider.path()))?;
    let office = provider.office()?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Weather Forecast (NOAA)")
        .msaa_4x()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Textures must outlive the deck that borrows them
    let icons = match &config.display.icons {
        Some(dir) => match load_icons(&mut rl, &thread, dir) {
            Ok(icons) if icons.len() == periods.len() => Some(icons),
            Ok(icons) => {
                warn!(found = icons.len(), expected = periods.len(), "Icon count does not match the forecast, using labels");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to load icons, using labels");
                None
            }
        },
        None => None,
    };

    let mut app = App::new(office, periods, config.noaa.units, config.display.duration, icons.as_deref())
        .context("Failed to create the card deck")?;

    info!("Press SPACE or RIGHT to advance the forecast");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let advance = rl.is_key_pressed(KeyboardKey::KEY_SPACE) || rl.is_key_pressed(KeyboardKey::KEY_RIGHT);

        app.tick(dt, advance);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGRAY);
        let (width, height) = (d.get_screen_width(), d.get_screen_height());
        app.draw(&mut RaylibRenderer::new(&mut d), width, height);
    }

    Ok(())
}
