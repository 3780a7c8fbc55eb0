use raylib::prelude::*;
use tracing::debug;

use crate::background::{Background, Backdrop};
use crate::config::Units;
use crate::constants::*;
use crate::deck::Deck;
use crate::error::Result;
use crate::forecast::ForecastPeriod;
use crate::renderer::Renderer;

/// Everything on screen: the forecast, the scrolling deck and the backdrop
/// that follows the current period.
pub struct App<'a, I = Texture2D> {
    office: String,
    periods: Vec<ForecastPeriod>,
    units: Units,
    deck: Deck<'a, I>,
    background: Background,
    current: usize,
    blend_pending: bool,
}

impl<'a, I> App<'a, I> {
    /// Builds one card per period. Fails when there are no periods, the
    /// duration is invalid or the icons do not match the periods.
    pub fn new(
        office: String,
        periods: Vec<ForecastPeriod>,
        units: Units,
        transition_duration: f32,
        icons: Option<&'a [I]>,
    ) -> Result<Self> {
        let deck = Deck::new(periods.len(), transition_duration, icons)?;
        let background = Background::new(Backdrop::for_period(&periods[0]), BLEND_DURATION);
        Ok(Self {
            office,
            periods,
            units,
            deck,
            background,
            current: 0,
            blend_pending: false,
        })
    }

    pub fn deck(&self) -> &Deck<'a, I> {
        &self.deck
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn current_period(&self) -> &ForecastPeriod {
        &self.periods[self.current]
    }

    pub fn tick(&mut self, dt: f32, advance_requested: bool) {
        if self.deck.tick(dt, advance_requested) {
            self.current = (self.current + 1) % self.periods.len();
            self.blend_pending = true;
            debug!(period = %self.periods[self.current].name, "Advanced forecast");
        }

        // Never blend the background while the cards are moving
        if self.blend_pending && !self.deck.is_scrolling() {
            let target = Backdrop::for_period(&self.periods[self.current]);
            if self.background.begin_blend(target) {
                self.blend_pending = false;
            }
        }
        self.background.update(dt);
    }

    pub fn draw<R: Renderer<Icon = I>>(&self, r: &mut R, width: i32, height: i32) {
        self.background
            .draw(r, Rectangle::new(0.0, 0.0, width as f32, height as f32));

        let title_x = width / 2 - r.text_width(&self.office, TITLE_SIZE) / 2;
        r.text(&self.office, title_x, TITLE_Y, TITLE_SIZE, Color::RAYWHITE);

        let period = self.current_period();
        let (temperature, unit) = period.temperature_in(self.units);
        let lines = [
            period.name.clone(),
            format!("{temperature:.0}°{unit}"),
            period.summary.clone(),
            period.wind(),
        ];
        for (i, line) in lines.iter().enumerate() {
            r.text(line, PANEL_X, PANEL_Y + i as i32 * PANEL_LINE, PANEL_TEXT_SIZE, Color::LIGHTGRAY);
        }

        self.deck.draw(r);
    }
}
