use raylib::prelude::*;
use tracing::debug;

use crate::forecast::ForecastPeriod;
use crate::renderer::Renderer;
use crate::state::BlendState;

const NIGHT_BLUE: Color = Color::new(0, 25, 51, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    /// Top and bottom colors of the vertical gradient.
    pub fn gradient(self) -> (Color, Color) {
        match self {
            Theme::Day => (Color::SKYBLUE, Color::RAYWHITE),
            Theme::Night => (NIGHT_BLUE, Color::DARKGRAY),
        }
    }
}

/// A theme plus the cloud cover tint laid over it.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    pub theme: Theme,
    pub tint: Color,
}

impl PartialEq for Backdrop {
    fn eq(&self, other: &Self) -> bool {
        let rgba = |c: Color| (c.r, c.g, c.b, c.a);
        self.theme == other.theme && rgba(self.tint) == rgba(other.tint)
    }
}

impl Backdrop {
    pub fn for_period(period: &ForecastPeriod) -> Self {
        let theme = if period.is_daytime { Theme::Day } else { Theme::Night };

        let summary = period.summary.to_lowercase();
        let tint = if summary.contains("partly cloudy") {
            Color::LIGHTGRAY
        } else if summary.contains("cloudy") {
            Color::DARKGRAY
        } else {
            Color::WHITE
        };

        Self { theme, tint }
    }

    fn draw<R: Renderer>(&self, r: &mut R, area: Rectangle, alpha: f32) {
        let (top, bottom) = self.theme.gradient();
        r.fill_gradient_v(
            area,
            top.tint(self.tint).alpha(alpha),
            bottom.tint(self.tint).alpha(alpha),
        );
    }
}

/// Full-window gradient that cross-fades from one backdrop to the next.
pub struct Background {
    current: Backdrop,
    next: Backdrop,
    state: BlendState,
    elapsed: f32,
    duration: f32,
}

impl Background {
    pub fn new(initial: Backdrop, duration: f32) -> Self {
        Self {
            current: initial,
            next: initial,
            state: BlendState::Holding,
            elapsed: 0.0,
            duration,
        }
    }

    pub fn current(&self) -> Backdrop {
        self.current
    }

    pub fn is_blending(&self) -> bool {
        self.state == BlendState::Blending
    }

    /// Fraction of the running blend, 0 when holding.
    pub fn progress(&self) -> f32 {
        match self.state {
            BlendState::Holding => 0.0,
            BlendState::Blending if self.duration > 0.0 => (self.elapsed / self.duration).min(1.0),
            BlendState::Blending => 1.0,
        }
    }

    /// Returns `false` if a blend is already running; the caller keeps the
    /// request and retries later.
    pub fn begin_blend(&mut self, target: Backdrop) -> bool {
        if self.is_blending() {
            return false;
        }
        if target == self.current {
            return true;
        }
        debug!(from = ?self.current.theme, to = ?target.theme, "Background blending");
        self.next = target;
        self.elapsed = 0.0;
        self.state = BlendState::Blending;
        true
    }

    pub fn update(&mut self, dt: f32) {
        if self.state != BlendState::Blending {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.current = self.next;
            self.elapsed = 0.0;
            self.state = BlendState::Holding;
        }
    }

    pub fn draw<R: Renderer>(&self, r: &mut R, area: Rectangle) {
        self.current.draw(r, area, 1.0);
        if self.is_blending() {
            self.next.draw(r, area, self.progress());
        }
    }
}
