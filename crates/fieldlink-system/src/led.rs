//! Status LED controller.
//!
//! Owns the single blink timer. A status is either steady or blinking
//! between a primary and secondary color; each `set_status` call
//! supersedes the previous one entirely.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::pins::{LedColor, PinDriver, best_effort};

/// Blink period used when none is given.
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(600);

/// Steady display or periodic blinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blink {
    Steady,
    Periodic(Duration),
}

/// A requested LED status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedStatus {
    /// Color shown steadily, or in the primary blink phase.
    pub color: LedColor,
    pub blink: Blink,
    /// Color shown in the secondary blink phase.
    pub secondary: LedColor,
}

impl LedStatus {
    /// A steady display of `color`.
    pub fn steady(color: LedColor) -> Self {
        Self {
            color,
            blink: Blink::Steady,
            secondary: LedColor::Off,
        }
    }

    /// `color` blinking against `Off` with the default period.
    pub fn blinking(color: LedColor) -> Self {
        Self {
            color,
            blink: Blink::Periodic(DEFAULT_BLINK_PERIOD),
            secondary: LedColor::Off,
        }
    }

    /// Override the blink period.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.blink = Blink::Periodic(period);
        self
    }

    /// Override the secondary color.
    pub fn with_secondary(mut self, secondary: LedColor) -> Self {
        self.secondary = secondary;
        self
    }
}

/// Controller for the status LED.
///
/// Holds the only handle to the blink task; arming a new status always
/// cancels the previous task first, so at most one timer ever drives the
/// pins.
pub struct StatusLed {
    pins: Arc<PinDriver>,
    blink: Option<JoinHandle<()>>,
}

impl StatusLed {
    pub fn new(pins: Arc<PinDriver>) -> Self {
        Self { pins, blink: None }
    }

    /// Display `status`, superseding whatever was shown before.
    ///
    /// The LED is switched off and back to the requested color so the
    /// transition is visible even when the color does not change.
    pub fn set_status(&mut self, status: LedStatus) {
        if let Some(task) = self.blink.take() {
            task.abort();
        }

        best_effort(self.pins.set_led_color(LedColor::Off));
        best_effort(self.pins.set_led_color(status.color));

        let Blink::Periodic(period) = status.blink else {
            return;
        };

        let pins = Arc::clone(&self.pins);
        let LedStatus {
            color, secondary, ..
        } = status;
        self.blink = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            // Starts in the primary phase; each tick toggles, then shows
            // the phase's color.
            let mut primary = true;
            loop {
                ticker.tick().await;
                primary = !primary;
                let shown = if primary { color } else { secondary };
                best_effort(pins.set_led_color(shown));
            }
        }));
    }

    /// Whether a blink timer is currently armed.
    pub fn is_blinking(&self) -> bool {
        self.blink.is_some()
    }
}

impl Drop for StatusLed {
    fn drop(&mut self) {
        if let Some(task) = self.blink.take() {
            task.abort();
        }
    }
}
