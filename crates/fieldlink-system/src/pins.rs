//! Shell-level pin driver for the status indicators.
//!
//! The status LED has two colors on separate IO pins; mixing them gives
//! orange. Pins are driven through the `pinctrl` utility; this is the
//! only module in the system that issues pin-level commands.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use fieldlink_core::error::Result;

use crate::executor::CommandRunner;

/// GPIO pin carrying the green leg of the status LED.
pub const GREEN_LED_PIN: u8 = 26;
/// GPIO pin carrying the red leg of the status LED.
pub const RED_LED_PIN: u8 = 19;
/// GPIO pin driving the buzzer.
pub const BUZZER_PIN: u8 = 5;

/// Status LED colors realized by the two-pin encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Red,
    Green,
    Orange,
    Off,
}

impl LedColor {
    /// Pin levels (green leg, red leg) realizing this color.
    fn levels(self) -> (bool, bool) {
        match self {
            LedColor::Red => (false, true),
            LedColor::Green => (true, false),
            LedColor::Orange => (true, true),
            LedColor::Off => (false, false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedColor::Red => "red",
            LedColor::Green => "green",
            LedColor::Orange => "orange",
            LedColor::Off => "off",
        }
    }
}

impl FromStr for LedColor {
    type Err = std::convert::Infallible;

    /// Anything unrecognized is treated as `Off`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "red" => LedColor::Red,
            "green" => LedColor::Green,
            "orange" => LedColor::Orange,
            _ => LedColor::Off,
        })
    }
}

impl std::fmt::Display for LedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Driver for the three status-indicator pins.
///
/// Stays disabled until [`PinDriver::initialize`] succeeds; while
/// disabled, every operation is a silent no-op so a missing `pinctrl`
/// never destabilizes the rest of the agent.
pub struct PinDriver {
    runner: Arc<dyn CommandRunner>,
    enabled: AtomicBool,
}

impl PinDriver {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            enabled: AtomicBool::new(false),
        }
    }

    /// Configure all three pins as outputs, driven low. Called once at
    /// process start; on failure the driver stays disabled for the
    /// process lifetime.
    pub fn initialize(&self) -> Result<()> {
        for pin in [GREEN_LED_PIN, RED_LED_PIN, BUZZER_PIN] {
            self.runner.run(&format!("pinctrl set {} op dl", pin))?;
        }
        self.enabled.store(true, Ordering::Relaxed);
        Ok(())
    }

    /// Whether initialization succeeded.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn write(&self, pin: u8, high: bool) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let level = if high { "dh" } else { "dl" };
        self.runner
            .run(&format!("pinctrl set {} {}", pin, level))
            .map(|_| ())
    }

    /// Realize `color` with the two-pin encoding.
    pub fn set_led_color(&self, color: LedColor) -> Result<()> {
        let (green, red) = color.levels();
        self.write(GREEN_LED_PIN, green)?;
        self.write(RED_LED_PIN, red)
    }

    /// Drive the buzzer pin high or low.
    pub fn set_buzzer(&self, on: bool) -> Result<()> {
        self.write(BUZZER_PIN, on)
    }
}

/// Log-and-discard policy for status-indication writes.
///
/// Hardware setters are best-effort: a failed write must never propagate
/// into the caller's control flow.
pub(crate) fn best_effort(result: Result<()>) {
    if let Err(err) = result {
        debug!(%err, "status indication write failed");
    }
}
