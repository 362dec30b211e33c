//! Buzzer pattern player.
//!
//! Patterns are one-shot pulse sequences over the buzzer pin. There is no
//! queue: overlapping beeps race on the shared pin and the last scheduled
//! "off" wins.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::pins::{PinDriver, best_effort};

/// Duration of a short pulse, and of each pulse in `Twice`.
const SHORT_PULSE: Duration = Duration::from_millis(100);
/// Duration of a long pulse.
const LONG_PULSE: Duration = Duration::from_millis(400);
/// Silence between the two pulses of `Twice`.
const TWICE_GAP: Duration = Duration::from_millis(100);

/// Named beep patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerPattern {
    /// One 100 ms pulse.
    Short,
    /// One 400 ms pulse.
    Long,
    /// Two 100 ms pulses with a 100 ms gap.
    Twice,
    /// Stop buzzing.
    Off,
}

impl FromStr for BuzzerPattern {
    type Err = std::convert::Infallible;

    /// Anything unrecognized is treated as `Off`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "short" => BuzzerPattern::Short,
            "long" => BuzzerPattern::Long,
            "twice" => BuzzerPattern::Twice,
            _ => BuzzerPattern::Off,
        })
    }
}

/// Plays beep patterns on the buzzer pin.
pub struct Buzzer {
    pins: Arc<PinDriver>,
}

impl Buzzer {
    pub fn new(pins: Arc<PinDriver>) -> Self {
        Self { pins }
    }

    /// Play `pattern`. Returns immediately; the trailing edges of the
    /// pulses are driven by spawned timers.
    pub fn beep(&self, pattern: BuzzerPattern) {
        match pattern {
            BuzzerPattern::Short => self.pulse(SHORT_PULSE),
            BuzzerPattern::Long => self.pulse(LONG_PULSE),
            BuzzerPattern::Twice => {
                best_effort(self.pins.set_buzzer(true));
                let pins = Arc::clone(&self.pins);
                tokio::spawn(async move {
                    time::sleep(SHORT_PULSE).await;
                    best_effort(pins.set_buzzer(false));
                    time::sleep(TWICE_GAP).await;
                    best_effort(pins.set_buzzer(true));
                    time::sleep(SHORT_PULSE).await;
                    best_effort(pins.set_buzzer(false));
                });
            }
            BuzzerPattern::Off => best_effort(self.pins.set_buzzer(false)),
        }
    }

    fn pulse(&self, on_for: Duration) {
        best_effort(self.pins.set_buzzer(true));
        let pins = Arc::clone(&self.pins);
        tokio::spawn(async move {
            time::sleep(on_for).await;
            best_effort(pins.set_buzzer(false));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryRunner, RecordedCall};
    use tokio::time::Instant;

    fn buzzer() -> (MemoryRunner, Buzzer, Instant) {
        let runner = MemoryRunner::new();
        let pins = Arc::new(PinDriver::new(Arc::new(runner.clone())));
        pins.initialize().unwrap();
        let buzzer = Buzzer::new(pins);
        (runner, buzzer, Instant::now())
    }

    /// Buzzer-pin writes after `start`, as (is_on, offset) pairs.
    fn buzzer_writes(calls: &[RecordedCall], start: Instant) -> Vec<(bool, Duration)> {
        calls
            .iter()
            .filter_map(|call| {
                let level = call.command.strip_prefix("pinctrl set 5 ")?;
                Some((level == "dh", call.at - start))
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_beep_timing() {
        let (runner, buzzer, start) = buzzer();
        buzzer.beep(BuzzerPattern::Short);

        // Not off before the pulse has elapsed.
        time::sleep(Duration::from_millis(99)).await;
        assert_eq!(
            buzzer_writes(&runner.calls(), start),
            vec![(true, Duration::ZERO)]
        );

        time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            buzzer_writes(&runner.calls(), start),
            vec![(true, Duration::ZERO), (false, Duration::from_millis(100))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_beep_timing() {
        let (runner, buzzer, start) = buzzer();
        buzzer.beep(BuzzerPattern::Long);

        time::sleep(Duration::from_millis(450)).await;
        assert_eq!(
            buzzer_writes(&runner.calls(), start),
            vec![(true, Duration::ZERO), (false, Duration::from_millis(400))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_twice_is_two_pulses() {
        let (runner, buzzer, start) = buzzer();
        buzzer.beep(BuzzerPattern::Twice);

        time::sleep(Duration::from_millis(350)).await;
        assert_eq!(
            buzzer_writes(&runner.calls(), start),
            vec![
                (true, Duration::ZERO),
                (false, Duration::from_millis(100)),
                (true, Duration::from_millis(200)),
                (false, Duration::from_millis(300)),
            ]
        );
    }

    #[tokio::test]
    async fn test_off_is_immediate() {
        let (runner, buzzer, _) = buzzer();
        let before = runner.commands().len();
        buzzer.beep(BuzzerPattern::Off);
        assert_eq!(runner.commands()[before..], ["pinctrl set 5 dl".to_string()]);
    }

    #[test]
    fn test_unknown_pattern_is_off() {
        assert_eq!("thrice".parse::<BuzzerPattern>().unwrap(), BuzzerPattern::Off);
        assert_eq!("short".parse::<BuzzerPattern>().unwrap(), BuzzerPattern::Short);
    }
}
