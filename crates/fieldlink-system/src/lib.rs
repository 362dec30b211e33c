//! Status indication and local system operations for Fieldlink.
//!
//! Everything the agent does to the machine it runs on lives here:
//! - External command execution (the one seam every action goes through)
//! - The shell-level pin driver for the status LED and buzzer
//! - The status LED blink controller and the buzzer pattern player
//! - Wireless network queries, system restart, application version

pub mod buzzer;
pub mod executor;
pub mod led;
pub mod memory;
pub mod network;
pub mod pins;
pub mod power;
pub mod version;

pub use buzzer::{Buzzer, BuzzerPattern};
pub use executor::{CommandRunner, ShellRunner};
pub use led::{Blink, DEFAULT_BLINK_PERIOD, LedStatus, StatusLed};
pub use memory::{MemoryRunner, RecordedCall};
pub use network::{NetworkInfo, value_or_error};
pub use pins::{BUZZER_PIN, GREEN_LED_PIN, LedColor, PinDriver, RED_LED_PIN};
pub use power::{Power, RESTART_COMMAND};
pub use version::{AppManifest, application_version};
