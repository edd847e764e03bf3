use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormantSettings {
    pub enabled: bool,
    pub quefrency: f64,
    pub timbre: f64,
}

impl FormantSettings {
    pub fn enabled(quefrency: f64, timbre: f64) -> Self {
        Self {
            enabled: true,
            quefrency,
            timbre,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            quefrency: 0.0,
            timbre: 0.0,
        }
    }

    /// Value written to the settings store: disabled settings persist zeroed.
    pub fn snapshot(&self) -> Self {
        if self.enabled { *self } else { Self::disabled() }
    }
}

impl Default for FormantSettings {
    fn default() -> Self {
        Self::disabled()
    }
}
