//! The prize wheel.
//!
//! A spin picks one slot uniformly. Duplicated slots make a value more likely;
//! the two zero slots end the turn and the single 8000 slot is the jackpot.

use tracing::trace;

use crate::core::{ConfigError, GameRng, WheelConfig};

/// The classic 23-slot wheel.
pub const WHEEL_VALUES: [u32; 23] = [
    0, 650, 900, 700, 500, 800, 500, 650, 500, 900, 0, 1000, 500, 900, 700, 600, 8000, 500, 700,
    600, 550, 500, 900,
];

/// Source of spin results.
pub trait Wheel {
    /// Spin once. Zero means the turn is lost.
    fn spin(&mut self) -> u32;
}

/// Random wheel over a fixed slot list.
#[derive(Clone, Debug)]
pub struct ValueWheel {
    values: Vec<u32>,
    rng: GameRng,
}

impl ValueWheel {
    /// Build from configuration. Fails on an empty slot list.
    pub fn new(config: &WheelConfig, rng: GameRng) -> Result<Self, ConfigError> {
        if config.values.is_empty() {
            return Err(ConfigError::EmptyWheel);
        }
        Ok(Self {
            values: config.values.clone(),
            rng,
        })
    }

    /// The classic wheel.
    pub fn classic(rng: GameRng) -> Self {
        Self {
            values: WHEEL_VALUES.to_vec(),
            rng,
        }
    }

    /// Slot list, in wheel order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl Wheel for ValueWheel {
    fn spin(&mut self) -> u32 {
        let slot = self.rng.gen_index(self.values.len());
        let value = self.values[slot];
        trace!(slot, value, "wheel spun");
        value
    }
}

/// Wheel that replays a fixed sequence, cycling when it reaches the end.
#[derive(Clone, Debug)]
pub struct ScriptedWheel {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedWheel {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Scripted wheel needs at least one value");
        Self { values, next: 0 }
    }
}

impl Wheel for ScriptedWheel {
    fn spin(&mut self) -> u32 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
