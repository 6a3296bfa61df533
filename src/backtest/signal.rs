//! Z-score signals and the held-position state machine

use serde::Serialize;

/// Instruction emitted at a single index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i8")]
pub enum Signal {
    /// z above the entry band: sell the spread
    Short,
    /// z crossed zero: go flat
    Exit,
    /// z below the entry band: buy the spread
    Long,
}

impl Signal {
    /// Signal for the current z-score given the previous one.
    ///
    /// Entries take precedence over an exit at the same index. An absent
    /// z-score (warm-up or zero-variance window) never signals, and an
    /// absent previous z-score cannot form a zero crossing.
    pub fn detect(z: Option<f64>, prev_z: Option<f64>, entry_z: f64) -> Option<Self> {
        let z = z?;
        if z > entry_z {
            return Some(Self::Short);
        }
        if z < -entry_z {
            return Some(Self::Long);
        }
        let prev = prev_z?;
        crosses_zero(prev, z).then_some(Self::Exit)
    }

    /// Target position of this instruction
    pub fn target(self) -> Position {
        match self {
            Self::Short => Position::Short,
            Self::Exit => Position::Flat,
            Self::Long => Position::Long,
        }
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.target().units()
    }
}

/// Strict sign change; a zero on either side is not a crossing
fn crosses_zero(prev: f64, current: f64) -> bool {
    (prev > 0.0 && current < 0.0) || (prev < 0.0 && current > 0.0)
}

/// Position held between signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "i8")]
pub enum Position {
    #[default]
    Flat,
    Long,
    Short,
}

impl Position {
    /// Transition on a new signal; no signal keeps the current state
    pub fn apply(self, signal: Option<Signal>) -> Self {
        signal.map_or(self, Signal::target)
    }

    /// Signed unit exposure: -1, 0 or +1
    pub fn units(self) -> i8 {
        match self {
            Self::Flat => 0,
            Self::Long => 1,
            Self::Short => -1,
        }
    }

    /// Units traded moving from `self` to `next`: 0, 1 or 2
    pub fn trades_to(self, next: Self) -> u8 {
        (next.units() - self.units()).unsigned_abs()
    }

    /// PnL of holding this position over a price change
    pub fn pnl(self, price_change: f64) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Long => price_change,
            Self::Short => -price_change,
        }
    }
}

impl From<Position> for i8 {
    fn from(position: Position) -> Self {
        position.units()
    }
}
