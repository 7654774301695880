//! The single numeric register operations act upon.

/// Immutable capture of the accumulator's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    value: f64,
}

impl Snapshot {
    /// Returns the captured value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Holds the current value of the calculator. Starts at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    value: f64,
}

impl Accumulator {
    /// Creates an accumulator holding zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator holding `value`.
    pub fn with_value(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Overwrites the value. Non-finite values are accepted as-is.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Captures the current value.
    pub fn save(&self) -> Snapshot {
        Snapshot { value: self.value }
    }

    /// Overwrites the current value with the one captured in `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.value = snapshot.value;
    }
}
