//! Traffic light phase enum shared across all `tl-*` crates.

/// The two-valued state a light cycles through.
///
/// Instances are created, copied, and compared only; every light starts
/// [`Red`][Phase::Red].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Stop.
    #[default]
    Red,
    /// Go.
    Green,
}

impl Phase {
    /// The other phase (red ↔ green).
    #[inline]
    pub fn toggle(self) -> Phase {
        match self {
            Phase::Red   => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    /// `true` when traffic may proceed.
    #[inline]
    pub fn is_green(self) -> bool {
        matches!(self, Phase::Green)
    }

    /// Human-readable label, useful for observers and demo output.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Red   => "red",
            Phase::Green => "green",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
