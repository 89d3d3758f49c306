//! Categorical node layers.

use std::fmt;
use std::str::FromStr;

/// The layer a node belongs to. Closed set, no extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layer {
    Infrastructure,
    Application,
    Intelligence,
    Orchestration,
    /// Quantum nodes form a full clique and vote with their derived weight.
    Quantum,
}

impl Layer {
    /// All layers in declaration order.
    pub const ALL: [Layer; 5] = [
        Layer::Infrastructure,
        Layer::Application,
        Layer::Intelligence,
        Layer::Orchestration,
        Layer::Quantum,
    ];

    /// Lowercase name, as used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Application => "application",
            Self::Intelligence => "intelligence",
            Self::Orchestration => "orchestration",
            Self::Quantum => "quantum",
        }
    }

    pub const fn is_quantum(&self) -> bool {
        matches!(self, Self::Quantum)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layer| layer.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown layer: {s}"))
    }
}
