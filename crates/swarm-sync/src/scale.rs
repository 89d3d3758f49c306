//! Propagation scales.
//!
//! Four fixed stages with multipliers that grow by powers of φ:
//!
//! | scale | multiplier |
//! |-------|------------|
//! | micro | 1          |
//! | meso  | φ          |
//! | macro | φ²         |
//! | meta  | φ³         |

use std::fmt;

use serde::{Deserialize, Serialize};
use swarm_matrix::PHI;

/// Fraction of the scale multiplier applied per cascade step.
pub const AMPLIFICATION_RATE: f64 = 0.1;

/// Multiplier of [`Scale::Micro`].
pub const MICRO_MULTIPLIER: f64 = 1.0;
/// Multiplier of [`Scale::Meso`].
pub const MESO_MULTIPLIER: f64 = PHI;
/// Multiplier of [`Scale::Macro`].
pub const MACRO_MULTIPLIER: f64 = PHI * PHI;
/// Multiplier of [`Scale::Meta`].
pub const META_MULTIPLIER: f64 = PHI * PHI * PHI;

/// A synchronization scale. Ordering follows the multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Micro,
    Meso,
    Macro,
    Meta,
}

impl Scale {
    /// All scales in ascending multiplier order.
    pub const ALL: [Scale; 4] = [Scale::Micro, Scale::Meso, Scale::Macro, Scale::Meta];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Meso => "meso",
            Self::Macro => "macro",
            Self::Meta => "meta",
        }
    }

    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Micro => MICRO_MULTIPLIER,
            Self::Meso => MESO_MULTIPLIER,
            Self::Macro => MACRO_MULTIPLIER,
            Self::Meta => META_MULTIPLIER,
        }
    }

    /// Per-node coherence factor at this scale: `1 + 0.1 × multiplier`.
    pub fn amplification(&self) -> f64 {
        1.0 + AMPLIFICATION_RATE * self.multiplier()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
