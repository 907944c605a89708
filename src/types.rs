//! Shared types used across qrgen.
//! Holds `RecoveryLevel` and the mapping from human quality strings to it.
use qrcode::EcLevel;

/// Error-correction strength of the generated symbol.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RecoveryLevel {
    Low,
    Medium,
    High,
    Highest,
}

impl RecoveryLevel {
    /// Map a quality string to a level. Case and surrounding whitespace are
    /// ignored; anything unrecognized (including "") resolves to `Highest`.
    pub fn from_quality(quality: &str) -> Self {
        match quality.trim().to_lowercase().as_str() {
            "low" => RecoveryLevel::Low,
            "medium" | "med" => RecoveryLevel::Medium,
            "high" => RecoveryLevel::High,
            "highest" | "max" | "ultra" => RecoveryLevel::Highest,
            _ => RecoveryLevel::Highest,
        }
    }

    /// Error-correction level handed to the symbol encoder.
    pub fn ec_level(self) -> EcLevel {
        match self {
            RecoveryLevel::Low => EcLevel::L,
            RecoveryLevel::Medium => EcLevel::M,
            RecoveryLevel::High => EcLevel::Q,
            RecoveryLevel::Highest => EcLevel::H,
        }
    }
}

impl std::fmt::Display for RecoveryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecoveryLevel::Low => "low",
            RecoveryLevel::Medium => "medium",
            RecoveryLevel::High => "high",
            RecoveryLevel::Highest => "highest",
        };
        write!(f, "{}", s)
    }
}
