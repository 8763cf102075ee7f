//! Pump kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The mechanical design of a pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "pump_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PumpKind {
    /// Rotational kinetic pump.
    Centrifugal,
    /// Submerged in the pumped fluid.
    Submersible,
    /// Positive displacement via a flexing membrane.
    Diaphragm,
    /// Reciprocating positive displacement.
    Piston,
    /// Meshing-gear positive displacement.
    Gear,
}

impl PumpKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Centrifugal => "centrifugal",
            Self::Submersible => "submersible",
            Self::Diaphragm => "diaphragm",
            Self::Piston => "piston",
            Self::Gear => "gear",
        }
    }
}

impl fmt::Display for PumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PumpKind {
    type Err = pumpmaster_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "centrifugal" => Ok(Self::Centrifugal),
            "submersible" => Ok(Self::Submersible),
            "diaphragm" => Ok(Self::Diaphragm),
            "piston" => Ok(Self::Piston),
            "gear" => Ok(Self::Gear),
            _ => Err(pumpmaster_core::AppError::validation(format!(
                "Invalid pump kind: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for kind in [
            PumpKind::Centrifugal,
            PumpKind::Submersible,
            PumpKind::Diaphragm,
            PumpKind::Piston,
            PumpKind::Gear,
        ] {
            assert_eq!(kind.as_str().parse::<PumpKind>().unwrap(), kind);
        }
    }
}
