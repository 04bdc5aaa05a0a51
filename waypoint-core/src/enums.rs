//! Enum types for Waypoint entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin classification of a plan's text.
///
/// MANUAL text was typed by the user, AI text is exactly what a generation
/// call produced, HYBRID originated from a generation but has been edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Manual,
    Ai,
    Hybrid,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanType::Manual => "MANUAL",
            PlanType::Ai => "AI",
            PlanType::Hybrid => "HYBRID",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan type: {0}")]
pub struct PlanTypeParseError(pub String);

impl FromStr for PlanType {
    type Err = PlanTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANUAL" => Ok(PlanType::Manual),
            "AI" => Ok(PlanType::Ai),
            "HYBRID" => Ok(PlanType::Hybrid),
            other => Err(PlanTypeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_wire_form_round_trips() {
        for ty in [PlanType::Manual, PlanType::Ai, PlanType::Hybrid] {
            let wire = ty.to_string();
            assert_eq!(wire.parse::<PlanType>().ok(), Some(ty));
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", wire));
        }
    }

    #[test]
    fn plan_type_rejects_unknown() {
        assert!("manual".parse::<PlanType>().is_err());
        assert!("".parse::<PlanType>().is_err());
    }
}
