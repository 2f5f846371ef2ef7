//! Mission briefing text
//!
//! The briefing is flavor only: it names the mission shown on the objective
//! label and in the menu. The service that writes it is external; this module
//! only decodes its JSON and substitutes a static briefing when it is
//! missing or malformed.

use serde::{Deserialize, Serialize};

/// Visual vibe of the briefing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Scifi,
    #[default]
    Modern,
    Retro,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Scifi => "scifi",
            Theme::Modern => "modern",
            Theme::Retro => "retro",
        }
    }
}

/// A mission briefing as produced by the briefing service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionBriefing {
    pub name: String,
    pub objective: String,
    pub pilot_callsign: String,
    pub theme: Theme,
}

impl MissionBriefing {
    /// Briefing used whenever the service fails
    pub fn fallback() -> Self {
        Self {
            name: "Operation: Fallback".to_string(),
            objective: "Defend the sector from unknown hostiles.".to_string(),
            pilot_callsign: "Rookie".to_string(),
            theme: Theme::Modern,
        }
    }

    /// Decode a briefing, falling back to the static one on any failure
    pub fn from_json_or_fallback(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::warn!("No mission briefing available, using fallback");
            return Self::fallback();
        };

        match serde_json::from_str::<MissionBriefing>(json) {
            Ok(briefing) if !briefing.name.trim().is_empty() => briefing,
            Ok(_) => {
                log::error!("Mission briefing has an empty name, using fallback");
                Self::fallback()
            }
            Err(e) => {
                log::error!("Failed to decode mission briefing: {}", e);
                Self::fallback()
            }
        }
    }
}
