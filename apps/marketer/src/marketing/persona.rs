//! Target-audience personas and their static profiles.
//!
//! Profiles are descriptive metadata only. Rendering dispatches on the
//! persona itself (see `renderer`), not on the profile fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Mz,
    Startup,
    SideHustle,
    Business,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Mz,
        Persona::Startup,
        Persona::SideHustle,
        Persona::Business,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Persona::Mz => "mz",
            Persona::Startup => "startup",
            Persona::SideHustle => "sidehustle",
            Persona::Business => "business",
        }
    }

    pub fn from_key(key: &str) -> Option<Persona> {
        let key = key.trim();
        Persona::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
    }

    pub fn profile(&self) -> PersonaProfile {
        match self {
            Persona::Mz => PersonaProfile {
                key: "mz",
                tone: "trendy and playful",
                keywords: &["hot", "jackpot", "legendary", "insane", "must-have"],
                style: "short, punchy sentences",
            },
            Persona::Startup => PersonaProfile {
                key: "startup",
                tone: "bold and ambitious",
                keywords: &["founding", "investment", "opportunity", "growth", "innovation"],
                style: "concrete numbers and strategy",
            },
            Persona::SideHustle => PersonaProfile {
                key: "sidehustle",
                tone: "practical and down-to-earth",
                keywords: &["side income", "profit", "efficiency", "hands-on", "tips"],
                style: "first-hand experience and practical advice",
            },
            Persona::Business => PersonaProfile {
                key: "business",
                tone: "professional and analytical",
                keywords: &["business", "margin", "strategy", "analysis", "results"],
                style: "data-driven, logical explanation",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaProfile {
    pub key: &'static str,
    pub tone: &'static str,
    pub keywords: &'static [&'static str],
    pub style: &'static str,
}

impl PersonaProfile {
    /// Used for any persona key outside the known set.
    pub const GENERIC: PersonaProfile = PersonaProfile {
        key: "default",
        tone: "neutral and transparent",
        keywords: &["resale", "transparent", "trust"],
        style: "plain price disclosure",
    };

    pub fn for_key(key: &str) -> PersonaProfile {
        Persona::from_key(key)
            .map(|p| p.profile())
            .unwrap_or(PersonaProfile::GENERIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_for_every_persona() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_key(persona.key()), Some(persona));
        }
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(Persona::from_key("SideHustle"), Some(Persona::SideHustle));
        assert_eq!(Persona::from_key(" MZ "), Some(Persona::Mz));
    }

    #[test]
    fn test_unknown_key_gets_generic_profile() {
        assert_eq!(Persona::from_key("retiree"), None);
        assert_eq!(PersonaProfile::for_key("retiree"), PersonaProfile::GENERIC);
    }

    #[test]
    fn test_known_key_gets_its_profile() {
        let profile = PersonaProfile::for_key("business");
        assert_eq!(profile.key, "business");
        assert!(profile.keywords.contains(&"margin"));
    }

    #[test]
    fn test_serializes_as_key() {
        assert_eq!(
            serde_json::to_string(&Persona::SideHustle).unwrap(),
            "\"sidehustle\""
        );
    }
}
