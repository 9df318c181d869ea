use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::planner::constants::*;

/// Biological sex used to select the BMR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Constant term added to the Mifflin-St Jeor base.
    pub fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => MALE_BMR_OFFSET,
            Gender::Female => FEMALE_BMR_OFFSET,
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(PlanError::invalid(format!(
                "unknown gender '{}' (expected M or F)",
                other
            ))),
        }
    }
}

/// Activity level and its TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Heavy,
    VeryHeavy,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::VeryHeavy,
    ];

    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_FACTOR,
            ActivityLevel::Light => LIGHT_FACTOR,
            ActivityLevel::Moderate => MODERATE_FACTOR,
            ActivityLevel::Heavy => HEAVY_FACTOR,
            ActivityLevel::VeryHeavy => VERY_HEAVY_FACTOR,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light activity",
            ActivityLevel::Moderate => "Moderate activity",
            ActivityLevel::Heavy => "Heavy activity",
            ActivityLevel::VeryHeavy => "Very heavy activity",
        }
    }

    /// Key accepted on the command line and in request files.
    pub fn key(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Heavy => "heavy",
            ActivityLevel::VeryHeavy => "very-heavy",
        }
    }

    /// Map a raw multiplier back to its level.
    ///
    /// Only the five enumerated factors are accepted.
    pub fn from_factor(factor: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - factor).abs() < FACTOR_MATCH_EPSILON)
            .ok_or_else(|| {
                PlanError::invalid(format!(
                    "activity factor {} is not one of 1.2, 1.375, 1.55, 1.725, 1.9",
                    factor
                ))
            })
    }

    /// Closest known key to `input`, if any is similar enough.
    fn suggest(input: &str) -> Option<&'static str> {
        Self::ALL
            .into_iter()
            .map(|level| (level.key(), jaro_winkler(level.key(), input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(key, _)| key)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase().replace('_', "-");

        if let Some(level) = Self::ALL
            .into_iter()
            .find(|l| l.key() == needle || l.label().to_lowercase() == needle)
        {
            return Ok(level);
        }

        let msg = match Self::suggest(&needle) {
            Some(key) => format!("unknown activity level '{}' (did you mean '{}'?)", s, key),
            None => format!(
                "unknown activity level '{}' (expected one of: sedentary, light, moderate, heavy, very-heavy)",
                s
            ),
        };
        Err(PlanError::InvalidInput(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" female ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_offsets_differ_by_166() {
        assert_eq!(Gender::Male.bmr_offset() - Gender::Female.bmr_offset(), 166.0);
    }

    #[test]
    fn test_activity_factors() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_from_factor() {
        assert_eq!(ActivityLevel::from_factor(1.55).unwrap(), ActivityLevel::Moderate);
        assert!(ActivityLevel::from_factor(1.5).is_err());
        assert!(ActivityLevel::from_factor(0.0).is_err());
        assert!(ActivityLevel::from_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_activity_parsing_by_key_and_label() {
        assert_eq!("very-heavy".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryHeavy);
        assert_eq!("VERY_HEAVY".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryHeavy);
        assert_eq!(
            "Light activity".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Light
        );
    }

    #[test]
    fn test_activity_parsing_suggests_close_key() {
        let err = "moderat".parse::<ActivityLevel>().unwrap_err();
        assert!(err.to_string().contains("did you mean 'moderate'"));

        let err = "zzz".parse::<ActivityLevel>().unwrap_err();
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn test_gender_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        let parsed: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn test_activity_serde_uses_keys() {
        let json = serde_json::to_string(&ActivityLevel::VeryHeavy).unwrap();
        assert_eq!(json, "\"very-heavy\"");
    }
}
