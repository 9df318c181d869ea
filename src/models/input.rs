use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::profile::{ActivityLevel, Gender};
use crate::planner::constants::MAX_TARGET_DAYS;

/// Validated inputs for a single plan computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub target_weight_kg: f64,
    pub target_days: u32,
    pub activity: ActivityLevel,
}

impl PlanInput {
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        gender: Gender,
        target_weight_kg: f64,
        target_days: u32,
        activity: ActivityLevel,
    ) -> Result<Self> {
        let input = Self {
            weight_kg,
            height_cm,
            age_years,
            gender,
            target_weight_kg,
            target_days,
            activity,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check every numeric constraint. Gender and activity are valid by type.
    pub fn validate(&self) -> Result<()> {
        require_positive("weight_kg", self.weight_kg)?;
        require_positive("height_cm", self.height_cm)?;
        require_positive("target_weight_kg", self.target_weight_kg)?;

        if self.age_years == 0 {
            return Err(PlanError::invalid("age_years must be > 0"));
        }
        if self.target_days < 1 {
            return Err(PlanError::invalid("target_days must be >= 1"));
        }
        if self.target_days > MAX_TARGET_DAYS {
            return Err(PlanError::invalid(format!(
                "target_days must be <= {}, got {}",
                MAX_TARGET_DAYS, self.target_days
            )));
        }
        Ok(())
    }

    pub fn activity_factor(&self) -> f64 {
        self.activity.factor()
    }
}

impl Default for PlanInput {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            gender: Gender::Male,
            target_weight_kg: 65.0,
            target_days: 60,
            activity: ActivityLevel::Light,
        }
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlanError::invalid(format!("{} must be finite, got {}", field, value)));
    }
    if value <= 0.0 {
        return Err(PlanError::invalid(format!("{} must be > 0, got {}", field, value)));
    }
    Ok(())
}

/// Activity as written in a request: a key/label or a raw multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivitySpec {
    Factor(f64),
    Name(String),
}

impl ActivitySpec {
    pub fn resolve(&self) -> Result<ActivityLevel> {
        match self {
            ActivitySpec::Factor(f) => ActivityLevel::from_factor(*f),
            ActivitySpec::Name(name) => name.parse(),
        }
    }
}

/// Unvalidated, possibly partial plan request (JSON file or CLI flags).
///
/// Integers are signed so that negative values surface as `InvalidInput`
/// instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanRequest {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub age_years: Option<i64>,
    #[serde(default)]
    pub target_weight_kg: Option<f64>,
    #[serde(default)]
    pub target_days: Option<i64>,
    #[serde(default)]
    pub activity: Option<ActivitySpec>,
}

impl PlanRequest {
    /// Fields set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: PlanRequest) -> PlanRequest {
        PlanRequest {
            gender: overrides.gender.or(self.gender),
            height_cm: overrides.height_cm.or(self.height_cm),
            weight_kg: overrides.weight_kg.or(self.weight_kg),
            age_years: overrides.age_years.or(self.age_years),
            target_weight_kg: overrides.target_weight_kg.or(self.target_weight_kg),
            target_days: overrides.target_days.or(self.target_days),
            activity: overrides.activity.or(self.activity),
        }
    }

    /// Best-effort starting values for interactive prompts.
    ///
    /// Numeric values are kept even when out of range so the user can correct
    /// them; text and integers that cannot be read fall back to the defaults.
    pub fn prompt_defaults(&self) -> PlanInput {
        let defaults = PlanInput::default();

        PlanInput {
            weight_kg: self.weight_kg.unwrap_or(defaults.weight_kg),
            height_cm: self.height_cm.unwrap_or(defaults.height_cm),
            age_years: self
                .age_years
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.age_years),
            gender: self
                .gender
                .as_deref()
                .and_then(|g| g.parse().ok())
                .unwrap_or(defaults.gender),
            target_weight_kg: self.target_weight_kg.unwrap_or(defaults.target_weight_kg),
            target_days: self
                .target_days
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.target_days),
            activity: self
                .activity
                .as_ref()
                .and_then(|a| a.resolve().ok())
                .unwrap_or(defaults.activity),
        }
    }
}

impl TryFrom<PlanRequest> for PlanInput {
    type Error = PlanError;

    /// Missing fields take their `PlanInput::default()` values.
    fn try_from(req: PlanRequest) -> Result<Self> {
        let defaults = PlanInput::default();

        let gender = match req.gender {
            Some(g) => g.parse()?,
            None => defaults.gender,
        };
        let activity = match req.activity {
            Some(spec) => spec.resolve()?,
            None => defaults.activity,
        };
        let age_years = match req.age_years {
            Some(age) => to_u32("age_years", age)?,
            None => defaults.age_years,
        };
        let target_days = match req.target_days {
            Some(days) => to_u32("target_days", days)?,
            None => defaults.target_days,
        };

        PlanInput::new(
            req.weight_kg.unwrap_or(defaults.weight_kg),
            req.height_cm.unwrap_or(defaults.height_cm),
            age_years,
            gender,
            req.target_weight_kg.unwrap_or(defaults.target_weight_kg),
            target_days,
            activity,
        )
    }
}

fn to_u32(field: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| PlanError::invalid(format!("{} out of range: {}", field, value)))
}
