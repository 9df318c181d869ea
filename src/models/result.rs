use serde::Serialize;

/// Safety classification of a recommended daily intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// Intake below the 1200 kcal/day floor.
    Critical,
    /// Intake below BMR.
    Caution,
    Ok,
}

/// Which way the goal moves body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    Loss,
    Gain,
    Maintain,
}

impl GoalDirection {
    pub fn name(self) -> &'static str {
        match self {
            GoalDirection::Loss => "loss",
            GoalDirection::Gain => "gain",
            GoalDirection::Maintain => "maintain",
        }
    }
}

/// Output of a plan computation. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    /// Basal metabolic rate, kcal/day.
    pub bmr: f64,

    /// Total daily energy expenditure, kcal/day.
    pub tdee: f64,

    /// Signed adjustment to TDEE, kcal/day (negative = deficit).
    pub daily_delta: f64,

    /// `tdee + daily_delta`, kcal/day.
    pub recommended_intake: f64,

    pub safety: SafetyLevel,

    /// Signed `target - current` weight, kg.
    pub weight_change_kg: f64,

    /// Total energy surplus or deficit over the whole plan, kcal.
    pub total_calorie_delta: f64,

    pub target_days: u32,

    /// Projected weight in kg for day 0 through `target_days` inclusive.
    pub trajectory: Vec<f64>,
}

impl PlanResult {
    pub fn direction(&self) -> GoalDirection {
        if self.weight_change_kg < 0.0 {
            GoalDirection::Loss
        } else if self.weight_change_kg > 0.0 {
            GoalDirection::Gain
        } else {
            GoalDirection::Maintain
        }
    }

    pub fn weight_change_magnitude(&self) -> f64 {
        self.weight_change_kg.abs()
    }

    /// Projected weight on the final day.
    pub fn final_weight(&self) -> Option<f64> {
        self.trajectory.last().copied()
    }
}
