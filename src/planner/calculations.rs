use crate::error::Result;
use crate::models::{Gender, PlanInput, PlanResult, SafetyLevel};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
///
/// Formula: 10 * weight + 6.25 * height - 5 * age, then +5 (male) or -161 (female).
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm
        - BMR_AGE_COEFF * age_years as f64;
    base + gender.bmr_offset()
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Energy needed to move body weight by `weight_delta_kg`, kcal.
pub fn total_calorie_delta(weight_delta_kg: f64) -> f64 {
    weight_delta_kg * KCAL_PER_KG
}

/// Signed kcal/day adjustment that reaches the target in `target_days`.
pub fn compute_daily_delta(weight_kg: f64, target_weight_kg: f64, target_days: u32) -> f64 {
    total_calorie_delta(target_weight_kg - weight_kg) / target_days as f64
}

/// Classify a recommended intake. First matching rule wins.
pub fn classify_safety(recommended_intake: f64, bmr: f64) -> SafetyLevel {
    if recommended_intake < MIN_SAFE_INTAKE_KCAL {
        SafetyLevel::Critical
    } else if recommended_intake < bmr {
        SafetyLevel::Caution
    } else {
        SafetyLevel::Ok
    }
}

/// Projected weight on `day`, assuming a constant daily delta.
#[inline]
pub fn project_weight(weight_kg: f64, daily_delta: f64, day: u32) -> f64 {
    weight_kg + daily_delta * day as f64 / KCAL_PER_KG
}

/// Weight projection for days `0..=target_days`.
pub fn trajectory(weight_kg: f64, daily_delta: f64, target_days: u32) -> Vec<f64> {
    (0..=target_days)
        .map(|day| project_weight(weight_kg, daily_delta, day))
        .collect()
}

/// Run the full pipeline for one input.
///
/// Fails with `InvalidInput` if the input violates its constraints, even when
/// it was built without going through `PlanInput::new`.
pub fn compute_plan(input: &PlanInput) -> Result<PlanResult> {
    input.validate()?;

    let bmr = compute_bmr(input.weight_kg, input.height_cm, input.age_years, input.gender);
    let tdee = compute_tdee(bmr, input.activity_factor());

    let weight_change_kg = input.target_weight_kg - input.weight_kg;
    let daily_delta =
        compute_daily_delta(input.weight_kg, input.target_weight_kg, input.target_days);

    let recommended_intake = tdee + daily_delta;
    let safety = classify_safety(recommended_intake, bmr);

    Ok(PlanResult {
        bmr,
        tdee,
        daily_delta,
        recommended_intake,
        safety,
        weight_change_kg,
        total_calorie_delta: total_calorie_delta(weight_change_kg),
        target_days: input.target_days,
        trajectory: trajectory(input.weight_kg, daily_delta, input.target_days),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::models::ActivityLevel;

    fn sample_input() -> PlanInput {
        PlanInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            gender: Gender::Male,
            target_weight_kg: 65.0,
            target_days: 60,
            activity: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_bmr_male() {
        // 700 + 1093.75 - 125 + 5
        assert_eq!(compute_bmr(70.0, 175.0, 25, Gender::Male), 1673.75);
    }

    #[test]
    fn test_bmr_female() {
        // 600 + 1000 - 150 - 161
        assert_eq!(compute_bmr(60.0, 160.0, 30, Gender::Female), 1289.0);
    }

    #[test]
    fn test_tdee() {
        assert!((compute_tdee(1673.75, 1.2) - 2008.5).abs() < 1e-9);
        assert!((compute_tdee(1000.0, 1.9) - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_delta_sign() {
        assert!(compute_daily_delta(70.0, 65.0, 60) < 0.0);
        assert!(compute_daily_delta(60.0, 65.0, 60) > 0.0);
        assert_eq!(compute_daily_delta(70.0, 70.0, 60), 0.0);
    }

    #[test]
    fn test_classify_safety_boundaries() {
        assert_eq!(classify_safety(1199.999, 1000.0), SafetyLevel::Critical);
        assert_eq!(classify_safety(1200.0, 1000.0), SafetyLevel::Ok);
        assert_eq!(classify_safety(1200.0, 1500.0), SafetyLevel::Caution);
        // Equal to BMR is not below it
        assert_eq!(classify_safety(1500.0, 1500.0), SafetyLevel::Ok);
        // Critical wins even when also below BMR
        assert_eq!(classify_safety(1100.0, 1500.0), SafetyLevel::Critical);
    }

    #[test]
    fn test_trajectory_length_and_endpoints() {
        let traj = trajectory(70.0, compute_daily_delta(70.0, 65.0, 60), 60);
        assert_eq!(traj.len(), 61);
        assert_eq!(traj[0], 70.0);
        assert!((traj[60] - 65.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_day_plan() {
        let mut input = sample_input();
        input.target_days = 1;
        let result = compute_plan(&input).unwrap();
        assert_eq!(result.trajectory.len(), 2);
        assert_eq!(result.daily_delta, -38500.0);
        assert_eq!(result.safety, SafetyLevel::Critical);
    }

    #[test]
    fn test_compute_plan_uses_daily_delta_helper() {
        let mut input = sample_input();
        input.target_weight_kg = 71.3;
        input.target_days = 17;
        let result = compute_plan(&input).unwrap();
        assert_eq!(result.daily_delta, compute_daily_delta(70.0, 71.3, 17));
        assert!((result.total_calorie_delta - result.daily_delta * 17.0).abs() < 1e-6);
    }

    #[test]
    fn test_final_weight_is_target() {
        let result = compute_plan(&sample_input()).unwrap();
        let last = result.final_weight().unwrap();
        assert!((last - 65.0).abs() < 1e-6);
        assert_eq!(Some(last), result.trajectory.last().copied());
    }

    #[test]
    fn test_compute_plan_rejects_bypassed_validation() {
        let mut input = sample_input();
        input.target_days = 0;
        assert!(matches!(compute_plan(&input), Err(PlanError::InvalidInput(_))));
    }

    #[test]
    fn test_maintenance_plan() {
        let mut input = sample_input();
        input.target_weight_kg = input.weight_kg;
        let result = compute_plan(&input).unwrap();
        assert_eq!(result.daily_delta, 0.0);
        assert_eq!(result.recommended_intake, result.tdee);
        assert!(result.trajectory.iter().all(|&w| w == 70.0));
    }
}
