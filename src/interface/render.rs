use crate::models::{ActivityLevel, PlanInput, PlanResult, SafetyLevel};
use crate::planner::constants::{CHART_MAX_ROWS, CHART_WIDTH, MIN_SAFE_INTAKE_KCAL};

/// Display a computed plan: metrics, safety banner and trajectory chart.
pub fn display_plan(input: &PlanInput, result: &PlanResult) {
    println!();
    println!("=== Goal Weight Plan ===");
    println!();
    print!("{}", render_metrics(result));
    println!();
    println!("{}", render_banner(result));
    println!();
    println!("--- Projected weight ---");
    print!("{}", render_chart(&result.trajectory, CHART_MAX_ROWS));
    if let Some(last) = result.final_weight() {
        println!("Projected weight on day {}: {:.1} kg", result.target_days, last);
    }
    println!();
    println!(
        "{:.1} kg -> {:.1} kg in {} days ({}, {})",
        input.weight_kg,
        input.target_weight_kg,
        input.target_days,
        input.activity.label(),
        input.gender
    );
    println!();
}

/// The three summary metrics.
pub fn render_metrics(result: &PlanResult) -> String {
    let sign = if result.daily_delta >= 0.0 { "+" } else { "" };
    let mut out = String::new();
    out.push_str(&format!("TDEE:               {:>6.0} kcal\n", result.tdee));
    out.push_str(&format!(
        "Recommended intake: {:>6.0} kcal  ({}{:.0} kcal/day)\n",
        result.recommended_intake, sign, result.daily_delta
    ));
    out.push_str(&format!(
        "Total weight {:<6}  {:>6.1} kg\n",
        format!("{}:", result.direction().name()),
        result.weight_change_magnitude()
    ));
    out
}

/// One-line safety banner.
pub fn render_banner(result: &PlanResult) -> String {
    match result.safety {
        SafetyLevel::Critical => format!(
            "[ERROR] Daily intake of {:.0} kcal is below {:.0} kcal. This can harm your \
             metabolism and health; consider allowing more days.",
            result.recommended_intake, MIN_SAFE_INTAKE_KCAL
        ),
        SafetyLevel::Caution => format!(
            "[WARNING] Daily intake is below your basal metabolic rate (BMR: {:.0} kcal). \
             Sustained over time this may lead to muscle loss.",
            result.bmr
        ),
        SafetyLevel::Ok => format!(
            "[OK] Eating {:.0} kcal per day at your current activity level reaches the \
             target in {} days.",
            result.recommended_intake, result.target_days
        ),
    }
}

/// Days drawn in the chart: evenly spaced, always including the first and last.
pub fn sample_days(target_days: u32, max_rows: usize) -> Vec<u32> {
    let total = target_days as usize + 1;
    if max_rows < 2 || total <= max_rows {
        return (0..=target_days).collect();
    }

    let step = (target_days as usize).div_ceil(max_rows - 1) as u32;
    let mut days: Vec<u32> = (0..target_days).step_by(step as usize).collect();
    days.push(target_days);
    days
}

/// Text line chart of a trajectory, one row per sampled day.
pub fn render_chart(trajectory: &[f64], max_rows: usize) -> String {
    let Some(last_day) = trajectory.len().checked_sub(1) else {
        return String::from("(no data)\n");
    };

    let min = trajectory.iter().copied().fold(f64::INFINITY, f64::min);
    let max = trajectory.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut out = String::new();
    for day in sample_days(last_day as u32, max_rows) {
        let weight = trajectory[day as usize];
        let pos = if span > 0.0 {
            (((weight - min) / span) * (CHART_WIDTH - 1) as f64).round() as usize
        } else {
            0
        };

        let mut bar = vec![' '; CHART_WIDTH];
        bar[pos.min(CHART_WIDTH - 1)] = '*';
        let bar: String = bar.into_iter().collect();

        out.push_str(&format!("day {:>4} | {:>6.2} kg |{}\n", day, weight, bar.trim_end()));
    }
    out
}

/// Display the activity levels and their multipliers.
pub fn display_activity_levels() {
    println!();
    println!("=== Activity levels ===");
    println!();
    for level in ActivityLevel::ALL {
        println!("  {:<12} {:<20} x{}", level.key(), level.label(), level.factor());
    }
    println!();
}
