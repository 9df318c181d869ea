use std::path::Path;

use crate::error::Result;
use crate::models::{PlanInput, PlanResult};

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the trajectory as `day,weight_kg` rows.
pub fn write_trajectory_csv(result: &PlanResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["day", "weight_kg"])?;
    for (day, weight) in result.trajectory.iter().enumerate() {
        wtr.write_record([day.to_string(), format!("{:.4}", weight)])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty JSON document holding both the input and the full result.
///
/// Summary figures are rounded for display; the trajectory keeps full precision.
pub fn plan_to_json(input: &PlanInput, result: &PlanResult) -> Result<String> {
    let json = serde_json::json!({
        "input": input,
        "activity_factor": input.activity_factor(),
        "result": {
            "bmr": round_to(result.bmr, 2),
            "tdee": round_to(result.tdee, 2),
            "daily_delta": round_to(result.daily_delta, 2),
            "recommended_intake": round_to(result.recommended_intake, 2),
            "safety": result.safety,
            "direction": result.direction(),
            "weight_change_kg": round_to(result.weight_change_kg, 3),
            "total_calorie_delta": round_to(result.total_calorie_delta, 1),
            "target_days": result.target_days,
            "trajectory": result.trajectory,
        },
    });

    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::compute_plan;

    #[test]
    fn test_write_trajectory_csv() {
        let input = PlanInput {
            target_days: 4,
            ..PlanInput::default()
        };
        let result = compute_plan(&input).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.csv");
        write_trajectory_csv(&result, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "day");
        assert_eq!(&headers[1], "weight_kg");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[0][1], "70.0000");
        assert_eq!(&rows[4][0], "4");
        assert_eq!(&rows[4][1], "65.0000");
    }

    #[test]
    fn test_plan_to_json() {
        let input = PlanInput::default();
        let result = compute_plan(&input).unwrap();
        let text = plan_to_json(&input, &result).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["input"]["gender"], "male");
        assert_eq!(value["input"]["activity"], "light");
        assert_eq!(value["result"]["direction"], "loss");
        assert_eq!(value["result"]["trajectory"].as_array().unwrap().len(), 61);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(641.666, 2), 641.67);
        assert_eq!(round_to(-641.666, 1), -641.7);
        assert_eq!(round_to(12.0, 3), 12.0);
    }
}
