pub mod calculations;
pub mod constants;

pub use calculations::{
    classify_safety, compute_bmr, compute_daily_delta, compute_plan, compute_tdee,
    project_weight, total_calorie_delta, trajectory,
};
pub use constants::*;
