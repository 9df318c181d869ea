pub mod input;
pub mod profile;
pub mod result;

pub use input::{ActivitySpec, PlanInput, PlanRequest};
pub use profile::{ActivityLevel, Gender};
pub use result::{GoalDirection, PlanResult, SafetyLevel};
