use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivitySpec, PlanRequest};

/// Goal weight planner: daily calorie targets and a projected weight path.
#[derive(Parser, Debug)]
#[command(name = "weight_goal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a plan for reaching a target weight.
    Plan(PlanArgs),

    /// List the supported activity levels.
    Activities,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Gender (M or F).
    #[arg(long)]
    pub gender: Option<String>,

    /// Height in centimeters.
    #[arg(long)]
    pub height: Option<f64>,

    /// Current weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Age in years.
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// Target weight in kilograms.
    #[arg(long)]
    pub target_weight: Option<f64>,

    /// Days to reach the target weight.
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Activity level key (see `activities`).
    #[arg(long)]
    pub activity: Option<String>,

    /// Read the plan request from a JSON file. Flags override its values.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Prompt for every field, pre-filled with the given values.
    #[arg(long)]
    pub interactive: bool,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Write the trajectory to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl PlanArgs {
    /// Request built from the field flags only.
    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            gender: self.gender.clone(),
            height_cm: self.height,
            weight_kg: self.weight,
            age_years: self.age,
            target_weight_kg: self.target_weight,
            target_days: self.days,
            activity: self.activity.clone().map(ActivitySpec::Name),
        }
    }
}
