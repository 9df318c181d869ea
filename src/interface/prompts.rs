use std::str::FromStr;

use dialoguer::{Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Gender, PlanInput};

/// Prompt for a number, re-parsing the text the way the user typed it.
fn prompt_number<T>(prompt: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for gender.
pub fn prompt_gender(default: Gender) -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<String> = options
        .iter()
        .map(|g| format!("{} ({})", g.short(), g))
        .collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(if default == Gender::Male { 0 } else { 1 })
        .interact()?;

    Ok(options[selection])
}

/// Prompt for activity level.
pub fn prompt_activity(default: ActivityLevel) -> Result<ActivityLevel> {
    let labels: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|l| format!("{:<20} x{}", l.label(), l.factor()))
        .collect();

    let default_idx = ActivityLevel::ALL
        .iter()
        .position(|l| *l == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_height(default: f64) -> Result<f64> {
    prompt_number("Height (cm)", default)
}

pub fn prompt_weight(default: f64) -> Result<f64> {
    prompt_number("Current weight (kg)", default)
}

pub fn prompt_age(default: u32) -> Result<u32> {
    prompt_number("Age (years)", default)
}

pub fn prompt_target_weight(default: f64) -> Result<f64> {
    prompt_number("Target weight (kg)", default)
}

pub fn prompt_target_days(default: u32) -> Result<u32> {
    prompt_number("Days to reach the target", default)
}

/// Collect every plan field, offering `defaults` as the pre-filled answers.
///
/// The returned input is validated.
pub fn collect_plan_input(defaults: &PlanInput) -> Result<PlanInput> {
    println!("--- Profile ---");
    let gender = prompt_gender(defaults.gender)?;
    let height_cm = prompt_height(defaults.height_cm)?;
    let weight_kg = prompt_weight(defaults.weight_kg)?;
    let age_years = prompt_age(defaults.age_years)?;

    println!();
    println!("--- Goal ---");
    let target_weight_kg = prompt_target_weight(defaults.target_weight_kg)?;
    let target_days = prompt_target_days(defaults.target_days)?;
    let activity = prompt_activity(defaults.activity)?;

    PlanInput::new(
        weight_kg,
        height_cm,
        age_years,
        gender,
        target_weight_kg,
        target_days,
        activity,
    )
}
