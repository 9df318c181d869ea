pub mod prompts;
pub mod render;

pub use prompts::{
    collect_plan_input, prompt_activity, prompt_age, prompt_gender, prompt_height,
    prompt_target_days, prompt_target_weight, prompt_weight,
};
pub use render::{
    display_activity_levels, display_plan, render_banner, render_chart, render_metrics,
    sample_days,
};
