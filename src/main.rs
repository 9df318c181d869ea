use clap::Parser;
use tracing::{debug, info};

use weight_goal_planner_rs::cli::{Cli, Command, PlanArgs};
use weight_goal_planner_rs::error::Result;
use weight_goal_planner_rs::export::{load_request, plan_to_json, write_trajectory_csv};
use weight_goal_planner_rs::interface::{collect_plan_input, display_activity_levels, display_plan};
use weight_goal_planner_rs::models::{PlanInput, PlanRequest};
use weight_goal_planner_rs::planner::compute_plan;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&args),
        Command::Activities => {
            display_activity_levels();
            Ok(())
        }
    }
}

/// Resolve the input, compute the plan and report it.
fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let input = resolve_input(args)?;
    debug!(?input, "computing plan");

    let result = compute_plan(&input)?;
    info!(safety = ?result.safety, intake = result.recommended_intake, "plan computed");

    if args.json {
        println!("{}", plan_to_json(&input, &result)?);
    } else {
        display_plan(&input, &result);
    }

    if let Some(path) = &args.csv {
        write_trajectory_csv(&result, path)?;
        debug!(path = %path.display(), rows = result.trajectory.len(), "wrote trajectory csv");
        if !args.json {
            println!("Trajectory written to {}", path.display());
        }
    }

    Ok(())
}

/// File values, then flags, then (optionally) interactive prompts.
fn resolve_input(args: &PlanArgs) -> Result<PlanInput> {
    let base = match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "loading plan request");
            load_request(path)?
        }
        None => PlanRequest::default(),
    };

    let request = base.merge(args.to_request());

    if args.interactive {
        debug!("collecting input interactively");
        return collect_plan_input(&request.prompt_defaults());
    }

    PlanInput::try_from(request)
}
