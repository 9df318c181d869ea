mod output;
mod request;

pub use output::{plan_to_json, write_trajectory_csv};
pub use request::load_request;
