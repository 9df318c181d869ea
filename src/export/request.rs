use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::PlanRequest;

/// Load a (possibly partial) plan request from a JSON file.
///
/// Values are not validated here; convert with `PlanInput::try_from`.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<PlanRequest> {
    let content = fs::read_to_string(path)?;
    let request: PlanRequest = serde_json::from_str(&content)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::models::{ActivityLevel, PlanInput};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_request() {
        let json = r#"{"gender": "female", "weight_kg": 58.5, "target_days": 30, "activity": "moderate"}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let request = load_request(file.path()).unwrap();
        assert_eq!(request.weight_kg, Some(58.5));
        assert_eq!(request.height_cm, None);

        let input = PlanInput::try_from(request).unwrap();
        assert_eq!(input.activity, ActivityLevel::Moderate);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"weight": 70}"#).unwrap();

        assert!(matches!(load_request(file.path()), Err(PlanError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_request(&missing), Err(PlanError::Io(_))));
    }
}
