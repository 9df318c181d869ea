/// Energy content of one kilogram of body mass change, in kcal.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Daily intake below this is classified as critical regardless of BMR.
pub const MIN_SAFE_INTAKE_KCAL: f64 = 1200.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;

/// kcal per centimeter of height.
pub const BMR_HEIGHT_COEFF: f64 = 6.25;

/// kcal subtracted per year of age.
pub const BMR_AGE_COEFF: f64 = 5.0;

pub const MALE_BMR_OFFSET: f64 = 5.0;
pub const FEMALE_BMR_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_FACTOR: f64 = 1.2;
pub const LIGHT_FACTOR: f64 = 1.375;
pub const MODERATE_FACTOR: f64 = 1.55;
pub const HEAVY_FACTOR: f64 = 1.725;
pub const VERY_HEAVY_FACTOR: f64 = 1.9;

/// Longest accepted planning horizon, in days (ten years).
pub const MAX_TARGET_DAYS: u32 = 3650;

/// Tolerance used when matching a raw factor against the enumerated set.
pub const FACTOR_MATCH_EPSILON: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum rows drawn in the text trajectory chart.
pub const CHART_MAX_ROWS: usize = 15;

/// Width in characters of the chart's plotting area.
pub const CHART_WIDTH: usize = 40;

/// Minimum Jaro-Winkler score for an activity-level suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
