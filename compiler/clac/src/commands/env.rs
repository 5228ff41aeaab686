//! Session policy from environment variables.

use cla_eval::SessionConfig;

/// Iteration budget for one `while`: a number, or `none` for no limit.
pub const LOOP_LIMIT_VAR: &str = "CLA_MAX_LOOP_ITERATIONS";

/// Whether script lines are echoed as `Executing: <line>`.
pub const ECHO_VAR: &str = "CLA_ECHO";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvConfigError {
    #[error("{var} must be a non-negative integer or 'none', found '{value}'")]
    LoopLimit { var: &'static str, value: String },

    #[error("{var} must be one of 1, 0, true, false, on, off, found '{value}'")]
    Flag { var: &'static str, value: String },
}

/// Build the session config from the process environment.
pub fn config_from_env() -> Result<SessionConfig, EnvConfigError> {
    config_from_vars(|name| std::env::var(name).ok())
}

/// Build the session config from a variable lookup. Unset variables keep the
/// defaults.
pub fn config_from_vars(
    get: impl Fn(&str) -> Option<String>,
) -> Result<SessionConfig, EnvConfigError> {
    let mut config = SessionConfig::default();

    if let Some(value) = get(LOOP_LIMIT_VAR) {
        config.max_loop_iterations = parse_loop_limit(&value).ok_or(EnvConfigError::LoopLimit {
            var: LOOP_LIMIT_VAR,
            value,
        })?;
    }
    if let Some(value) = get(ECHO_VAR) {
        config.echo_lines = parse_flag(&value).ok_or(EnvConfigError::Flag {
            var: ECHO_VAR,
            value,
        })?;
    }
    Ok(config)
}

fn parse_loop_limit(value: &str) -> Option<Option<u64>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    value.parse::<u64>().ok().map(Some)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}
