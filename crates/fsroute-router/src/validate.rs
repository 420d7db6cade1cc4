/// Structural validation of compiled patterns (strict mode)
///
/// Checks run on the compiled router string, in a fixed order:
///
/// 1. A bare `*` segment must not follow a `**:name` segment
/// 2. At most one `**:name` marker
/// 3. A single `**:name` marker must be in the last segment

use crate::error::ValidationError;

const CATCH_ALL_MARKER: &str = "**:";

type Check = fn(&str) -> Option<ValidationError>;

const CHECKS: [Check; 3] = [
    wildcard_after_catch_all,
    multiple_catch_all,
    catch_all_not_last,
];

/// Validates a compiled pattern, failing on the first violation
///
/// # Examples
///
/// ```
/// use fsroute_router::{validate, ValidationError};
///
/// assert!(validate(r"/api/users/:id(\d+)/posts/**:slug").is_ok());
/// assert_eq!(validate("/api/**:path/users"), Err(ValidationError::CatchAllNotLast));
/// assert_eq!(validate("/api/**:path/*"), Err(ValidationError::WildcardAfterCatchAll));
/// ```
pub fn validate(compiled: &str) -> Result<(), ValidationError> {
    match CHECKS.iter().find_map(|check| check(compiled)) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collects every violation of a compiled pattern, in check order
pub fn violations(compiled: &str) -> Vec<ValidationError> {
    CHECKS.iter().filter_map(|check| check(compiled)).collect()
}

fn wildcard_after_catch_all(compiled: &str) -> Option<ValidationError> {
    let segments: Vec<&str> = compiled.split('/').collect();
    let wildcard = segments.iter().position(|s| *s == "*")?;
    let catch_all = segments
        .iter()
        .position(|s| s.starts_with(CATCH_ALL_MARKER))?;

    (wildcard > catch_all).then_some(ValidationError::WildcardAfterCatchAll)
}

fn multiple_catch_all(compiled: &str) -> Option<ValidationError> {
    (catch_all_count(compiled) > 1).then_some(ValidationError::MultipleCatchAll)
}

fn catch_all_not_last(compiled: &str) -> Option<ValidationError> {
    if catch_all_count(compiled) != 1 {
        return None;
    }

    let last = compiled.rsplit('/').next().unwrap_or_default();
    (!last.is_empty() && !last.starts_with(CATCH_ALL_MARKER))
        .then_some(ValidationError::CatchAllNotLast)
}

fn catch_all_count(compiled: &str) -> usize {
    compiled.matches(CATCH_ALL_MARKER).count()
}
