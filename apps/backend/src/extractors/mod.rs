pub mod caller;
pub mod game_name;

pub use caller::Caller;
pub use game_name::GameName;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Longest game or player name accepted, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Trim surrounding whitespace and enforce `1..=MAX_NAME_LEN` characters.
/// Case is preserved.
pub(crate) fn clean_name(
    raw: Option<&str>,
    code: ErrorCode,
    what: &str,
) -> Result<String, AppError> {
    let name = raw.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::invalid(code, format!("{what} name is required")));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::invalid(
            code,
            format!("{what} name must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(name.to_string())
}
