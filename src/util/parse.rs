use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a stored Discord snowflake.
///
/// Same as [`parse_u64_from_string`], but 0 is rejected since serenity's id types
/// panic on it.
///
/// # Returns
/// - `Ok(u64)` - A non-zero id
/// - `Err(AppError::InternalErr(ParseStringId))` - Not a u64
/// - `Err(AppError::InternalErr(ZeroId))` - The value was 0
pub fn parse_snowflake_from_string(value: String) -> Result<u64, AppError> {
    match parse_u64_from_string(value.clone())? {
        0 => Err(InternalError::ZeroId(value).into()),
        id => Ok(id),
    }
}

/// Returns the first `http://` or `https://` token in `text`.
///
/// The token runs until the next whitespace character.
pub fn first_url(text: &str) -> Option<&str> {
    text.split_whitespace().find_map(|token| {
        ["https://", "http://"]
            .iter()
            .filter_map(|scheme| token.find(scheme))
            .min()
            .map(|start| &token[start..])
    })
}
