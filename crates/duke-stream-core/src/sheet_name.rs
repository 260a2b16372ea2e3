//! Worksheet name rules

use crate::error::{Error, Result};
use crate::MAX_SHEET_NAME_LEN;

const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// Check that `name` is usable as a worksheet name
///
/// Names must be non-empty, at most 31 characters long and free of
/// `: \ / ? * [ ]`.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }

    Ok(())
}

/// Check `name` against the rules and against the names already in use
///
/// Names compare case-insensitively, so `Data` and `DATA` collide.
pub fn validate_new_sheet_name<'a, I>(name: &str, existing: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    validate_sheet_name(name)?;

    let name_lower = name.to_lowercase();
    if existing
        .into_iter()
        .any(|other| other.to_lowercase() == name_lower)
    {
        return Err(Error::DuplicateSheetName(name.into()));
    }

    Ok(())
}
