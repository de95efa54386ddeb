use serde::Serialize;

use crate::error::AppResult;

/// Prints `value` as one compact JSON line.
pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    let payload = serde_json::to_string(value)?;
    println!("{payload}");
    Ok(())
}
