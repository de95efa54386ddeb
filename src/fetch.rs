use crate::api::ProfileLookup;
use crate::api::models::ProfileRecord;
use crate::error::{AppError, AppResult, LookupError};

pub fn normalize_username(raw: &str) -> AppResult<String> {
    let username = raw.trim().trim_start_matches('@').trim();
    if username.is_empty() {
        return Err(AppError::InvalidInput);
    }
    Ok(username.to_string())
}

pub async fn fetch_profile<L: ProfileLookup>(
    lookup: &L,
    raw_username: &str,
) -> AppResult<ProfileRecord> {
    let username = normalize_username(raw_username)?;

    match lookup.profile(&username).await {
        Ok(source) => Ok(source.into_record()),
        Err(LookupError::NotFound) => Err(AppError::NotFound(username)),
        Err(LookupError::Connection(_)) => Err(AppError::Connection),
        Err(LookupError::PrivateNotFollowed) => {
            // Counts and text stay hidden on private profiles; the public
            // fields may still come back from a second lookup.
            match lookup.public_profile(&username).await {
                Ok(public) => Ok(ProfileRecord::from_public(public)),
                Err(_) => Err(AppError::AccessDenied(username)),
            }
        }
        Err(LookupError::Other(message)) => Err(AppError::Unknown(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_at_sign() {
        assert_eq!(normalize_username("@zuck").unwrap(), "zuck");
    }

    #[test]
    fn strips_surrounding_whitespace() {
        assert_eq!(normalize_username("  zuck  ").unwrap(), "zuck");
    }

    #[test]
    fn strips_both_at_sign_and_whitespace() {
        assert_eq!(normalize_username("  @@zuck  ").unwrap(), "zuck");
        assert_eq!(normalize_username("@ zuck").unwrap(), "zuck");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            normalize_username(""),
            Err(AppError::InvalidInput)
        ));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert!(matches!(
            normalize_username("   "),
            Err(AppError::InvalidInput)
        ));
    }

    #[test]
    fn rejects_at_sign_only_input() {
        assert!(matches!(
            normalize_username(" @ "),
            Err(AppError::InvalidInput)
        ));
    }
}
