pub mod json;

use serde::Serialize;

use crate::api::models::ProfileRecord;
use crate::cli::USAGE;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct ProfileEnvelope<'a> {
    success: bool,
    profile: &'a ProfileRecord,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    success: bool,
    error: &'a str,
}

#[derive(Debug, Serialize)]
struct UsageEnvelope<'a> {
    error: &'a str,
}

pub fn emit_profile(record: &ProfileRecord) -> AppResult<()> {
    json::print(&ProfileEnvelope {
        success: true,
        profile: record,
    })
}

pub fn emit_error(err: &AppError) -> AppResult<()> {
    let message = err.to_string();
    json::print(&ErrorEnvelope {
        success: false,
        error: &message,
    })
}

pub fn emit_usage() -> AppResult<()> {
    json::print(&UsageEnvelope { error: USAGE })
}
