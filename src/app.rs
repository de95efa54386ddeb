use crate::cli::Cli;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::fetch;
use crate::output;

pub async fn run(cli: Cli) -> AppResult<()> {
    let ctx = AppContext::bootstrap();

    match fetch::fetch_profile(&ctx.client, &cli.username).await {
        Ok(record) => output::emit_profile(&record),
        Err(err) => output::emit_error(&err),
    }
}
