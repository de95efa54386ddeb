pub mod api;
pub mod app;
pub mod cli;
pub mod context;
pub mod error;
pub mod fetch;
pub mod output;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
