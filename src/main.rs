use clap::Parser;
use clap::error::ErrorKind;

#[tokio::main]
async fn main() {
    let cli = match igprofile::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(_) => {
            if let Err(err) = igprofile::output::emit_usage() {
                eprintln!("error: {err}");
            }
            std::process::exit(1);
        }
    };

    if let Err(err) = igprofile::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
