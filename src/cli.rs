use clap::Parser;

pub const USAGE: &str = "Usage: igprofile <username>";

#[derive(Debug, Parser)]
#[command(
    name = "igprofile",
    version,
    about = "Instagram profile lookup command line interface"
)]
pub struct Cli {
    #[arg(help = "Instagram username, with or without a leading @")]
    pub username: String,
}
