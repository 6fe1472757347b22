use crate::prelude::*;
use clap::Parser;

mod error;
mod extract;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Extract scheduled cases from court causelist HTML pages"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "CAUSELIST_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Extract case records from causelist files on disk
    Extract(crate::extract::ExtractOptions),

    /// Run the causelist upload server
    Serve(crate::serve::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Extract(options) => crate::extract::run(options, app.global).await,
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
