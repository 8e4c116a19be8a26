use crate::prelude::*;
use clap::Parser;

mod diff;
mod error;
mod get;
mod list;
mod mapping;
mod prelude;
mod rds;
mod render;
mod table;
mod terraform;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Extract and simplify information of existing RDS parameter groups"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// AWS Region
    #[clap(long, env = "AWS_REGION", global = true)]
    region: Option<String>,
    /// AWS Profile
    #[clap(long, env = "AWS_PROFILE", global = true)]
    profile: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "RDSPG_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Show which databases use each parameter group
    Mapping(crate::mapping::MappingOptions),

    /// List parameter groups
    List(crate::list::ListOptions),

    /// Show the parameters of a parameter group
    Get(crate::get::GetOptions),

    /// Compare the parameters of two parameter groups
    Diff(crate::diff::DiffOptions),

    /// Print a Terraform resource for a parameter group
    Terraform(crate::terraform::TerraformOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Mapping(options) => crate::mapping::run(options, app.global).await,
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Get(options) => crate::get::run(options, app.global).await,
        SubCommands::Diff(options) => crate::diff::run(options, app.global).await,
        SubCommands::Terraform(options) => crate::terraform::run(options, app.global).await,
    }
}
