use crate::prelude::{eprintln, println, *};
use crate::rds::{self, ResourceClient};
use crate::render::TerraformRenderer;
use rdspg_core::mode::Mode;
use rdspg_core::terraform::{build_template_context, TerraformDocument};

#[derive(Debug, clap::Args, Clone)]
pub struct TerraformOptions {
    /// Name of the parameter group
    #[arg(value_name = "PARAMETER_GROUP")]
    pub parameter_group: String,

    /// Use DB cluster parameter groups
    #[arg(long)]
    pub cluster: bool,
}

/// Gather parameters, group information and tags for the Terraform document
pub async fn terraform_data(
    client: &dyn ResourceClient,
    parameter_group: &str,
) -> Result<TerraformDocument> {
    let params = client.list_parameters(parameter_group).await?;
    let info = client.get_group_info(parameter_group).await?;

    let arn = info
        .arn
        .as_deref()
        .ok_or_else(|| Error::MissingArn(parameter_group.to_string()))?;
    let tags = client.list_tags(arn).await?;

    Ok(build_template_context(
        client.mode(),
        parameter_group,
        &info,
        params,
        tags,
    ))
}

pub async fn run(options: TerraformOptions, global: crate::Global) -> Result<()> {
    let mode = Mode::from_cluster_flag(options.cluster);

    if global.verbose {
        eprintln!("Generating Terraform for {}...", options.parameter_group);
    }

    let client = rds::connect(mode, &global).await?;
    let document = terraform_data(client.as_ref(), &options.parameter_group).await?;

    println!("{}", TerraformRenderer::new()?.render(&document)?);

    Ok(())
}
