use crate::prelude::{eprintln, print, println, *};
use crate::rds::{self, ResourceClient};
use crate::table::render_table;
use rdspg_core::mode::Mode;
use rdspg_core::parameters::{
    filter_user_parameters, project_parameter_rows, strip_detail_columns, Parameter,
};

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Name of the parameter group
    #[arg(value_name = "PARAMETER_GROUP")]
    pub parameter_group: String,

    /// Use DB cluster parameter groups
    #[arg(long)]
    pub cluster: bool,

    /// Include parameters whose source is `system` or `engine-default`
    #[arg(long)]
    pub all_params: bool,

    /// Show AllowedValues, DataType and Source columns
    #[arg(long)]
    pub detail: bool,

    /// Omit the table header
    #[arg(long)]
    pub no_header: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch the parameters of one group, ready for display
pub async fn get_parameters_data(
    client: &dyn ResourceClient,
    parameter_group: &str,
    all_params: bool,
    detail: bool,
) -> Result<Vec<Parameter>> {
    let mut params = client.list_parameters(parameter_group).await?;

    if !all_params {
        params = filter_user_parameters(params);
    }

    Ok(strip_detail_columns(params, detail))
}

pub fn format_parameters(params: &[Parameter], detail: bool, no_header: bool) -> String {
    let (rows, headers) = project_parameter_rows(params, detail);
    render_table(&headers, &rows, no_header)
}

pub async fn run(options: GetOptions, global: crate::Global) -> Result<()> {
    let mode = Mode::from_cluster_flag(options.cluster);

    if global.verbose {
        eprintln!("Fetching parameters of {}...", options.parameter_group);
    }

    let client = rds::connect(mode, &global).await?;
    let params = get_parameters_data(
        client.as_ref(),
        &options.parameter_group,
        options.all_params,
        options.detail,
    )
    .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        print!(
            "{}",
            format_parameters(&params, options.detail, options.no_header)
        );
    }

    Ok(())
}
