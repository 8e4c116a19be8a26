use crate::prelude::{eprintln, print, println, *};
use crate::rds::{self, ResourceClient};
use crate::table::render_table;
use rdspg_core::diff::{calculate_diff, DiffRow};
use rdspg_core::mode::Mode;
use rdspg_core::parameters::filter_user_parameters;

#[derive(Debug, clap::Args, Clone)]
pub struct DiffOptions {
    /// First parameter group
    #[arg(value_name = "PARAMETER_GROUP_A")]
    pub parameter_group_a: String,

    /// Second parameter group
    #[arg(value_name = "PARAMETER_GROUP_B")]
    pub parameter_group_b: String,

    /// Use DB cluster parameter groups
    #[arg(long)]
    pub cluster: bool,

    /// Also compare parameters whose source is `system` or `engine-default`
    #[arg(long)]
    pub all_params: bool,

    /// Omit the table header
    #[arg(long)]
    pub no_header: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch both groups and compare their parameters
pub async fn diff_data(
    client: &dyn ResourceClient,
    parameter_group_a: &str,
    parameter_group_b: &str,
    all_params: bool,
) -> Result<Vec<DiffRow>> {
    let mut params_a = client.list_parameters(parameter_group_a).await?;
    let mut params_b = client.list_parameters(parameter_group_b).await?;

    if !all_params {
        params_a = filter_user_parameters(params_a);
        params_b = filter_user_parameters(params_b);
    }

    Ok(calculate_diff(&params_a, &params_b))
}

pub fn format_diff(
    rows: &[DiffRow],
    parameter_group_a: &str,
    parameter_group_b: &str,
    no_header: bool,
) -> String {
    let cells: Vec<Vec<Option<String>>> = rows
        .iter()
        .map(|row| vec![Some(row.name.clone()), row.a.to_cell(), row.b.to_cell()])
        .collect();

    render_table(
        &["ParameterName", parameter_group_a, parameter_group_b],
        &cells,
        no_header,
    )
}

pub async fn run(options: DiffOptions, global: crate::Global) -> Result<()> {
    let mode = Mode::from_cluster_flag(options.cluster);

    if global.verbose {
        eprintln!(
            "Comparing {} with {}...",
            options.parameter_group_a, options.parameter_group_b
        );
    }

    let client = rds::connect(mode, &global).await?;
    let rows = diff_data(
        client.as_ref(),
        &options.parameter_group_a,
        &options.parameter_group_b,
        options.all_params,
    )
    .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!(
            "{}",
            format_diff(
                &rows,
                &options.parameter_group_a,
                &options.parameter_group_b,
                options.no_header
            )
        );
    }

    Ok(())
}
