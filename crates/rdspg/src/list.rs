use crate::prelude::{eprintln, print, println, *};
use crate::rds::{self, ResourceClient};
use crate::table::render_table;
use rdspg_core::groups::{project_group_rows, strip_group_columns, ParameterGroup};
use rdspg_core::mode::Mode;
use serde_json::{Map, Value};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Use DB cluster parameter groups
    #[arg(long)]
    pub cluster: bool,

    /// Include the parameter group ARN
    #[arg(long)]
    pub detail: bool,

    /// Omit the table header
    #[arg(long)]
    pub no_header: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch all parameter groups, without ARNs unless `detail` is set
pub async fn list_groups_data(
    client: &dyn ResourceClient,
    detail: bool,
) -> Result<Vec<ParameterGroup>> {
    let groups = client.list_parameter_groups().await?;

    Ok(if detail {
        groups
    } else {
        strip_group_columns(groups)
    })
}

pub fn format_groups(
    groups: &[ParameterGroup],
    mode: Mode,
    detail: bool,
    no_header: bool,
) -> String {
    let (rows, headers) = project_group_rows(groups, mode, detail);
    render_table(&headers, &rows, no_header)
}

/// Groups as records keyed by the RDS field names of `mode`
pub fn groups_to_records(groups: &[ParameterGroup], mode: Mode) -> Vec<Map<String, Value>> {
    groups.iter().map(|group| group.to_record(mode)).collect()
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let mode = Mode::from_cluster_flag(options.cluster);

    if global.verbose {
        eprintln!("Listing {:?} parameter groups...", mode);
    }

    let client = rds::connect(mode, &global).await?;
    let groups = list_groups_data(client.as_ref(), options.detail).await?;

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&groups_to_records(&groups, mode))?
        );
    } else {
        print!(
            "{}",
            format_groups(&groups, mode, options.detail, options.no_header)
        );
    }

    Ok(())
}
