use crate::prelude::{eprintln, print, println, *};
use crate::rds::{self, ResourceClient};
use crate::table::render_table;
use rdspg_core::mapping::{generate_mapping, MappingRow};
use rdspg_core::mode::Mode;

#[derive(Debug, clap::Args, Clone)]
pub struct MappingOptions {
    /// Use DB cluster parameter groups and DB clusters
    #[arg(long)]
    pub cluster: bool,

    /// Omit the table header
    #[arg(long)]
    pub no_header: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch parameter groups and databases and associate them
pub async fn mapping_data(client: &dyn ResourceClient) -> Result<Vec<MappingRow>> {
    let groups = client.list_parameter_groups().await?;
    let databases = client.list_databases().await?;

    log::debug!(
        "Mapping {} databases onto {} parameter groups",
        databases.len(),
        groups.len()
    );

    generate_mapping(&groups, &databases).context("Inconsistent RDS listing")
}

pub fn format_mapping(rows: &[MappingRow], mode: Mode, no_header: bool) -> String {
    let cells: Vec<Vec<Option<String>>> = rows
        .iter()
        .map(|row| {
            vec![
                Some(row.parameter_group.clone()),
                Some(row.databases.clone()),
            ]
        })
        .collect();

    render_table(
        &["ParameterGroup", mode.databases_header()],
        &cells,
        no_header,
    )
}

pub async fn run(options: MappingOptions, global: crate::Global) -> Result<()> {
    let mode = Mode::from_cluster_flag(options.cluster);

    if global.verbose {
        eprintln!("Mapping {:?} parameter groups...", mode);
    }

    let client = rds::connect(mode, &global).await?;
    let rows = mapping_data(client.as_ref()).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_mapping(&rows, mode, options.no_header));
    }

    Ok(())
}
