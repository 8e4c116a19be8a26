use super::{
    call_error, collect_pages, list_tags_for_resource, parameter_from_sdk, ResourceClient,
};
use crate::prelude::*;
use async_trait::async_trait;
use aws_sdk_rds::types::{DbCluster, DbClusterParameterGroup};
use color_eyre::eyre::Report;
use rdspg_core::groups::{ParameterGroup, Tag};
use rdspg_core::mapping::Database;
use rdspg_core::mode::Mode;
use rdspg_core::parameters::Parameter;

/// DB cluster parameter groups attached to DB clusters
#[derive(Debug, Clone)]
pub struct ClusterClient {
    client: aws_sdk_rds::Client,
}

impl ClusterClient {
    pub fn new(client: aws_sdk_rds::Client) -> Self {
        Self { client }
    }
}

fn group_from_sdk(group: DbClusterParameterGroup) -> Result<ParameterGroup> {
    let name = group
        .db_cluster_parameter_group_name()
        .ok_or(Error::MissingField {
            call: "DescribeDBClusterParameterGroups",
            field: "DBClusterParameterGroupName",
        })?
        .to_string();

    Ok(ParameterGroup {
        name,
        family: group.db_parameter_group_family().map(String::from),
        description: group.description().map(String::from),
        arn: group.db_cluster_parameter_group_arn().map(String::from),
    })
}

fn database_from_sdk(cluster: DbCluster) -> Result<Database> {
    let identifier = cluster
        .db_cluster_identifier()
        .ok_or(Error::MissingField {
            call: "DescribeDBClusters",
            field: "DBClusterIdentifier",
        })?
        .to_string();

    let parameter_group = cluster
        .db_cluster_parameter_group()
        .ok_or(Error::MissingField {
            call: "DescribeDBClusters",
            field: "DBClusterParameterGroup",
        })?
        .to_string();

    Ok(Database {
        identifier,
        parameter_group,
    })
}

#[async_trait]
impl ResourceClient for ClusterClient {
    fn mode(&self) -> Mode {
        Mode::Cluster
    }

    async fn list_parameter_groups(&self) -> Result<Vec<ParameterGroup>> {
        let client = &self.client;

        let groups = collect_pages(|marker| async move {
            let resp = client
                .describe_db_cluster_parameter_groups()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| call_error("DescribeDBClusterParameterGroups", e))?;
            Ok::<_, Report>((
                resp.db_cluster_parameter_groups.unwrap_or_default(),
                resp.marker,
            ))
        })
        .await?;

        groups.into_iter().map(group_from_sdk).collect()
    }

    async fn list_parameters(&self, group: &str) -> Result<Vec<Parameter>> {
        let client = &self.client;

        let params = collect_pages(|marker| async move {
            let resp = client
                .describe_db_cluster_parameters()
                .db_cluster_parameter_group_name(group)
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| call_error("DescribeDBClusterParameters", e))?;
            Ok::<_, Report>((resp.parameters.unwrap_or_default(), resp.marker))
        })
        .await?;

        log::debug!("Fetched {} cluster parameters from {}", params.len(), group);

        params
            .into_iter()
            .map(|p| parameter_from_sdk("DescribeDBClusterParameters", p))
            .collect()
    }

    async fn list_databases(&self) -> Result<Vec<Database>> {
        let client = &self.client;

        let clusters = collect_pages(|marker| async move {
            let resp = client
                .describe_db_clusters()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| call_error("DescribeDBClusters", e))?;
            Ok::<_, Report>((resp.db_clusters.unwrap_or_default(), resp.marker))
        })
        .await?;

        clusters.into_iter().map(database_from_sdk).collect()
    }

    async fn get_group_info(&self, group: &str) -> Result<ParameterGroup> {
        let resp = self
            .client
            .describe_db_cluster_parameter_groups()
            .db_cluster_parameter_group_name(group)
            .send()
            .await
            .map_err(|e| call_error("DescribeDBClusterParameterGroups", e))?;

        let info = resp
            .db_cluster_parameter_groups
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| Error::GroupNotFound(group.to_string()))?;

        group_from_sdk(info)
    }

    async fn list_tags(&self, arn: &str) -> Result<Vec<Tag>> {
        list_tags_for_resource(&self.client, arn).await
    }
}
