use super::{
    call_error, collect_pages, list_tags_for_resource, parameter_from_sdk, ResourceClient,
};
use crate::prelude::*;
use async_trait::async_trait;
use aws_sdk_rds::types::{DbInstance, DbParameterGroup};
use color_eyre::eyre::Report;
use rdspg_core::groups::{ParameterGroup, Tag};
use rdspg_core::mapping::Database;
use rdspg_core::mode::Mode;
use rdspg_core::parameters::Parameter;

/// DB parameter groups attached to DB instances
#[derive(Debug, Clone)]
pub struct InstanceClient {
    client: aws_sdk_rds::Client,
}

impl InstanceClient {
    pub fn new(client: aws_sdk_rds::Client) -> Self {
        Self { client }
    }
}

fn group_from_sdk(group: DbParameterGroup) -> Result<ParameterGroup> {
    let name = group
        .db_parameter_group_name()
        .ok_or(Error::MissingField {
            call: "DescribeDBParameterGroups",
            field: "DBParameterGroupName",
        })?
        .to_string();

    Ok(ParameterGroup {
        name,
        family: group.db_parameter_group_family().map(String::from),
        description: group.description().map(String::from),
        arn: group.db_parameter_group_arn().map(String::from),
    })
}

fn database_from_sdk(instance: DbInstance) -> Result<Database> {
    let identifier = instance
        .db_instance_identifier()
        .ok_or(Error::MissingField {
            call: "DescribeDBInstances",
            field: "DBInstanceIdentifier",
        })?
        .to_string();

    // An instance has exactly one DB parameter group attached
    let parameter_group = instance
        .db_parameter_groups
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|status| status.db_parameter_group_name)
        .ok_or(Error::MissingField {
            call: "DescribeDBInstances",
            field: "DBParameterGroupName",
        })?;

    Ok(Database {
        identifier,
        parameter_group,
    })
}

#[async_trait]
impl ResourceClient for InstanceClient {
    fn mode(&self) -> Mode {
        Mode::Instance
    }

    async fn list_parameter_groups(&self) -> Result<Vec<ParameterGroup>> {
        let client = &self.client;

        let groups = collect_pages(|marker| async move {
            let resp = client
                .describe_db_parameter_groups()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| call_error("DescribeDBParameterGroups", e))?;
            Ok::<_, Report>((resp.db_parameter_groups.unwrap_or_default(), resp.marker))
        })
        .await?;

        groups.into_iter().map(group_from_sdk).collect()
    }

    async fn list_parameters(&self, group: &str) -> Result<Vec<Parameter>> {
        let client = &self.client;

        let params = collect_pages(|marker| async move {
            let resp = client
                .describe_db_parameters()
                .db_parameter_group_name(group)
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| call_error("DescribeDBParameters", e))?;
            Ok::<_, Report>((resp.parameters.unwrap_or_default(), resp.marker))
        })
        .await?;

        log::debug!("Fetched {} parameters from {}", params.len(), group);

        params
            .into_iter()
            .map(|p| parameter_from_sdk("DescribeDBParameters", p))
            .collect()
    }

    async fn list_databases(&self) -> Result<Vec<Database>> {
        let client = &self.client;

        let instances = collect_pages(|marker| async move {
            let resp = client
                .describe_db_instances()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| call_error("DescribeDBInstances", e))?;
            Ok::<_, Report>((resp.db_instances.unwrap_or_default(), resp.marker))
        })
        .await?;

        instances.into_iter().map(database_from_sdk).collect()
    }

    async fn get_group_info(&self, group: &str) -> Result<ParameterGroup> {
        let resp = self
            .client
            .describe_db_parameter_groups()
            .db_parameter_group_name(group)
            .send()
            .await
            .map_err(|e| call_error("DescribeDBParameterGroups", e))?;

        let info = resp
            .db_parameter_groups
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
