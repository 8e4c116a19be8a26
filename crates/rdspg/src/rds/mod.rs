//! Access to the RDS management API
//!
//! Commands only see the [`ResourceClient`] trait. The instance and cluster
//! flavors implement it with their own RDS calls and field names, and every
//! listing follows the `Marker` token until the service stops returning one.

use crate::prelude::*;
use async_trait::async_trait;
use aws_sdk_rds::error::DisplayErrorContext;
use rdspg_core::groups::{ParameterGroup, Tag};
use rdspg_core::mapping::Database;
use rdspg_core::mode::Mode;
use rdspg_core::parameters::Parameter;
use std::future::Future;

mod cluster;
mod instance;

pub use cluster::ClusterClient;
pub use instance::InstanceClient;

#[cfg(test)]
pub mod fake;

/// Operations every command needs from RDS, independent of instance vs cluster
#[async_trait]
pub trait ResourceClient: Send + Sync {
    fn mode(&self) -> Mode;

    async fn list_parameter_groups(&self) -> Result<Vec<ParameterGroup>>;

    async fn list_parameters(&self, group: &str) -> Result<Vec<Parameter>>;

    /// Databases with the name of the parameter group currently attached
    async fn list_databases(&self) -> Result<Vec<Database>>;

    async fn get_group_info(&self, group: &str) -> Result<ParameterGroup>;

    async fn list_tags(&self, arn: &str) -> Result<Vec<Tag>>;
}

/// Load the AWS configuration and build the client for `mode`
pub async fn connect(mode: Mode, global: &crate::Global) -> Result<Box<dyn ResourceClient>> {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &global.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(profile) = &global.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;
    log::debug!(
        "Using RDS in region {:?} for {:?} parameter groups",
        sdk_config.region(),
        mode
    );

    let client = aws_sdk_rds::Client::new(&sdk_config);

    Ok(match mode {
        Mode::Instance => Box::new(InstanceClient::new(client)),
        Mode::Cluster => Box::new(ClusterClient::new(client)),
    })
}

/// Fetch pages until no continuation marker is returned
///
/// `fetch` receives the marker of the previous page (`None` for the first
/// one) and returns the page items together with the next marker.
pub(crate) async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<String>)>>,
{
    let mut out = Vec::new();
    let mut marker = None;

    loop {
        let (items, next) = fetch(marker).await?;
        out.extend(items);

        match next {
            Some(next) if !next.is_empty() => marker = Some(next),
            _ => break,
        }
    }

    Ok(out)
}

/// Wrap an SDK error with the name of the RDS call that failed
pub(crate) fn call_error<E>(call: &'static str, err: E) -> color_eyre::eyre::Report
where
    E: std::error::Error,
{
    eyre!("{} failed: {}", call, DisplayErrorContext(err))
}

/// Shared by both flavors: tags live on the resource ARN
pub(crate) async fn list_tags_for_resource(
    client: &aws_sdk_rds::Client,
    arn: &str,
) -> Result<Vec<Tag>> {
    let resp = client
        .list_tags_for_resource()
        .resource_name(arn)
        .send()
        .await
        .map_err(|e| call_error("ListTagsForResource", e))?;

    Ok(resp
        .tag_list
        .unwrap_or_default()
        .into_iter()
        .map(|tag| Tag {
            key: tag.key().unwrap_or_default().to_string(),
            value: tag.value().unwrap_or_default().to_string(),
        })
        .collect())
}

pub(crate) fn parameter_from_sdk(
    call: &'static str,
    param: aws_sdk_rds::types::Parameter,
) -> Result<Parameter> {
    let name = param
        .parameter_name()
        .ok_or(Error::MissingField {
            call,
            field: "ParameterName",
        })?
        .to_string();

    Ok(Parameter {
        name,
        value: param.parameter_value().map(String::from),
        apply_method: param.apply_method().map(|m| m.as_str().to_string()),
        apply_type: param.apply_type().map(String::from),
        allowed_values: param.allowed_values().map(String::from),
        data_type: param.data_type().map(String::from),
        source: param.source().map(String::from),
        description: param.description().map(String::from),
        is_modifiable: param.is_modifiable(),
    })
}
