//! In-memory [`ResourceClient`] for command tests

use super::ResourceClient;
use crate::prelude::*;
use async_trait::async_trait;
use rdspg_core::groups::{ParameterGroup, Tag};
use rdspg_core::mapping::Database;
use rdspg_core::mode::Mode;
use rdspg_core::parameters::Parameter;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FakeClient {
    pub mode: Mode,
    pub groups: Vec<ParameterGroup>,
    pub parameters: HashMap<String, Vec<Parameter>>,
    pub databases: Vec<Database>,
    pub tags: HashMap<String, Vec<Tag>>,
}

impl FakeClient {
    pub fn with_group(mut self, group: ParameterGroup, params: Vec<Parameter>) -> Self {
        self.parameters.insert(group.name.clone(), params);
        self.groups.push(group);
        self
    }

    pub fn with_database(mut self, identifier: &str, parameter_group: &str) -> Self {
        self.databases.push(Database {
            identifier: identifier.to_string(),
            parameter_group: parameter_group.to_string(),
        });
        self
    }
}

#[async_trait]
impl ResourceClient for FakeClient {
    fn mode(&self) -> Mode {
        self.mode
    }

    async fn list_parameter_groups(&self) -> Result<Vec<ParameterGroup>> {
        Ok(self.groups.clone())
    }

    async fn list_parameters(&self, group: &str) -> Result<Vec<Parameter>> {
        self.parameters
            .get(group)
            .cloned()
            .ok_or_else(|| eyre!("DBParameterGroupNotFound: {}", group))
    }

    async fn list_databases(&self) -> Result<Vec<Database>> {
        Ok(self.databases.clone())
    }

    async fn get_group_info(&self, group: &str) -> Result<ParameterGroup> {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .cloned()
            .ok_or_else(|| Error::GroupNotFound(group.to_string()).into())
    }

    async fn list_tags(&self, arn: &str) -> Result<Vec<Tag>> {
        Ok(self.tags.get(arn).cloned().unwrap_or_default())
    }
}

pub fn group(name: &str) -> ParameterGroup {
    ParameterGroup {
        name: name.to_string(),
        family: Some("postgres15".to_string()),
        description: Some(format!("{name} settings")),
        arn: Some(format!("arn:aws:rds:us-east-1:123456789012:pg:{name}")),
    }
}

pub fn param(name: &str, value: Option<&str>, source: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        value: value.map(String::from),
        apply_method: Some("pending-reboot".to_string()),
        apply_type: Some("static".to_string()),
        allowed_values: Some("1-65535".to_string()),
        data_type: Some("integer".to_string()),
        source: Some(source.to_string()),
        description: Some(format!("{name} description")),
        is_modifiable: Some(true),
    }
}
