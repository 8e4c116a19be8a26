//! Parameter group and tag models
//!
//! Instance and cluster parameter groups carry the same data under different
//! field names, so they share one model and the field names come from [`Mode`].

use crate::mode::Mode;
use crate::parameters::Cell;
use serde::Serialize;
use serde_json::{Map, Value};

/// A DB parameter group or DB cluster parameter group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterGroup {
    pub name: String,
    pub family: Option<String>,
    pub description: Option<String>,
    pub arn: Option<String>,
}

impl ParameterGroup {
    /// Render the group as a record keyed by the RDS field names of `mode`
    ///
    /// Absent fields are omitted, like the API omits them.
    pub fn to_record(&self, mode: Mode) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            mode.group_name_field().to_string(),
            Value::String(self.name.clone()),
        );
        if let Some(family) = &self.family {
            record.insert(
                Mode::GROUP_FAMILY_FIELD.to_string(),
                Value::String(family.clone()),
            );
        }
        if let Some(description) = &self.description {
            record.insert(
                "Description".to_string(),
                Value::String(description.clone()),
            );
        }
        if let Some(arn) = &self.arn {
            record.insert(mode.group_arn_field().to_string(), Value::String(arn.clone()));
        }
        record
    }
}

/// Resource tag as returned by ListTagsForResource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Remove identifying ARN fields for compact listings
pub fn strip_group_columns(groups: Vec<ParameterGroup>) -> Vec<ParameterGroup> {
    groups
        .into_iter()
        .map(|group| ParameterGroup { arn: None, ..group })
        .collect()
}

/// Project parameter groups into rows with mode-flavored headers
///
/// The ARN column is only present in detail mode.
pub fn project_group_rows(
    groups: &[ParameterGroup],
    mode: Mode,
    detail: bool,
) -> (Vec<Vec<Cell>>, Vec<String>) {
    let mut headers = vec![
        mode.group_name_field().to_string(),
        Mode::GROUP_FAMILY_FIELD.to_string(),
        "Description".to_string(),
    ];
    if detail {
        headers.push(mode.group_arn_field().to_string());
    }

    let rows = groups
        .iter()
        .map(|group| {
            let mut row = vec![
                Some(group.name.clone()),
                group.family.clone(),
                group.description.clone(),
            ];
            if detail {
                row.push(group.arn.clone());
            }
            row
        })
        .collect();

    (rows, headers)
}
