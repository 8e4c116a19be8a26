//! Pure transformations over RDS parameters
//!
//! Filtering of parameters the operator never set, column stripping for
//! compact display, and projection into table rows. No I/O happens here.

use serde::Serialize;

/// Sources that mark a parameter as not set by the operator
pub const NON_USER_SOURCES: [&str; 2] = ["system", "engine-default"];

/// A single table cell. `None` is an absent value, distinct from an empty string.
pub type Cell = Option<String>;

/// Parameter as returned by DescribeDBParameters / DescribeDBClusterParameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "ParameterName")]
    pub name: String,
    #[serde(rename = "ParameterValue", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "ApplyMethod", skip_serializing_if = "Option::is_none")]
    pub apply_method: Option<String>,
    #[serde(rename = "ApplyType", skip_serializing_if = "Option::is_none")]
    pub apply_type: Option<String>,
    #[serde(rename = "AllowedValues", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
    #[serde(rename = "DataType", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "IsModifiable", skip_serializing_if = "Option::is_none")]
    pub is_modifiable: Option<bool>,
}

impl Parameter {
    /// Whether the operator set this parameter explicitly
    pub fn is_user_set(&self) -> bool {
        match self.source.as_deref() {
            Some(source) => !NON_USER_SOURCES.contains(&source),
            None => true,
        }
    }
}

/// Keep only the parameters whose source is neither `system` nor `engine-default`
pub fn filter_user_parameters(params: Vec<Parameter>) -> Vec<Parameter> {
    params.into_iter().filter(Parameter::is_user_set).collect()
}

/// Drop the descriptive columns unless `detail` is requested
///
/// Clears `Description`, `DataType`, `IsModifiable`, `AllowedValues` and `Source`.
/// Only meant for display: diffing and templating work on the full records.
pub fn strip_detail_columns(params: Vec<Parameter>, detail: bool) -> Vec<Parameter> {
    if detail {
        return params;
    }

    params
        .into_iter()
        .map(|param| Parameter {
            description: None,
            data_type: None,
            is_modifiable: None,
            allowed_values: None,
            source: None,
            ..param
        })
        .collect()
}

/// Column headers for the parameter table
pub fn parameter_headers(detail: bool) -> Vec<String> {
    let mut headers = vec!["ParameterName", "ParameterValue", "ApplyMethod", "ApplyType"];
    if detail {
        headers.extend(["AllowedValues", "DataType", "Source"]);
    }
    headers.into_iter().map(String::from).collect()
}

/// Project parameters into fixed-column rows
///
/// Returns the rows together with the headers they follow, in the order
/// `ParameterName, ParameterValue, ApplyMethod, ApplyType` and, in detail
/// mode, `AllowedValues, DataType, Source`.
pub fn project_parameter_rows(
    params: &[Parameter],
    detail: bool,
) -> (Vec<Vec<Cell>>, Vec<String>) {
    let rows = params
        .iter()
        .map(|param| {
            let mut row = vec![
                Some(param.name.clone()),
                param.value.clone(),
                param.apply_method.clone(),
                param.apply_type.clone(),
            ];
            if detail {
                row.push(param.allowed_values.clone());
                row.push(param.data_type.clone());
                row.push(param.source.clone());
            }
            row
        })
        .collect();

    (rows, parameter_headers(detail))
}
