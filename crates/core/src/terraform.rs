//! Data context for the Terraform templates

use crate::groups::{ParameterGroup, Tag};
use crate::mode::Mode;
use crate::parameters::{filter_user_parameters, Parameter};
use serde::Serialize;
use serde_json::{Map, Value};

/// Values handed to the template engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateContext {
    pub parameter_group_name: String,
    /// Terraform identifier for the generated resource
    pub resource_name: String,
    /// Full parameter group record keyed by the RDS field names of the mode
    pub info: Map<String, Value>,
    /// User-set parameters with every column kept
    pub params: Vec<Parameter>,
    pub tags: Vec<Tag>,
}

/// A context together with the template it should be rendered with
#[derive(Debug, Clone, PartialEq)]
pub struct TerraformDocument {
    pub template: &'static str,
    pub context: TemplateContext,
}

/// Turn a parameter group name into a valid Terraform identifier
///
/// Identifiers may contain letters, digits, `_` and `-` but must not start
/// with a digit. Anything else is replaced with `_`.
pub fn terraform_identifier(name: &str) -> String {
    let mut identifier: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        identifier.insert(0, '_');
    }

    identifier
}

/// Assemble the template context for a parameter group
///
/// Only parameters set by the operator end up in the document, whatever the
/// caller passes in.
pub fn build_template_context(
    mode: Mode,
    parameter_group_name: &str,
    info: &ParameterGroup,
    params: Vec<Parameter>,
    tags: Vec<Tag>,
) -> TerraformDocument {
    TerraformDocument {
        template: mode.template_name(),
        context: TemplateContext {
            parameter_group_name: parameter_group_name.to_string(),
            resource_name: terraform_identifier(parameter_group_name),
            info: info.to_record(mode),
            params: filter_user_parameters(params),
            tags,
        },
    }
}
