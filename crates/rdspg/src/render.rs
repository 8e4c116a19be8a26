use crate::prelude::*;
use handlebars::{Handlebars, Helper, HelperResult, Output, RenderContext};
use rdspg_core::mode::Mode;
use rdspg_core::terraform::TerraformDocument;

const INSTANCE_TEMPLATE: &str = include_str!("../templates/terraform_instance.hbs");
const CLUSTER_TEMPLATE: &str = include_str!("../templates/terraform_cluster.hbs");

/// Renders Terraform documents using Handlebars
pub struct TerraformRenderer {
    handlebars: Handlebars<'static>,
}

impl TerraformRenderer {
    /// Create a renderer with the instance and cluster templates registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Output is HCL, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("hcl", Box::new(hcl_helper));
        handlebars.register_helper("is_set", Box::new(is_set_helper));

        handlebars
            .register_template_string(Mode::Instance.template_name(), INSTANCE_TEMPLATE)
            .context("Failed to register instance template")?;
        handlebars
            .register_template_string(Mode::Cluster.template_name(), CLUSTER_TEMPLATE)
            .context("Failed to register cluster template")?;

        Ok(Self { handlebars })
    }

    /// Render a document with the template it names
    pub fn render(&self, document: &TerraformDocument) -> Result<String> {
        self.handlebars
            .render(document.template, &document.context)
            .with_context(|| format!("Failed to render template: {}", document.template))
    }
}

/// Escape a string for use inside an HCL quoted string
pub fn escape_hcl(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            // Template sequences start with ${ and %{
            '$' | '%' if chars.peek() == Some(&'{') => {
                escaped.push(c);
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }

    escaped
}

/// Helper writing its string argument escaped for HCL; absent values write nothing
fn hcl_helper(
    h: &Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    if let Some(value) = h.param(0).and_then(|v| v.value().as_str()) {
        out.write(&escape_hcl(value))?;
    }

    Ok(())
}

/// Helper writing `true` when its argument is present, even as an empty string
///
/// `#if` alone treats `""` as false, which would drop parameters explicitly
/// set to an empty value.
fn is_set_helper(
    h: &Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    if h.param(0).is_some_and(|v| !v.value().is_null()) {
        out.write("true")?;
    }

    Ok(())
}
