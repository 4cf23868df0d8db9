//! Implementation of the `credenv export` command.
//!
//! Prints a preview of the variables derived from the key file, then the
//! command lines that register them with the deployment platform. The
//! preview truncates values; the command lines carry them in full,
//! shell-escaped.

use anyhow::Result;
use console::style;
use tracing::debug;

use crate::cli::output::{escape_value, output, preview, CommandOutput};
use crate::cli::types::ExportArgs;
use crate::domain::mapping::{CredentialMapping, EnvVar};
use crate::infrastructure::credentials::ServiceAccountKey;

/// Tool the emitted commands invoke.
pub const PLATFORM_TOOL: &str = "vercel";

/// Environment the emitted commands target.
pub const TARGET_ENVIRONMENT: &str = "production";

/// Result of an export run.
#[derive(Debug, serde::Serialize)]
pub struct ExportOutput {
    /// Preview entries, one per variable, values truncated.
    pub variables: Vec<VariablePreview>,
    /// Full registration command lines, one per variable.
    pub commands: Vec<String>,
}

/// One preview line of the export output.
#[derive(Debug, serde::Serialize)]
pub struct VariablePreview {
    /// Variable name.
    pub name: String,
    /// Truncated value as shown in the preview section.
    pub preview: String,
}

impl ExportOutput {
    /// Render a mapping into preview entries and command lines.
    pub fn new(mapping: &CredentialMapping) -> Self {
        let variables = mapping
            .vars()
            .iter()
            .map(|var| VariablePreview {
                name: var.name.to_string(),
                preview: preview(&var.value),
            })
            .collect();
        let commands = mapping.vars().iter().map(add_command).collect();

        Self { variables, commands }
    }
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![style("Variables found in the key file:").bold().to_string()];
        for var in &self.variables {
            lines.push(format!("{}: {}", var.name, var.preview));
        }
        lines.push(String::new());
        lines.push(
            style("Run these commands to register them:")
                .bold()
                .to_string(),
        );
        lines.extend(self.commands.iter().cloned());
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Render the registration command for one variable.
pub fn add_command(var: &EnvVar) -> String {
    format!(
        "{PLATFORM_TOOL} env add {} --value=\"{}\" --environment={TARGET_ENVIRONMENT}",
        var.name,
        escape_value(&var.value)
    )
}

/// Run the export: load, map, print. Fails before any stdout output.
pub fn execute(args: &ExportArgs, json_mode: bool) -> Result<()> {
    debug!(file = %args.file.display(), "exporting service-account key");

    let key = ServiceAccountKey::load(&args.file)?;
    let mapping = CredentialMapping::new(&key);
    output(&ExportOutput::new(&mapping), json_mode);
    Ok(())
}
