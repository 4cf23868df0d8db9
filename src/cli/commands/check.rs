//! Implementation of the `credenv check` command.
//!
//! Loads the key file and reports the account it describes, without
//! printing any registration commands. Useful before pasting the export
//! output anywhere. The check is structural only; it never verifies that
//! the key is accepted by the identity provider.

use anyhow::Result;
use console::style;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::CheckArgs;
use crate::infrastructure::credentials::{ServiceAccountKey, REQUIRED_FIELDS};

/// Result of a check run.
#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    /// Path that was checked.
    pub file: String,
    /// Service-account email found in the file.
    pub client_email: String,
    /// Project the account belongs to.
    pub project_id: String,
    /// Required fields, all present when this output exists.
    pub fields: Vec<String>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{} {} provides all {} required fields",
            style("ok:").green().bold(),
            self.file,
            self.fields.len()
        )];
        lines.push(format!(
            "service account {} in project {}",
            self.client_email, self.project_id
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run the check. A missing or malformed file fails with the same error
/// the export path would report.
pub fn execute(args: &CheckArgs, json_mode: bool) -> Result<()> {
    let key = ServiceAccountKey::load(&args.file)?;

    let output_data = CheckOutput {
        file: args.file.display().to_string(),
        client_email: key.client_email,
        project_id: key.project_id,
        fields: REQUIRED_FIELDS.iter().map(|f| (*f).to_string()).collect(),
    };
    output(&output_data, json_mode);
    Ok(())
}
