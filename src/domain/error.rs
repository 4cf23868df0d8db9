use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a service-account key file.
///
/// `Read` covers the file system; `Json` and `MissingFields` cover the
/// file contents. All three are fatal for the run: nothing is printed to
/// stdout once one of them occurs.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("failed to read credentials file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credentials file {} is not valid JSON", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "credentials file {} is missing required field(s): {}",
        .path.display(),
        .fields.join(", ")
    )]
    MissingFields { path: PathBuf, fields: Vec<String> },
}
