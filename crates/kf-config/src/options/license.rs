use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::{default_license_file, default_license_output};

/// Third-party license report options (production only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseOptions {
    /// The project's own license, placed under the banner
    #[serde(default = "default_license_file")]
    pub project_license: PathBuf,

    /// File name of the aggregated report inside the output directory
    #[serde(default = "default_license_output")]
    pub output_filename: String,
}

impl Default for LicenseOptions {
    fn default() -> Self {
        Self {
            project_license: default_license_file(),
            output_filename: default_license_output(),
        }
    }
}
