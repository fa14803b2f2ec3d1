use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::{default_html_base, default_html_template};

/// HTML entry generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Template the HTML entry is rendered from (relative to the project root)
    #[serde(default = "default_html_template")]
    pub template: PathBuf,

    /// Value of the `<base href>` injected into the page
    #[serde(default = "default_html_base")]
    pub base: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            template: default_html_template(),
            base: default_html_base(),
        }
    }
}
