use serde::{Deserialize, Serialize};

/// Project identity baked into the client as build-time constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Display name, also the license report banner
    #[serde(default = "default_name")]
    pub name: String,

    /// Release version; usually supplied by the package manager at build time
    #[serde(
        default,
        deserialize_with = "super::scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(default = "default_home_url")]
    pub home_url: String,

    /// Public path of the aggregated license report
    #[serde(default = "default_license_url")]
    pub license_url: String,

    #[serde(default = "default_repo_url")]
    pub repo_url: String,

    #[serde(default = "default_sponsor_url")]
    pub sponsor_url: String,

    #[serde(default = "default_copyright_holder")]
    pub copyright_holder: String,

    #[serde(default = "default_copyright_start")]
    pub copyright_start: i32,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: None,
            home_url: default_home_url(),
            license_url: default_license_url(),
            repo_url: default_repo_url(),
            sponsor_url: default_sponsor_url(),
            copyright_holder: default_copyright_holder(),
            copyright_start: default_copyright_start(),
        }
    }
}

fn default_name() -> String {
    "Karaoke Forever".into()
}

fn default_home_url() -> String {
    "https://www.karaoke-forever.com".into()
}

fn default_license_url() -> String {
    "/licenses.txt".into()
}

fn default_repo_url() -> String {
    "https://github.com/bhj/karaoke-forever/".into()
}

fn default_sponsor_url() -> String {
    "https://github.com/sponsors/bhj/".into()
}

fn default_copyright_holder() -> String {
    "RadRoot LLC".into()
}

fn default_copyright_start() -> i32 {
    2019
}
