//! Immutable, process-wide facts derived from the build mode.
//!
//! A [`ModeContext`] is resolved once at startup and handed to every
//! component that needs it. Nothing reads the mode from ambient state.

use chrono::Datelike;
use indexmap::IndexMap;

use crate::config::BuildConfig;
use crate::mode::Mode;
use crate::options::ProjectInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeContext {
    mode: Mode,
    project: ProjectInfo,
    copyright: String,
}

impl ModeContext {
    /// Build a context stamped with the current calendar year.
    pub fn new(mode: Mode, project: ProjectInfo) -> Self {
        Self::with_year(mode, project, chrono::Local::now().year())
    }

    /// Build a context with an explicit copyright end year.
    pub fn with_year(mode: Mode, project: ProjectInfo, year: i32) -> Self {
        let copyright = format!(
            "{}-{} {}",
            project.copyright_start, year, project.copyright_holder
        );
        Self {
            mode,
            project,
            copyright,
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.mode(), config.project.clone())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dev(&self) -> bool {
        self.mode.is_dev()
    }

    pub fn is_test(&self) -> bool {
        self.mode.is_test()
    }

    pub fn is_prod(&self) -> bool {
        self.mode.is_prod()
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn version(&self) -> Option<&str> {
        self.project.version.as_deref()
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Mode name handed to the bundler; test builds bundle like development.
    pub fn bundler_mode(&self) -> &'static str {
        if self.is_prod() {
            "production"
        } else {
            "development"
        }
    }

    /// Compile-time constants injected into client code.
    ///
    /// Values are JavaScript source literals. A missing version is emitted as
    /// `undefined`.
    pub fn define_constants(&self) -> IndexMap<String, String> {
        let version = match self.version() {
            Some(v) => js_string(v),
            None => "undefined".to_string(),
        };

        IndexMap::from([
            ("__DEV__".to_string(), self.is_dev().to_string()),
            ("__TEST__".to_string(), self.is_test().to_string()),
            ("__PROD__".to_string(), self.is_prod().to_string()),
            ("__KF_VERSION__".to_string(), version),
            ("__KF_URL_HOME__".to_string(), js_string(&self.project.home_url)),
            (
                "__KF_URL_LICENSE__".to_string(),
                js_string(&self.project.license_url),
            ),
            ("__KF_URL_REPO__".to_string(), js_string(&self.project.repo_url)),
            (
                "__KF_URL_SPONSOR__".to_string(),
                js_string(&self.project.sponsor_url),
            ),
            ("__KF_COPYRIGHT__".to_string(), js_string(&self.copyright)),
        ])
    }
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
