//! # kf-pipeline
//!
//! Decides how each front-end source file is processed and how the results
//! are named, for development, test and production builds.
//!
//! - [`RuleRegistry`] maps a path to the transform chain of the first rule
//!   that applies, and refuses orderings where a rule can never be reached.
//! - [`OutputNamer`] keeps names stable in development and content-addresses
//!   them in production.
//! - [`PluginComposer`] lists the pipeline plugins active for the mode.
//! - [`LicenseAggregator`] renders the third-party license report.
//!
//! ```
//! use kf_config::{BuildConfig, Mode, ModeContext, ProjectInfo};
//! use kf_pipeline::{ComposeInputs, PipelinePlan};
//!
//! let config = BuildConfig {
//!     mode: Some("development".to_string()),
//!     ..Default::default()
//! };
//! let ctx = ModeContext::with_year(Mode::Development, ProjectInfo::default(), 2025);
//! let plan = PipelinePlan::assemble(&config, &ctx, ComposeInputs::new()).unwrap();
//!
//! let chain = plan.registry.classify("src/App.jsx").chain().unwrap();
//! assert_eq!(chain[0].name, "babel");
//! assert_eq!(plan.plugin_names().last(), Some(&"html-entry"));
//! ```

pub mod defaults;
pub mod error;
pub mod license;
pub mod naming;
pub mod plan;
pub mod plugins;
pub mod registry;
pub mod rule;

#[cfg(feature = "logging")]
pub mod logging;

pub use defaults::{build_registry, default_rules};
pub use error::{Error, Result};
pub use license::{
    DependencyRecord, LicenseAggregator, LicenseEntry, load_project_license,
    normalize_license_text,
};
pub use naming::{ArtifactKind, ContentDigest, OutputArtifact, OutputNamer};
pub use plan::{EntryPlan, LicenseReport, OutputPlan, PipelinePlan, ResolvePlan};
pub use plugins::{
    ComposeInputs, Plugin, PluginComposer, PluginId, PluginOptions, PluginPhase, active_plugins,
};
pub use registry::{Classification, RuleRegistry, RuleRegistryBuilder};
pub use rule::{Pattern, Rule, Shadowing, TransformSpec, find_shadowed};
