//! Assembly of a complete, immutable pipeline configuration.
//!
//! Every configuration-time error (schema violations, bad patterns, shadowed
//! rules, missing plugin prerequisites) surfaces from
//! [`PipelinePlan::assemble`], before any build work starts.

use std::path::PathBuf;

use indexmap::IndexMap;

use kf_config::{BuildConfig, ModeContext, validate_schema};

use crate::defaults::build_registry;
use crate::error::Result;
use crate::naming::{ArtifactKind, OutputNamer};
use crate::plugins::{ComposeInputs, Plugin, PluginComposer, PluginOptions};
use crate::registry::RuleRegistry;

/// Named entry points and the modules each one loads, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPlan {
    pub entries: IndexMap<String, Vec<String>>,
}

impl EntryPlan {
    /// `main` loads the configured entry; development appends the hot client.
    pub fn for_mode(ctx: &ModeContext, config: &BuildConfig) -> Self {
        let mut main = vec![config.entry.clone()];
        if ctx.is_dev() {
            main.push(config.dev.hot_client.clone());
        }
        Self {
            entries: IndexMap::from([("main".to_string(), main)]),
        }
    }
}

/// Inputs for the external module resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvePlan {
    /// Directories searched for bare specifiers, in order
    pub modules: Vec<PathBuf>,
    /// Alias name → directory, relative targets joined onto the root
    pub alias: IndexMap<String, PathBuf>,
    pub symlinks: bool,
}

impl ResolvePlan {
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            modules: vec![
                config.resolve_path(&config.source_dir),
                PathBuf::from("node_modules"),
            ],
            alias: config
                .alias
                .iter()
                .map(|(name, target)| (name.clone(), config.resolve_path(target)))
                .collect(),
            symlinks: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitChunks {
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub path: PathBuf,
    pub filename: &'static str,
    /// Empty the output directory before emitting
    pub clean: bool,
    pub split_chunks: SplitChunks,
}

impl OutputPlan {
    pub fn new(config: &BuildConfig, namer: &OutputNamer) -> Self {
        Self {
            path: config.output_path(),
            filename: namer.template(ArtifactKind::Script),
            clean: true,
            split_chunks: SplitChunks::All,
        }
    }
}

/// The rendered license report and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseReport {
    pub filename: String,
    pub text: String,
}

/// Everything the surrounding build tool needs, derived once from the
/// configuration and mode.
#[derive(Debug, Clone)]
pub struct PipelinePlan {
    pub context: ModeContext,
    pub bundler_mode: &'static str,
    pub entries: EntryPlan,
    pub output: OutputPlan,
    pub resolve: ResolvePlan,
    pub registry: RuleRegistry,
    pub namer: OutputNamer,
    pub plugins: Vec<Plugin>,
}

impl PipelinePlan {
    pub fn assemble(
        config: &BuildConfig,
        ctx: &ModeContext,
        inputs: ComposeInputs,
    ) -> Result<Self> {
        validate_schema(config)?;
        let registry = build_registry(ctx, config)?;
        let namer = OutputNamer::new(ctx.mode());
        let plugins = PluginComposer::new(ctx, config).compose(inputs)?;

        tracing::info!(
            mode = %ctx.mode(),
            rules = registry.len(),
            plugins = plugins.len(),
            "assembled build pipeline"
        );

        Ok(Self {
            context: ctx.clone(),
            bundler_mode: ctx.bundler_mode(),
            entries: EntryPlan::for_mode(ctx, config),
            output: OutputPlan::new(config, &namer),
            resolve: ResolvePlan::from_config(config),
            registry,
            namer,
            plugins,
        })
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    /// The license report, when the license step is part of this build.
    pub fn render_licenses(&self) -> Option<LicenseReport> {
        self.plugins.iter().find_map(|plugin| match plugin.options() {
            PluginOptions::License(license) => Some(LicenseReport {
                filename: license.output_filename.clone(),
                text: license.render(),
            }),
            _ => None,
        })
    }
}
