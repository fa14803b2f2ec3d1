use std::path::PathBuf;

use indexmap::IndexMap;

use kf_config::{BuildConfig, Mode, ModeContext};

use crate::error::{Error, Result};
use crate::license::{DependencyRecord, LicenseAggregator};
use crate::naming::{ArtifactKind, OutputNamer};
use crate::plugins::{LicensePlugin, Plugin, PluginId, PluginOptions, active_plugins};

/// Data produced by external collaborators that some plugins depend on.
#[derive(Debug, Clone, Default)]
pub struct ComposeInputs {
    /// Resolved dependency metadata, in graph traversal order
    pub dependencies: Option<Vec<DependencyRecord>>,
    /// The project's own license text
    pub project_license: Option<String>,
}

impl ComposeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependencies(mut self, dependencies: Vec<DependencyRecord>) -> Self {
        self.dependencies = Some(dependencies);
        self
    }

    pub fn project_license(mut self, text: impl Into<String>) -> Self {
        self.project_license = Some(text.into());
        self
    }
}

/// Builds the ordered plugin list for one mode.
#[derive(Debug, Clone)]
pub struct PluginComposer {
    mode: Mode,
    defines: IndexMap<String, String>,
    namer: OutputNamer,
    banner: String,
    license_output: String,
    html_template: PathBuf,
    html_base: String,
}

impl PluginComposer {
    pub fn new(ctx: &ModeContext, config: &BuildConfig) -> Self {
        Self {
            mode: ctx.mode(),
            defines: ctx.define_constants(),
            namer: OutputNamer::new(ctx.mode()),
            banner: ctx.project().name.clone(),
            license_output: config.license.output_filename.clone(),
            html_template: config.html.template.clone(),
            html_base: config.html.base.clone(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Configure every plugin active for the mode, in canonical order.
    ///
    /// # Errors
    ///
    /// `MissingPrerequisite` when a plugin active for this mode needs input
    /// that `inputs` lacks. Composition stops; no plugin is skipped silently.
    pub fn compose(&self, inputs: ComposeInputs) -> Result<Vec<Plugin>> {
        let mut inputs = inputs;
        let mut plugins = Vec::new();

        for id in active_plugins(self.mode) {
            let options = match id {
                PluginId::DefineConstants => PluginOptions::Define(self.defines.clone()),
                PluginId::CaseSensitivePaths
                | PluginId::HotModuleReplacement
                | PluginId::FastRefresh => PluginOptions::None,
                PluginId::ExtractCss => PluginOptions::ExtractCss {
                    filename: self.namer.template(ArtifactKind::Style),
                    chunk_filename: self.namer.template(ArtifactKind::StyleChunk),
                },
                PluginId::LicenseAggregation => {
                    PluginOptions::License(self.license_plugin(&mut inputs)?)
                }
                PluginId::HtmlEntry => PluginOptions::HtmlEntry {
                    template: self.html_template.clone(),
                    base: self.html_base.clone(),
                },
            };
            plugins.push(Plugin::new(id, options));
        }

        Ok(plugins)
    }

    fn license_plugin(&self, inputs: &mut ComposeInputs) -> Result<LicensePlugin> {
        let plugin = PluginId::LicenseAggregation.name();
        let dependencies = inputs.dependencies.take().ok_or(Error::MissingPrerequisite {
            plugin,
            input: "resolved dependency metadata",
        })?;
        let project_license = inputs
            .project_license
            .take()
            .ok_or(Error::MissingPrerequisite {
                plugin,
                input: "project license text",
            })?;

        Ok(LicensePlugin {
            output_filename: self.license_output.clone(),
            add_banner: true,
            per_chunk_output: false,
            aggregator: LicenseAggregator::new(self.banner.clone(), project_license),
            dependencies,
        })
    }
}
