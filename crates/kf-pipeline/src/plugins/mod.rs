//! Pipeline-wide plugins and their mode gating.
//!
//! Which plugins run is a pure function of the [`Mode`]; see
//! [`active_plugins`]. [`PluginComposer`] turns that list into configured
//! [`Plugin`] values once, at configuration time.

mod composer;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use kf_config::Mode;

use crate::license::{DependencyRecord, LicenseAggregator};

pub use composer::{ComposeInputs, PluginComposer};

/// Plugin execution phases
///
/// Plugins are ordered by phase (lower numbers first); plugins sharing a
/// phase keep their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginPhase {
    /// Compile-time constant injection
    Environment = 0,

    /// Checks on module resolution
    Guard = 10,

    /// Content transformation and extraction
    Transform = 20,

    /// Development instrumentation (hot reload, fast refresh)
    Instrumentation = 30,

    /// Reports over the final resolved dependency set
    Report = 90,

    /// HTML entry generation; observes every other plugin's assets
    Entry = 100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginId {
    DefineConstants,
    CaseSensitivePaths,
    ExtractCss,
    HotModuleReplacement,
    FastRefresh,
    LicenseAggregation,
    HtmlEntry,
}

impl PluginId {
    /// Canonical relative order of every known plugin.
    pub const ORDER: [PluginId; 7] = [
        PluginId::DefineConstants,
        PluginId::CaseSensitivePaths,
        PluginId::ExtractCss,
        PluginId::HotModuleReplacement,
        PluginId::FastRefresh,
        PluginId::LicenseAggregation,
        PluginId::HtmlEntry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PluginId::DefineConstants => "define-constants",
            PluginId::CaseSensitivePaths => "case-sensitive-paths",
            PluginId::ExtractCss => "extract-css",
            PluginId::HotModuleReplacement => "hot-module-replacement",
            PluginId::FastRefresh => "fast-refresh",
            PluginId::LicenseAggregation => "license-aggregation",
            PluginId::HtmlEntry => "html-entry",
        }
    }

    pub fn phase(&self) -> PluginPhase {
        match self {
            PluginId::DefineConstants => PluginPhase::Environment,
            PluginId::CaseSensitivePaths => PluginPhase::Guard,
            PluginId::ExtractCss => PluginPhase::Transform,
            PluginId::HotModuleReplacement | PluginId::FastRefresh => {
                PluginPhase::Instrumentation
            }
            PluginId::LicenseAggregation => PluginPhase::Report,
            PluginId::HtmlEntry => PluginPhase::Entry,
        }
    }

    pub fn is_active_for(&self, mode: Mode) -> bool {
        match self {
            PluginId::HotModuleReplacement | PluginId::FastRefresh => mode.is_dev(),
            PluginId::LicenseAggregation => mode.is_prod(),
            _ => true,
        }
    }
}

/// Ordered plugin ids active for `mode`.
pub fn active_plugins(mode: Mode) -> Vec<PluginId> {
    PluginId::ORDER
        .into_iter()
        .filter(|id| id.is_active_for(mode))
        .collect()
}

/// Per-plugin configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginOptions {
    None,
    Define(IndexMap<String, String>),
    ExtractCss {
        filename: &'static str,
        chunk_filename: &'static str,
    },
    License(LicensePlugin),
    HtmlEntry {
        template: PathBuf,
        base: String,
    },
}

/// Everything the license step needs, gathered before the build starts.
#[derive(Debug, Clone, PartialEq)]
pub struct LicensePlugin {
    pub output_filename: String,
    pub add_banner: bool,
    pub per_chunk_output: bool,
    pub aggregator: LicenseAggregator,
    pub dependencies: Vec<DependencyRecord>,
}

impl LicensePlugin {
    pub fn render(&self) -> String {
        self.aggregator.render_records(&self.dependencies)
    }
}

/// A configured plugin. Constructed once; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Plugin {
    id: PluginId,
    options: PluginOptions,
}

impl Plugin {
    pub(crate) fn new(id: PluginId, options: PluginOptions) -> Self {
        Self { id, options }
    }

    pub fn id(&self) -> PluginId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn phase(&self) -> PluginPhase {
        self.id.phase()
    }

    pub fn is_active_for(&self, mode: Mode) -> bool {
        self.id.is_active_for(mode)
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }
}
