//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DistLayout, LegacyBundlePolicy};
use crate::error::DistpackResult;

use super::loader::{self, ConfigWarning};

/// Input locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Packaging configuration handed to the packager
    pub ng_package: PathBuf,
    /// Compiler settings handed to the packager
    pub tsconfig: PathBuf,
    /// Component stylesheet source
    pub stylesheet: PathBuf,
    /// Image tree copied into the distribution
    pub images: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            ng_package: PathBuf::from("ng-package.json"),
            tsconfig: PathBuf::from("tsconfig.dist.json"),
            stylesheet: PathBuf::from(
                "src/app/components/ionic-selectable/ionic-selectable.component.scss",
            ),
            images: PathBuf::from("images"),
        }
    }
}

/// Distribution layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistConfig {
    /// Distribution root, relative to the project root
    pub root: PathBuf,
    /// Bundle basename emitted by the packager
    pub name: String,
    /// Stylesheet basename (without extension) inside `esm5/`
    pub stylesheet_name: String,
    /// Directory name the image tree is copied into
    pub images_dir: String,
}

impl Default for DistConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("dist"),
            name: "areo-ionic-selectable".to_string(),
            stylesheet_name: "ionic-selectable.component".to_string(),
            images_dir: "images".to_string(),
        }
    }
}

/// External packager invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagerConfig {
    /// Program to run
    pub program: String,
    /// Script passed as the first argument, if any
    pub script: Option<PathBuf>,
    /// Extra arguments
    pub args: Vec<String>,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            program: "node".to_string(),
            script: Some(PathBuf::from("node_modules/ng-packagr/cli/main.js")),
            args: Vec::new(),
        }
    }
}

/// Minify stage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    pub legacy_bundle: LegacyBundlePolicy,
}

/// Stylesheet compilation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetConfig {
    /// Extra Sass import paths, relative to the project root
    pub load_paths: Vec<PathBuf>,
}

/// Complete configuration
///
/// Built once at startup and passed by reference to every stage; nothing
/// mutates it during a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub dist: DistConfig,
    pub packager: PackagerConfig,
    pub minify: MinifyConfig,
    pub stylesheet: StylesheetConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> DistpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `config_path`, or `<project_root>/distpack.toml` when it exists,
    /// then apply `DISTPACK_*` environment overrides.
    pub fn load_for_project(
        project_root: &Path,
        config_path: Option<&Path>,
    ) -> DistpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root, config_path)
    }

    /// Resolve a configured path against the project root
    pub fn resolve(&self, project_root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }

    /// Distribution layout rooted under the project
    pub fn dist_layout(&self, project_root: &Path) -> DistLayout {
        DistLayout::new(
            self.resolve(project_root, &self.dist.root),
            self.dist.name.clone(),
            self.dist.stylesheet_name.clone(),
            self.dist.images_dir.clone(),
        )
    }
}
