//! Check Use Case
//!
//! Verifies a project is ready to build without running the packager.

use std::path::Path;

use crate::config::{Config, ConfigWarning};
use crate::domain::ports::FileSystem;
use crate::domain::services::compile_compressed;

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckItem {
    /// Name of the check (e.g., "tsconfig")
    pub name: String,
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckResult {
    /// No required check failed
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    fn push(&mut self, name: &str, status: CheckStatus, message: String) {
        match status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(CheckItem {
            name: name.to_string(),
            status,
            message,
        });
    }
}

/// Check Use Case
pub struct CheckUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Run every check in a fixed order
    pub fn execute(
        &self,
        config: &Config,
        warnings: &[ConfigWarning],
        project_root: &Path,
    ) -> CheckResult {
        let mut result = CheckResult::default();

        if warnings.is_empty() {
            result.push("config", CheckStatus::Pass, "configuration is valid".to_string());
        } else {
            for warning in warnings {
                result.push("config", CheckStatus::Warning, warning.to_string());
            }
        }

        self.require_file(&mut result, "ng-package", config, project_root, &config.project.ng_package);
        self.require_file(&mut result, "tsconfig", config, project_root, &config.project.tsconfig);

        match &config.packager.script {
            Some(script) => self.require_file(&mut result, "packager", config, project_root, script),
            None => result.push(
                "packager",
                CheckStatus::Pass,
                format!("'{}' runs without a script", config.packager.program),
            ),
        }

        self.check_stylesheet(&mut result, config, project_root);

        let images = config.resolve(project_root, &config.project.images);
        if self.file_system.is_dir(&images) {
            result.push("images", CheckStatus::Pass, images.display().to_string());
        } else {
            result.push(
                "images",
                CheckStatus::Warning,
                format!("{} not found; no images will be copied", images.display()),
            );
        }

        result
    }

    fn require_file(
        &self,
        result: &mut CheckResult,
        name: &str,
        config: &Config,
        project_root: &Path,
        path: &Path,
    ) {
        let resolved = config.resolve(project_root, path);
        if self.file_system.exists(&resolved) {
            result.push(name, CheckStatus::Pass, resolved.display().to_string());
        } else {
            result.push(
                name,
                CheckStatus::Error,
                format!("{} not found", resolved.display()),
            );
        }
    }

    fn check_stylesheet(&self, result: &mut CheckResult, config: &Config, project_root: &Path) {
        let source = config.resolve(project_root, &config.project.stylesheet);
        let scss = match self.file_system.read_to_string(&source) {
            Ok(scss) => scss,
            Err(e) => {
                result.push("stylesheet", CheckStatus::Error, e.to_string());
                return;
            }
        };

        let load_paths: Vec<_> = config
            .stylesheet
            .load_paths
            .iter()
            .map(|p| config.resolve(project_root, p))
            .collect();

        match compile_compressed(&scss, &source, &load_paths) {
            Ok(_) => result.push("stylesheet", CheckStatus::Pass, source.display().to_string()),
            Err(e) => result.push(
                "stylesheet",
                CheckStatus::Error,
                format!("{}: {}", source.display(), e.message),
            ),
        }
    }
}
