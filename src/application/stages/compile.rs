//! Compile stage: run the packager.

use std::path::Path;

use crate::application::report::StageOutput;
use crate::config::Config;
use crate::domain::ports::{PackageRequest, Packager};
use crate::error::DistpackResult;

/// Run the packager against the project descriptor and tsconfig.
///
/// The packager owns the distribution root at this point; nothing is
/// recorded as written because distpack did not write it.
pub fn run_compile<P: Packager + ?Sized>(
    packager: &P,
    config: &Config,
    project_root: &Path,
) -> DistpackResult<StageOutput> {
    let request = PackageRequest::new(
        project_root,
        config.project.ng_package.clone(),
        config.project.tsconfig.clone(),
    );

    tracing::info!(packager = packager.name(), "compiling bundles");
    packager.package(&request)?;

    Ok(StageOutput::default())
}
