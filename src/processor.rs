//! Core project materialization.
//! Combines sanitized parameters, the template catalog and the layout
//! plan to write a complete project tree exactly once.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout::LayoutPlan;
use crate::project::ProjectSpec;
use crate::templates::{self, TemplateRenderer};

/// Where the activity source comes from.
///
/// `ExternalCopy` preserves the caller's file byte-for-byte — no
/// template substitution is applied to caller-supplied source.
#[derive(Debug)]
pub enum SourceStub {
    /// Copy the file at this path verbatim to the stub location
    ExternalCopy(PathBuf),
    /// Render the built-in MainActivity template
    Generated,
}

/// Resolves the optional `--source` argument into a [`SourceStub`].
///
/// The existence check happens here, before any project file is
/// written, so a missing source path fails without creating anything.
pub fn resolve_source_stub(source: Option<PathBuf>) -> Result<SourceStub> {
    match source {
        Some(path) => {
            if !path.exists() {
                return Err(Error::SourceNotFound { path: path.display().to_string() });
            }
            Ok(SourceStub::ExternalCopy(path))
        }
        None => Ok(SourceStub::Generated),
    }
}

fn write_file<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();
    debug!("Writing file: {}", dest_path.display());

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(dest_path, content).map_err(Error::IoError)
}

fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    debug!("Copying file: {}", dest_path.display());

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::copy(source_path, dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Materializes the full project tree for `spec` under `output_dir`.
///
/// # Arguments
/// * `spec` - Sanitized project parameters
/// * `source` - External activity file or the built-in stub
/// * `output_dir` - Directory under which the project root is created
/// * `engine` - Template rendering engine
///
/// # Returns
/// * `Result<PathBuf>` - The project root on success
///
/// # Errors
/// * `Error::ProjectExists` if the root path already exists; this is
///   checked before any write, so nothing is created in that case.
///   Filesystem errors below the root abort the remaining writes and
///   leave whatever was already written — there is no rollback.
pub fn create_project<P: AsRef<Path>>(
    spec: &ProjectSpec,
    source: &SourceStub,
    output_dir: P,
    engine: &dyn TemplateRenderer,
) -> Result<PathBuf> {
    let plan = LayoutPlan::new(output_dir, spec);
    if plan.project_root.exists() {
        return Err(Error::ProjectExists {
            path: plan.project_root.display().to_string(),
        });
    }

    let context = serde_json::to_value(spec).map_err(Error::ContextError)?;
    debug!("Rendering project files for '{}'", spec.project_name);

    write_file(&plan.settings_gradle, &engine.render(templates::SETTINGS_GRADLE, &context)?)?;
    write_file(&plan.root_build_gradle, templates::ROOT_BUILD_GRADLE)?;
    write_file(&plan.gradle_properties, templates::GRADLE_PROPERTIES)?;
    write_file(&plan.app_build_gradle, &engine.render(templates::APP_BUILD_GRADLE, &context)?)?;
    write_file(&plan.proguard_rules, "")?;
    write_file(&plan.manifest, templates::ANDROID_MANIFEST)?;
    write_file(&plan.strings_xml, &engine.render(templates::STRINGS_XML, &context)?)?;

    match source {
        SourceStub::ExternalCopy(path) => copy_file(path, &plan.main_activity)?,
        SourceStub::Generated => {
            write_file(&plan.main_activity, &engine.render(templates::MAIN_ACTIVITY, &context)?)?
        }
    }

    Ok(plan.project_root)
}
