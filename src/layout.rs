//! Output path planning for a generated project.
//! Every path is computed up front from the project parameters so the
//! materializer can check existence once, before any write happens.

use crate::project::ProjectSpec;
use std::path::{Path, PathBuf};

/// Filename of the generated activity stub.
pub const MAIN_ACTIVITY_FILE: &str = "MainActivity.kt";

/// The full set of output paths for one project, keyed by file role.
///
/// Derivation is deterministic: the same [`ProjectSpec`] and output
/// directory always yield the same plan.
#[derive(Debug)]
pub struct LayoutPlan {
    /// Top-level directory containing the whole generated tree
    pub project_root: PathBuf,
    pub settings_gradle: PathBuf,
    pub root_build_gradle: PathBuf,
    pub gradle_properties: PathBuf,
    pub app_build_gradle: PathBuf,
    pub proguard_rules: PathBuf,
    pub manifest: PathBuf,
    pub strings_xml: PathBuf,
    /// `app/src/main/java/<application id segments>/MainActivity.kt`
    pub main_activity: PathBuf,
}

impl LayoutPlan {
    /// Computes the layout for `spec` under `output_dir`.
    ///
    /// The source stub directory is the dot-separated application id
    /// translated segment-for-segment into subdirectories of the main
    /// source tree. Segment grammar is not validated here: an id with
    /// empty segments (leading/trailing/consecutive dots) passes
    /// through and surfaces as a filesystem error at write time.
    pub fn new<P: AsRef<Path>>(output_dir: P, spec: &ProjectSpec) -> Self {
        let project_root = output_dir.as_ref().join(&spec.project_name);
        let app_main = project_root.join("app").join("src").join("main");

        let mut source_dir = app_main.join("java");
        for segment in spec.application_id.split('.') {
            source_dir.push(segment);
        }

        Self {
            settings_gradle: project_root.join("settings.gradle.kts"),
            root_build_gradle: project_root.join("build.gradle.kts"),
            gradle_properties: project_root.join("gradle.properties"),
            app_build_gradle: project_root.join("app").join("build.gradle.kts"),
            proguard_rules: project_root.join("app").join("proguard-rules.pro"),
            manifest: app_main.join("AndroidManifest.xml"),
            strings_xml: app_main.join("res").join("values").join("strings.xml"),
            main_activity: source_dir.join(MAIN_ACTIVITY_FILE),
            project_root,
        }
    }
}
