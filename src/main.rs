//! droidgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates sanitization,
//! project materialization and the optional Gradle build.

use droidgen::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    gradle,
    logger::init_logger,
    processor::{create_project, resolve_source_stub},
    project::{sanitize_name, ProjectSpec},
    templates::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Sanitizes the project name
/// 2. Verifies the caller-supplied source file, if any, before anything
///    is written
/// 3. Materializes the project tree
/// 4. Optionally invokes the Gradle build, forwarding the offline flag
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    let spec = ProjectSpec {
        project_name: sanitize_name(&args.project, "AiGeneratedAndroidApp"),
        app_name: args.app_name,
        application_id: args.application_id,
        compile_sdk: args.compile_sdk,
        min_sdk: args.min_sdk,
        target_sdk: args.target_sdk,
    };

    let source = resolve_source_stub(args.source)?;

    let project_root = create_project(&spec, &source, &args.out, &engine)?;

    println!("Project generated in {}.", project_root.display());
    println!("APK output after build: app/build/outputs/apk/debug/app-debug.apk");

    if args.build {
        let result = gradle::build(&project_root, args.offline)?;
        if !result.succeeded {
            return Err(Error::BuildFailed { exit_code: result.exit_code });
        }
        println!("Build completed.");
    }

    Ok(())
}
