//! Missing `.config` handling and the interactive fallback.

use super::test_utils::{args, ScriptedPrompter, Workdir};
use ukconf::diagnostics::Diagnostic;
use ukconf::engine::{run, OverlayRequest};
use ukconf::error::OverlayError;

#[test]
fn test_declined_interactive_mode_fails_without_creating_file() {
    let workdir = Workdir::empty();
    let mut prompter = ScriptedPrompter::declining();

    let err = run(
        &OverlayRequest::unset(workdir.dir.path(), args(&["FOO"])),
        &mut prompter,
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OverlayError::ConfigNotFound(_)));
    assert!(!workdir.dotconfig().exists());
    assert_eq!(std::fs::read_dir(workdir.dir.path()).unwrap().count(), 0);
    assert_eq!(prompter.prompts, vec!["Do you want to start in interactive mode:"]);
}

#[test]
fn test_empty_alternate_path_fails() {
    let workdir = Workdir::empty();
    let mut prompter = ScriptedPrompter::answering("");

    let err = run(
        &OverlayRequest::unset(workdir.dir.path(), args(&["FOO"])),
        &mut prompter,
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OverlayError::ConfigNotFound(_)));
    assert_eq!(
        prompter.prompts,
        vec![
            "Do you want to start in interactive mode:",
            "Path to dotconfig file:"
        ]
    );
    assert!(!workdir.dotconfig().exists());
}

#[test]
fn test_alternate_path_is_loaded_and_updated() {
    let workdir = Workdir::empty();
    let other = workdir.dir.path().join("defconfig");
    std::fs::write(&other, "FOO=y\n").unwrap();
    let mut prompter = ScriptedPrompter::answering(other.to_string_lossy());

    let outcome = run(
        &OverlayRequest::unset(workdir.dir.path(), args(&["FOO"])),
        &mut prompter,
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap();

    assert_eq!(outcome.path, other);
    assert_eq!(std::fs::read_to_string(&other).unwrap(), "FOO=n\n");
    assert!(!workdir.dotconfig().exists());
}

#[test]
fn test_alternate_path_that_does_not_exist() {
    let workdir = Workdir::empty();
    let missing = workdir.dir.path().join("nowhere.config");
    let mut prompter = ScriptedPrompter::answering(missing.to_string_lossy());

    let err = run(
        &OverlayRequest::unset(workdir.dir.path(), args(&["FOO"])),
        &mut prompter,
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OverlayError::NotFound(ref p) if p == &missing));
    assert!(!missing.exists());
}

#[test]
fn test_empty_input_never_prompts() {
    let workdir = Workdir::empty();
    let mut prompter = ScriptedPrompter::answering("whatever");

    let err = run(
        &OverlayRequest::unset(workdir.dir.path(), Vec::new()),
        &mut prompter,
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OverlayError::EmptyInput));
    assert!(prompter.prompts.is_empty());
}
