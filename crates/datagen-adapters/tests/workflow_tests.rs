//! End-to-end generation through the real renderer and in-memory adapters.

use std::path::{Path, PathBuf};

use datagen_adapters::{FixedVersionControl, LocalFilesystem, MemoryFilesystem, RustSourceRenderer};
use datagen_core::{
    application::{ApplicationError, EmbedService, Layout},
    domain::FileStatus,
    error::DatagenError,
    prelude::*,
};

const SAMPLES: &[(&str, &str)] = &[
    ("Dockerfile", "FROM rust:1.85 AS build\n"),
    ("Makefile", "build:\n\tcargo build --release\n"),
    (".gitignore", "/target\n"),
    (".dockerignore", "target\n"),
    ("Cargo.toml", "[package]\nname = \"app\"\nversion = \"0.1.0\"\n"),
    ("main.rs", "fn main() {\n    println!(\"hi\");\n}\n"),
];

fn seed(fs: &MemoryFilesystem, root: &Path) {
    for (name, content) in SAMPLES {
        fs.insert(root.join("data/generate").join(name), *content);
    }
}

fn service(fs: &MemoryFilesystem, vcs: FixedVersionControl, root: &Path) -> EmbedService {
    EmbedService::new(
        Box::new(fs.clone()),
        Box::new(vcs),
        Box::new(RustSourceRenderer::new()),
        Layout::new(root),
    )
}

#[test]
fn generates_artifact_with_every_constant() {
    let root = PathBuf::from("/project");
    let fs = MemoryFilesystem::new();
    seed(&fs, &root);

    let svc = service(
        &fs,
        FixedVersionControl::new(Some("v1.2.3\n"), "'0123456789abcdef'\n"),
        &root,
    );
    svc.generate().unwrap();

    let text = fs.read_to_string(&root.join("data.rs")).unwrap();
    assert!(text.contains("pub const VERSION: &str = \"v1.2.3\";"));
    assert!(text.contains("pub const COMMIT: &str = \"0123456\";"));
    for constant in [
        "DATA_DOCKERFILE",
        "DATA_MAKEFILE",
        "DATA_DOT_GITIGNORE",
        "DATA_DOT_DOCKERIGNORE",
        "DATA_CARGO_DOT_TOML",
        "DATA_MAIN_DOT_RS",
    ] {
        assert!(text.contains(&format!("pub const {constant}: &str = r#\"")));
    }
    for (_, content) in SAMPLES {
        let hash = Fingerprint::of(content.as_bytes());
        assert!(text.contains(&format!("// hash:{hash}\n")));
    }
}

#[test]
fn check_detects_drift_after_edit() {
    let root = PathBuf::from("/project");
    let fs = MemoryFilesystem::new();
    seed(&fs, &root);
    let svc = service(&fs, FixedVersionControl::new(None, "abcdef0123"), &root);

    svc.generate().unwrap();
    assert!(svc.check().unwrap().is_current());

    fs.insert(root.join("data/generate/main.rs"), "fn main() {}\n");
    let report = svc.check().unwrap();
    assert_eq!(report.outdated(), ["src/main.rs"]);
    assert!(
        report
            .files
            .iter()
            .filter(|f| f.name != "src/main.rs")
            .all(|f| f.status == FileStatus::UpToDate)
    );
}

#[test]
fn unavailable_vcs_leaves_no_output() {
    let root = PathBuf::from("/project");
    let fs = MemoryFilesystem::new();
    seed(&fs, &root);

    let err = service(&fs, FixedVersionControl::unavailable(), &root)
        .generate()
        .unwrap_err();
    assert!(matches!(
        err,
        DatagenError::Application(ApplicationError::MissingExecutable { .. })
    ));
    assert!(!fs.exists(&root.join("data.rs")));
}

#[test]
fn writes_to_disk_with_local_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("data/generate");
    std::fs::create_dir_all(&source).unwrap();
    for (name, content) in SAMPLES {
        std::fs::write(source.join(name), content).unwrap();
    }

    let svc = EmbedService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FixedVersionControl::new(Some("v2.0.0"), "fedcba9876")),
        Box::new(RustSourceRenderer::new()),
        Layout::new(dir.path()),
    );
    let summary = svc.generate().unwrap();

    let text = std::fs::read_to_string(&summary.output).unwrap();
    assert!(text.contains("pub const VERSION: &str = \"v2.0.0\";"));
    assert!(svc.check().unwrap().is_current());
}

/// Builds the written artifact with rustc and compares every embedded
/// constant, byte for byte, with the file it was read from.
#[test]
fn compiled_artifact_embeds_exact_source_bytes() {
    if which::which("rustc").is_err() {
        eprintln!("skipping: rustc not installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("data/generate");
    std::fs::create_dir_all(&source).unwrap();
    for (name, content) in SAMPLES {
        std::fs::write(source.join(name), content).unwrap();
    }
    // Line endings and delimiters that a raw string cannot carry verbatim.
    std::fs::write(source.join("Dockerfile"), "FROM rust\r\nRUN \"cargo\" \\\r\n").unwrap();
    std::fs::write(source.join("Makefile"), "build:\r\tcargo build\r").unwrap();
    std::fs::write(source.join("main.rs"), "fn main() {\n    let s = r#\"x\"#;\n}\n").unwrap();

    let svc = EmbedService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FixedVersionControl::new(Some("v3.0.0"), "0011223344")),
        Box::new(RustSourceRenderer::new()),
        Layout::new(dir.path()),
    );
    let summary = svc.generate().unwrap();

    let program = dir.path().join("dump.rs");
    let mut code = std::fs::read_to_string(&summary.output).unwrap();
    code.push_str(
        "\nfn main() {\n    for (name, contents) in SCAFFOLD_FILES {\n        println!(\"{}\\t{:?}\", name, contents.as_bytes());\n    }\n}\n",
    );
    std::fs::write(&program, code).unwrap();

    let binary = dir.path().join("dump");
    let build = std::process::Command::new("rustc")
        .args(["--edition", "2021", "-A", "warnings", "-o"])
        .arg(&binary)
        .arg(&program)
        .output()
        .unwrap();
    assert!(
        build.status.success(),
        "artifact failed to compile:\n{}",
        String::from_utf8_lossy(&build.stderr)
    );

    let run = std::process::Command::new(&binary).output().unwrap();
    assert!(run.status.success());
    let dumped = String::from_utf8(run.stdout).unwrap();

    let manifest = svc.manifest();
    let expected: Vec<String> = manifest
        .entries()
        .iter()
        .map(|entry| {
            let bytes = std::fs::read(svc.layout().source_path(entry)).unwrap();
            format!("{}\t{:?}", entry.name(), bytes)
        })
        .collect();
    assert_eq!(dumped.lines().collect::<Vec<_>>(), expected);

    for (entry, embedded) in manifest.entries().iter().zip(&summary.files) {
        let bytes = std::fs::read(svc.layout().source_path(entry)).unwrap();
        assert_eq!(embedded.constant, entry.constant());
        assert_eq!(embedded.fingerprint, Fingerprint::of(&bytes));
    }
    assert!(svc.check().unwrap().is_current());
}
