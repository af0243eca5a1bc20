//! Renders the artifact as a Rust source file of string constants.

use std::fmt::Write;
use std::path::Path;

use tracing::instrument;

use datagen_core::{
    application::ports::ArtifactRenderer,
    domain::{DomainError, Fingerprint, GeneratedArtifact, RecordedFingerprint},
    error::{Context, DatagenResult},
};

/// Prefix of the comment line recording a file's fingerprint.
pub const HASH_PREFIX: &str = "// hash:";

const CONST_PREFIX: &str = "pub const ";

/// Emits `pub const` items for the version, the commit and every scaffold
/// file, with a `// hash:` line above each file constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSourceRenderer;

impl RustSourceRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for RustSourceRenderer {
    #[instrument(skip_all, fields(files = artifact.files().len()))]
    fn render(&self, artifact: &GeneratedArtifact) -> DatagenResult<String> {
        let origin = artifact.origin();
        let warning = warning(&origin.source_dir, &artifact.timestamp());
        let mut out = String::new();

        writeln!(out, "// > {}", origin.output_name).context("render header")?;
        out.push_str(&warning);
        writeln!(out).context("render header")?;

        writeln!(
            out,
            "/// Nearest tag reachable from HEAD when this file was generated."
        )
        .context("render version")?;
        writeln!(
            out,
            "pub const VERSION: &str = {:?};",
            artifact.version().label.as_str()
        )
        .context("render version")?;
        writeln!(out).context("render version")?;
        writeln!(
            out,
            "/// First {} characters of the HEAD commit.",
            artifact.version().commit.as_str().len()
        )
        .context("render commit")?;
        writeln!(
            out,
            "pub const COMMIT: &str = {:?};",
            artifact.version().commit.as_str()
        )
        .context("render commit")?;

        for file in artifact.files() {
            writeln!(out).context("render file")?;
            writeln!(out, "/// Contents of `{}` for newly scaffolded projects.", file.name())
                .context("render file")?;
            writeln!(out, "{}{}", HASH_PREFIX, file.fingerprint()).context("render file")?;
            writeln!(
                out,
                "{}{}: &str = {};",
                CONST_PREFIX,
                file.constant(),
                string_literal(file.content())
            )
            .context("render file")?;
        }

        writeln!(out).context("render index")?;
        writeln!(out, "/// Every embedded file as `(logical name, contents)`.")
            .context("render index")?;
        writeln!(out, "pub const SCAFFOLD_FILES: &[(&str, &str)] = &[").context("render index")?;
        for file in artifact.files() {
            writeln!(out, "    ({:?}, {}),", file.name(), file.constant())
                .context("render index")?;
        }
        writeln!(out, "];").context("render index")?;

        writeln!(out).context("render footer")?;
        out.push_str(&warning);
        writeln!(out, "// < {}", origin.output_name).context("render footer")?;

        Ok(out)
    }

    fn extract_fingerprints(&self, rendered: &str) -> DatagenResult<Vec<RecordedFingerprint>> {
        let mut recorded = Vec::new();
        let mut pending: Option<Fingerprint> = None;
        let mut rest = rendered;

        while !rest.is_empty() {
            let (line, tail) = split_line(rest);
            let line = line.trim_end_matches('\r');

            if let Some(hash) = line.strip_prefix(HASH_PREFIX) {
                if pending.is_some() {
                    return Err(malformed("two hash comments without a constant between them"));
                }
                pending = Some(hash.trim().parse()?);
                rest = tail;
                continue;
            }

            if let Some(decl) = line.strip_prefix(CONST_PREFIX) {
                let constant = decl.split(':').next().unwrap_or_default().trim();
                if let Some(fingerprint) = pending.take() {
                    recorded.push(RecordedFingerprint {
                        constant: constant.to_string(),
                        fingerprint,
                    });
                }

                // Raw string bodies may contain anything, including lines
                // that look like hash comments; skip to the closing delimiter.
                if let Some((_, value)) = decl.split_once(" = ") {
                    if let Some(after_r) = value.strip_prefix('r') {
                        let hashes = after_r.chars().take_while(|c| *c == '#').count();
                        if after_r[hashes..].starts_with('"') {
                            let body_start = line.len() - after_r.len() + hashes + 1;
                            let closing = format!("\"{}", "#".repeat(hashes));
                            let body = &rest[body_start..];
                            let end = body.find(&closing).ok_or_else(|| {
                                malformed(&format!("unterminated raw string for {}", constant))
                            })?;
                            rest = split_line(&body[end + closing.len()..]).1;
                            continue;
                        }
                    }
                }
            }

            rest = tail;
        }

        if pending.is_some() {
            return Err(malformed("hash comment at end of file"));
        }
        Ok(recorded)
    }
}

/// Smallest number of `#` (at least one) whose closing delimiter `"#…`
/// does not occur in `content`.
pub fn raw_string_hashes(content: &str) -> usize {
    let mut hashes = 1;
    while content.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    hashes
}

/// Rust literal whose value is exactly `content`.
///
/// rustc rewrites CRLF to LF inside raw strings and rejects a lone CR, so
/// content with any `\r` is written as a single-line escaped literal.
/// Everything else stays a raw string, readable as-is.
pub fn string_literal(content: &str) -> String {
    if content.contains('\r') {
        format!("{:?}", content)
    } else {
        let hashes = "#".repeat(raw_string_hashes(content));
        format!("r{h}\"{}\"{h}", content, h = hashes)
    }
}

fn warning(source_dir: &str, timestamp: &str) -> String {
    let location = if Path::new(source_dir).is_relative() {
        format!("./{}", source_dir)
    } else {
        source_dir.to_string()
    };
    format!(
        "//\n\
         // WARNING DO NOT MANUALLY EDIT - YOUR CHANGES WILL BE OVERRIDDEN\n\
         // MAKE CHANGES AT {location} AND RUN `datagen` TO REGENERATE\n\
         //\n\
         // GENERATED BY datagen {version} AT {timestamp}\n\
         //\n",
        version = datagen_core::VERSION,
    )
}

fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (s, ""),
    }
}

fn malformed(reason: &str) -> datagen_core::error::DatagenError {
    DomainError::MalformedArtifact {
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use datagen_core::domain::{
        ArtifactOrigin, CommitPrefix, ManifestEntry, RepoVersion, ScaffoldFile, VersionLabel,
    };

    fn file(name: &str, constant: &str, content: &str) -> ScaffoldFile {
        ScaffoldFile::from_bytes(
            ManifestEntry::new(name, name, constant).unwrap(),
            content.as_bytes().to_vec(),
        )
        .unwrap()
    }

    fn artifact(label: &str, files: Vec<ScaffoldFile>) -> GeneratedArtifact {
        GeneratedArtifact::new(
            Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap(),
            ArtifactOrigin {
                source_dir: "data/generate".into(),
                output_name: "data.rs".into(),
            },
            RepoVersion::new(
                VersionLabel::from_raw(label),
                CommitPrefix::from_raw("abcdef1234567").unwrap(),
            ),
            files,
        )
    }

    fn sample() -> GeneratedArtifact {
        artifact(
            "v1.2.3\n",
            vec![
                file("Dockerfile", "DATA_DOCKERFILE", "hello\n"),
                file(".gitignore", "DATA_DOT_GITIGNORE", ""),
                file("Makefile", "DATA_MAKEFILE", "hello"),
            ],
        )
    }

    #[test]
    fn renders_version_commit_and_known_fingerprints() {
        let text = RustSourceRenderer.render(&sample()).unwrap();

        assert!(text.contains("pub const VERSION: &str = \"v1.2.3\";\n"));
        assert!(text.contains("pub const COMMIT: &str = \"abcdef1\";\n"));
        assert!(text.contains("// hash:b1946ac92492d2347c6235b4d2611184\n"));
        assert!(text.contains("// hash:d41d8cd98f00b204e9800998ecf8427e\n"));
        assert!(text.contains("// hash:5d41402abc4b2a76b9719d911017c592\n"));
        assert!(text.contains("GENERATED BY datagen"));
        assert!(text.contains("2026-10-17T12:00:00Z"));
    }

    #[test]
    fn hash_line_directly_precedes_constant() {
        let text = RustSourceRenderer.render(&sample()).unwrap();
        assert!(text.contains(
            "// hash:b1946ac92492d2347c6235b4d2611184\npub const DATA_DOCKERFILE: &str = r#\"hello\n\"#;\n"
        ));
    }

    #[test]
    fn content_is_embedded_without_extra_newline() {
        let text = RustSourceRenderer.render(&sample()).unwrap();
        assert!(text.contains("pub const DATA_MAKEFILE: &str = r#\"hello\"#;\n"));
        assert!(text.contains("pub const DATA_DOT_GITIGNORE: &str = r#\"\"#;\n"));
    }

    #[test]
    fn warning_appears_at_both_ends() {
        let text = RustSourceRenderer.render(&sample()).unwrap();
        assert_eq!(text.matches("DO NOT MANUALLY EDIT").count(), 2);
        assert!(text.starts_with("// > data.rs\n"));
        assert!(text.ends_with("// < data.rs\n"));
        assert!(text.contains("MAKE CHANGES AT ./data/generate"));
    }

    #[test]
    fn absolute_source_dir_is_not_prefixed() {
        let artifact = GeneratedArtifact::new(
            Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap(),
            ArtifactOrigin {
                source_dir: "/srv/scaffold".into(),
                output_name: "data.rs".into(),
            },
            RepoVersion::new(
                VersionLabel::from_raw("v1"),
                CommitPrefix::from_raw("abcdef1234567").unwrap(),
            ),
            vec![file("a", "DATA_A", "a")],
        );
        let text = RustSourceRenderer.render(&artifact).unwrap();
        assert!(text.contains("MAKE CHANGES AT /srv/scaffold AND RUN"));
        assert!(!text.contains(".//"));
    }

    #[test]
    fn empty_version_label_renders_empty_string() {
        let text = RustSourceRenderer
            .render(&artifact("", vec![file("a", "DATA_A", "a")]))
            .unwrap();
        assert!(text.contains("pub const VERSION: &str = \"\";\n"));
    }

    #[test]
    fn index_lists_every_file_in_order() {
        let text = RustSourceRenderer.render(&sample()).unwrap();
        assert!(text.contains(
            "pub const SCAFFOLD_FILES: &[(&str, &str)] = &[\n    (\"Dockerfile\", DATA_DOCKERFILE),\n    (\".gitignore\", DATA_DOT_GITIGNORE),\n    (\"Makefile\", DATA_MAKEFILE),\n];\n"
        ));
    }

    #[test]
    fn delimiter_grows_past_embedded_terminators() {
        assert_eq!(raw_string_hashes("plain"), 1);
        assert_eq!(raw_string_hashes("say \"hi\""), 1);
        assert_eq!(raw_string_hashes("r#\"x\"#"), 2);
        assert_eq!(raw_string_hashes("\"# and \"##"), 3);

        let text = RustSourceRenderer
            .render(&artifact(
                "v1",
                vec![file("main.rs", "DATA_MAIN_DOT_RS", "let s = r#\"x\"#;\n")],
            ))
            .unwrap();
        assert!(text.contains("pub const DATA_MAIN_DOT_RS: &str = r##\"let s = r#\"x\"#;\n\"##;\n"));
    }

    #[test]
    fn crlf_content_is_written_as_escaped_literal() {
        let text = RustSourceRenderer
            .render(&artifact(
                "v1",
                vec![file("Dockerfile", "DATA_DOCKERFILE", "FROM rust\r\nRUN \"cargo\"\r\n")],
            ))
            .unwrap();
        assert!(text.contains(
            "pub const DATA_DOCKERFILE: &str = \"FROM rust\\r\\nRUN \\\"cargo\\\"\\r\\n\";\n"
        ));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn lone_carriage_return_is_escaped() {
        assert_eq!(string_literal("a\rb\\"), "\"a\\rb\\\\\"");
        assert_eq!(string_literal("a\nb"), "r#\"a\nb\"#");
    }

    #[test]
    fn extraction_handles_escaped_literals() {
        let artifact = artifact(
            "v1",
            vec![
                file(
                    "Makefile",
                    "DATA_MAKEFILE",
                    "// hash:00000000000000000000000000000000\r\nall:\r",
                ),
                file("main.rs", "DATA_MAIN_DOT_RS", "fn main() {}\n"),
            ],
        );
        let text = RustSourceRenderer.render(&artifact).unwrap();
        let recorded = RustSourceRenderer.extract_fingerprints(&text).unwrap();

        let constants: Vec<&str> = recorded.iter().map(|r| r.constant.as_str()).collect();
        assert_eq!(constants, ["DATA_MAKEFILE", "DATA_MAIN_DOT_RS"]);
        assert_eq!(&recorded[0].fingerprint, artifact.files()[0].fingerprint());
    }

    #[test]
    fn extraction_recovers_rendered_fingerprints() {
        let artifact = artifact(
            "v1.2.3",
            vec![
                file("Dockerfile", "DATA_DOCKERFILE", "FROM rust\n"),
                // Body lines mimic the artifact's own syntax.
                file(
                    "main.rs",
                    "DATA_MAIN_DOT_RS",
                    "// hash:00000000000000000000000000000000\npub const FAKE: &str = r#\"\"#;\n",
                ),
                file("Makefile", "DATA_MAKEFILE", "all:"),
            ],
        );
        let text = RustSourceRenderer.render(&artifact).unwrap();
        let recorded = RustSourceRenderer.extract_fingerprints(&text).unwrap();

        let expected: Vec<RecordedFingerprint> = artifact
            .files()
            .iter()
            .map(|f| RecordedFingerprint {
                constant: f.constant().to_string(),
                fingerprint: f.fingerprint().clone(),
            })
            .collect();
        assert_eq!(recorded, expected);
    }

    #[test]
    fn dangling_hash_comment_is_malformed() {
        let err = RustSourceRenderer
            .extract_fingerprints("// hash:d41d8cd98f00b204e9800998ecf8427e\n")
            .unwrap_err();
        assert!(err.to_string().contains("hash comment at end of file"));
    }

    #[test]
    fn invalid_fingerprint_is_rejected() {
        let text = "// hash:nothex\npub const DATA_X: &str = r#\"\"#;\n";
        assert!(RustSourceRenderer.extract_fingerprints(text).is_err());
    }

    #[test]
    fn unterminated_raw_string_is_malformed() {
        let text = "// hash:d41d8cd98f00b204e9800998ecf8427e\npub const DATA_X: &str = r#\"oops\n";
        assert!(RustSourceRenderer.extract_fingerprints(text).is_err());
    }
}
