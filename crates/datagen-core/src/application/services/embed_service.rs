//! Embed Service - main application orchestrator.
//!
//! This service coordinates a generation run:
//! 1. Read and fingerprint every scaffold file in the manifest
//! 2. Resolve the repository version (tag + commit prefix)
//! 3. Render the artifact
//! 4. Write it to the output path
//!
//! Every step must succeed before anything is written. The same reads back
//! the `check` use case, which compares an existing artifact with its sources.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{ArtifactRenderer, Filesystem, VersionControl},
    domain::{
        ArtifactOrigin, CheckReport, CommitPrefix, DomainValidator as validator, Fingerprint,
        GeneratedArtifact, ManifestEntry, RepoVersion, ScaffoldFile, ScaffoldManifest,
        VersionLabel,
    },
    error::{DatagenError, DatagenResult},
};

/// Where scaffold sources are read from and where the artifact goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    source_dir: PathBuf,
    output: PathBuf,
}

impl Layout {
    /// Default scaffold source directory, relative to the root.
    pub const DEFAULT_SOURCE_DIR: &'static str = "data/generate";
    /// Default artifact path, relative to the root.
    pub const DEFAULT_OUTPUT: &'static str = "data.rs";

    /// Layout rooted at `root` (normally the working directory) with the
    /// default source directory and output path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_dir: PathBuf::from(Self::DEFAULT_SOURCE_DIR),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
        }
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a manifest entry's source file.
    pub fn source_path(&self, entry: &ManifestEntry) -> PathBuf {
        entry.path().resolve(self.root.join(&self.source_dir))
    }

    /// Absolute location of the artifact.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    fn origin(&self) -> ArtifactOrigin {
        let output_name = self
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string());
        ArtifactOrigin {
            source_dir: self.source_dir.display().to_string(),
            output_name,
        }
    }
}

/// Artifact plus its rendered text, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub artifact: GeneratedArtifact,
    pub text: String,
}

/// What a successful `generate` produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub output: PathBuf,
    pub version: RepoVersion,
    pub files: Vec<EmbeddedFile>,
    pub bytes: usize,
}

/// One embedded file as reported after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedFile {
    pub name: String,
    pub constant: String,
    pub fingerprint: Fingerprint,
}

impl GenerationSummary {
    fn new(output: PathBuf, rendered: &RenderedArtifact) -> Self {
        Self {
            output,
            version: rendered.artifact.version().clone(),
            files: rendered
                .artifact
                .files()
                .iter()
                .map(|f| EmbeddedFile {
                    name: f.name().to_string(),
                    constant: f.constant().to_string(),
                    fingerprint: f.fingerprint().clone(),
                })
                .collect(),
            bytes: rendered.text.len(),
        }
    }
}

/// Main embedding service.
///
/// Orchestrates reading, fingerprinting, version lookup, rendering and writing.
pub struct EmbedService {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    renderer: Box<dyn ArtifactRenderer>,
    manifest: ScaffoldManifest,
    layout: Layout,
}

impl EmbedService {
    /// Create a service over the standard manifest.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use datagen_core::application::{EmbedService, Layout};
    ///
    /// let service = EmbedService::new(
    ///     filesystem, // impl Filesystem
    ///     vcs,        // impl VersionControl
    ///     renderer,   // impl ArtifactRenderer
    ///     Layout::new(std::env::current_dir()?),
    /// );
    /// let summary = service.generate()?;
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
        renderer: Box<dyn ArtifactRenderer>,
        layout: Layout,
    ) -> Self {
        Self {
            filesystem,
            vcs,
            renderer,
            manifest: ScaffoldManifest::standard(),
            layout,
        }
    }

    /// Replace the manifest. Used by tests that embed fewer files.
    pub fn with_manifest(mut self, manifest: ScaffoldManifest) -> DatagenResult<Self> {
        validator::validate_manifest(&manifest).map_err(DatagenError::Domain)?;
        self.manifest = manifest;
        Ok(self)
    }

    pub fn manifest(&self) -> &ScaffoldManifest {
        &self.manifest
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Generate the artifact stamped with the current time.
    pub fn generate(&self) -> DatagenResult<GenerationSummary> {
        self.generate_at(Utc::now())
    }

    /// Generate the artifact stamped with `at` and write it in full.
    #[instrument(
        skip_all,
        fields(output = %self.layout.output_path().display(), files = self.manifest.len())
    )]
    pub fn generate_at(&self, at: DateTime<Utc>) -> DatagenResult<GenerationSummary> {
        let rendered = self.render_at(at)?;

        let output = self.layout.output_path();
        self.filesystem.write_file(&output, &rendered.text)?;

        info!(
            bytes = rendered.text.len(),
            version = %rendered.artifact.version(),
            "Artifact written"
        );
        Ok(GenerationSummary::new(output, &rendered))
    }

    /// Render the artifact stamped with the current time, without writing it.
    pub fn render(&self) -> DatagenResult<RenderedArtifact> {
        self.render_at(Utc::now())
    }

    /// Build and render the artifact without writing it.
    pub fn render_at(&self, at: DateTime<Utc>) -> DatagenResult<RenderedArtifact> {
        let files = self.read_all()?;
        let version = self.resolve_repo_version()?;

        let artifact = GeneratedArtifact::new(at, self.layout.origin(), version, files);
        let text = self.renderer.render(&artifact)?;
        debug!(bytes = text.len(), "Artifact rendered");

        Ok(RenderedArtifact { artifact, text })
    }

    /// Read one scaffold file and fingerprint its raw bytes.
    #[instrument(skip_all, fields(name = entry.name()))]
    pub fn read_scaffold_file(&self, entry: &ManifestEntry) -> DatagenResult<ScaffoldFile> {
        let path = self.layout.source_path(entry);
        let bytes = self.filesystem.read_file(&path)?;
        let file = ScaffoldFile::from_bytes(entry.clone(), bytes)?;
        debug!(
            path = %path.display(),
            fingerprint = %file.fingerprint(),
            "Scaffold file read"
        );
        Ok(file)
    }

    /// Look up the nearest tag and the HEAD commit prefix.
    ///
    /// A failed tag lookup yields an empty label; a missing or short commit
    /// hash is an error.
    #[instrument(skip_all)]
    pub fn resolve_repo_version(&self) -> DatagenResult<RepoVersion> {
        self.vcs.ensure_available()?;

        let label = match self.vcs.nearest_tag()? {
            Some(raw) => VersionLabel::from_raw(&raw),
            None => {
                warn!("No tag reachable from HEAD, version will be empty");
                VersionLabel::empty()
            }
        };

        let raw_commit = self.vcs.head_commit()?;
        let commit = CommitPrefix::from_raw(&raw_commit)?;

        let version = RepoVersion::new(label, commit);
        info!(%version, "Repository version resolved");
        Ok(version)
    }

    /// Compare the existing artifact against the current scaffold sources.
    #[instrument(skip_all, fields(artifact = %self.layout.output_path().display()))]
    pub fn check(&self) -> DatagenResult<CheckReport> {
        let output = self.layout.output_path();
        let bytes = self.filesystem.read_file(&output)?;
        let text = String::from_utf8(bytes).map_err(|_| {
            DatagenError::Domain(crate::domain::DomainError::MalformedArtifact {
                reason: format!("{} is not valid UTF-8", output.display()),
            })
        })?;

        let recorded = self.renderer.extract_fingerprints(&text)?;
        let sources = self.read_all()?;
        let report = CheckReport::compare(output, &sources, &recorded);

        if report.is_current() {
            info!("Artifact is up to date");
        } else {
            warn!(outdated = ?report.outdated(), "Artifact is out of date");
        }
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn read_all(&self) -> DatagenResult<Vec<ScaffoldFile>> {
        self.manifest
            .entries()
            .iter()
            .map(|entry| self.read_scaffold_file(entry))
            .collect()
    }
}
