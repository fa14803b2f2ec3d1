//! Mode-dependent public names for emitted artifacts.
//!
//! Development and test builds keep stable names so reload tooling can track
//! files. Production builds interpolate a content digest so unchanged content
//! keeps its cache entry and changed content invalidates it.

use std::fmt;

use sha2::{Digest, Sha256};

use kf_config::Mode;

/// Hex characters of the SHA-256 digest kept in public names.
pub const DIGEST_LEN: usize = 20;

/// Digest of an artifact's content bytes, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn of(content: &[u8]) -> Self {
        let hash = format!("{:x}", Sha256::digest(content));
        Self(hash[..DIGEST_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of file an artifact is; selects the filename template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Script,
    Style,
    StyleChunk,
}

/// An emitted file. Its public name is always derived, never stored.
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    pub logical_name: String,
    pub content: Vec<u8>,
}

impl OutputArtifact {
    pub fn new(logical_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            logical_name: logical_name.into(),
            content: content.into(),
        }
    }

    pub fn digest(&self) -> ContentDigest {
        ContentDigest::of(&self.content)
    }

    pub fn public_name(&self, namer: &OutputNamer) -> String {
        namer.name_for(&self.logical_name, &self.digest())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputNamer {
    mode: Mode,
}

impl OutputNamer {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_content_addressed(&self) -> bool {
        self.mode.is_prod()
    }

    /// Public name for `logical_name`.
    ///
    /// Production inserts the digest before the extension of the final path
    /// segment (`js/main.js` → `js/main.<digest>.js`); names without an
    /// extension get it appended. Other modes return the name unchanged.
    pub fn name_for(&self, logical_name: &str, digest: &ContentDigest) -> String {
        if !self.is_content_addressed() {
            return logical_name.to_string();
        }

        let file_start = logical_name.rfind('/').map_or(0, |i| i + 1);
        match logical_name[file_start..].rfind('.') {
            Some(dot) if dot > 0 => {
                let dot = file_start + dot;
                format!("{}.{}{}", &logical_name[..dot], digest, &logical_name[dot..])
            }
            _ => format!("{}.{}", logical_name, digest),
        }
    }

    /// Filename template handed to the emitter for `kind`.
    pub fn template(&self, kind: ArtifactKind) -> &'static str {
        match (kind, self.is_content_addressed()) {
            (ArtifactKind::Script, false) => "[name].js",
            (ArtifactKind::Script, true) => "[name].[contenthash].js",
            (ArtifactKind::Style, false) => "[name].css",
            (ArtifactKind::Style, true) => "[name].[contenthash].css",
            (ArtifactKind::StyleChunk, false) => "[id].css",
            (ArtifactKind::StyleChunk, true) => "[id].[contenthash].css",
        }
    }

    /// Expand `[name]`, `[id]` and `[contenthash]` in `template`.
    pub fn render_template(
        template: &str,
        name: &str,
        id: &str,
        digest: &ContentDigest,
    ) -> String {
        template
            .replace("[name]", name)
            .replace("[id]", id)
            .replace("[contenthash]", digest.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_truncated_hex() {
        let digest = ContentDigest::of(b"console.log(1)");
        assert_eq!(digest.as_str().len(), DIGEST_LEN);
        assert!(digest.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_of_empty_content_is_sha256_prefix() {
        assert_eq!(
            ContentDigest::of(b"").as_str(),
            "e3b0c44298fc1c149afb"
        );
    }

    #[test]
    fn production_inserts_digest_before_extension() {
        let namer = OutputNamer::new(Mode::Production);
        let digest = ContentDigest::of(b"body {}");
        assert_eq!(
            namer.name_for("main.css", &digest),
            format!("main.{digest}.css")
        );
        assert_eq!(
            namer.name_for("js/vendor.chunk.js", &digest),
            format!("js/vendor.chunk.{digest}.js")
        );
    }

    #[test]
    fn production_appends_digest_without_extension() {
        let namer = OutputNamer::new(Mode::Production);
        let digest = ContentDigest::of(b"x");
        assert_eq!(namer.name_for("LICENSE", &digest), format!("LICENSE.{digest}"));
        assert_eq!(namer.name_for(".env", &digest), format!(".env.{digest}"));
        assert_eq!(
            namer.name_for("v1.2/notes", &digest),
            format!("v1.2/notes.{digest}")
        );
    }

    #[test]
    fn development_and_test_keep_names() {
        let digest = ContentDigest::of(b"x");
        for mode in [Mode::Development, Mode::Test] {
            assert_eq!(OutputNamer::new(mode).name_for("main.js", &digest), "main.js");
        }
    }

    #[test]
    fn templates_follow_mode() {
        let dev = OutputNamer::new(Mode::Development);
        let prod = OutputNamer::new(Mode::Production);
        assert_eq!(dev.template(ArtifactKind::Script), "[name].js");
        assert_eq!(prod.template(ArtifactKind::Style), "[name].[contenthash].css");
        assert_eq!(prod.template(ArtifactKind::StyleChunk), "[id].[contenthash].css");
    }

    #[test]
    fn rendered_template_matches_name_for() {
        let namer = OutputNamer::new(Mode::Production);
        let artifact = OutputArtifact::new("main.js", b"export {}".to_vec());
        let rendered = OutputNamer::render_template(
            namer.template(ArtifactKind::Script),
            "main",
            "0",
            &artifact.digest(),
        );
        assert_eq!(rendered, artifact.public_name(&namer));
    }
}
