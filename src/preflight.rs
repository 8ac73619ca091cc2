//! Startup precondition checks.
//!
//! The embedded scaffold carries a manifest declaring the artifact format
//! version its templates were authored for. The binary refuses to run against
//! a scaffold it cannot faithfully produce artifacts for. This is an explicit
//! initialization step invoked once by `main`, not a load-time side effect.

use serde::Deserialize;

use crate::error::{NumsecError, Result};
use crate::templates;

/// Artifact format version this binary knows how to produce.
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Embedded scaffold manifest.
#[derive(Debug, Deserialize)]
struct ScaffoldManifest {
    format_version: u32,
}

/// Verify startup preconditions.
///
/// Fails before any command runs if the embedded scaffold declares an
/// artifact format version this binary does not support.
pub fn check() -> Result<()> {
    let manifest: ScaffoldManifest = serde_json::from_str(templates::manifest_source()?)
        .map_err(|e| NumsecError::Other(anyhow::anyhow!("invalid scaffold manifest: {e}")))?;

    if manifest.format_version != SUPPORTED_FORMAT_VERSION {
        return Err(NumsecError::UnsupportedArtifactFormat {
            found: manifest.format_version,
            supported: SUPPORTED_FORMAT_VERSION,
        });
    }

    tracing::debug!(
        format_version = manifest.format_version,
        "preflight passed"
    );
    Ok(())
}
