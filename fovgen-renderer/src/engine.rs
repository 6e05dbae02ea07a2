//! Footprint template store and substitution engine.

use std::path::Path;

use crate::context::FootprintContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded template — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const FOOTPRINT_XML: &str = include_str!("templates/footprint.xml");

/// A footprint template: VOTable XML with literal `{TokenName}` placeholders.
#[derive(Debug, Clone)]
pub struct FootprintTemplate {
    text: String,
}

impl FootprintTemplate {
    /// The default template shipped with the binary.
    pub fn embedded() -> Self {
        FootprintTemplate {
            text: FOOTPRINT_XML.to_string(),
        }
    }

    /// Load a template override from a file.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let text = std::fs::read_to_string(path).map_err(|e| RenderError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(FootprintTemplate { text })
    }

    /// Wrap an in-memory template string.
    pub fn from_text(text: impl Into<String>) -> Self {
        FootprintTemplate { text: text.into() }
    }

    /// Substitute `(token, value)` pairs in order.
    ///
    /// Each pair replaces every occurrence of `{token}`. Tokens absent from
    /// `substitutions` are left in place verbatim.
    pub fn render(&self, substitutions: &[(&str, String)]) -> String {
        let mut output = self.text.clone();
        for (token, value) in substitutions {
            output = output.replace(&format!("{{{token}}}"), value);
        }
        output
    }

    /// Render one camera-optic footprint.
    pub fn render_footprint(&self, ctx: &FootprintContext) -> String {
        self.render(&ctx.substitutions())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
