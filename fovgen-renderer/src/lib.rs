//! # fovgen-renderer
//!
//! Footprint template store and token substitution engine.
//!
//! The footprint template is a VOTable XML document carrying literal
//! `{TokenName}` placeholders. Rendering substitutes an explicit, ordered
//! list of `(token, value)` pairs, never a map, so the substitution order
//! is deterministic and auditable.
//!
//! ## Usage
//!
//! ```rust
//! use fovgen_renderer::{FootprintContext, FootprintTemplate};
//!
//! let template = FootprintTemplate::embedded();
//! let ctx = FootprintContext {
//!     id: "Cam-Scope".to_string(),
//!     telescope_name: "Scope".to_string(),
//!     instrument_name: "Cam".to_string(),
//!     half_field_width_arcsec: 1139,
//!     half_field_height_arcsec: 857,
//! };
//! let content = template.render_footprint(&ctx);
//! assert!(content.contains("1139"));
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::FootprintContext;
pub use engine::FootprintTemplate;
pub use error::RenderError;
