//! # flo-templates
//!
//! Jinja-style rendering for flo, isolated from the engine's own error types.
//!
//! ```rust
//! use flo_templates::{context, render_from_string};
//!
//! let out = render_from_string("hello {{ name }}", context! { name => "flo" }).unwrap();
//! assert_eq!(out, "hello flo");
//! ```
//!
//! Every call builds its own environment; nothing configured for one render
//! is visible to the next.

mod error;
pub mod render;

pub use error::TemplateError;
pub use minijinja::context;
pub use render::{
    render_from_dir, render_from_file, render_from_string, template_dir, STRING_TEMPLATE_NAME,
};
