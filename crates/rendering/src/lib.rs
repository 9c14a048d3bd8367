//! `billcraft-rendering` — parameterized invoice document rendering.
//!
//! One renderer driven by a [`DocumentProfile`] replaces the source
//! system's per-variant template copies. Page layout engines (PDF) stay
//! external; this crate defines the profile contract and ships a plain-text
//! reference renderer.

pub mod profile;
pub mod text;

pub use profile::{DocumentProfile, Letterhead, LineColumn, RenderError, TaxPresentation};
pub use text::{InvoiceRenderer, TextRenderer};
