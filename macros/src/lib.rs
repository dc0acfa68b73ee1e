//! Proc macros for quanta-docs.
//!
//! # Config derive macro
//!
//! Generates typed field path accessors for configuration structs, so
//! diagnostics can reference fields without stringly-typed paths.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "i18n")]
//! pub struct I18nConfig {
//!     pub default_locale: String,
//!     pub locales: Vec<String>,
//! }
//!
//! // Generates:
//! // - I18nConfig::FIELDS.default_locale -> FieldPath("i18n.default_locale")
//! // - I18nConfig::FIELDS.locales       -> FieldPath("i18n.locales")
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - section path prefix
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (internal use)
//! - `#[config(name = "x")]` - Custom field name
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `I18nConfig` → `i18n`
//! - `NavbarConfig` → `navbar`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates the FIELDS accessor struct.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
