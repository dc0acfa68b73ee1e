//! Config derive macro - generates the FIELDS accessor struct.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Lit};

/// Generate the Config implementation (FIELDS constant).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = Ident::new(&format!("{}Fields", name), name.span());

    let section = get_string_attr(&input.attrs, "section")
        .unwrap_or_else(|| infer_section(&name.to_string()));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let infos: Vec<FieldInfo> = fields.iter().filter_map(FieldInfo::from_field).collect();
    let visible: Vec<&FieldInfo> = infos.iter().filter(|f| !f.skip).collect();

    let field_defs = visible.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = visible.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.config_name.clone()
        } else {
            format!("{}.{}", section, f.config_name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }
    }
}

/// Per-field derive input.
struct FieldInfo {
    name: Ident,
    /// Name used in the generated path (honors `#[config(name = "x")]`).
    config_name: String,
    skip: bool,
}

impl FieldInfo {
    fn from_field(field: &Field) -> Option<Self> {
        let name = field.ident.clone()?;
        let config_name =
            get_string_attr(&field.attrs, "name").unwrap_or_else(|| name.to_string());
        let skip = has_attr(&field.attrs, "skip");
        Some(Self {
            name,
            config_name,
            skip,
        })
    }
}

/// Get string value from #[config(key = "value")].
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Skip value if present (e.g., `name = "x"`)
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Infer section name from struct name: `I18nConfig` → `i18n`.
fn infer_section(struct_name: &str) -> String {
    let base = struct_name.strip_suffix("Config").unwrap_or(struct_name);
    let mut out = String::with_capacity(base.len() + 4);
    for (i, c) in base.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
