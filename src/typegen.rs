//! JSON → typed-model code generator.
//!
//! Walk a parsed JSON sample, synthesize one named type per object shape
//! encountered, then emit the whole set in dependency order as TypeScript
//! interfaces or Java DTOs (Lombok-annotated classes or records).
//!
//! Names are path-derived: a nested object found under key `address` with
//! suffix `api` becomes `IAddressApi` (TypeScript) or `AddressApiDto` (Java).
//! Two structurally identical shapes at different paths stay distinct types.

pub mod registry;
pub mod render;
pub mod walker;

use crate::input::{self, InputError};
use self::registry::Registry;
use self::walker::Walker;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypegenError {
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Target notation for the emitted source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    TypeScript,
    Java,
}

/// Rendering style for the Java target; ignored for TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JavaStyle {
    #[default]
    Lombok,
    Record,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Base name for the root type, e.g. `Product`.
    pub root_name: String,
    /// Optional name suffix, e.g. `Api` → `IProductApi` / `ProductApiDto`.
    pub suffix: String,
    pub target: Target,
    pub java_style: JavaStyle,
}

impl Target {
    /// Full type name for an object found under `base` (a property key or
    /// the user-supplied root name). Keys are camel-cased before
    /// capitalization so separator-bearing keys yield valid identifiers.
    pub fn type_name(&self, base: &str, suffix: &str) -> String {
        let base = capitalize_first(&camel_case(base.trim()));
        let suffix = capitalize_first(suffix.trim());
        match self {
            Target::TypeScript => format!("I{base}{suffix}"),
            Target::Java => format!("{base}{suffix}Dto"),
        }
    }

    /// Coerce a name hint into this target's convention. Hints built by
    /// [`Target::type_name`] pass through unchanged.
    pub(crate) fn canonical_type_name(&self, hint: &str) -> String {
        match self {
            Target::TypeScript if hint.starts_with('I') => hint.to_string(),
            Target::TypeScript => format!("I{hint}"),
            Target::Java if hint.ends_with("Dto") => hint.to_string(),
            Target::Java => format!("{hint}Dto"),
        }
    }

    /// Item type name for an array reached without a property key (the root
    /// value itself, or a directly nested array).
    pub(crate) fn item_type_name(&self, hint: &str) -> String {
        match self {
            Target::TypeScript => format!("{hint}Item"),
            Target::Java => format!("{hint}ItemDto"),
        }
    }

    pub(crate) fn untyped(&self) -> &'static str {
        match self {
            Target::TypeScript => "any",
            Target::Java => "Object",
        }
    }

    pub(crate) fn untyped_list(&self) -> &'static str {
        match self {
            Target::TypeScript => "any[]",
            Target::Java => "List<Object>",
        }
    }
}

/// Generate source text for `json_text`.
///
/// Returns `Ok(None)` when either the JSON input or the root name is blank:
/// that is "nothing to do yet", not an error, so callers can regenerate on
/// every keystroke. Invalid JSON is a single error with no partial output.
pub fn generate(
    json_text: &str,
    options: &GenerateOptions,
) -> Result<Option<String>, TypegenError> {
    if json_text.trim().is_empty() || options.root_name.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = input::json_from_str(json_text)?;

    // Fresh registry per run; the walker owns all registration.
    let mut registry = Registry::new();
    let root_name = options.target.type_name(&options.root_name, &options.suffix);
    let mut walker = Walker::new(&mut registry, options.target, &options.suffix);
    walker.infer(&value, &root_name, "");

    let blocks: Vec<String> = registry
        .ordered()
        .into_iter()
        .map(|ty| render::render(ty, options))
        .collect();
    Ok(Some(blocks.join("\n\n")))
}

/// Upper-case the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a JSON key to camelCase: each `-`/`_` followed by a character is
/// dropped and that character upper-cased. Trailing separators survive.
pub(crate) fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if (c == '-' || c == '_') && chars.peek().is_some() {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out
}
