use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::Span;
use quote::format_ident;
use syn::Ident;

use crate::error::GenerateError;

/// Upper-cases the first letter of every word. Anything other than a letter,
/// digit or `_` separates words.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Lower-cases only the first character.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates the identifier for the error enum: `[TypeName]Error`
pub fn error_ident(type_name: &Ident) -> Ident {
    format_ident!("{}Error", type_name)
}

/// Generates the identifier for the event descriptor struct: `[TypeName]Transition`
pub fn transition_ident(type_name: &Ident) -> Ident {
    format_ident!("{}Transition", type_name)
}

/// Generates the identifier for the dynamic event enum: `[TypeName]Event`
pub fn event_enum_ident(type_name: &Ident) -> Ident {
    format_ident!("{}Event", type_name)
}

/// `Still` -> `STILL`, `moveEvent` -> `MOVE_EVENT`.
pub fn const_ident(name: &str) -> Result<Ident, GenerateError> {
    rust_ident(&name.to_shouty_snake_case(), name)
}

/// `ToCrash` -> `to_crash`, `Move` -> `r#move`.
pub fn fn_ident(name: &str) -> Result<Ident, GenerateError> {
    rust_ident(&name.to_snake_case(), name)
}

/// `to crash` -> `ToCrash`.
pub fn variant_ident(name: &str) -> Result<Ident, GenerateError> {
    rust_ident(&name.to_upper_camel_case(), name)
}

/// Type identifier exactly as declared.
pub fn type_ident(name: &str) -> Result<Ident, GenerateError> {
    rust_ident(name, name)
}

fn rust_ident(candidate: &str, original: &str) -> Result<Ident, GenerateError> {
    let invalid = || GenerateError::InvalidIdentifier {
        name: original.to_string(),
    };

    let mut chars = candidate.chars();
    let shaped = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    if !shaped || candidate == "_" {
        return Err(invalid());
    }

    if syn::parse_str::<Ident>(candidate).is_ok() {
        return Ok(Ident::new(candidate, Span::call_site()));
    }
    // Keywords like `move` or `loop` are still usable in raw form.
    if ["self", "Self", "super", "crate"].contains(&candidate) {
        return Err(invalid());
    }
    Ok(Ident::new_raw(candidate, Span::call_site()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("still"), "Still");
        assert_eq!(title_case("in progress"), "In Progress");
        assert_eq!(title_case("to_crash"), "To_crash");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn lower_first_touches_one_char() {
        assert_eq!(lower_first("ToCrash"), "toCrash");
        assert_eq!(lower_first("M"), "m");
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        assert_eq!(fn_ident("Move").unwrap().to_string(), "r#move");
        assert_eq!(fn_ident("ToCrash").unwrap().to_string(), "to_crash");
        assert_eq!(const_ident("moveEvent").unwrap().to_string(), "MOVE_EVENT");
    }

    #[test]
    fn unspellable_names_are_rejected() {
        assert!(matches!(
            fn_ident("Self"),
            Err(GenerateError::InvalidIdentifier { .. })
        ));
        assert!(const_ident("3d").is_err());
        assert!(type_ident("").is_err());
    }
}
