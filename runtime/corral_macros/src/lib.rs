//! Procedural macros for `corral`.
//!
//! Don't depend on this crate directly: every macro defined here is
//! re-exported by `corral` itself.

mod bindable;

use proc_macro::TokenStream;

/// Derive `corral::Bindable` for a struct with named fields.
///
/// The derive turns the struct definition, plus the `#[bind(...)]` attributes
/// attached to its fields, into the ordered list of field descriptors that
/// `corral`'s rule walker consumes.
///
/// # Field attributes
///
/// - `#[bind(required)]` — the field must be present (non-zero) after decoding.
/// - `#[bind(max_length = "N")]` — truncate a longer string value to its first
///   `N` characters.
/// - `#[bind(trimlower)]` — trim surrounding whitespace and lower-case the
///   string value.
/// - `#[bind(validate = "email")]` / `#[bind(validate = "phone")]` — enforce
///   the named format.
/// - `#[bind(nested)]` — the field's type (or the payload of its `Option`) is
///   itself `Bindable`; the walker descends into it.
///
/// The `max_length` and `validate` arguments are passed through verbatim and
/// checked when the rules run, so a malformed argument surfaces as a
/// validation-time configuration error rather than silently misbehaving.
#[proc_macro_derive(Bindable, attributes(bind))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    bindable::derive_bindable(input)
}
