use darling::{
    FromDeriveInput, FromField,
    util::{Flag, Ignored},
};
use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{DeriveInput, parse_macro_input, spanned::Spanned};

#[derive(FromDeriveInput)]
#[darling(attributes(bind), supports(struct_named))]
struct BindableInput {
    // Pull out all named fields and let darling map each one via `BindableField`.
    data: darling::ast::Data<Ignored, BindableField>,
    generics: syn::Generics,
    ident: syn::Ident,
}

#[derive(FromField)]
#[darling(attributes(bind))]
struct BindableField {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    required: Flag,
    max_length: Option<String>,
    trimlower: Flag,
    validate: Option<String>,
    nested: Flag,
}

// The slot a field compiles down to, picked syntactically from its type.
enum FieldShape {
    Text,
    OptionalText,
    Flag,
    Nested,
    OptionalNested,
    Opaque,
}

pub(crate) fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_bindable(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_bindable(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    let input = BindableInput::from_derive_input(&input)?;
    reject_invalid_inputs(&input)?;

    let struct_ident = &input.ident;
    let fields = input
        .data
        .take_struct()
        // This should never panic, since we reject unsupported shapes earlier on, automatically,
        // via `darling`.
        .expect("`Bindable` only supports structs with named fields.");

    let descriptors = fields
        .iter()
        .map(field_descriptor)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #[automatically_derived]
        impl ::corral::Bindable for #struct_ident {
            fn fields(&mut self) -> ::std::vec::Vec<::corral::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}

fn field_descriptor(field: &BindableField) -> Result<proc_macro2::TokenStream, darling::Error> {
    // Named-field structs only, enforced by darling.
    let ident = field.ident.as_ref().expect("named field");
    let name = ident.to_string();
    let ty_span = field.ty.span();

    if field.nested.is_present()
        && (field.max_length.is_some() || field.trimlower.is_present() || field.validate.is_some())
    {
        return Err(darling::Error::custom(format!(
            "`{ident}` can't combine `nested` with string rules.\n\
             Attach `max_length`, `trimlower`, or `validate` to the fields of the nested type instead.",
        ))
        .with_span(ident));
    }

    let required = field.required.is_present();
    let trimlower = field.trimlower.is_present();
    let max_length = option_literal(field.max_length.as_deref());
    let validate = option_literal(field.validate.as_deref());

    let slot = match classify(&field.ty, field.nested.is_present()) {
        FieldShape::Text => quote_spanned! { ty_span =>
            ::corral::Slot::Text(&mut self.#ident)
        },
        FieldShape::OptionalText => quote_spanned! { ty_span =>
            ::corral::Slot::OptionalText(&mut self.#ident)
        },
        FieldShape::Flag => quote! { ::corral::Slot::Flag },
        FieldShape::Nested => quote_spanned! { ty_span =>
            ::corral::Slot::Nested(&mut self.#ident)
        },
        FieldShape::OptionalNested => quote_spanned! { ty_span =>
            ::corral::Slot::OptionalNested(
                self.#ident.as_mut().map(|nested| nested as &mut dyn ::corral::Bindable),
            )
        },
        FieldShape::Opaque => quote_spanned! { ty_span =>
            ::corral::Slot::Opaque {
                absent: ::corral::Absent::is_absent(&self.#ident),
            }
        },
    };

    Ok(quote! {
        ::corral::Field {
            name: #name,
            rules: ::corral::RuleSet {
                required: #required,
                max_length: #max_length,
                trimlower: #trimlower,
                validate: #validate,
            },
            slot: #slot,
        }
    })
}

fn option_literal(value: Option<&str>) -> proc_macro2::TokenStream {
    match value {
        Some(value) => quote! { ::std::option::Option::Some(#value) },
        None => quote! { ::std::option::Option::None },
    }
}

fn classify(ty: &syn::Type, nested: bool) -> FieldShape {
    if nested {
        return if option_payload(ty).is_some() {
            FieldShape::OptionalNested
        } else {
            FieldShape::Nested
        };
    }
    if is_path_to(ty, "String") {
        return FieldShape::Text;
    }
    if is_path_to(ty, "bool") {
        return FieldShape::Flag;
    }
    if let Some(payload) = option_payload(ty)
        && is_path_to(payload, "String")
    {
        return FieldShape::OptionalText;
    }
    FieldShape::Opaque
}

// Matches on the last path segment: `String` and `std::string::String` are
// both recognized, type aliases are not.
fn is_path_to(ty: &syn::Type, name: &str) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none()
        && path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name && segment.arguments.is_none())
}

fn option_payload(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    if arguments.args.len() != 1 {
        return None;
    }
    match arguments.args.first()? {
        syn::GenericArgument::Type(payload) => Some(payload),
        _ => None,
    }
}

fn reject_invalid_inputs(input: &BindableInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    // Reject structs with generic type parameters.
    if let Some(generic) = input.generics.type_params().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bindable)]` can't be applied to structs with generic type parameters, such as `{struct_ident}`.\n\n\
            help: Consider using concrete types instead.",
        ))
        .with_span(generic));
    }
    // Borrowed fields can't be filled in by a deserializer that owns nothing,
    // so lifetimes are rejected outright.
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bindable)]` can't be applied to structs with generic lifetimes, such as `{struct_ident}`.",
        ))
        .with_span(lifetime));
    }
    Ok(())
}
