//! Derive macros for the Taskwire architecture
//!
//! This crate provides procedural macros to reduce boilerplate when
//! defining action enums for Taskwire stores.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums
//!   (commands/responses)
//!
//! # Example
//!
//! ```ignore
//! use taskwire_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum ListAction {
//!     #[command]
//!     Refresh,
//!
//!     #[response]
//!     Refreshed { items: Vec<String> },
//! }
//!
//! // Generated methods:
//! assert!(ListAction::Refresh.is_command());
//! assert!(ListAction::Refreshed { items: vec![] }.is_response());
//! assert_eq!(ListAction::Refresh.name(), "Refresh");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command (user or
///   startup intent)
/// - `is_response()` - Returns true if this variant is a response (the
///   resolution of an effect, such as an API call or timer)
/// - `name()` - Returns the variant name, for logging and notifications
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command
/// - `#[response]` - Mark a variant as a response
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[response]` attributes
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoAppAction {
///     #[command]
///     Load,
///
///     #[response]
///     TodosLoaded { todos: Vec<Todo> },
///
///     #[response]
///     LoadFailed { error: String },
/// }
///
/// // Usage:
/// let action = TodoAppAction::Load;
/// assert!(action.is_command());
/// assert!(!action.is_response());
/// assert_eq!(action.name(), "Load");
/// ```
#[proc_macro_derive(Action, attributes(command, response))]
#[allow(clippy::expect_used)] // Proc macro panics become compile errors, not runtime panics
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Collect variants marked as commands or responses
    let mut command_variants = Vec::new();
    let mut response_variants = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let is_command = has_attribute(&variant.attrs, "command");
        let is_response = has_attribute(&variant.attrs, "response");

        if is_command && is_response {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[command] and #[response]",
            )
            .to_compile_error()
            .into();
        }

        if is_command {
            command_variants.push(variant_name);
        }

        if is_response {
            response_variants.push(variant_name);
        }
    }

    // Build a map of variant names to their field types for efficient lookup
    let variant_map: std::collections::HashMap<_, _> = data_enum
        .variants
        .iter()
        .map(|v| (&v.ident, &v.fields))
        .collect();

    // Generate is_command() match arms
    let is_command_arms = command_variants.iter().map(|variant| {
        // SAFETY: We collected these variants from data_enum.variants above, so they must exist
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => true, },
            Fields::Unit => quote! { Self::#variant => true, },
        }
    });

    // Generate is_response() match arms
    let is_response_arms = response_variants.iter().map(|variant| {
        // SAFETY: We collected these variants from data_enum.variants above, so they must exist
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => true, },
            Fields::Unit => quote! { Self::#variant => true, },
        }
    });

    // Generate name() match arms for every variant
    let name_arms = data_enum.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_ident { .. } => #variant_name, },
            Fields::Unnamed(_) => quote! { Self::#variant_ident(..) => #variant_name, },
            Fields::Unit => quote! { Self::#variant_ident => #variant_name, },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a command
            #[must_use]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#is_command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is a response
            #[must_use]
            pub const fn is_response(&self) -> bool {
                match self {
                    #(#is_response_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name, for logging and notifications
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
