use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `formstate::form::FormModel` for a struct with named fields.
///
/// Every field type must implement `ToString` and `FromStr`. A companion
/// `<Name>Fields` struct exposes one `FieldKey` accessor per field.
#[proc_macro_derive(FormModel)]
pub fn derive_form_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "FormModel derive currently supports only non-generic structs",
        )
        .to_compile_error()
        .into();
    }

    let model_ident = input.ident;
    let fields_struct_ident = format_ident!("{model_ident}Fields");

    let named_fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new(
                    Span::call_site(),
                    "FormModel derive requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                Span::call_site(),
                "FormModel derive is only supported on structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let krate = formstate_path();
    let mut field_names = Vec::new();
    let mut key_methods = Vec::new();
    let mut to_value_stmts = Vec::new();
    let mut from_value_inits = Vec::new();

    for field in named_fields {
        let Some(field_ident) = field.ident else {
            continue;
        };
        let field_ty = field.ty;
        let field_name = field_ident.unraw().to_string();

        key_methods.push(quote! {
            pub const fn #field_ident(&self) -> #krate::form::FieldKey {
                #krate::form::FieldKey::new(#field_name)
            }
        });

        to_value_stmts.push(quote! {
            values.insert(
                #krate::form::FieldKey::new(#field_name),
                ::std::string::ToString::to_string(&self.#field_ident),
            );
        });

        from_value_inits.push(quote! {
            #field_ident: #krate::form::parse_field::<#field_ty>(values, #field_name)?
        });

        field_names.push(field_name);
    }

    quote! {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #fields_struct_ident;

        impl #fields_struct_ident {
            #(#key_methods)*
        }

        impl #krate::form::FormModel for #model_ident {
            type Fields = #fields_struct_ident;

            fn fields() -> Self::Fields {
                #fields_struct_ident
            }

            fn field_names() -> &'static [&'static str] {
                &[#(#field_names),*]
            }

            fn to_values(&self) -> #krate::form::FieldValues {
                let mut values = #krate::form::FieldValues::new();
                #(#to_value_stmts)*
                values
            }

            fn from_values(
                values: &#krate::form::FieldValues,
            ) -> #krate::form::FormResult<Self> {
                ::std::result::Result::Ok(Self {
                    #(#from_value_inits),*
                })
            }
        }
    }
    .into()
}

fn formstate_path() -> TokenStream2 {
    match crate_name("formstate") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::formstate),
    }
}
