//! `#[derive(IsContinuation)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, Ident, Index, Type, parse_macro_input,
    parse_quote,
};

/// A flag inside `#[continuation(...)]`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Flag {
    Always,
    Never,
    Forward,
}

/// Implementation of `#[derive(IsContinuation)]`.
pub fn derive_is_continuation_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fixed = container_answer(&input.attrs)?;
    let fallback = match fixed {
        Some(answer) => quote! { #answer },
        None => quote! { ::segue::default_is_continuation(self) },
    };

    let mut forwarded: Vec<Type> = Vec::new();

    let body = match &input.data {
        Data::Struct(data) => match forwarded_field(&data.fields, fixed.is_some())? {
            Some((index, field)) => {
                forwarded.push(field.ty.clone());
                let member = member(index, field);
                quote! { ::segue::resolve_continuation(&self.#member) }
            }
            None => fallback,
        },
        Data::Enum(data) => {
            if data.variants.is_empty() {
                quote! { match *self {} }
            } else {
                let mut arms = Vec::with_capacity(data.variants.len());
                for variant in &data.variants {
                    let ident = &variant.ident;
                    match forwarded_field(&variant.fields, fixed.is_some())? {
                        Some((index, field)) => {
                            forwarded.push(field.ty.clone());
                            let member = member(index, field);
                            arms.push(quote! {
                                Self::#ident { #member: __segue_inner, .. } => {
                                    ::segue::resolve_continuation(__segue_inner)
                                }
                            });
                        }
                        None => arms.push(quote! { Self::#ident { .. } => #fallback, }),
                    }
                }
                quote! {
                    match self {
                        #(#arms)*
                    }
                }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "IsContinuation cannot be derived for unions",
            ));
        }
    };

    let mut generics = input.generics.clone();
    if !forwarded.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &forwarded {
            where_clause
                .predicates
                .push(parse_quote! { #ty: ::segue::IsContinuation });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::segue::IsContinuation for #name #ty_generics #where_clause {
            #[inline]
            fn is_continuation(&self) -> bool {
                #body
            }
        }
    })
}

/// Read `always` / `never` from the type's attributes.
fn container_answer(attrs: &[Attribute]) -> syn::Result<Option<bool>> {
    let mut answer = None;
    for (flag, ident) in flags(attrs)? {
        let value = match flag {
            Flag::Always => true,
            Flag::Never => false,
            Flag::Forward => {
                return Err(syn::Error::new(
                    ident.span(),
                    "`forward` belongs on a field, not on the type",
                ));
            }
        };
        if answer.is_some_and(|previous| previous != value) {
            return Err(syn::Error::new(
                ident.span(),
                "`always` and `never` are mutually exclusive",
            ));
        }
        answer = Some(value);
    }
    Ok(answer)
}

/// Find the single field marked `forward`, if any.
fn forwarded_field(fields: &Fields, fixed: bool) -> syn::Result<Option<(usize, &Field)>> {
    let mut found = None;
    for (index, field) in fields.iter().enumerate() {
        for (flag, ident) in flags(&field.attrs)? {
            if flag != Flag::Forward {
                return Err(syn::Error::new(
                    ident.span(),
                    "only `forward` is allowed on fields",
                ));
            }
            if fixed {
                return Err(syn::Error::new(
                    ident.span(),
                    "`forward` cannot be combined with `always` or `never`",
                ));
            }
            if found.is_some() {
                return Err(syn::Error::new(
                    ident.span(),
                    "only one field may be marked `forward`",
                ));
            }
            found = Some((index, field));
        }
    }
    Ok(found)
}

fn flags(attrs: &[Attribute]) -> syn::Result<Vec<(Flag, Ident)>> {
    let mut flags = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("continuation")) {
        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Err(meta.error("expected `always`, `never` or `forward`"));
            };
            let flag = match ident.to_string().as_str() {
                "always" => Flag::Always,
                "never" => Flag::Never,
                "forward" => Flag::Forward,
                other => {
                    return Err(meta.error(format!("unknown attribute: {}", other)));
                }
            };
            flags.push((flag, ident.clone()));
            Ok(())
        })?;
    }
    Ok(flags)
}

fn member(index: usize, field: &Field) -> TokenStream2 {
    match &field.ident {
        Some(ident) => ident.to_token_stream(),
        None => Index::from(index).to_token_stream(),
    }
}
