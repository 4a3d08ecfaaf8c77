//! Procedural macros for SetKit
//!
//! `#[derive(Setters)]` turns a named-field struct into a widget family: it
//! emits an extension trait with one chainable method per field, implemented
//! for every `Setter<'_, B>` whose target can be viewed as the struct through
//! `AsMut`. Embedding a parent struct and marking it `#[set(parent)]` makes the
//! parent family's setters available on the child as well.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DeriveInput, Fields, GenericArgument,
    Ident, LitStr, Path, PathArguments, Type, Visibility,
};

/// Options from a `#[set(...)]` field attribute
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    parent: bool,
    ancestors: Vec<Path>,
    rename: Option<Ident>,
    into: bool,
    strip_option: bool,
    feature: Option<LitStr>,
}

/// Options from a `#[setters(...)]` struct attribute
#[derive(Default)]
struct StructOptions {
    trait_name: Option<Ident>,
}

struct SetterField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    docs: Vec<&'a Attribute>,
    options: FieldOptions,
}

impl FieldOptions {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = FieldOptions::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("set")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                } else if meta.path.is_ident("parent") {
                    options.parent = true;
                } else if meta.path.is_ident("ancestors") {
                    meta.parse_nested_meta(|inner| {
                        options.ancestors.push(inner.path);
                        Ok(())
                    })?;
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    options.rename = Some(name.parse()?);
                } else if meta.path.is_ident("into") {
                    options.into = true;
                } else if meta.path.is_ident("strip_option") {
                    options.strip_option = true;
                } else if meta.path.is_ident("feature") {
                    options.feature = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error("unsupported `set` option"));
                }
                Ok(())
            })?;
        }

        if !options.ancestors.is_empty() && !options.parent {
            return Err(syn::Error::new(
                Span::call_site(),
                "`ancestors(...)` requires `parent`",
            ));
        }
        Ok(options)
    }
}

impl StructOptions {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = StructOptions::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("setters")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("trait_name") {
                    let name: LitStr = meta.value()?.parse()?;
                    options.trait_name = Some(name.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported `setters` option"))
                }
            })?;
        }
        Ok(options)
    }
}

/// `T` when `ty` is written as `Option<T>`
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Type of the field a parent attribute points at, as a path
fn parent_path(ty: &Type) -> syn::Result<&Path> {
    match ty {
        Type::Path(path) if path.qself.is_none() => Ok(&path.path),
        other => Err(syn::Error::new(
            other.span(),
            "`#[set(parent)]` field must have a plain struct type",
        )),
    }
}

/// Derive chainable setters for a widget family
///
/// ```ignore
/// #[derive(Setters)]
/// pub struct Label {
///     #[set(parent)]
///     view: View,
///     /// Displayed text
///     #[set(into, strip_option)]
///     pub text: Option<String>,
/// }
///
/// label.set().text("Hello").alpha(0.5);
/// ```
///
/// Field options, inside `#[set(...)]`:
///
/// * `parent`: the field embeds the parent family; also generates
///   `AsRef`/`AsMut` for its type. `ancestors(A, B)` adds the same impls for
///   types further up the chain, reached through the parent.
/// * `skip`: no setter for this field
/// * `rename = "name"`: method name differs from the field name
/// * `into`: the method takes `impl Into<T>`
/// * `strip_option`: for `Option<T>` fields, take `T` and store `Some`
/// * `feature = "name"`: the method only exists with that cargo feature
///
/// The trait is named `<Struct>Setters` unless
/// `#[setters(trait_name = "...")]` says otherwise.
#[proc_macro_derive(Setters, attributes(set, setters))]
pub fn derive_setters(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "`Setters` cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "`Setters` requires a struct with named fields",
                ))
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Setters` can only be derived for structs",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Setters` can only be derived for structs",
            ))
        }
    };

    let struct_options = StructOptions::parse(&input.attrs)?;
    let trait_name = struct_options
        .trait_name
        .unwrap_or_else(|| format_ident!("{}Setters", name));

    let mut setter_fields = Vec::new();
    let mut parent = None;
    for field in fields {
        let options = FieldOptions::parse(&field.attrs)?;
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if options.parent {
            if parent.is_some() {
                return Err(syn::Error::new(
                    ident.span(),
                    "only one field can be marked `#[set(parent)]`",
                ));
            }
            parent = Some((ident, parent_path(&field.ty)?, options.ancestors));
            continue;
        }
        if options.skip {
            continue;
        }
        if options.strip_option && option_inner(&field.ty).is_none() {
            return Err(syn::Error::new(
                field.ty.span(),
                "`strip_option` requires an `Option<T>` field",
            ));
        }
        setter_fields.push(SetterField {
            ident,
            ty: &field.ty,
            docs: field.attrs.iter().filter(|a| a.path().is_ident("doc")).collect(),
            options,
        });
    }

    let vis = &input.vis;
    let setters = expand_setters(name, vis, &trait_name, &setter_fields);
    let conversions = expand_conversions(name, parent);

    Ok(quote! {
        #setters
        #conversions
    })
}

fn expand_setters(
    name: &Ident,
    vis: &Visibility,
    trait_name: &Ident,
    fields: &[SetterField<'_>],
) -> TokenStream2 {
    let name_str = name.to_string();
    let trait_doc = format!(
        "Chainable setters for [`{}`] and every type that embeds it.",
        name
    );

    let mut declarations = Vec::new();
    let mut definitions = Vec::new();

    for field in fields {
        let ident = field.ident;
        let method = field.options.rename.clone().unwrap_or_else(|| ident.clone());
        let property = method.to_string();

        let stored = if field.options.strip_option {
            option_inner(field.ty).unwrap_or(field.ty)
        } else {
            field.ty
        };
        let arg_ty = if field.options.into {
            quote!(impl ::core::convert::Into<#stored>)
        } else {
            quote!(#stored)
        };
        let converted = if field.options.into {
            quote!(::core::convert::Into::into(value))
        } else {
            quote!(value)
        };
        let assigned = if field.options.strip_option {
            quote!(::core::option::Option::Some(#converted))
        } else {
            converted
        };

        let cfg = field
            .options
            .feature
            .as_ref()
            .map(|feature| quote!(#[cfg(feature = #feature)]));
        let docs = if field.docs.is_empty() {
            let doc = format!("Sets `{}`.", ident);
            quote!(#[doc = #doc])
        } else {
            let docs = &field.docs;
            quote!(#(#docs)*)
        };

        declarations.push(quote! {
            #docs
            #cfg
            fn #method(self, value: #arg_ty) -> Self;
        });
        definitions.push(quote! {
            #cfg
            #[inline]
            fn #method(mut self, value: #arg_ty) -> Self {
                ::core::convert::AsMut::<#name>::as_mut(self.base_mut()).#ident = #assigned;
                ::setkit_core::tracing::trace!(
                    target: "setkit::setter",
                    widget = #name_str,
                    property = #property
                );
                self
            }
        });
    }

    quote! {
        #[doc = #trait_doc]
        #vis trait #trait_name: ::core::marker::Sized {
            #(#declarations)*
        }

        impl<'__setkit, __B> #trait_name for ::setkit_core::setter::Setter<'__setkit, __B>
        where
            __B: ::core::convert::AsMut<#name> + ?Sized,
        {
            #(#definitions)*
        }
    }
}

fn expand_conversions(name: &Ident, parent: Option<(&Ident, &Path, Vec<Path>)>) -> TokenStream2 {
    let mut tokens = quote! {
        impl ::setkit_core::setter::Settable for #name {}

        impl ::core::convert::AsRef<#name> for #name {
            #[inline]
            fn as_ref(&self) -> &#name {
                self
            }
        }

        impl ::core::convert::AsMut<#name> for #name {
            #[inline]
            fn as_mut(&mut self) -> &mut #name {
                self
            }
        }
    };

    let Some((field, parent_ty, ancestors)) = parent else {
        return tokens;
    };

    tokens.extend(quote! {
        impl ::core::convert::AsRef<#parent_ty> for #name {
            #[inline]
            fn as_ref(&self) -> &#parent_ty {
                &self.#field
            }
        }

        impl ::core::convert::AsMut<#parent_ty> for #name {
            #[inline]
            fn as_mut(&mut self) -> &mut #parent_ty {
                &mut self.#field
            }
        }
    });

    for ancestor in ancestors {
        tokens.extend(quote! {
            impl ::core::convert::AsRef<#ancestor> for #name {
                #[inline]
                fn as_ref(&self) -> &#ancestor {
                    ::core::convert::AsRef::<#ancestor>::as_ref(&self.#field)
                }
            }

            impl ::core::convert::AsMut<#ancestor> for #name {
                #[inline]
                fn as_mut(&mut self) -> &mut #ancestor {
                    ::core::convert::AsMut::<#ancestor>::as_mut(&mut self.#field)
                }
            }
        });
    }

    tokens
}
