//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Ident, Lit, UnOp, parse_macro_input};

/// Derive macro registering a puzzle solution for discovery
///
/// Generates the `PuzzleContext`, `SolutionBase` and `FromContainer`
/// implementations and submits a `SolutionType` record to `inventory`. The
/// record carries the compiled bodies of the `year` and `day` accessors, so
/// discovery can key the solution without ever constructing it.
///
/// # Attributes
///
/// - `#[aoc(year = .., day = ..)]`: Required on the struct. Literal values are
///   compiled into constant bodies; any other expression still works as an
///   accessor, but the solution is then not discoverable.
/// - `#[base]`: Required on exactly one field of type `BaseSolution`. Every
///   other field is initialized with `Default::default()`.
///
/// # Requirements
///
/// The type must implement the `Solution` trait. If the trait is not implemented,
/// you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `Day1: Solution` is not satisfied
///   |
///   | struct Day1 {
///   |        ^^^^ unsatisfied trait bound
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocSolution, BaseSolution, Solution, SolveError};
///
/// #[derive(AocSolution)]
/// #[aoc(year = 2025, day = 1)]
/// struct Day1 {
///     #[base]
///     base: BaseSolution,
/// }
///
/// impl Solution for Day1 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AocSolution, attributes(aoc, base))]
pub fn derive_aoc_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct AocArgs {
    year: Expr,
    day: Expr,
}

fn parse_aoc_args(input: &DeriveInput) -> syn::Result<AocArgs> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "AocSolution derive requires #[aoc(year = .., day = ..)] attribute",
            )
        })?;

    let mut year = None;
    let mut day = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            year = Some(meta.value()?.parse::<Expr>()?);
        } else if meta.path.is_ident("day") {
            day = Some(meta.value()?.parse::<Expr>()?);
        } else {
            return Err(meta.error("unknown key, expected `year` or `day`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;
    Ok(AocArgs { year, day })
}

/// Evaluate an integer literal, optionally negated or parenthesized
fn literal_value(expr: &Expr) -> syn::Result<Option<i64>> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse::<i64>().map(Some),
            _ => Ok(None),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            Ok(literal_value(&unary.expr)?.map(|v| -v))
        }
        Expr::Paren(paren) => literal_value(&paren.expr),
        Expr::Group(group) => literal_value(&group.expr),
        _ => Ok(None),
    }
}

/// Compile an accessor expression into an `AccessorBody` constructor call
fn accessor_body(expr: &Expr) -> syn::Result<TokenStream2> {
    match literal_value(expr)? {
        Some(value) => {
            let value = i32::try_from(value)
                .map_err(|_| syn::Error::new_spanned(expr, "value does not fit in an i32"))?;
            Ok(quote! { ::aoc_solver::AccessorBody::literal(#value) })
        }
        None => Ok(quote! { ::aoc_solver::AccessorBody::computed() }),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AocSolution cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "AocSolution requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "AocSolution can only be derived for structs",
            ));
        }
    };

    let mut base: Option<&Ident> = None;
    let mut others = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if field.attrs.iter().any(|attr| attr.path().is_ident("base")) {
            if base.is_some() {
                return Err(syn::Error::new_spanned(field, "only one field can be marked #[base]"));
            }
            base = Some(ident);
        } else {
            others.push(ident);
        }
    }
    let base = base.ok_or_else(|| {
        syn::Error::new_spanned(name, "AocSolution requires a field marked #[base]")
    })?;

    let AocArgs { year, day } = parse_aoc_args(input)?;
    let year_body = accessor_body(&year)?;
    let day_body = accessor_body(&day)?;

    Ok(quote! {
        impl ::aoc_solver::PuzzleContext for #name {
            fn year(&self) -> i32 {
                #year
            }

            fn day(&self) -> i32 {
                #day
            }
        }

        impl ::aoc_solver::SolutionBase for #name {
            fn base(&self) -> &::aoc_solver::BaseSolution {
                &self.#base
            }

            fn base_mut(&mut self) -> &mut ::aoc_solver::BaseSolution {
                &mut self.#base
            }
        }

        impl ::aoc_solver::FromContainer for #name {
            fn from_container(
                container: &::aoc_solver::Container,
            ) -> ::core::result::Result<Self, ::aoc_solver::ResolveError> {
                let this = Self {
                    #base: ::aoc_solver::BaseSolution::from_container(container)?,
                    #(#others: ::core::default::Default::default(),)*
                };
                ::aoc_solver::SolutionConfigurator::set_context(
                    &*container.configurator()?,
                    &this,
                );
                ::core::result::Result::Ok(this)
            }
        }

        // Compile-time check that the type implements Solution
        const _: () = {
            trait MustImplementSolution: ::aoc_solver::Solution {}
            impl MustImplementSolution for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolutionType {
                name: ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#name)),
                module: ::core::env!("CARGO_CRATE_NAME"),
                kind: ::aoc_solver::TypeKind::Concrete,
                capabilities: ::aoc_solver::Capabilities::REQUIRED,
                year_body: #year_body,
                day_body: #day_body,
                constructor: ::core::option::Option::Some(::aoc_solver::construct::<#name>),
            }
        }
    })
}
