#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use quote::quote;
use syn::parse_quote;

use super::*;

fn derive(input: syn::DeriveInput) -> syn::Result<TokenStream> {
    derive_equatable(&input)
}

#[test]
fn compares_fields_in_order() {
    let out = derive(parse_quote! {
        struct Point { x: i32, y: i32 }
    })
    .unwrap();
    let expected = quote! {
        #[automatically_derived]
        impl ::core::cmp::PartialEq for Point {
            fn eq(&self, other: &Self) -> bool {
                self.x == other.x && self.y == other.y
            }
        }
    };
    assert_eq!(out.to_string(), expected.to_string());
}

#[test]
fn skip_marker_and_view_body() {
    let out = derive(parse_quote! {
        #[equatable(view)]
        pub struct Row<T: Clone> where T: Default {
            title: String,
            #[skip_equatable]
            width: f32,
            body: T,
        }
    })
    .unwrap();
    let expected = quote! {
        #[automatically_derived]
        impl<T: Clone> ::core::cmp::PartialEq for Row<T> where T: Default {
            fn eq(&self, other: &Self) -> bool {
                self.title == other.title
            }
        }
    };
    assert_eq!(out.to_string(), expected.to_string());
}

#[test]
fn body_is_compared_without_view_role() {
    let out = derive(parse_quote! {
        struct Mail { body: String }
    })
    .unwrap();
    assert!(out.to_string().contains("self . body == other . body"));
}

#[test]
fn raw_identifiers_stay_raw() {
    let out = derive(parse_quote! {
        struct Token { r#type: u8 }
    })
    .unwrap();
    assert!(out.to_string().contains("self . r#type == other . r#type"));
}

#[test]
fn non_ascii_field_names() {
    let out = derive(parse_quote! {
        struct Price { café: u8, größe: u16 }
    })
    .unwrap();
    let expected = quote! {
        #[automatically_derived]
        impl ::core::cmp::PartialEq for Price {
            fn eq(&self, other: &Self) -> bool {
                self.café == other.café && self.größe == other.größe
            }
        }
    };
    assert_eq!(out.to_string(), expected.to_string());
}

#[test]
fn no_compared_fields_means_no_impl() {
    let out = derive(parse_quote! {
        struct Cache { #[skip_equatable] entries: Vec<u8> }
    })
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn enums_are_rejected() {
    let err = derive(parse_quote! {
        enum Direction { Up, Down }
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "E2001: @Equatable can only be applied to record types"
    );
}

#[test]
fn tuple_fields_are_rejected() {
    let err = derive(parse_quote! {
        struct Meters(f64);
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "E2002: member binding `0` has no simple name"
    );
}

#[test]
fn wrapper_rule_is_off_for_rust() {
    let out = derive(parse_quote! {
        struct Model { #[State] value: u8 }
    })
    .unwrap();
    assert!(!out.is_empty());
}
