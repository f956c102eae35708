//! Tests for pagination module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use url::Url;

fn listing_url() -> Url {
    Url::parse("https://pokeapi.co/api/v2/pokemon?limit=20").unwrap()
}

fn listing(results: Vec<ItemStub>, next: Option<&str>) -> CollectionListing {
    CollectionListing {
        count: Some(1302),
        next: next.map(String::from),
        previous: None,
        results,
    }
}

fn bulbasaur() -> ItemStub {
    ItemStub::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/")
}

// ============================================================================
// Listing decoding
// ============================================================================

#[test]
fn test_listing_from_value() {
    let body = json!({
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
        ]
    });

    let listing = CollectionListing::from_value(body, &listing_url()).unwrap();

    assert_eq!(listing.count, Some(1302));
    assert_eq!(listing.previous, None);
    assert_eq!(
        listing.results.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["bulbasaur", "ivysaur"]
    );
}

#[test]
fn test_listing_optional_fields_default() {
    let body = json!({"results": []});
    let listing = CollectionListing::from_value(body, &listing_url()).unwrap();
    assert_eq!(listing.count, None);
    assert_eq!(listing.next, None);
    assert!(listing.results.is_empty());
}

#[test]
fn test_listing_without_results_is_decode_error() {
    let body = json!({"name": "bulbasaur", "id": 1});
    let err = CollectionListing::from_value(body, &listing_url()).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.is_network());
}

#[test]
fn test_stub_locator_resolves_relative_urls() {
    let stub = ItemStub::new("ivysaur", "/api/v2/pokemon/2/");
    let url = stub.locator(&listing_url()).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/2/");
}

// ============================================================================
// End-of-collection rule
// ============================================================================

#[test]
fn test_next_page_present() {
    let page = listing(
        vec![bulbasaur()],
        Some("https://pokeapi.co/api/v2/pokemon?offset=20&limit=20"),
    );
    let next = next_page_for(&page, &listing_url()).unwrap().unwrap();
    assert_eq!(
        next.as_str(),
        "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20"
    );
}

#[test]
fn test_next_page_null_ends_collection() {
    let page = listing(vec![bulbasaur()], None);
    assert_eq!(next_page_for(&page, &listing_url()).unwrap(), None);
}

#[test]
fn test_next_page_blank_ends_collection() {
    let page = listing(vec![bulbasaur()], Some("  "));
    assert_eq!(next_page_for(&page, &listing_url()).unwrap(), None);
}

#[test]
fn test_empty_results_end_collection_despite_cursor() {
    let page = listing(vec![], Some("https://pokeapi.co/api/v2/pokemon?offset=180&limit=20"));
    assert_eq!(next_page_for(&page, &listing_url()).unwrap(), None);
}

#[test]
fn test_relative_next_resolved_against_listing() {
    let page = listing(vec![bulbasaur()], Some("?offset=20&limit=20"));
    let next = next_page_for(&page, &listing_url()).unwrap().unwrap();
    assert_eq!(
        next.as_str(),
        "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20"
    );
}

#[test]
fn test_non_http_next_is_invalid_reference() {
    let page = listing(vec![bulbasaur()], Some("mailto:ash@example.com"));
    let err = next_page_for(&page, &listing_url()).unwrap_err();
    assert!(matches!(err, Error::InvalidReference { .. }));
}

// ============================================================================
// PageReference
// ============================================================================

#[test]
fn test_page_reference_round_trips_through_display() {
    let reference =
        PageReference::parse("https://pokeapi.co/api/v2/pokemon?offset=40&limit=20").unwrap();
    let reparsed = PageReference::parse(&reference.to_string()).unwrap();
    assert_eq!(reference, reparsed);
}

#[test_case("not a url" ; "garbage")]
#[test_case("ftp://pokeapi.co/api/v2/pokemon" ; "unsupported scheme")]
#[test_case("file:///etc/passwd" ; "file scheme")]
#[test_case("" ; "empty")]
fn test_page_reference_rejects(input: &str) {
    let err = PageReference::parse(input).unwrap_err();
    assert!(matches!(err, Error::InvalidReference { .. }), "{err}");
}

#[test]
fn test_page_reference_serde_validates() {
    let reference: PageReference =
        serde_json::from_value(json!("https://pokeapi.co/api/v2/pokemon?offset=20")).unwrap();
    assert_eq!(
        serde_json::to_value(&reference).unwrap(),
        json!("https://pokeapi.co/api/v2/pokemon?offset=20")
    );

    let bad: std::result::Result<PageReference, _> = serde_json::from_value(json!("ftp://x/y"));
    assert!(bad.is_err());
}

// ============================================================================
// Page size
// ============================================================================

#[test]
fn test_apply_page_size_adds_param() {
    let endpoint = Url::parse("https://pokeapi.co/api/v2/pokemon").unwrap();
    let url = apply_page_size(&endpoint, "limit", 20);
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon?limit=20");
}

#[test]
fn test_apply_page_size_replaces_existing() {
    let endpoint = Url::parse("https://pokeapi.co/api/v2/pokemon?offset=40&limit=5").unwrap();
    let url = apply_page_size(&endpoint, "limit", 20);
    assert_eq!(
        url.as_str(),
        "https://pokeapi.co/api/v2/pokemon?offset=40&limit=20"
    );
}
