// crates/cat-rating-core/tests/queries.rs
// ============================================================================
// Module: Aggregate Query Tests
// Description: Tests for cat counting, listing, and opinion retrieval.
// Purpose: Validate the read operations delegated to the repository.
// Dependencies: cat-rating-core
// ============================================================================
//! ## Overview
//! Ensures the aggregate queries return exactly what the repository holds:
//! the saved collection, its size, and per-cat opinions in insertion order.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use cat_rating_core::Cat;
use cat_rating_core::CatId;
use cat_rating_core::InMemoryCatRepository;
use cat_rating_core::RatingService;
use cat_rating_core::SharedCatRepository;

/// Verifies the cat count reflects the saved collection after rating and
/// saving a single cat.
#[test]
fn cat_count_after_rating_and_saving_one_cat() {
    let service = RatingService::new(InMemoryCatRepository::new());

    let rated = service.rate_cat(5.0, Cat::new(CatId::from_raw(0), "dummy", "dummy.png")).unwrap();
    service.save_cat(&rated).unwrap();

    assert_eq!(service.get_cat_count().unwrap(), 1);
}

/// Verifies listing returns the saved collection unchanged.
#[test]
fn all_cats_equals_saved_collection() {
    let service = RatingService::new(InMemoryCatRepository::new());

    let rated = service.rate_cat(5.0, Cat::new(CatId::from_raw(0), "dummy", "dummy.png")).unwrap();
    let saved = service.save_cat(&rated).unwrap();

    assert_eq!(service.get_all_cats().unwrap(), vec![saved]);
}

/// Verifies counting an empty repository reports zero.
#[test]
fn cat_count_is_zero_for_empty_repository() {
    let service = RatingService::new(InMemoryCatRepository::new());
    assert_eq!(service.get_cat_count().unwrap(), 0);
    assert!(service.get_all_cats().unwrap().is_empty());
}

/// Verifies opinions are returned in insertion order.
#[test]
fn opinions_are_returned_in_insertion_order() {
    let service = RatingService::new(InMemoryCatRepository::new());
    service.save_cat(&Cat::new(CatId::from_raw(1), "garfield", "garfield.png")).unwrap();

    service.rate_cat_with_comment(1.0, "first", CatId::from_raw(1)).unwrap();
    service.rate_cat_with_comment(2.0, "second", CatId::from_raw(1)).unwrap();
    let rated = service.rate_cat_with_comment(3.0, "third", CatId::from_raw(1)).unwrap();

    let comments: Vec<&str> =
        service.get_opinions(&rated).iter().map(|opinion| opinion.comment.as_str()).collect();
    assert_eq!(comments, vec!["first", "second", "third"]);
}

/// Verifies saving the same identifier twice updates rather than duplicates.
#[test]
fn saving_same_cat_twice_updates_in_place() {
    let service = RatingService::new(InMemoryCatRepository::new());

    let cat = Cat::new(CatId::from_raw(7), "tom", "tom.png");
    service.save_cat(&cat).unwrap();
    let rated = service.rate_cat(4.0, cat).unwrap();
    service.save_cat(&rated).unwrap();

    assert_eq!(service.get_cat_count().unwrap(), 1);
    let stored = &service.get_all_cats().unwrap()[0];
    assert_eq!(stored.opinions().len(), 1);
}

/// Verifies a shared repository handle observes writes made through the
/// service.
#[test]
fn shared_repository_observes_service_writes() {
    let repository = SharedCatRepository::from_repository(InMemoryCatRepository::new());
    let service = RatingService::new(repository.clone());

    let rated = service.rate_cat(5.0, Cat::new(CatId::from_raw(0), "dummy", "dummy.png")).unwrap();
    service.save_cat(&rated).unwrap();

    let observer = RatingService::new(repository);
    assert_eq!(observer.get_cat_count().unwrap(), 1);
}
