// crates/cat-rating-core/tests/rating.rs
// ============================================================================
// Module: Rating Service Tests
// Description: Tests for star validation, comment recording, and averages.
// Purpose: Validate the rating operations against the documented range rules.
// Dependencies: cat-rating-core
// ============================================================================
//! ## Overview
//! Ensures star values outside `(0, 5]` are rejected without recording an
//! opinion, comments are recorded verbatim, and derived averages report the
//! arithmetic mean in all three presentations.

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
use cat_rating_core::CatRepository;
use cat_rating_core::InMemoryCatRepository;
use cat_rating_core::RatingError;
use cat_rating_core::RatingService;
use cat_rating_core::RatingServiceConfig;

fn dummy_cat() -> Cat {
    Cat::new(CatId::from_raw(0), "dummy", "dummy.png")
}

fn service() -> RatingService<InMemoryCatRepository> {
    RatingService::new(InMemoryCatRepository::new())
}

/// Verifies boundary and fractional star values inside `(0, 5]` are accepted
/// and that a single opinion's average equals the recorded stars.
#[test]
fn rating_accepts_correct_range_of_stars() {
    for stars in [0.5, 5.0] {
        let rated = service().rate_cat(stars, dummy_cat()).unwrap();
        assert_eq!(rated.average_rating(), stars);
    }
}

/// Verifies star values outside `(0, 5]` are rejected with a validation error.
#[test]
fn rating_rejects_incorrect_range_of_stars() {
    for stars in [0.0, 6.0, -1.0, -5.0] {
        let err = service().rate_cat(stars, dummy_cat()).unwrap_err();
        assert!(matches!(err, RatingError::InvalidStars(_)), "stars {stars}: {err}");
    }
}

/// Verifies non-finite star values never pass range validation.
#[test]
fn rating_rejects_non_finite_stars() {
    for stars in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = service().rate_cat(stars, dummy_cat()).unwrap_err();
        assert!(matches!(err, RatingError::InvalidStars(_)));
    }
}

/// Verifies the by-identifier path records the supplied comment verbatim.
#[test]
fn rating_with_comment_records_comment() {
    let service = service();
    service.save_cat(&dummy_cat()).unwrap();

    let rated = service.rate_cat_with_comment(5.0, "foo", CatId::from_raw(0)).unwrap();
    let opinions = service.get_opinions(&rated);
    assert_eq!(opinions.len(), 1);
    assert_eq!(opinions[0].comment, "foo");
}

/// Verifies the comment-less path records an empty comment string, not an
/// absent one.
#[test]
fn rating_without_comment_records_empty_comment() {
    let rated = service().rate_cat(5.0, dummy_cat()).unwrap();
    let opinions = rated.opinions();
    assert_eq!(opinions.len(), 1);
    assert_eq!(opinions[0].comment, "");
}

/// Verifies an explicitly empty comment is accepted on the by-identifier path.
#[test]
fn rating_with_empty_comment_is_accepted() {
    let service = service();
    service.save_cat(&dummy_cat()).unwrap();

    let rated = service.rate_cat_with_comment(4.5, "", CatId::from_raw(0)).unwrap();
    assert_eq!(rated.opinions()[0].comment, "");
}

/// Verifies rating an unknown identifier fails with a distinct not-found
/// error and writes nothing to the repository.
#[test]
fn rating_unknown_cat_fails_with_not_found() {
    let repository = InMemoryCatRepository::new();
    let service = RatingService::new(repository.clone());

    let err = service.rate_cat_with_comment(5.0, "foo", CatId::from_raw(42)).unwrap_err();
    assert!(matches!(err, RatingError::CatNotFound(id) if id == CatId::from_raw(42)));
    assert!(repository.find_all().unwrap().is_empty());
}

/// Verifies a failed rating leaves the stored cat without opinions.
#[test]
fn failed_rating_records_no_opinion() {
    let repository = InMemoryCatRepository::new();
    let service = RatingService::new(repository.clone());
    service.save_cat(&dummy_cat()).unwrap();

    let err = service.rate_cat_with_comment(6.0, "foo", CatId::from_raw(0)).unwrap_err();
    assert!(matches!(err, RatingError::InvalidStars(_)));

    let stored = repository.find_by_id(&CatId::from_raw(0)).unwrap().unwrap();
    assert!(stored.opinions().is_empty());
}

/// Verifies the average is the arithmetic mean over all recorded opinions.
#[test]
fn average_rating_is_mean_of_all_opinions() {
    let service = service();
    let rated = service.rate_cat(4.0, dummy_cat()).unwrap();
    let rated = service.rate_cat(5.0, rated).unwrap();

    assert_eq!(rated.average_rating(), 4.5);
    assert_eq!(rated.average_rating_string(), "4.50");
    assert_eq!(rated.half_rounded_average_rating(), 4.5);
}

/// Verifies a single five-star opinion reports "5.00" and half-rounded 5.0.
#[test]
fn average_rating_presentations_for_five_stars() {
    let rated = service().rate_cat(5.0, dummy_cat()).unwrap();

    assert_eq!(rated.average_rating(), 5.0);
    assert_eq!(rated.average_rating_string(), "5.00");
    assert_eq!(rated.half_rounded_average_rating(), 5.0);
}

/// Verifies half-rounding lands on the nearest half point for an uneven mean.
#[test]
fn half_rounded_average_rounds_to_nearest_half() {
    let service = service();
    let rated = service.rate_cat(3.5, dummy_cat()).unwrap();
    let rated = service.rate_cat(4.0, rated).unwrap();
    let rated = service.rate_cat(5.0, rated).unwrap();

    // Mean is 12.5 / 3 = 4.1666..., which rounds down to 4.0.
    assert_eq!(rated.average_rating_string(), "4.17");
    assert_eq!(rated.half_rounded_average_rating(), 4.0);
}

/// Verifies a cat with no opinions reports a zero average.
#[test]
fn unrated_cat_reports_zero_average() {
    let cat = dummy_cat();
    assert_eq!(cat.average_rating(), 0.0);
    assert_eq!(cat.average_rating_string(), "0.00");
    assert_eq!(cat.half_rounded_average_rating(), 0.0);
}

/// Verifies comments above the configured length limit are rejected.
#[test]
fn rating_rejects_over_long_comment() {
    let config = RatingServiceConfig {
        max_comment_length: 8,
        ..RatingServiceConfig::default()
    };
    let service = RatingService::with_config(InMemoryCatRepository::new(), config);
    service.save_cat(&dummy_cat()).unwrap();

    let err = service
        .rate_cat_with_comment(5.0, "far too long for the limit", CatId::from_raw(0))
        .unwrap_err();
    assert!(matches!(
        err,
        RatingError::CommentTooLong {
            length: 26,
            max: 8
        }
    ));
}

/// Verifies a saturated cat rejects further opinions.
#[test]
fn rating_rejects_saturated_cat() {
    let config = RatingServiceConfig {
        max_opinions_per_cat: 1,
        ..RatingServiceConfig::default()
    };
    let service = RatingService::with_config(InMemoryCatRepository::new(), config);

    let rated = service.rate_cat(5.0, dummy_cat()).unwrap();
    let err = service.rate_cat(4.0, rated).unwrap_err();
    assert!(matches!(err, RatingError::OpinionLimitReached(id) if id == CatId::from_raw(0)));
}
