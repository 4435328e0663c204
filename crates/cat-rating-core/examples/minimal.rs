// crates/cat-rating-core/examples/minimal.rs
// ============================================================================
// Module: Cat Rating Minimal Example
// Description: Minimal end-to-end rating flow using the in-memory repository.
// Purpose: Demonstrate rating, persistence, and aggregate queries.
// Dependencies: cat-rating-core
// ============================================================================

//! ## Overview
//! Rates a cat through both rating paths and reads the derived averages and
//! aggregate queries back. This example is backend-agnostic and suitable for
//! quick verification.

use cat_rating_core::Cat;
use cat_rating_core::CatId;
use cat_rating_core::InMemoryCatRepository;
use cat_rating_core::RatingService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repository = InMemoryCatRepository::new();
    let service = RatingService::new(repository);

    let felix = Cat::new(CatId::from_raw(1), "felix", "felix.png");
    let felix = service.rate_cat(5.0, felix)?;
    service.save_cat(&felix)?;

    let felix = service.rate_cat_with_comment(4.0, "fluffy and punctual", CatId::from_raw(1))?;

    let average = felix.average_rating();
    let display = felix.average_rating_string();
    let half = felix.half_rounded_average_rating();
    let count = service.get_cat_count()?;
    let _ = (average, display, half, count);

    Ok(())
}
