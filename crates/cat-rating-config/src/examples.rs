// crates/cat-rating-config/src/examples.rs
// ============================================================================
// Module: Config Example Generation
// Description: Deterministic example config for docs and onboarding.
// Purpose: Keep the published example in lockstep with the config model.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! The example config is generated rather than hand-maintained so that it can
//! be validated against the real model in tests. Every field shown here uses
//! its default value.

/// Returns the canonical example configuration in TOML form.
#[must_use]
pub fn config_toml_example() -> String {
    let mut example = String::new();
    example.push_str("# cat-rating.toml\n");
    example.push_str("# Canonical example configuration for the cat rating service.\n");
    example.push('\n');
    example.push_str("[service]\n");
    example.push_str("# Maximum accepted comment length in bytes.\n");
    example.push_str("max_comment_length = 512\n");
    example.push_str("# Maximum number of opinions recorded against a single cat.\n");
    example.push_str("max_opinions_per_cat = 10000\n");
    example.push('\n');
    example.push_str("[repository]\n");
    example.push_str("# Storage backend; only \"memory\" is available at this scope.\n");
    example.push_str("backend = \"memory\"\n");
    example.push_str("# Optional capacity limit for the repository.\n");
    example.push_str("max_cats = 65536\n");
    example
}
