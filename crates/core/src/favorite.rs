//! Favoritable type discriminators.
//!
//! Favorites point at one of a closed set of target types via a stored
//! text discriminator. Clients see a stable short label instead of the
//! internal tag; unknown tags pass through verbatim so that adding a new
//! favoritable type does not break old readers.

/// Internal discriminator for a favorited place.
pub const FAVORITABLE_PLACE: &str = "Place";

/// Internal discriminator for a favorited trip.
pub const FAVORITABLE_TRIP: &str = "Trip";

/// Internal discriminator for a favorited map checkpoint.
pub const FAVORITABLE_MAP_CHECKPOINT: &str = "MapCheckpoint";

/// All discriminators this version of the platform can resolve.
pub const KNOWN_FAVORITABLE_TYPES: &[&str] = &[
    FAVORITABLE_PLACE,
    FAVORITABLE_TRIP,
    FAVORITABLE_MAP_CHECKPOINT,
];

/// Translate an internal discriminator into its output-facing short label.
///
/// Unknown discriminators are returned unchanged.
pub fn short_label(discriminator: &str) -> &str {
    match discriminator {
        FAVORITABLE_PLACE => "place",
        FAVORITABLE_TRIP => "trip",
        FAVORITABLE_MAP_CHECKPOINT => "map_checkpoint",
        other => other,
    }
}

/// Whether the discriminator names a type this platform can resolve.
pub fn is_known(discriminator: &str) -> bool {
    KNOWN_FAVORITABLE_TYPES.contains(&discriminator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_discriminators_map_to_short_labels() {
        assert_eq!(short_label(FAVORITABLE_PLACE), "place");
        assert_eq!(short_label(FAVORITABLE_TRIP), "trip");
        assert_eq!(short_label(FAVORITABLE_MAP_CHECKPOINT), "map_checkpoint");
    }

    #[test]
    fn test_unknown_discriminator_passes_through_verbatim() {
        assert_eq!(short_label("Restaurant"), "Restaurant");
        assert_eq!(short_label(""), "");
    }

    #[test]
    fn test_is_known_matches_catalogue() {
        assert!(is_known("Place"));
        assert!(is_known("Trip"));
        assert!(is_known("MapCheckpoint"));
        assert!(!is_known("trip"));
        assert!(!is_known("Restaurant"));
    }
}
