//! Turns a caller's zip code and optional radius into a [`ClinicQuery`].

use vetfinder_core::ClinicQuery;

use crate::error::DiscoveryError;

pub const METERS_PER_MILE: f64 = 1609.34;

/// Radius used when the caller does not supply one (5 miles).
pub const DEFAULT_RADIUS_METERS: f64 = 8046.72;

/// Builds the canonical query for `zip_code`.
///
/// `radius_miles` is converted to meters; when absent the default radius is
/// used. The search is always restricted to clinics open now.
///
/// # Errors
///
/// Returns [`DiscoveryError::MalformedInput`] if the zip code is blank or the
/// radius is not a finite positive number.
pub fn build_query(
    zip_code: &str,
    radius_miles: Option<f64>,
) -> Result<ClinicQuery, DiscoveryError> {
    let zip_code = zip_code.trim();
    if zip_code.is_empty() {
        return Err(DiscoveryError::MalformedInput(
            "USA zip code of the caller is required. Please specify zipCode parameter.".to_owned(),
        ));
    }

    let radius_meters = match radius_miles {
        Some(miles) if miles.is_finite() && miles > 0.0 => miles * METERS_PER_MILE,
        Some(miles) => {
            return Err(DiscoveryError::MalformedInput(format!(
                "radius must be a positive number of miles, got {miles}"
            )));
        }
        None => DEFAULT_RADIUS_METERS,
    };

    Ok(ClinicQuery {
        zip_code: zip_code.to_owned(),
        text_query: text_query(zip_code),
        radius_meters,
        open_now_only: true,
    })
}

/// The natural-language phrase the places provider is searched with.
#[must_use]
pub fn text_query(zip_code: &str) -> String {
    format!("Emergency vet / pet clinic open now {zip_code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_in_miles_is_converted_to_meters() {
        for miles in [0.5, 1.0, 5.0, 12.5, 30.0] {
            let query = build_query("98102", Some(miles)).expect("valid query");
            assert!((query.radius_meters - miles * 1609.34).abs() < 1e-9);
        }
    }

    #[test]
    fn omitted_radius_uses_default() {
        let query = build_query("98102", None).expect("valid query");
        assert!((query.radius_meters - 8046.72).abs() < f64::EPSILON);
    }

    #[test]
    fn query_is_open_now_and_embeds_zip_code() {
        let query = build_query(" 98102 ", None).expect("valid query");
        assert_eq!(query.zip_code, "98102");
        assert!(query.open_now_only);
        assert_eq!(
            query.text_query,
            "Emergency vet / pet clinic open now 98102"
        );
    }

    #[test]
    fn blank_zip_code_is_malformed() {
        assert!(matches!(
            build_query("   ", None),
            Err(DiscoveryError::MalformedInput(_))
        ));
    }

    #[test]
    fn non_positive_or_non_finite_radius_is_malformed() {
        for miles in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    build_query("98102", Some(miles)),
                    Err(DiscoveryError::MalformedInput(_))
                ),
                "radius {miles} should be rejected"
            );
        }
    }
}
