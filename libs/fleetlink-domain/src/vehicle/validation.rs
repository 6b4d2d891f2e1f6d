//! Field-level validation for incoming vehicle documents
//!
//! Validators are pure: they never short-circuit, and report every offending
//! field by its wire name, in rule order.

use crate::vehicle::entity::VehicleDoc;

/// Check a document against the creation rules
///
/// Required strings must be non-empty and required numbers strictly
/// positive. `height` is not checked.
pub fn validate_doc(doc: &VehicleDoc) -> Result<(), Vec<&'static str>> {
    let required_strings = [
        ("brand", &doc.brand),
        ("model", &doc.model),
        ("registration", &doc.registration),
        ("color", &doc.color),
    ];
    let required_numbers = [
        ("year", f64::from(doc.fabrication_year)),
        ("passengers", f64::from(doc.capacity)),
        ("max_speed", doc.max_speed),
    ];
    let trailing_strings = [
        ("fuel_type", &doc.fuel_type),
        ("transmission", &doc.transmission),
    ];
    let trailing_numbers = [
        ("weight", doc.weight),
        ("length", doc.length),
        ("width", doc.width),
    ];

    let mut invalid = Vec::new();
    invalid.extend(empty_fields(&required_strings));
    invalid.extend(non_positive_fields(&required_numbers));
    invalid.extend(empty_fields(&trailing_strings));
    invalid.extend(non_positive_fields(&trailing_numbers));

    into_result(invalid)
}

/// Check the arguments of a brand / year-range query
///
/// Zero acts as the "unset" marker for either bound; the ordering of the
/// bounds is not checked, so an inverted range simply matches nothing.
pub fn validate_brand_years(brand: &str, from: i32, to: i32) -> Result<(), Vec<&'static str>> {
    let mut invalid = Vec::new();
    if brand.is_empty() {
        invalid.push("brand");
    }
    if from == 0 {
        invalid.push("start_year");
    }
    if to == 0 {
        invalid.push("end_year");
    }

    into_result(invalid)
}

fn empty_fields<'a>(
    fields: &'a [(&'static str, &'a String)],
) -> impl Iterator<Item = &'static str> + 'a {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}

fn non_positive_fields<'a>(
    fields: &'a [(&'static str, f64)],
) -> impl Iterator<Item = &'static str> + 'a {
    fields
        .iter()
        .filter(|(_, value)| value.is_nan() || *value <= 0.0)
        .map(|(name, _)| *name)
}

fn into_result(invalid: Vec<&'static str>) -> Result<(), Vec<&'static str>> {
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::fixtures::sample_doc;

    #[test]
    fn test_valid_doc_passes() {
        assert_eq!(validate_doc(&sample_doc(1)), Ok(()));
    }

    #[test]
    fn test_every_field_is_checked() {
        let doc = VehicleDoc {
            id: 1,
            ..VehicleDoc::default()
        };

        assert_eq!(
            validate_doc(&doc),
            Err(vec![
                "brand",
                "model",
                "registration",
                "color",
                "year",
                "passengers",
                "max_speed",
                "fuel_type",
                "transmission",
                "weight",
                "length",
                "width",
            ])
        );
    }

    #[test]
    fn test_reports_only_offending_fields() {
        let mut doc = sample_doc(1);
        doc.color = String::new();
        doc.weight = -1.0;

        assert_eq!(validate_doc(&doc), Err(vec!["color", "weight"]));
    }

    #[test]
    fn test_height_is_not_validated() {
        let mut doc = sample_doc(1);
        doc.height = 0.0;

        assert_eq!(validate_doc(&doc), Ok(()));
    }

    #[test]
    fn test_nan_speed_is_rejected() {
        let mut doc = sample_doc(1);
        doc.max_speed = f64::NAN;

        assert_eq!(validate_doc(&doc), Err(vec!["max_speed"]));
    }

    #[test]
    fn test_brand_years_rejects_zero_bounds() {
        assert_eq!(validate_brand_years("Ford", 2000, 2010), Ok(()));
        assert_eq!(
            validate_brand_years("", 0, 0),
            Err(vec!["brand", "start_year", "end_year"])
        );
        assert_eq!(validate_brand_years("Ford", 2000, 0), Err(vec!["end_year"]));
    }

    #[test]
    fn test_brand_years_accepts_inverted_range() {
        assert_eq!(validate_brand_years("Ford", 2010, 2000), Ok(()));
    }
}
