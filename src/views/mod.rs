//! Rows as the front end tables consume them: one JSON array per row, columns by position.

mod astronomical;
mod galaxy;
mod star;
mod universe;

pub use astronomical::*;
pub use galaxy::*;
pub use star::*;
pub use universe::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;
    use serde_json::json;

    #[test]
    fn universe_rows_are_positional() {
        let row: UniverseRow = models::Universe {
            name: "Laniakea".to_string(),
            age: Some(13.8e9),
            rate: Some(67.8),
        }
        .into();

        assert_eq!(
            serde_json::to_value(row).unwrap(),
            json!(["Laniakea", 13.8e9, 67.8])
        );
        assert_eq!(
            serde_json::to_value(UniverseNameRow::from("Laniakea".to_string())).unwrap(),
            json!(["Laniakea"])
        );
    }

    #[test]
    fn galaxy_rows_carry_joined_columns() {
        let row: GalaxyRow = models::GalaxyListing {
            name: "Andromeda".to_string(),
            universe: "Laniakea".to_string(),
            constellation: Some("Andromeda".to_string()),
            variation_type: Some("Spiral".to_string()),
            radius: Some(110000.0),
            star_count: Some("1000000000000".to_string()),
            central_object: None,
            distance: Some(2.537e6),
        }
        .into();

        assert_eq!(
            serde_json::to_value(row).unwrap(),
            json!([
                "Andromeda",
                "Laniakea",
                "Andromeda",
                "Spiral",
                110000.0,
                "1000000000000",
                null,
                2.537e6
            ])
        );
    }

    #[test]
    fn missing_values_render_as_null() {
        let row: StarRow = models::Star {
            name: "Sirius".to_string(),
            luminosity: None,
            spectral_class: Some("A1V".to_string()),
        }
        .into();

        assert_eq!(
            serde_json::to_value(row).unwrap(),
            json!(["Sirius", null, "A1V"])
        );
    }
}
