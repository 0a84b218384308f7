use serde_derive::{Deserialize, Serialize};

/// A galaxy row. `name` doubles as the key of its AstronomicalObject row.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Galaxy {
    pub name: String,
    pub constellation: Option<String>,
    pub variation_type: Option<String>,
    pub radius: Option<f64>,
    pub star_count: Option<String>,
    pub central_object: Option<String>,
}

/// Galaxy joined with its AstronomicalObject row.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GalaxyListing {
    pub name: String,
    pub universe: String,
    pub constellation: Option<String>,
    pub variation_type: Option<String>,
    pub radius: Option<f64>,
    pub star_count: Option<String>,
    pub central_object: Option<String>,
    pub distance: Option<f64>,
}
