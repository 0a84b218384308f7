use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AstronomicalObject {
    pub name: String,
    pub distance: Option<f64>, // distance from earth
    pub universe: String,      // Universe.name, required
}
