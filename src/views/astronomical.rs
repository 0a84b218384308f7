use crate::models;
use serde::Serialize;

/// `[name, distance, universe]`
#[derive(Debug, Serialize, PartialEq)]
pub struct AstronomicalRow(pub String, pub Option<f64>, pub String);

impl From<models::AstronomicalObject> for AstronomicalRow {
    fn from(object: models::AstronomicalObject) -> Self {
        Self(object.name, object.distance, object.universe)
    }
}
