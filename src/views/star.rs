use crate::models;
use serde::Serialize;

/// `[name, luminosity, spectral class]`
#[derive(Debug, Serialize, PartialEq)]
pub struct StarRow(pub String, pub Option<f64>, pub Option<String>);

impl From<models::Star> for StarRow {
    fn from(star: models::Star) -> Self {
        Self(star.name, star.luminosity, star.spectral_class)
    }
}
