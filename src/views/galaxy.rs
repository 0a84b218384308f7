use crate::models;
use serde::Serialize;

/// `[name, universe, constellation, type, radius, star count, central object, distance]`
#[derive(Debug, Serialize, PartialEq)]
pub struct GalaxyRow(
    pub String,
    pub String,
    pub Option<String>,
    pub Option<String>,
    pub Option<f64>,
    pub Option<String>,
    pub Option<String>,
    pub Option<f64>,
);

impl From<models::GalaxyListing> for GalaxyRow {
    fn from(galaxy: models::GalaxyListing) -> Self {
        Self(
            galaxy.name,
            galaxy.universe,
            galaxy.constellation,
            galaxy.variation_type,
            galaxy.radius,
            galaxy.star_count,
            galaxy.central_object,
            galaxy.distance,
        )
    }
}
