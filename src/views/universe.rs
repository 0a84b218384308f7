use crate::models;
use serde::Serialize;

/// `[name, age, rate]`
#[derive(Debug, Serialize, PartialEq)]
pub struct UniverseRow(pub String, pub Option<f64>, pub Option<f64>);

impl From<models::Universe> for UniverseRow {
    fn from(universe: models::Universe) -> Self {
        Self(universe.name, universe.age, universe.rate)
    }
}

/// `[name]`. A bare newtype would serialize as the string itself.
#[derive(Debug, Serialize, PartialEq)]
pub struct UniverseNameRow(pub (String,));

impl From<String> for UniverseNameRow {
    fn from(name: String) -> Self {
        Self((name,))
    }
}
