use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Universe {
    pub name: String,
    pub age: Option<f64>,
    pub rate: Option<f64>, // expansion rate, km/s/Mpc
}
