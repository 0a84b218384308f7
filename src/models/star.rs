use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Star {
    pub name: String,
    pub luminosity: Option<f64>,
    pub spectral_class: Option<String>,
}
