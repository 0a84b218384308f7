use super::lenient;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AstronomicalObject {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub distance: Option<f64>,
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub universe: String,
}

impl From<AstronomicalObject> for models::AstronomicalObject {
    fn from(form: AstronomicalObject) -> Self {
        models::AstronomicalObject {
            name: form.name,
            distance: form.distance,
            universe: form.universe,
        }
    }
}
