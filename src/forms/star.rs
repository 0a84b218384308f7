use super::lenient;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub luminosity: Option<f64>,
    #[validate(max_length = 50)]
    pub spectral_class: Option<String>,
}

impl From<Star> for models::Star {
    fn from(form: Star) -> Self {
        models::Star {
            name: form.name,
            luminosity: form.luminosity,
            spectral_class: form.spectral_class,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStar {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub solar_name: String,
}
