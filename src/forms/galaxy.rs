use super::lenient;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Galaxy {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub name: String,
    #[validate(max_length = 50)]
    pub constellation: Option<String>,
    #[serde(rename = "type")]
    #[validate(max_length = 50)]
    pub variation_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    #[validate(max_length = 50)]
    pub count: Option<String>,
    #[validate(max_length = 50)]
    pub object: Option<String>,
}

impl From<Galaxy> for models::Galaxy {
    fn from(form: Galaxy) -> Self {
        models::Galaxy {
            name: form.name,
            constellation: form.constellation,
            variation_type: form.variation_type,
            radius: form.radius,
            star_count: form.count,
            central_object: form.object,
        }
    }
}
