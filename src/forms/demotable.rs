use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Rename {
    #[validate(min_length = 1)]
    pub old_name: String,
    #[validate(min_length = 1)]
    pub new_name: String,
}
