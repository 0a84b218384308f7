use super::lenient;
use crate::db::universe::UniverseColumn;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Universe {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub rate: Option<f64>,
}

impl From<Universe> for models::Universe {
    fn from(form: Universe) -> Self {
        models::Universe {
            name: form.name,
            age: form.age,
            rate: form.rate,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DeleteUniverse {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub name: String,
}

/// Column names as the front end sends them: `UNIVERSALNAME`, `AGE`, `EXPANSIONARYRATE`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Projection {
    #[validate(min_items = 1)]
    #[validate(max_items = 3)]
    pub columns: Vec<String>,
}

impl Projection {
    /// Parsed columns, first occurrence wins.
    pub fn columns(&self) -> Result<Vec<UniverseColumn>, String> {
        let mut columns: Vec<UniverseColumn> = Vec::with_capacity(self.columns.len());
        for name in &self.columns {
            let column = name.parse::<UniverseColumn>()?;
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        Ok(columns)
    }
}
