use crate::chain::LinkedInField;
use serde::{Deserialize, Serialize};

/// Name prefix for variables derived from uploaded CSV columns. A column
/// `title` surfaces in templates as the variable `csv_title`; the fix store
/// treats both spellings as the same logical column.
pub const CSV_COLUMN_PREFIX: &str = "csv_";

/// Where a personalization variable's values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    /// Scraped from the lead's LinkedIn profile.
    LinkedIn,
    /// Supplied by a column of the uploaded lead list.
    Csv,
    /// Registered through the custom-variable API.
    Api,
}

/// One personalization variable as the catalog presents it to the
/// configuration UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "exampleValue")]
    pub example_value: String,
    #[serde(rename = "variableType")]
    pub kind: VariableKind,
}

impl Variable {
    /// A variable backed by a column of the uploaded lead list.
    pub fn from_csv_column(column: &str, example: impl Into<String>) -> Self {
        let name = format!("{CSV_COLUMN_PREFIX}{column}");
        Self {
            id: name.clone(),
            name,
            description: format!("Value of the '{column}' column from the uploaded lead list"),
            example_value: example.into(),
            kind: VariableKind::Csv,
        }
    }
}

/// The built-in LinkedIn-sourced variables, in display order.
pub fn linkedin_variables() -> Vec<Variable> {
    LinkedInField::ALL
        .iter()
        .map(|field| {
            let (description, example) = linkedin_copy(*field);
            Variable {
                id: field.as_str().to_string(),
                name: field.as_str().to_string(),
                description: description.to_string(),
                example_value: example.to_string(),
                kind: VariableKind::LinkedIn,
            }
        })
        .collect()
}

fn linkedin_copy(field: LinkedInField) -> (&'static str, &'static str) {
    match field {
        LinkedInField::FirstName => ("The lead's first name", "Alex"),
        LinkedInField::LastName => ("The lead's last name", "Rivera"),
        LinkedInField::Company => ("The lead's current company", "Acme Corp"),
        LinkedInField::Title => ("The lead's current job title", "Head of Growth"),
        LinkedInField::Headline => ("The lead's profile headline", "Helping teams ship faster"),
        LinkedInField::Location => ("The lead's location", "Berlin, Germany"),
    }
}
