use super::variable::{Variable, VariableKind, linkedin_variables};
use crate::error::CatalogError;
use ahash::AHashMap;

/// The set of personalization variables available to a campaign, in display
/// order, with a name index for the lookups the editor makes on every
/// dialog open.
#[derive(Debug, Clone, Default)]
pub struct VariableCatalog {
    variables: Vec<Variable>,
    index: AHashMap<String, usize>,
}

impl VariableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog preloaded with the built-in LinkedIn variables.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for variable in linkedin_variables() {
            // Built-in names are distinct; insert cannot fail.
            let _ = catalog.insert(variable);
        }
        catalog
    }

    /// Registers a custom variable created through the API.
    pub fn register_custom(
        &mut self,
        name: &str,
        description: impl Into<String>,
        example_value: impl Into<String>,
    ) -> Result<&Variable, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(CatalogError::InvalidName(name.to_string()));
        }
        let idx = self.insert(Variable {
            id: name.to_string(),
            name: name.to_string(),
            description: description.into(),
            example_value: example_value.into(),
            kind: VariableKind::Api,
        })?;
        Ok(&self.variables[idx])
    }

    /// Adds one variable per detected CSV column, skipping columns already
    /// present under their `csv_` name.
    pub fn extend_from_columns<'a>(&mut self, columns: impl IntoIterator<Item = &'a str>) {
        for column in columns {
            let variable = Variable::from_csv_column(column, "");
            let _ = self.insert(variable);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&idx| &self.variables[idx])
    }

    /// The origin of a variable, as the mode classifier consumes it.
    pub fn kind_of(&self, name: &str) -> Option<VariableKind> {
        self.get(name).map(|v| v.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn insert(&mut self, variable: Variable) -> Result<usize, CatalogError> {
        if self.index.contains_key(&variable.name) {
            return Err(CatalogError::DuplicateName(variable.name));
        }
        let idx = self.variables.len();
        self.index.insert(variable.name.clone(), idx);
        self.variables.push(variable);
        Ok(idx)
    }
}
