use crate::catalog::VariableKind;
use crate::editor::{
    FallbackState, StateMode, determine_fallback_mode, parse_fix_chain, validate_fallback_state,
};
use crate::store::CsvConfig;
use crate::wire::config_from_json;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn state_mode_str(mode: StateMode) -> &'static str {
    match mode {
        StateMode::InsertValue => "insertValue",
        StateMode::FetchLinkedIn => "fetchLinkedIn",
        StateMode::SendBlank => "sendBlank",
        StateMode::SkipLead => "skipLead",
    }
}

impl<'py> IntoPyObject<'py> for FallbackState {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = std::convert::Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);

        dict.set_item("mode", state_mode_str(self.mode)).unwrap();
        dict.set_item("default_value", self.default_value).unwrap();

        match self.linkedin_field {
            Some(field) => dict.set_item("linkedin_field", field.as_str()).unwrap(),
            None => dict.set_item("linkedin_field", py.None()).unwrap(),
        }
        match self.fallback_mode {
            Some(mode) => dict.set_item("fallback_mode", state_mode_str(mode)).unwrap(),
            None => dict.set_item("fallback_mode", py.None()).unwrap(),
        }
        dict.set_item("fallback_default_value", self.fallback_default_value)
            .unwrap();

        Ok(dict)
    }
}

fn parse_kind(variable_type: &str) -> PyResult<VariableKind> {
    match variable_type {
        "linkedin" => Ok(VariableKind::LinkedIn),
        "csv" => Ok(VariableKind::Csv),
        "api" => Ok(VariableKind::Api),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown variable type '{other}'; expected linkedin, csv, or api"
        ))),
    }
}

/// A variable fallback-configuration engine.
///
/// This class parses a campaign's csv-config payload upon initialization
/// and exposes the normalization and validation the configuration dialogs
/// perform, for inspection from ops tooling.
#[pyclass(name = "Fixchain")]
struct FixchainPy {
    config: CsvConfig,
}

#[pymethods]
impl FixchainPy {
    /// Parses a campaign csv-config JSON document.
    ///
    /// Args:
    ///     config_json (str): The `csvConfig` payload as stored with the
    ///         campaign. Malformed fix chains inside the document degrade to
    ///         the skip-the-lead behavior; only unparseable JSON raises.
    ///
    /// Raises:
    ///     ValueError: If the document itself cannot be parsed as JSON.
    #[new]
    fn new(config_json: &str) -> PyResult<Self> {
        let config = config_from_json(config_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(FixchainPy { config })
    }

    /// The configured column names, in storage order.
    fn column_names(&self) -> Vec<String> {
        self.config
            .column_fixes
            .iter()
            .map(|fix| fix.column_name.clone())
            .collect()
    }

    /// Normalizes the stored chain for a column into flat editing state.
    ///
    /// Args:
    ///     column (str): The column or variable name; the `csv_` alias is
    ///         resolved.
    ///     variable_type (str): One of "linkedin", "csv", or "api".
    ///
    /// Returns:
    ///     dict: The editing state the configuration dialog would open with.
    fn state_of(&self, column: &str, variable_type: &str) -> PyResult<FallbackState> {
        let kind = parse_kind(variable_type)?;
        let chain = self.config.get(column).map(|fix| &fix.chain);
        let mode = determine_fallback_mode(kind, chain);
        Ok(parse_fix_chain(mode, chain))
    }

    /// Runs the pre-save completeness gate for a column's stored chain.
    ///
    /// Returns:
    ///     dict: Two keys — "is_valid" (bool) and "error" (str | None).
    fn check<'py>(
        &self,
        py: Python<'py>,
        column: &str,
        variable_type: &str,
    ) -> PyResult<Bound<'py, PyDict>> {
        let kind = parse_kind(variable_type)?;
        let chain = self.config.get(column).map(|fix| &fix.chain);
        let mode = determine_fallback_mode(kind, chain);
        let validation = validate_fallback_state(mode, &parse_fix_chain(mode, chain));

        let dict = PyDict::new(py);
        dict.set_item("is_valid", validation.is_valid)?;
        match validation.error {
            Some(message) => dict.set_item("error", message)?,
            None => dict.set_item("error", py.None())?,
        }
        Ok(dict)
    }
}

/// Python bindings to the fixchain engine: parse a campaign csv-config
/// payload and inspect how each column's missing-data behavior normalizes
/// and validates.
#[pymodule]
fn fixchain(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FixchainPy>()?;
    Ok(())
}
