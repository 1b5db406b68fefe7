//! The `_core` Python module (feature `python`), reading the global catalog.
use crate::catalog;
use crate::display::{format_constant, FormatOptions};
use crate::store::RegistryError;
use pyo3::exceptions::{PyKeyError, PyRuntimeError};
use pyo3::prelude::*;

fn to_py_err(e: RegistryError) -> PyErr {
    match e {
        RegistryError::UnknownName { .. } => PyKeyError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

/// `(value, unit)` of a catalog constant.
#[pyfunction]
fn get(name: &str) -> PyResult<(f64, String)> {
    let registry = catalog::global().map_err(to_py_err)?;
    let constant = registry.get(name).map_err(to_py_err)?;
    Ok((constant.value(), constant.unit().to_string()))
}

/// All catalog names in declaration order.
#[pyfunction]
fn names() -> PyResult<Vec<String>> {
    let registry = catalog::global().map_err(to_py_err)?;
    Ok(registry.names().map(str::to_string).collect())
}

#[pyfunction]
#[pyo3(name = "format", signature = (name, precision=None))]
fn format_named(name: &str, precision: Option<usize>) -> PyResult<String> {
    let registry = catalog::global().map_err(to_py_err)?;
    let constant = registry.get(name).map_err(to_py_err)?;
    let options = FormatOptions { precision, ..FormatOptions::default() };
    Ok(format_constant(constant, &options))
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get, m)?)?;
    m.add_function(wrap_pyfunction!(names, m)?)?;
    m.add_function(wrap_pyfunction!(format_named, m)?)?;
    Ok(())
}
