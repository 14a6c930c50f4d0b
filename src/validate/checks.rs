use crate::error::ModelError;

/// Checks that `value` is an actual number (finite, not NaN).
/// Returns the value unchanged so checks can be chained at call sites.
pub fn numeric(value: f64, what: &'static str) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::InvalidArgument {
            expected: what,
            got: value.to_string(),
        })
    }
}

/// Checks every element of `values` the way `numeric` checks one value.
/// The error names the first offending index.
pub fn numeric_slice<'a>(
    values: &'a [f64],
    what: &'static str,
) -> Result<&'a [f64], ModelError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(values),
        Some(i) => Err(ModelError::InvalidArgument {
            expected: what,
            got: format!("{} at index {}", values[i], i),
        }),
    }
}

/// Checks that `values` holds exactly `expected` elements.
pub fn exact_len(values: &[f64], expected: usize) -> Result<&[f64], ModelError> {
    if values.len() == expected {
        Ok(values)
    } else {
        Err(ModelError::ShapeMismatch {
            expected,
            got: values.len(),
        })
    }
}

/// Validates a feature count supplied as a float.
///
/// Accepted only when finite, positive and whole-valued: `4.0` becomes `4`,
/// while `4.5`, `0.0` and non-finite values are rejected. This is the
/// explicit guard for callers holding a count in floating point; integer
/// callers go straight to the `usize` constructors.
pub fn entry_count(value: f64) -> Result<usize, ModelError> {
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(ModelError::InvalidArgument {
            expected: "a positive whole-valued feature count",
            got: value.to_string(),
        })
    }
}
