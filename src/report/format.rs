//! Formatted terminal output.
//!
//! Formatting lives here so output changes stay localized and the numeric
//! code never prints.

use serde::Serialize;

use crate::domain::{PceResult, PhysicalInput, Variable};
use crate::error::AppError;
use crate::math::{legendre_values, map_to_symmetric};

/// Everything printed for one evaluation, in JSON-friendly form.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub input: PhysicalInput,
    pub result: PceResult,
}

/// Fixed-layout text summary of one evaluation.
pub fn format_result(input: &PhysicalInput, result: &PceResult) -> String {
    let mut out = String::new();

    out.push_str("=== pce - base-isolation PCE metamodel ===\n");
    out.push_str(&format!(
        "RQI: {}   IM: {}\n",
        input.rqi.tag(),
        input.im.tag()
    ));
    out.push_str("\nInputs:\n");
    for v in Variable::ALL {
        let (low, high) = v.bounds();
        let value = input.value(v);
        out.push_str(&format!(
            "  {:<7} {:>10.5}   range {:<13} mapped {:>8.5}\n",
            v.name(),
            value,
            v.bounds_label(),
            map_to_symmetric(value, low, high)
        ));
    }
    out.push_str("\nPrediction:\n");
    out.push_str(&format!("  c1      {:>16.10}\n", result.c1));
    out.push_str(&format!("  c2      {:>16.10}\n", result.c2));
    out.push_str(&format!("  beta    {:>16.10}\n", result.beta));

    out
}

/// Pretty JSON of an evaluation.
pub fn result_json(input: &PhysicalInput, result: &PceResult) -> Result<String, AppError> {
    let report = EvaluationReport {
        input: *input,
        result: *result,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::output(format!("Failed to serialize result JSON: {e}")))
}

/// Table of the normalised Legendre values at `x`.
pub fn format_basis(x: f64) -> String {
    let values = legendre_values(x);
    let mut out = format!("Normalised Legendre basis at x = {x}\n");
    for (degree, value) in values.iter().enumerate() {
        out.push_str(&format!("  p{degree}  {value:>+20.15e}\n"));
    }
    out
}
