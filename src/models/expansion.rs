//! Evaluation of a sparse polynomial chaos expansion.
//!
//! `y = Σ_i c_i · φ_T1[d_i0] · φ_mratio[d_i1] · φ_muf[d_i2] · φ_Tb[d_i3]`
//!
//! where `φ_v` is the orthonormal Legendre row of variable `v` and `d_i` the
//! degree tuple of term `i`.

use crate::domain::{PceTable, PceTerm, Variable};
use crate::error::AppError;
use crate::math::BasisDict;

/// Contract one table against a shared basis.
///
/// An empty table evaluates to `0.0`.
pub fn evaluate(basis: &BasisDict, table: &PceTable) -> Result<f64, AppError> {
    let mut y = 0.0;
    for (row, term) in table.terms.iter().enumerate() {
        y += term_value(basis, term, row)?;
    }
    Ok(y)
}

fn term_value(basis: &BasisDict, term: &PceTerm, row: usize) -> Result<f64, AppError> {
    let mut product = term.coefficient;
    for variable in Variable::ALL {
        let degree = term.degrees[variable.column()];
        let phi = basis.get(variable, degree as usize).ok_or_else(|| {
            AppError::data_integrity(format!(
                "Term {row}: degree {degree} for `{}` is outside 0..=7.",
                variable.name()
            ))
        })?;
        product *= phi;
    }
    Ok(product)
}
