//! Orthonormal Legendre basis, degrees 0 through 7.
//!
//! Each degree is a fixed closed form `P_n(x) * sqrt(2n + 1)`:
//!
//! - `P_0 = 1`
//! - `P_1 = x`
//! - `P_2 = (3x^2 - 1) / 2`
//! - `P_3 = (5x^3 - 3x) / 2`
//! - `P_4 = (35x^4 - 30x^2 + 3) / 8`
//! - `P_5 = (63x^5 - 70x^3 + 15x) / 8`
//! - `P_6 = (231x^6 - 315x^4 + 105x^2 - 5) / 16`
//! - `P_7 = (429x^7 - 693x^5 + 315x^3 - 35x) / 16`
//!
//! Numerical notes:
//! - The coefficient tables were generated against exactly these expressions,
//!   evaluated left to right with `powf` powers. Results must match them bit
//!   for bit; a three-term recurrence differs in the last bits.

use crate::domain::{MAX_DEGREE, N_VARIABLES, Variable};
use crate::error::AppError;

/// Number of basis values per variable (degrees `0..=MAX_DEGREE`).
pub const N_DEGREES: usize = MAX_DEGREE + 1;

/// Normalised Legendre values at `x`, indexed by degree.
pub fn legendre_values(x: f64) -> [f64; N_DEGREES] {
    let mut out = [0.0; N_DEGREES];

    out[0] = 1.0;
    out[1] = x * 3f64.sqrt();
    out[2] = 0.5 * (3.0 * x.powf(2.0) - 1.0) * 5f64.sqrt();
    out[3] = 0.5 * (5.0 * x.powf(3.0) - 3.0 * x) * 7f64.sqrt();
    out[4] = (1.0 / 8.0) * (35.0 * x.powf(4.0) - 30.0 * x.powf(2.0) + 3.0) * 9f64.sqrt();
    out[5] = (1.0 / 8.0) * (63.0 * x.powf(5.0) - 70.0 * x.powf(3.0) + 15.0 * x) * 11f64.sqrt();
    out[6] = (1.0 / 16.0)
        * (231.0 * x.powf(6.0) - 315.0 * x.powf(4.0) + 105.0 * x.powf(2.0) - 5.0)
        * 13f64.sqrt();
    out[7] = (1.0 / 16.0)
        * (429.0 * x.powf(7.0) - 693.0 * x.powf(5.0) + 315.0 * x.powf(3.0) - 35.0 * x)
        * 15f64.sqrt();

    out
}

/// Basis values for all four variables at one input point.
///
/// Always complete: one row of `N_DEGREES` values per `Variable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisDict {
    rows: [[f64; N_DEGREES]; N_VARIABLES],
}

impl BasisDict {
    /// Build from `(mapped value, variable)` pairs given as two parallel slices.
    ///
    /// Every variable must appear exactly once.
    pub fn from_values(values: &[f64], names: &[Variable]) -> Result<Self, AppError> {
        if values.len() != names.len() {
            return Err(AppError::data_integrity(format!(
                "Basis construction needs one value per variable name (got {} values for {} names).",
                values.len(),
                names.len()
            )));
        }

        let mut rows: [Option<[f64; N_DEGREES]>; N_VARIABLES] = [None; N_VARIABLES];
        for (&x, &variable) in values.iter().zip(names) {
            let slot = &mut rows[variable.column()];
            if slot.is_some() {
                return Err(AppError::data_integrity(format!(
                    "Variable `{}` given twice during basis construction.",
                    variable.name()
                )));
            }
            *slot = Some(legendre_values(x));
        }

        let mut out = [[0.0; N_DEGREES]; N_VARIABLES];
        for variable in Variable::ALL {
            out[variable.column()] = rows[variable.column()].ok_or_else(|| {
                AppError::data_integrity(format!(
                    "No value supplied for variable `{}` during basis construction.",
                    variable.name()
                ))
            })?;
        }

        Ok(Self { rows: out })
    }

    /// Value of `variable`'s basis polynomial of the given degree.
    pub fn get(&self, variable: Variable, degree: usize) -> Option<f64> {
        self.rows[variable.column()].get(degree).copied()
    }

    /// All degree values for one variable.
    pub fn row(&self, variable: Variable) -> &[f64; N_DEGREES] {
        &self.rows[variable.column()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn degree_zero_is_one() {
        for &x in &[-3.0, -1.0, -0.3, 0.0, 0.7, 1.0, 2.5] {
            assert_eq!(legendre_values(x)[0], 1.0);
        }
    }

    #[test]
    fn values_at_zero() {
        let v = legendre_values(0.0);
        let expected = [
            1.0,
            0.0,
            -0.5 * 5f64.sqrt(),
            0.0,
            (3.0 / 8.0) * 3.0,
            0.0,
            (-5.0 / 16.0) * 13f64.sqrt(),
            0.0,
        ];
        for (deg, (&got, &want)) in v.iter().zip(&expected).enumerate() {
            assert!((got - want).abs() < TOL, "degree {deg}: got {got}, want {want}");
        }
    }

    #[test]
    fn values_at_one_carry_scaling() {
        let v = legendre_values(1.0);
        for (deg, &got) in v.iter().enumerate() {
            let want = ((2 * deg + 1) as f64).sqrt();
            assert!((got - want).abs() < 1e-12, "degree {deg}: got {got}, want {want}");
        }
        assert!((v[1] - 3f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn parity_at_minus_one() {
        let v = legendre_values(-1.0);
        for (deg, &got) in v.iter().enumerate() {
            let sign = if deg % 2 == 0 { 1.0 } else { -1.0 };
            let want = sign * ((2 * deg + 1) as f64).sqrt();
            assert!((got - want).abs() < 1e-12, "degree {deg}");
        }
    }

    #[test]
    fn orthonormal_under_midpoint_quadrature() {
        // (1/2) * ∫_{-1}^{1} p_m p_n dx = δ_mn for the orthonormal basis.
        let n = 20_000;
        let h = 2.0 / n as f64;
        let mut gram = [[0.0; N_DEGREES]; N_DEGREES];
        for i in 0..n {
            let x = -1.0 + (i as f64 + 0.5) * h;
            let v = legendre_values(x);
            for m in 0..N_DEGREES {
                for k in 0..N_DEGREES {
                    gram[m][k] += 0.5 * v[m] * v[k] * h;
                }
            }
        }
        for m in 0..N_DEGREES {
            for k in 0..N_DEGREES {
                let want = if m == k { 1.0 } else { 0.0 };
                assert!((gram[m][k] - want).abs() < 1e-4, "gram[{m}][{k}] = {}", gram[m][k]);
            }
        }
    }

    #[test]
    fn basis_dict_assigns_by_name() {
        let names = [Variable::Tb, Variable::T1, Variable::Friction, Variable::MassRatio];
        let values = [1.0, 0.0, -1.0, 0.5];
        let dict = BasisDict::from_values(&values, &names).unwrap();
        assert_eq!(dict.row(Variable::Tb), &legendre_values(1.0));
        assert_eq!(dict.row(Variable::T1), &legendre_values(0.0));
        assert_eq!(dict.get(Variable::MassRatio, 1), Some(0.5 * 3f64.sqrt()));
        assert_eq!(dict.get(Variable::T1, N_DEGREES), None);
    }

    #[test]
    fn basis_dict_rejects_count_mismatch() {
        let err = BasisDict::from_values(&[0.1, 0.2, 0.3], &Variable::ALL).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DataIntegrity);
        assert!(err.to_string().contains("3 values for 4 names"));
    }

    #[test]
    fn basis_dict_rejects_duplicates() {
        let names = [Variable::T1, Variable::T1, Variable::Friction, Variable::Tb];
        assert!(BasisDict::from_values(&[0.0; 4], &names).is_err());
    }

    #[test]
    fn basis_dict_rejects_incomplete_names() {
        let names = [Variable::T1, Variable::Friction, Variable::Tb];
        assert!(BasisDict::from_values(&[0.0; 3], &names).is_err());
    }
}
