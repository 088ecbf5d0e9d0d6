//! Input range checks.
//!
//! Validation is fail-fast and ordered: `T1`, `muf`, `mratio`, `Tb`, `RQI`, `IM`.
//! Only the first violation is reported.

use crate::domain::{Im, PhysicalInput, RawInput, Rqi, Variable};
use crate::error::AppError;

impl RawInput {
    pub fn new(t1: f64, muf: f64, mratio: f64, tb: f64, rqi: impl Into<String>, im: impl Into<String>) -> Self {
        Self {
            t1,
            muf,
            mratio,
            tb,
            rqi: rqi.into(),
            im: im.into(),
        }
    }

    /// Check every input against its declared range/set.
    pub fn validate(&self) -> Result<PhysicalInput, AppError> {
        check_ranges(self.t1, self.muf, self.mratio, self.tb)?;

        let rqi = Rqi::parse(&self.rqi)
            .ok_or_else(|| AppError::invalid_input("RQI must be 'D1' or 'u0'"))?;
        let im = Im::parse(&self.im)
            .ok_or_else(|| AppError::invalid_input("IM must be 'SC' or 'GM'"))?;

        Ok(PhysicalInput {
            t1: self.t1,
            muf: self.muf,
            mratio: self.mratio,
            tb: self.tb,
            rqi,
            im,
        })
    }
}

impl PhysicalInput {
    /// Range-check an already typed input (the selectors are valid by construction).
    pub fn validate(&self) -> Result<(), AppError> {
        check_ranges(self.t1, self.muf, self.mratio, self.tb)
    }
}

/// Continuous checks, in reporting order.
fn check_ranges(t1: f64, muf: f64, mratio: f64, tb: f64) -> Result<(), AppError> {
    check_range(Variable::T1, t1)?;
    check_range(Variable::Friction, muf)?;
    check_range(Variable::MassRatio, mratio)?;
    check_range(Variable::Tb, tb)
}

fn check_range(variable: Variable, value: f64) -> Result<(), AppError> {
    let (low, high) = variable.bounds();
    // Written so that NaN fails.
    if !(low <= value && value <= high) {
        return Err(AppError::invalid_input(format!(
            "{} must be in the range {}",
            variable.name(),
            variable.bounds_label()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn err_of(raw: RawInput) -> String {
        let err = raw.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        err.to_string()
    }

    #[test]
    fn accepts_interior_and_boundary_values() {
        let input = RawInput::new(0.5, 0.1, 0.5, 4.0, "D1", "SC").validate().unwrap();
        assert_eq!(input.rqi, Rqi::D1);
        assert_eq!(input.im, Im::Sc);

        assert!(RawInput::new(0.1, 0.03, 0.3, 3.0, "u0", "GM").validate().is_ok());
        assert!(RawInput::new(1.0, 0.18, 0.9, 6.0, "u0", "GM").validate().is_ok());
    }

    #[test]
    fn t1_below_range_is_reported() {
        assert_eq!(
            err_of(RawInput::new(0.05, 0.1, 0.5, 4.0, "D1", "SC")),
            "T1 must be in the range [0.1, 1]"
        );
    }

    #[test]
    fn bad_rqi_is_reported() {
        assert_eq!(
            err_of(RawInput::new(0.5, 0.1, 0.5, 4.0, "bad", "SC")),
            "RQI must be 'D1' or 'u0'"
        );
    }

    #[test]
    fn bad_im_is_reported() {
        assert_eq!(
            err_of(RawInput::new(0.5, 0.1, 0.5, 4.0, "u0", "PGA")),
            "IM must be 'SC' or 'GM'"
        );
    }

    #[test]
    fn first_violation_wins() {
        // muf and Tb both out of range, muf is checked first.
        assert_eq!(
            err_of(RawInput::new(0.5, 0.5, 0.5, 10.0, "bad", "bad")),
            "muf must be in the range [0.03, 0.18]"
        );
        assert_eq!(
            err_of(RawInput::new(0.5, 0.1, 0.95, 10.0, "D1", "SC")),
            "mratio must be in the range [0.3, 0.9]"
        );
        assert_eq!(
            err_of(RawInput::new(0.5, 0.1, 0.5, 2.9, "D1", "SC")),
            "Tb must be in the range [3, 6]"
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            err_of(RawInput::new(f64::NAN, 0.1, 0.5, 4.0, "D1", "SC")),
            "T1 must be in the range [0.1, 1]"
        );
    }

    #[test]
    fn raw_and_typed_report_the_same_violation() {
        let raw = RawInput::new(0.5, 0.2, 0.1, 7.0, "u0", "GM");
        let typed = PhysicalInput {
            t1: raw.t1,
            muf: raw.muf,
            mratio: raw.mratio,
            tb: raw.tb,
            rqi: Rqi::U0,
            im: Im::Gm,
        };
        let expected = "muf must be in the range [0.03, 0.18]";
        assert_eq!(raw.validate().unwrap_err().to_string(), expected);
        assert_eq!(typed.validate().unwrap_err().to_string(), expected);
    }

    #[test]
    fn validated_fields_keep_their_slots() {
        let input = RawInput::new(0.2, 0.05, 0.8, 5.5, "D1", "GM").validate().unwrap();
        assert_eq!(input.value(Variable::T1), 0.2);
        assert_eq!(input.value(Variable::Friction), 0.05);
        assert_eq!(input.value(Variable::MassRatio), 0.8);
        assert_eq!(input.value(Variable::Tb), 5.5);
    }

    #[test]
    fn typed_input_checks_ranges() {
        let input = PhysicalInput {
            t1: 0.5,
            muf: 0.1,
            mratio: 0.5,
            tb: 6.5,
            rqi: Rqi::D1,
            im: Im::Gm,
        };
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "Tb must be in the range [3, 6]"
        );
    }
}
