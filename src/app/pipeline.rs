//! Shared evaluation pipeline used by both the library API and the CLI.
//!
//! validate -> load tables (C1, C2, beta) -> map to [-1, 1] -> basis -> contract
//!
//! Either all three outputs are produced or an error is returned.

use std::rc::Rc;

use tracing::{debug, info};

use crate::domain::{PceResult, PceTable, PhysicalInput, Quantity, RawInput, TableKey, Variable};
use crate::error::{AppError, ErrorKind};
use crate::io::batch::BatchInput;
use crate::io::source::TableSource;
use crate::math::{BasisDict, map_to_symmetric};
use crate::models::evaluate;

/// Result of one batch row.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub line: usize,
    /// `None` when the row could not be parsed.
    pub input: Option<RawInput>,
    pub result: Result<PceResult, String>,
}

/// Evaluate the metamodel for raw (unvalidated) inputs.
pub fn run_pce<S: TableSource>(source: &S, raw: &RawInput) -> Result<PceResult, AppError> {
    let input = raw.validate()?;
    evaluate_input(source, &input)
}

/// Evaluate the metamodel for typed inputs.
pub fn evaluate_input<S: TableSource>(source: &S, input: &PhysicalInput) -> Result<PceResult, AppError> {
    input.validate()?;

    let [c1_table, c2_table, beta_table] = load_tables(source, input)?;
    let basis = basis_for(input)?;

    let result = PceResult {
        c1: evaluate(&basis, &c1_table)?,
        c2: evaluate(&basis, &c2_table)?,
        beta: evaluate(&basis, &beta_table)?,
    };
    debug!(c1 = result.c1, c2 = result.c2, beta = result.beta, "evaluated expansion");
    Ok(result)
}

/// Load the C1, C2 and beta tables for the input's selectors.
fn load_tables<S: TableSource>(source: &S, input: &PhysicalInput) -> Result<[Rc<PceTable>; 3], AppError> {
    let load = |quantity| source.load(TableKey::new(quantity, input.rqi, input.im));
    Ok([
        load(Quantity::C1)?,
        load(Quantity::C2)?,
        load(Quantity::Beta)?,
    ])
}

/// Shared basis for one input point, mapped in `T1, mratio, muf, Tb` order.
pub fn basis_for(input: &PhysicalInput) -> Result<BasisDict, AppError> {
    let mapped: Vec<f64> = Variable::ALL
        .iter()
        .map(|&v| {
            let (low, high) = v.bounds();
            map_to_symmetric(input.value(v), low, high)
        })
        .collect();
    BasisDict::from_values(&mapped, &Variable::ALL)
}

/// Evaluate every parsed row of a batch.
///
/// Parse failures and invalid inputs are reported per row; table problems
/// abort the whole batch.
pub fn run_batch<S: TableSource>(source: &S, batch: &BatchInput) -> Result<Vec<BatchOutcome>, AppError> {
    let mut out = Vec::with_capacity(batch.rows_read());

    for err in &batch.row_errors {
        out.push(BatchOutcome {
            line: err.line,
            input: None,
            result: Err(err.message.clone()),
        });
    }

    for row in &batch.rows {
        let result = match run_pce(source, &row.input) {
            Ok(r) => Ok(r),
            Err(e) if e.kind() == ErrorKind::InvalidInput => Err(e.to_string()),
            Err(e) => {
                return Err(AppError::new(e.kind(), format!("Line {}: {e}", row.line)));
            }
        };
        out.push(BatchOutcome {
            line: row.line,
            input: Some(row.input.clone()),
            result,
        });
    }

    out.sort_by_key(|o| o.line);

    let failed = out.iter().filter(|o| o.result.is_err()).count();
    info!(rows = out.len(), failed, "batch evaluated");
    Ok(out)
}
