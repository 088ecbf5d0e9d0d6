//! Batch results as CSV.
//!
//! Columns: `line,t1,muf,mratio,tb,rqi,im,c1,c2,beta,error`. Rows that failed
//! have empty result cells and a message in `error`.

use std::io::Write;

use crate::app::pipeline::BatchOutcome;
use crate::error::AppError;

const HEADER: [&str; 11] = [
    "line", "t1", "muf", "mratio", "tb", "rqi", "im", "c1", "c2", "beta", "error",
];

/// Write batch outcomes to `out` (typically stdout).
pub fn write_batch_csv<W: Write>(out: W, outcomes: &[BatchOutcome]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(HEADER)
        .map_err(|e| AppError::output(format!("Failed to write batch CSV header: {e}")))?;

    for o in outcomes {
        let mut record: Vec<String> = Vec::with_capacity(HEADER.len());
        record.push(o.line.to_string());

        match &o.input {
            Some(input) => {
                record.push(input.t1.to_string());
                record.push(input.muf.to_string());
                record.push(input.mratio.to_string());
                record.push(input.tb.to_string());
                record.push(input.rqi.clone());
                record.push(input.im.clone());
            }
            None => record.extend(std::iter::repeat_n(String::new(), 6)),
        }

        match &o.result {
            Ok(r) => {
                record.push(format!("{:.10}", r.c1));
                record.push(format!("{:.10}", r.c2));
                record.push(format!("{:.10}", r.beta));
                record.push(String::new());
            }
            Err(message) => {
                record.extend(std::iter::repeat_n(String::new(), 3));
                record.push(message.clone());
            }
        }

        writer
            .write_record(&record)
            .map_err(|e| AppError::output(format!("Failed to write batch CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush batch CSV: {e}")))?;
    Ok(())
}
