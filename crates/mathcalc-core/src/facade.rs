//! Computation facade: boundary validation, engine dispatch and details
//! formatting.
//!
//! This is what the HTTP API and the CLI call. It holds no state and does
//! no logging; persisting the returned record is the caller's concern.

use crate::engine::Engine;
use crate::error::ComputeError;
use crate::record::ResultRecord;
use crate::request::ComputeRequest;

/// Validate `req`, run the engine, and assemble the result record.
///
/// Invalid input (negative exponent or index) fails with
/// [`ComputeError::Validation`] before the engine is touched. The
/// `details` field is the fixed format `"<op>(<args>)=<result>"`.
///
/// # Example
/// ```
/// use mathcalc_core::{compute, ComputeRequest, Engine};
///
/// let engine = Engine::new();
/// let record = compute(&engine, &ComputeRequest::Pow { base: 2, exponent: 10 }).unwrap();
/// assert_eq!(record.details, "pow(2,10)=1024");
/// ```
pub fn compute(engine: &Engine, req: &ComputeRequest) -> Result<ResultRecord, ComputeError> {
    validate(req)?;
    let record = match *req {
        ComputeRequest::Pow { base, exponent } => {
            let result = engine.pow(base, exponent)?;
            let details = format!("pow({base},{exponent})={result}");
            ResultRecord { result, details }
        }
        ComputeRequest::Fib { n } => {
            let result = engine.fib(n)?;
            let details = format!("fib({n})={result}");
            ResultRecord { result, details }
        }
        ComputeRequest::Fact { n } => {
            let result = engine.fact(n)?;
            let details = format!("fact({n})={result}");
            ResultRecord { result, details }
        }
    };
    Ok(record)
}

fn validate(req: &ComputeRequest) -> Result<(), ComputeError> {
    match *req {
        ComputeRequest::Pow { exponent, .. } if exponent < 0 => Err(ComputeError::Validation(
            format!("exponent must be non-negative, got {exponent}"),
        )),
        ComputeRequest::Fib { n } | ComputeRequest::Fact { n } if n < 0 => Err(
            ComputeError::Validation(format!("n must be non-negative, got {n}")),
        ),
        _ => Ok(()),
    }
}
