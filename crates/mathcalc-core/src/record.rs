//! Result records handed back to API and CLI callers.

use num_bigint::BigInt;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Exact result of one computation plus its display line.
///
/// Immutable value type, produced once per request. `result` serializes to
/// JSON as a decimal string: consumers with fixed-width number types must
/// not silently truncate arbitrary-precision values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// The exact integer result.
    pub result: BigInt,
    /// Fixed-format description, e.g. `pow(2,10)=1024`.
    pub details: String,
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ResultRecord", 2)?;
        s.serialize_field("result", &self.result.to_string())?;
        s.serialize_field("details", &self.details)?;
        s.end()
    }
}
