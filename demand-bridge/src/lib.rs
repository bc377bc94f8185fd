//! Demand bridge — the JSON boundary around the forecast engine.
//!
//! Callers send JSON. The bridge parses it into exactly one of N valid
//! operations, executes it against the demand core, and returns a
//! structured result.
//!
//! The type system is the validation layer:
//! - Every operation is an enum variant with typed parameters
//! - Every response is a structured type, not free-form text
//! - Invalid operations are rejected at parse time, not at runtime
//! - The compiler guarantees every operation has a handler

pub mod error;
pub mod ops;
pub mod protocol;

pub use error::{BridgeError, BridgeResult};
pub use ops::ForecastOperation;
pub use protocol::{AuditEntry, Bridge, BridgeRequest, BridgeResponse, OperationResult};
