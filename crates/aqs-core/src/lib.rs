#![deny(missing_docs)]
#![doc = "Core data model shared across the AQS water chemistry survey toolkit."]

pub mod errors;
pub mod hash;
pub mod provenance;
pub mod result;
mod serde;
pub mod state;

pub use errors::{AqsError, ErrorInfo};
pub use hash::stable_hash_string;
pub use provenance::RunProvenance;
pub use result::{PhaseProperties, RawResult};
pub use serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
pub use state::{Quantity, SampleState};
