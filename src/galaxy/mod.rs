//! GalaxyData trait inspection.
//!
//! # Data Flow
//! ```text
//! TokenId (CLI argument)
//!     → reader.rs (TraitReader seam; contract.rs is the on-chain impl)
//!     → encoded bytes32 labels as hex strings
//!     → decode.rs (hex → text)
//!     → report.rs (flat list or ordered trait → values mapping)
//! ```

pub mod contract;
pub mod decode;
pub mod reader;
pub mod report;
pub mod types;

pub use contract::GalaxyData;
pub use decode::{hex_to_string, DecodeError};
pub use reader::TraitReader;
pub use report::{build_catalog, TraitCatalog};
pub use types::{GalaxyError, TokenId};
