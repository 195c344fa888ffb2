//! The contract-access seam.

use std::future::Future;

use crate::galaxy::types::{GalaxyError, TokenId};

/// Read-only view of the GalaxyData contract.
///
/// Both methods return `0x`-prefixed hex strings exactly as the contract
/// stores them; decoding is the caller's job. The outer sequence of
/// `get_traits_available_values` is positionally aligned with `get_traits`.
pub trait TraitReader {
    /// Encoded trait names declared for `token_id`.
    fn get_traits(
        &self,
        token_id: &TokenId,
    ) -> impl Future<Output = Result<Vec<String>, GalaxyError>>;

    /// Encoded available values, one list per trait.
    fn get_traits_available_values(
        &self,
        token_id: &TokenId,
    ) -> impl Future<Output = Result<Vec<Vec<String>>, GalaxyError>>;
}
