use super::*;
use concordium_std::collections::BTreeMap;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token ids are the ASCII decimal rendering of a mint sequence number, so
/// the variable length representation is used.
pub type ContractTokenId = TokenIdVec;

/// Contract token amount type.
/// Every token is unique, so a transferred amount is only ever one.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Token attribute map as returned by the `properties` query and carried in
/// mint events.
pub type TokenProperties = BTreeMap<String, String>;
