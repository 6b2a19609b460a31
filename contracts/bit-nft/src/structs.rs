use super::*;

/// Attribute set attached to a token at mint time. Attributes are fixed at
/// creation, there is no update path.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenAttributes {
    /// Display name, the only mandatory attribute.
    pub name: String,
    /// Human readable description.
    pub description: String,
    /// Image file reference.
    pub image: String,
    /// External URI.
    pub uri: String,
}

/// Parameter type for the `transfer` function.
#[derive(Serialize, SchemaType)]
pub struct TokenTransferParams {
    /// The address receiving the token.
    pub to: Receiver,
    /// The ID of the token being transferred.
    pub token_id: ContractTokenId,
    /// Opaque data passed to a contract recipient, not interpreted here.
    pub data: AdditionalData,
}

/// Parameter type for the `burn` function.
#[derive(Serialize, SchemaType)]
pub struct BurnParams {
    /// The ID of the token being burned.
    pub token_id: ContractTokenId,
}

/// The parameter type for the contract function `upgrade`.
/// Takes the new module and optionally an entrypoint to call in the new
/// module after the upgrade. The upgrade is reverted if the entrypoint
/// fails.
#[derive(Serialize, SchemaType)]
pub struct UpgradeParams {
    /// The new module reference.
    pub module: ModuleReference,
    /// Optional entrypoint to call in the new module after upgrade.
    pub migrate: Option<(OwnedEntrypointName, OwnedParameter)>,
}

/// Return type of the `view` function.
#[derive(Serialize, SchemaType, PartialEq, Eq, Debug)]
pub struct ViewState {
    /// Configured collection cap.
    pub initial_supply: u32,
    /// Count of all tokens ever minted.
    pub minted: u32,
    /// Count of all tokens ever burned.
    pub burned: u32,
    /// Count of live tokens.
    pub total_supply: u32,
}

/// The contract state.
///
/// The registry, ownership, balance, per-owner index and metadata stores
/// are separate maps over the same state trie and stay mutually consistent
/// under every state transition.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Collection cap, fixed at instance creation.
    pub initial_supply: u32,
    /// Count of all tokens ever minted.
    pub minted: u32,
    /// Count of all tokens ever burned.
    pub burned: u32,
    /// Current owner of every live token.
    pub owners: StateMap<ContractTokenId, Address, S>,
    /// All live token IDs.
    pub all_tokens: StateSet<ContractTokenId, S>,
    /// Number of tokens held by each address. Absence means zero.
    pub balances: StateMap<Address, u32, S>,
    /// Token IDs held by each address.
    pub owned_tokens: StateMap<Address, StateSet<ContractTokenId, S>, S>,
    /// Name attribute of every live token.
    pub names: StateMap<ContractTokenId, String, S>,
    /// Description attribute of every live token.
    pub descriptions: StateMap<ContractTokenId, String, S>,
    /// Image attribute of every live token.
    pub images: StateMap<ContractTokenId, String, S>,
    /// URI attribute of every live token.
    pub uris: StateMap<ContractTokenId, String, S>,
}
