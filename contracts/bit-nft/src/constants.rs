use super::*;

/// Token symbol reported by the `symbol` function.
pub const TOKEN_SYMBOL: &str = "BITNFT";

/// Tokens are whole units only.
pub const TOKEN_DECIMALS: u8 = 0;

/// Number of tokens the collection is capped at on deployment.
pub const INITIAL_SUPPLY: u32 = 20;

/// Exact price of minting a single token.
pub const MINT_PRICE: Amount = Amount::from_ccd(2);

/// Account allowed to upgrade or destroy the contract instance.
/// In a rare case of an administrator wallet change this constant must be
/// updated and the contract upgraded.
pub const ADMINISTRATOR: AccountAddress = AccountAddress([
    71, 35, 132, 9, 24, 203, 88, 164, 77, 190, 201, 30, 70, 213, 143, 52, 119, 11, 98, 232, 165,
    46, 25, 140, 61, 93, 180, 7, 113, 222, 58, 129,
]);

/// Name attribute prefix of freshly minted tokens.
pub const NAME_PREFIX: &str = "BIT #";

/// Description attribute prefix of freshly minted tokens.
pub const DESCRIPTION_PREFIX: &str = "BIT NFT #";

/// Image attribute suffix of freshly minted tokens.
pub const IMAGE_SUFFIX: &str = ".png";

/// URI attribute of freshly minted tokens, to be replaced off-chain.
pub const URI_PLACEHOLDER: &str = "Update later";
