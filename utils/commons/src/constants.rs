/// Tag for the Custom Mint event.
pub const MINT_TOKEN_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Transfer event.
pub const TRANSFER_TOKEN_TAG: u8 = u8::MAX - 6;

pub const NAME_FIELD: &str = "name";
pub const URI_FIELD: &str = "URI";
pub const DESCRIPTION_FIELD: &str = "description";
pub const IMAGE_FIELD: &str = "image";
