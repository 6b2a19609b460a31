use super::*;

/// An untagged event of a token entering circulation. Carries the full
/// attribute map of the minted token.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct TokenMintEvent<T: IsTokenId> {
    /// The address receiving the minted token.
    pub to: Address,
    /// The ID of the minted token.
    pub token_id: T,
    /// Attributes attached to the token at mint time.
    pub properties: TokenProperties,
}

/// An untagged event of a token changing hands. `from` is `None` when the
/// token was freshly minted.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct TokenTransferEvent<T: IsTokenId> {
    /// The previous holder, if any.
    pub from: Option<Address>,
    /// The address receiving the token.
    pub to: Address,
    /// Number of tokens moved, only ever one for unique tokens.
    pub amount: ContractTokenAmount,
    /// The ID of the token.
    pub token_id: T,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent<T: IsTokenId> {
    /// A token was minted.
    Mint(TokenMintEvent<T>),
    /// A token changed hands.
    Transfer(TokenTransferEvent<T>),
}

impl<T: IsTokenId> Serial for CustomEvent<T> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Mint(event) => {
                out.write_u8(MINT_TOKEN_TAG)?;
                event.serial(out)
            }
            CustomEvent::Transfer(event) => {
                out.write_u8(TRANSFER_TOKEN_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl<T: IsTokenId> Deserial for CustomEvent<T> {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            MINT_TOKEN_TAG => TokenMintEvent::<T>::deserial(source).map(CustomEvent::Mint),
            TRANSFER_TOKEN_TAG => {
                TokenTransferEvent::<T>::deserial(source).map(CustomEvent::Transfer)
            }
            _ => Err(ParseError::default()),
        }
    }
}
