use super::*;

impl TokenAttributes {
    /// Attribute set of the token with the given mint sequence number.
    pub fn for_sequence(sequence: u32) -> Self {
        let decimal = decimal_string(sequence);

        let mut name = String::from(NAME_PREFIX);
        name.push_str(&decimal);

        let mut description = String::from(DESCRIPTION_PREFIX);
        description.push_str(&decimal);

        let mut image = decimal;
        image.push_str(IMAGE_SUFFIX);

        TokenAttributes {
            name,
            description,
            image,
            uri: String::from(URI_PLACEHOLDER),
        }
    }

    /// The attribute map as it appears in mint events.
    pub fn to_map(&self) -> TokenProperties {
        let mut properties = TokenProperties::new();
        properties.insert(String::from(NAME_FIELD), self.name.clone());
        properties.insert(String::from(DESCRIPTION_FIELD), self.description.clone());
        properties.insert(String::from(IMAGE_FIELD), self.image.clone());
        properties.insert(String::from(URI_FIELD), self.uri.clone());
        properties
    }
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an empty ledger capped at `initial_supply` tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>, initial_supply: u32) -> Self {
        State {
            initial_supply,
            minted: 0,
            burned: 0,
            owners: state_builder.new_map(),
            all_tokens: state_builder.new_set(),
            balances: state_builder.new_map(),
            owned_tokens: state_builder.new_map(),
            names: state_builder.new_map(),
            descriptions: state_builder.new_map(),
            images: state_builder.new_map(),
            uris: state_builder.new_map(),
        }
    }

    /// Count of live tokens, always derived from the counters.
    pub fn total_supply(&self) -> u32 {
        self.minted - self.burned
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.all_tokens.contains(token_id)
    }

    /// Mint the next token of the collection to `owner`.
    ///
    /// The token id is derived from the live supply and the capacity gate
    /// reads the burn counter. A derived id colliding with a live token is
    /// refused rather than overwritten.
    pub fn mint(
        &mut self,
        owner: &Address,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<(ContractTokenId, TokenAttributes)> {
        ensure!(
            self.burned < self.initial_supply,
            CustomContractError::MintLimitReached.into()
        );

        let sequence = self.total_supply() + 1;
        let token_id = token_id_from_sequence(sequence);

        ensure!(
            self.all_tokens.insert(token_id.clone()),
            CustomContractError::TokenIdAlreadyExists.into()
        );

        let attributes = TokenAttributes::for_sequence(sequence);
        self.names.insert(token_id.clone(), attributes.name.clone());
        self.descriptions
            .insert(token_id.clone(), attributes.description.clone());
        self.images
            .insert(token_id.clone(), attributes.image.clone());
        self.uris.insert(token_id.clone(), attributes.uri.clone());

        self.owners.insert(token_id.clone(), *owner);
        self.owned_tokens
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .modify(|index| {
                index.insert(token_id.clone());
            });

        self.minted += 1;
        self.balances
            .entry(*owner)
            .or_insert(0)
            .modify(|balance| *balance += 1);

        Ok((token_id, attributes))
    }

    /// Move a token to a new owner, updating the ownership entry, both
    /// per-owner indices and both balances.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        from: &Address,
        to: &Address,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<()> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        self.owners.insert(token_id.clone(), *to);

        {
            let mut sender_index = self
                .owned_tokens
                .get_mut(from)
                .ok_or(CustomContractError::AddressNotFound)?;
            sender_index.remove(token_id);
        }
        self.owned_tokens
            .entry(*to)
            .or_insert_with(|| state_builder.new_set())
            .modify(|index| {
                index.insert(token_id.clone());
            });

        self.balances
            .entry(*from)
            .occupied_or(CustomContractError::AddressNotFound)?
            .modify(|balance| *balance -= 1);
        self.balances
            .entry(*to)
            .or_insert(0)
            .modify(|balance| *balance += 1);

        Ok(())
    }

    /// Remove a token and every trace of it from the ledger.
    pub fn burn(&mut self, token_id: &ContractTokenId, owner: &Address) -> ContractResult<()> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        self.all_tokens.remove(token_id);
        self.names.remove(token_id);
        self.descriptions.remove(token_id);
        self.images.remove(token_id);
        self.uris.remove(token_id);
        self.owners.remove(token_id);

        {
            let mut owner_index = self
                .owned_tokens
                .get_mut(owner)
                .ok_or(CustomContractError::AddressNotFound)?;
            owner_index.remove(token_id);
        }

        self.balances
            .entry(*owner)
            .occupied_or(CustomContractError::AddressNotFound)?
            .modify(|balance| *balance -= 1);
        self.burned += 1;

        Ok(())
    }

    /// Number of tokens held by `owner`. A missing entry means zero.
    pub fn balance_of(&self, owner: &Address) -> u32 {
        self.balances.get(owner).map_or(0, |balance| *balance)
    }

    /// Current owner of a token, if the token exists.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> Option<Address> {
        self.owners.get(token_id).map(|owner| *owner)
    }

    /// Attribute map of a token. The name attribute is mandatory, the rest
    /// are included when present.
    pub fn properties(&self, token_id: &ContractTokenId) -> ContractResult<TokenProperties> {
        let name = self
            .names
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        let mut properties = TokenProperties::new();
        properties.insert(String::from(NAME_FIELD), name.clone());

        if let Some(uri) = self.uris.get(token_id) {
            properties.insert(String::from(URI_FIELD), uri.clone());
        }
        if let Some(description) = self.descriptions.get(token_id) {
            properties.insert(String::from(DESCRIPTION_FIELD), description.clone());
        }
        if let Some(image) = self.images.get(token_id) {
            properties.insert(String::from(IMAGE_FIELD), image.clone());
        }

        Ok(properties)
    }

    /// All live token IDs in the registry's key order.
    pub fn tokens(&self) -> Vec<ContractTokenId> {
        self.all_tokens.iter().map(|token_id| token_id.clone()).collect()
    }

    /// Token IDs held by `owner` in index key order.
    pub fn tokens_of(&self, owner: &Address) -> Vec<ContractTokenId> {
        self.owned_tokens.get(owner).map_or_else(Vec::new, |index| {
            index.iter().map(|token_id| token_id.clone()).collect()
        })
    }

    /// Erase the whole ledger, counters included. Only reachable through
    /// the administrator gate.
    pub fn wipe(&mut self) {
        self.initial_supply = 0;
        self.minted = 0;
        self.burned = 0;
        self.owners.clear_flat();
        self.all_tokens.clear();
        self.balances.clear_flat();
        self.owned_tokens.clear();
        self.names.clear_flat();
        self.descriptions.clear_flat();
        self.images.clear_flat();
        self.uris.clear_flat();
    }
}
