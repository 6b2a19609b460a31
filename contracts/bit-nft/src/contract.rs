use super::*;

/// Initialize the contract instance with an empty ledger capped at
/// [INITIAL_SUPPLY] tokens. Both supply counters start at zero.
#[init(contract = "BitNFT")]
fn contract_init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty(state_builder, INITIAL_SUPPLY))
}

/// Mint the next token of the collection to the sender. The attached
/// payment is the trigger of the mint and must equal the mint price
/// exactly.
///
/// Logs a `Mint` event with the attribute map of the fresh token, followed
/// by a `Transfer` event without a previous holder.
///
/// It rejects if:
/// - The attached amount differs from the mint price.
/// - The burn counter has reached the collection cap.
/// - The derived token ID collides with a live token.
/// - Fails to log an event.
#[receive(contract = "BitNFT", name = "mint", mutable, enable_logger, payable)]
fn contract_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        amount == MINT_PRICE,
        CustomContractError::IncorrectPayment.into()
    );

    // The payer receives the token.
    let recipient = ctx.sender();
    let (state, state_builder) = host.state_and_builder();
    let (token_id, attributes) = state.mint(&recipient, state_builder)?;

    // Event for the minted NFT, carrying its attributes.
    logger.log(&CustomEvent::Mint(TokenMintEvent {
        to: recipient,
        token_id: token_id.clone(),
        properties: attributes.to_map(),
    }))?;

    // Fresh tokens enter circulation without a previous holder.
    logger.log(&CustomEvent::Transfer(TokenTransferEvent {
        from: None,
        to: recipient,
        amount: ContractTokenAmount::from(1),
        token_id,
    }))?;

    Ok(())
}

/// Transfer a token to a new owner. Only the current owner is authorized.
///
/// Logs a `Transfer` event. When the receiver is a contract it is notified
/// synchronously through the entrypoint chosen by the caller; a rejection
/// in the receiving contract fails the whole transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID does not exist.
/// - The sender is not the owner of the token.
/// - Fails to log an event.
/// - The message sent to a contract receiver rejects.
#[receive(
    contract = "BitNFT",
    name = "transfer",
    parameter = "TokenTransferParams",
    mutable,
    enable_logger,
    return_value = "bool"
)]
fn contract_transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<bool> {
    // Parse the parameter.
    let params: TokenTransferParams = ctx.parameter_cursor().get()?;

    let owner = host
        .state()
        .owner_of(&params.token_id)
        .ok_or(ContractError::InvalidTokenId)?;
    // Authenticate the sender for this transfer.
    ensure!(ctx.sender() == owner, ContractError::Unauthorized);

    let to_address = params.to.address();
    // Update the contract state.
    let (state, state_builder) = host.state_and_builder();
    state.transfer(&params.token_id, &owner, &to_address, state_builder)?;

    // Log transfer event.
    logger.log(&CustomEvent::Transfer(TokenTransferEvent {
        from: Some(owner),
        to: to_address,
        amount: ContractTokenAmount::from(1),
        token_id: params.token_id.clone(),
    }))?;

    // If the receiver is a contract we notify it of the incoming token.
    if let Receiver::Contract(address, entrypoint_name) = params.to {
        let parameter = OnReceivingCis2Params {
            token_id: params.token_id,
            amount: ContractTokenAmount::from(1),
            from: owner,
            data: params.data,
        };
        host.invoke_contract(
            &address,
            &parameter,
            entrypoint_name.as_entrypoint_name(),
            Amount::zero(),
        )?;
    }

    Ok(true)
}

/// Burn a token. Only the current owner is authorized.
///
/// Removes the registry entry, the ownership entry, the owner's index
/// entry and every attribute of the token, and increments the burn
/// counter. No event is logged.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID does not exist.
/// - The sender is not the owner of the token.
#[receive(
    contract = "BitNFT",
    name = "burn",
    parameter = "BurnParams",
    mutable,
    return_value = "bool"
)]
fn contract_burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    // Parse the parameter.
    let params: BurnParams = ctx.parameter_cursor().get()?;

    let owner = host
        .state()
        .owner_of(&params.token_id)
        .ok_or(ContractError::InvalidTokenId)?;
    // Authenticate the sender for this burn.
    ensure!(ctx.sender() == owner, ContractError::Unauthorized);

    host.state_mut().burn(&params.token_id, &owner)?;

    Ok(true)
}

/// Fixed symbol of the collection.
#[receive(contract = "BitNFT", name = "symbol", return_value = "String")]
fn contract_symbol<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<String> {
    Ok(String::from(TOKEN_SYMBOL))
}

/// Tokens are whole units, so the number of decimals is fixed at zero.
#[receive(contract = "BitNFT", name = "decimals", return_value = "u8")]
fn contract_decimals<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u8> {
    Ok(TOKEN_DECIMALS)
}

/// Count of live tokens, derived from the mint and burn counters.
#[receive(contract = "BitNFT", name = "totalSupply", return_value = "u32")]
fn contract_total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u32> {
    Ok(host.state().total_supply())
}

/// Number of tokens held by the given address. Addresses without an entry
/// hold zero tokens.
#[receive(
    contract = "BitNFT",
    name = "balanceOf",
    parameter = "Address",
    return_value = "u32"
)]
fn contract_balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u32> {
    // Parse the parameter.
    let owner: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().balance_of(&owner))
}

/// Owner of the given token, or `None` when the token does not exist.
#[receive(
    contract = "BitNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn contract_owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Option<Address>> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().owner_of(&token_id))
}

/// Attribute map of the given token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token has no name attribute, which every live token has.
#[receive(
    contract = "BitNFT",
    name = "properties",
    parameter = "ContractTokenId",
    return_value = "TokenProperties"
)]
fn contract_properties<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenProperties> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().properties(&token_id)
}

/// All live token IDs, in the registry's key order rather than mint order.
#[receive(
    contract = "BitNFT",
    name = "tokens",
    return_value = "Vec<ContractTokenId>"
)]
fn contract_tokens<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<ContractTokenId>> {
    Ok(host.state().tokens())
}

/// Token IDs held by the given address, in index key order.
#[receive(
    contract = "BitNFT",
    name = "tokensOf",
    parameter = "Address",
    return_value = "Vec<ContractTokenId>"
)]
fn contract_tokens_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<ContractTokenId>> {
    // Parse the parameter.
    let owner: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().tokens_of(&owner))
}

/// View the supply counters of the contract.
#[receive(contract = "BitNFT", name = "view", return_value = "ViewState")]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ViewState> {
    let state = host.state();
    Ok(ViewState {
        initial_supply: state.initial_supply,
        minted: state.minted,
        burned: state.burned,
        total_supply: state.total_supply(),
    })
}

/// Upgrade the smart contract instance to a new module, optionally calling
/// a migration function of the new module afterwards. Only the
/// administrator is authorized.
///
/// This function is marked as `low_level` since a migration function might
/// change the shape of the state; writing the old state after migration
/// would corrupt it.
///
/// It rejects if:
/// - The sender is not the administrator.
/// - It fails to parse the parameter.
/// - The upgrade fails.
/// - The migration function rejects.
#[receive(
    contract = "BitNFT",
    name = "upgrade",
    parameter = "UpgradeParams",
    low_level
)]
fn contract_upgrade<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<S>,
) -> ContractResult<()> {
    // Check that only the administrator is authorized to upgrade.
    ensure!(
        ctx.sender().matches_account(&ADMINISTRATOR),
        ContractError::Unauthorized
    );
    // Parse the parameter.
    let params: UpgradeParams = ctx.parameter_cursor().get()?;
    // Trigger the upgrade.
    host.upgrade(params.module)
        .map_err(CustomContractError::from)?;
    // Call the migration function if provided.
    if let Some((func, parameters)) = params.migrate {
        host.invoke_contract_raw(
            &ctx.self_address(),
            parameters.as_parameter(),
            func.as_entrypoint_name(),
            Amount::zero(),
        )?;
    }
    Ok(())
}

/// Tear the ledger down. Unlike `upgrade` this returns `false` instead of
/// rejecting when the sender is not the administrator.
#[receive(contract = "BitNFT", name = "destroy", mutable, return_value = "bool")]
fn contract_destroy<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    if !ctx.sender().matches_account(&ADMINISTRATOR) {
        return Ok(false);
    }
    host.state_mut().wipe();
    Ok(true)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ADMIN_ADDRESS: Address = Address::Account(ADMINISTRATOR);
    const RECEIVER_CONTRACT: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const HOOK_NAME: &str = "onReceivingBitNFT";

    fn token_1() -> ContractTokenId {
        TokenIdVec(b"1".to_vec())
    }

    fn token_2() -> ContractTokenId {
        TokenIdVec(b"2".to_vec())
    }

    fn token_1_properties() -> TokenProperties {
        let mut properties = TokenProperties::new();
        properties.insert(String::from(NAME_FIELD), String::from("BIT #1"));
        properties.insert(String::from(DESCRIPTION_FIELD), String::from("BIT NFT #1"));
        properties.insert(String::from(IMAGE_FIELD), String::from("1.png"));
        properties.insert(String::from(URI_FIELD), String::from("Update later"));
        properties
    }

    /// Test helper function which creates a contract state with token `"1"`
    /// owned by `ADDRESS_0` and token `"2"` owned by `ADDRESS_1`.
    fn initial_state<S: HasStateApi>(state_builder: &mut StateBuilder<S>) -> State<S> {
        let mut state = State::empty(state_builder, INITIAL_SUPPLY);

        state
            .mint(&ADDRESS_0, state_builder)
            .expect_report("Failed to mint token 1");
        state
            .mint(&ADDRESS_1, state_builder)
            .expect_report("Failed to mint token 2");

        state
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let ctx = TestInitContext::empty();
        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = contract_init(&ctx, &mut builder);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(state.initial_supply, INITIAL_SUPPLY, "Wrong collection cap");
        claim_eq!(state.minted, 0, "No token should have been minted");
        claim_eq!(state.burned, 0, "No token should have been burned");
        claim_eq!(state.total_supply(), 0, "No token should be live");
        claim!(state.tokens().is_empty(), "Registry should be empty");
    }

    /// Test minting against the exact price, ensuring the token is owned by
    /// the payer, every store is updated and the appropriate events are
    /// logged.
    #[concordium_test]
    fn test_mint() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = contract_mint(&ctx, &mut host, MINT_PRICE, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        claim_eq!(
            host.state().owner_of(&token_1()),
            Some(ADDRESS_0),
            "Token should be owned by the payer"
        );
        claim_eq!(host.state().balance_of(&ADDRESS_0), 1, "Wrong balance");
        claim_eq!(host.state().total_supply(), 1, "Wrong total supply");
        claim_eq!(host.state().minted, 1, "Wrong mint counter");
        claim_eq!(
            host.state().tokens(),
            vec![token_1()],
            "Registry should contain exactly the minted token"
        );
        claim_eq!(
            host.state().tokens_of(&ADDRESS_0),
            vec![token_1()],
            "Owner index should contain exactly the minted token"
        );
        claim_eq!(
            host.state()
                .properties(&token_1())
                .expect_report("Token should have properties"),
            token_1_properties(),
            "Wrong token attributes"
        );

        // Check the logs
        claim_eq!(logger.logs.len(), 2, "Two events should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Mint(TokenMintEvent {
                to: ADDRESS_0,
                token_id: token_1(),
                properties: token_1_properties(),
            })),
            "Incorrect mint event emitted"
        );
        claim_eq!(
            logger.logs[1],
            to_bytes(&CustomEvent::Transfer(TokenTransferEvent {
                from: None,
                to: ADDRESS_0,
                amount: ContractTokenAmount::from(1),
                token_id: token_1(),
            })),
            "Incorrect transfer event emitted"
        );
    }

    /// Test that a payment different from the mint price is rejected and
    /// leaves the ledger untouched.
    #[concordium_test]
    fn test_mint_incorrect_payment() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        let mut host = TestHost::new(state, state_builder);

        for amount in [Amount::zero(), Amount::from_micro_ccd(2_000_001)].iter() {
            // Call the contract function.
            let result: ContractResult<()> = contract_mint(&ctx, &mut host, *amount, &mut logger);

            // Check the result.
            let err = result.expect_err_report("Expected to fail");
            claim_eq!(
                err,
                ContractError::Custom(CustomContractError::IncorrectPayment),
                "Error is expected to be IncorrectPayment"
            );
        }

        // Check the state.
        claim_eq!(host.state().total_supply(), 0, "No token should be live");
        claim_eq!(logger.logs.len(), 0, "No event should be logged");
    }

    /// Test that successive mints without burns produce strictly increasing
    /// decimal token ids.
    #[concordium_test]
    fn test_mint_sequence() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        let mut host = TestHost::new(state, state_builder);

        for _ in 0..3 {
            let result: ContractResult<()> =
                contract_mint(&ctx, &mut host, MINT_PRICE, &mut logger);
            claim!(result.is_ok(), "Results in rejection");
        }

        for token_id in [token_1(), token_2(), TokenIdVec(b"3".to_vec())].iter() {
            claim_eq!(
                host.state().owner_of(token_id),
                Some(ADDRESS_0),
                "Sequential ids should all exist and belong to the payer"
            );
        }
        claim_eq!(host.state().total_supply(), 3, "Wrong total supply");
    }

    /// Test that burning the newest token frees its numeral, so the next
    /// mint reissues it.
    #[concordium_test]
    fn test_mint_reissues_id_of_burned_newest_token() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        state
            .mint(&ADDRESS_0, &mut state_builder)
            .expect_report("Failed to mint token 1");
        state
            .mint(&ADDRESS_0, &mut state_builder)
            .expect_report("Failed to mint token 2");
        let mut host = TestHost::new(state, state_builder);

        // Burn the newest token.
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: token_2(),
        });
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<bool> = contract_burn(&ctx, &mut host);
        claim!(result.is_ok(), "Results in rejection");

        // The next mint derives the same numeral from the live supply.
        let result: ContractResult<()> = contract_mint(&ctx, &mut host, MINT_PRICE, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(
            host.state().owner_of(&token_2()),
            Some(ADDRESS_0),
            "The freed numeral should be reissued"
        );
        claim_eq!(host.state().minted, 3, "Wrong mint counter");
        claim_eq!(host.state().burned, 1, "Wrong burn counter");
    }

    /// Test that a mint whose derived id collides with a live token is
    /// refused instead of overwriting the live token.
    #[concordium_test]
    fn test_mint_refuses_live_id_collision() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        state
            .mint(&ADDRESS_0, &mut state_builder)
            .expect_report("Failed to mint token 1");
        state
            .mint(&ADDRESS_0, &mut state_builder)
            .expect_report("Failed to mint token 2");
        let mut host = TestHost::new(state, state_builder);

        // Burn an old token; the live supply now derives an id that is
        // still taken.
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: token_1(),
        });
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<bool> = contract_burn(&ctx, &mut host);
        claim!(result.is_ok(), "Results in rejection");

        // Call the contract function.
        let result: ContractResult<()> = contract_mint(&ctx, &mut host, MINT_PRICE, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::TokenIdAlreadyExists),
            "Error is expected to be TokenIdAlreadyExists"
        );

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_2()),
            Some(ADDRESS_0),
            "The live token should be untouched"
        );
        claim_eq!(host.state().total_supply(), 1, "Wrong total supply");
    }

    /// Test transfer succeeds, when the sender is the owner.
    #[concordium_test]
    fn test_transfer_account() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let transfer = TokenTransferParams {
            to: Receiver::from_account(ACCOUNT_1),
            token_id: token_1(),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&transfer);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<bool> = contract_transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        claim_eq!(
            result.expect_report("Results in rejection"),
            true,
            "Transfer should report success"
        );

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_1()),
            Some(ADDRESS_1),
            "Token should have a new owner"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_0),
            0,
            "Sender balance should be decreased"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_1),
            2,
            "Receiver balance should be increased"
        );
        claim!(
            host.state().tokens_of(&ADDRESS_0).is_empty(),
            "Sender index should no longer contain the token"
        );
        claim_eq!(
            host.state().tokens_of(&ADDRESS_1),
            vec![token_1(), token_2()],
            "Receiver index should contain both tokens"
        );

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::Transfer(TokenTransferEvent {
                from: Some(ADDRESS_0),
                to: ADDRESS_1,
                amount: ContractTokenAmount::from(1),
                token_id: token_1(),
            })),
            "Incorrect event emitted"
        );
    }

    /// Test transfer fails, when the sender is not the owner of the token,
    /// and leaves every store unchanged.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        // and parameter.
        let transfer = TokenTransferParams {
            to: Receiver::from_account(ACCOUNT_1),
            token_id: token_1(),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&transfer);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<bool> = contract_transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_1()),
            Some(ADDRESS_0),
            "Ownership should be unchanged"
        );
        claim_eq!(host.state().balance_of(&ADDRESS_0), 1, "Wrong balance");
        claim_eq!(host.state().balance_of(&ADDRESS_1), 1, "Wrong balance");
        claim_eq!(host.state().total_supply(), 2, "Wrong total supply");
    }

    /// Test transfer of an unknown token id fails.
    #[concordium_test]
    fn test_transfer_unknown_token() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let transfer = TokenTransferParams {
            to: Receiver::from_account(ACCOUNT_1),
            token_id: TokenIdVec(b"9".to_vec()),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&transfer);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<bool> = contract_transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test transfer to a contract notifies the receiving contract with the
    /// token id, the amount and the previous owner.
    #[concordium_test]
    fn test_transfer_to_contract_notifies_receiver() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let transfer = TokenTransferParams {
            to: Receiver::Contract(
                RECEIVER_CONTRACT,
                OwnedEntrypointName::new_unchecked(HOOK_NAME.to_string()),
            ),
            token_id: token_1(),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&transfer);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            OwnedEntrypointName::new_unchecked(HOOK_NAME.to_string()),
            test::parse_and_check_mock(
                |hook_params: &OnReceivingCis2Params<ContractTokenId, ContractTokenAmount>| {
                    hook_params.token_id == token_1()
                        && hook_params.amount == ContractTokenAmount::from(1)
                        && hook_params.from == ADDRESS_0
                },
                (),
            ),
        );

        // Call the contract function.
        let result: ContractResult<bool> = contract_transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_1()),
            Some(Address::Contract(RECEIVER_CONTRACT)),
            "Token should be owned by the receiving contract"
        );
        claim_eq!(
            host.state().balance_of(&Address::Contract(RECEIVER_CONTRACT)),
            1,
            "Receiving contract balance should be increased"
        );
    }

    /// Test that a rejection in the receiving contract fails the whole
    /// transfer.
    #[concordium_test]
    fn test_transfer_hook_rejection_fails_transfer() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let transfer = TokenTransferParams {
            to: Receiver::Contract(
                RECEIVER_CONTRACT,
                OwnedEntrypointName::new_unchecked(HOOK_NAME.to_string()),
            ),
            token_id: token_1(),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&transfer);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            OwnedEntrypointName::new_unchecked(HOOK_NAME.to_string()),
            test::rejecting_mock(),
        );

        // Call the contract function.
        let result: ContractResult<bool> = contract_transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::InvokeContractError),
            "Error is expected to be InvokeContractError"
        );
    }

    /// Testing burn functionality, ensuring every trace of the token is
    /// removed and no event is logged.
    #[concordium_test]
    fn test_burn() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: token_1(),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<bool> = contract_burn(&ctx, &mut host);

        // Check the result.
        claim_eq!(
            result.expect_report("Results in rejection"),
            true,
            "Burn should report success"
        );

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_1()),
            None,
            "Burned token should have no owner"
        );
        claim!(
            host.state().properties(&token_1()).is_err(),
            "Burned token should have no properties"
        );
        claim_eq!(
            host.state().tokens(),
            vec![token_2()],
            "Registry should no longer contain the burned token"
        );
        claim!(
            host.state().tokens_of(&ADDRESS_0).is_empty(),
            "Owner index should no longer contain the burned token"
        );
        claim_eq!(host.state().balance_of(&ADDRESS_0), 0, "Wrong balance");
        claim_eq!(host.state().total_supply(), 1, "Wrong total supply");
        claim_eq!(host.state().burned, 1, "Wrong burn counter");
    }

    /// Test burn fails, when the sender is not the owner of the token, and
    /// leaves every store unchanged.
    #[concordium_test]
    fn test_burn_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        // and parameter.
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: token_1(),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<bool> = contract_burn(&ctx, &mut host);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_1()),
            Some(ADDRESS_0),
            "Ownership should be unchanged"
        );
        claim_eq!(host.state().total_supply(), 2, "Wrong total supply");
    }

    /// Test burn of an unknown token id fails.
    #[concordium_test]
    fn test_burn_unknown_token() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: TokenIdVec(b"9".to_vec()),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<bool> = contract_burn(&ctx, &mut host);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test that the capacity gate closes once the burn counter reaches the
    /// collection cap.
    #[concordium_test]
    fn test_mint_capacity_after_burns() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: token_1(),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        let mut host = TestHost::new(state, state_builder);

        // Every cycle mints token "1" again and burns it.
        for _ in 0..INITIAL_SUPPLY {
            let result: ContractResult<()> =
                contract_mint(&ctx, &mut host, MINT_PRICE, &mut logger);
            claim!(result.is_ok(), "Results in rejection");

            let result: ContractResult<bool> = contract_burn(&ctx, &mut host);
            claim!(result.is_ok(), "Results in rejection");
        }
        claim_eq!(host.state().burned, INITIAL_SUPPLY, "Wrong burn counter");

        // Call the contract function.
        let result: ContractResult<()> = contract_mint(&ctx, &mut host, MINT_PRICE, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::MintLimitReached),
            "Error is expected to be MintLimitReached"
        );
    }

    /// Test the fixed and derived read-only queries.
    #[concordium_test]
    fn test_queries() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        let symbol: ReceiveResult<String> = contract_symbol(&ctx, &host);
        claim_eq!(
            symbol.expect_report("Results in rejection"),
            String::from("BITNFT"),
            "Wrong symbol"
        );

        let decimals: ReceiveResult<u8> = contract_decimals(&ctx, &host);
        claim_eq!(
            decimals.expect_report("Results in rejection"),
            0,
            "Wrong decimals"
        );

        let total_supply: ReceiveResult<u32> = contract_total_supply(&ctx, &host);
        claim_eq!(
            total_supply.expect_report("Results in rejection"),
            2,
            "Wrong total supply"
        );

        // Balance of an address without an entry is zero.
        let parameter_bytes = to_bytes(&Address::Account(AccountAddress([9u8; 32])));
        ctx.set_parameter(&parameter_bytes);
        let balance: ReceiveResult<u32> = contract_balance_of(&ctx, &host);
        claim_eq!(
            balance.expect_report("Results in rejection"),
            0,
            "Absent balance entries should read as zero"
        );

        // Owner of an unknown token is None.
        let parameter_bytes = to_bytes(&TokenIdVec(b"9".to_vec()));
        ctx.set_parameter(&parameter_bytes);
        let owner: ReceiveResult<Option<Address>> = contract_owner_of(&ctx, &host);
        claim_eq!(
            owner.expect_report("Results in rejection"),
            None,
            "Unknown tokens should have no owner"
        );

        // Properties of an unknown token reject.
        let parameter_bytes = to_bytes(&TokenIdVec(b"9".to_vec()));
        ctx.set_parameter(&parameter_bytes);
        let properties: ContractResult<TokenProperties> = contract_properties(&ctx, &host);
        let err = properties.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );

        // Registry enumeration is in key order.
        let tokens: ReceiveResult<Vec<ContractTokenId>> = contract_tokens(&ctx, &host);
        claim_eq!(
            tokens.expect_report("Results in rejection"),
            vec![token_1(), token_2()],
            "Wrong registry enumeration"
        );

        // Per-owner enumeration only lists the owner's tokens.
        let parameter_bytes = to_bytes(&ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);
        let tokens_of: ReceiveResult<Vec<ContractTokenId>> = contract_tokens_of(&ctx, &host);
        claim_eq!(
            tokens_of.expect_report("Results in rejection"),
            vec![token_2()],
            "Wrong per-owner enumeration"
        );
    }

    /// Testing the view functionality.
    #[concordium_test]
    fn test_view() {
        // Setup the context
        let ctx = TestReceiveContext::empty();

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ReceiveResult<ViewState> = contract_view(&ctx, &host);

        // Check the result.
        claim_eq!(
            result.expect_report("Results in rejection"),
            ViewState {
                initial_supply: INITIAL_SUPPLY,
                minted: 2,
                burned: 0,
                total_supply: 2,
            },
            "Wrong view state"
        );
    }

    /// Test that the ledger stores stay mutually consistent under a mix of
    /// mints, transfers and burns.
    #[concordium_test]
    fn test_ledger_consistency() {
        // Setup the context
        let mut mint_ctx = TestReceiveContext::empty();
        mint_ctx.set_sender(ADDRESS_0);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder, INITIAL_SUPPLY);
        let mut host = TestHost::new(state, state_builder);

        for _ in 0..4 {
            let result: ContractResult<()> =
                contract_mint(&mint_ctx, &mut host, MINT_PRICE, &mut logger);
            claim!(result.is_ok(), "Results in rejection");
        }

        // Transfer tokens "2" and "4" away, burn token "3".
        for token_id in [token_2(), TokenIdVec(b"4".to_vec())].iter() {
            let mut ctx = TestReceiveContext::empty();
            ctx.set_sender(ADDRESS_0);
            let parameter_bytes = to_bytes(&TokenTransferParams {
                to: Receiver::from_account(ACCOUNT_1),
                token_id: token_id.clone(),
                data: AdditionalData::empty(),
            });
            ctx.set_parameter(&parameter_bytes);
            let result: ContractResult<bool> = contract_transfer(&ctx, &mut host, &mut logger);
            claim!(result.is_ok(), "Results in rejection");
        }
        let mut burn_ctx = TestReceiveContext::empty();
        burn_ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&BurnParams {
            token_id: TokenIdVec(b"3".to_vec()),
        });
        burn_ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<bool> = contract_burn(&burn_ctx, &mut host);
        claim!(result.is_ok(), "Results in rejection");

        // Every balance matches its index, the registry matches the
        // counters, and every live token has exactly one owner.
        let state = host.state();
        claim_eq!(
            state.total_supply(),
            state.tokens().len() as u32,
            "Counters should match the registry"
        );
        for owner in [ADDRESS_0, ADDRESS_1].iter() {
            claim_eq!(
                state.balance_of(owner),
                state.tokens_of(owner).len() as u32,
                "Balance should match the owner index"
            );
            for token_id in state.tokens_of(owner) {
                claim_eq!(
                    state.owner_of(&token_id),
                    Some(*owner),
                    "Indexed tokens should be owned by the index owner"
                );
            }
        }
        claim_eq!(state.balance_of(&ADDRESS_0), 1, "Wrong balance");
        claim_eq!(state.balance_of(&ADDRESS_1), 2, "Wrong balance");
    }

    /// Test that destroy reports failure for anyone but the administrator
    /// and leaves the ledger untouched.
    #[concordium_test]
    fn test_destroy_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ReceiveResult<bool> = contract_destroy(&ctx, &mut host);

        // Check the result.
        claim_eq!(
            result.expect_report("Results in rejection"),
            false,
            "Destroy should report failure instead of rejecting"
        );

        // Check the state.
        claim_eq!(host.state().total_supply(), 2, "Wrong total supply");
        claim_eq!(
            host.state().owner_of(&token_1()),
            Some(ADDRESS_0),
            "Ownership should be unchanged"
        );
    }

    /// Test that the administrator can destroy the ledger, after which
    /// nothing can be minted.
    #[concordium_test]
    fn test_destroy_by_administrator() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADMIN_ADDRESS);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ReceiveResult<bool> = contract_destroy(&ctx, &mut host);

        // Check the result.
        claim_eq!(
            result.expect_report("Results in rejection"),
            true,
            "Destroy should report success"
        );

        // Check the state.
        claim_eq!(host.state().total_supply(), 0, "No token should be live");
        claim!(host.state().tokens().is_empty(), "Registry should be empty");
        claim_eq!(host.state().balance_of(&ADDRESS_0), 0, "Wrong balance");
        claim_eq!(
            host.state().owner_of(&token_1()),
            None,
            "No ownership entry should remain"
        );

        // The husk can no longer mint.
        let mut mint_ctx = TestReceiveContext::empty();
        mint_ctx.set_sender(ADDRESS_0);
        let mut logger = TestLogger::init();
        let result: ContractResult<()> =
            contract_mint(&mint_ctx, &mut host, MINT_PRICE, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::MintLimitReached),
            "Error is expected to be MintLimitReached"
        );
    }
}
