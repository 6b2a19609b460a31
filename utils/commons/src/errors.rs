use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failing to mint a token because the derived token ID already exists
    /// in this contract (Error code: -4).
    TokenIdAlreadyExists,
    /// No more tokens are available to mint (Error code: -5).
    MintLimitReached,
    /// The attached payment does not equal the mint price (Error code: -6).
    IncorrectPayment,
    /// Address Not Found (Error code: -7).
    AddressNotFound,
    /// Failed to invoke a contract (Error code: -8).
    InvokeContractError,
    /// Upgrade failed because the new module does not exist
    /// (Error code: -9).
    FailedUpgradeMissingModule,
    /// Upgrade failed because the new module does not contain a contract
    /// with a matching name (Error code: -10).
    FailedUpgradeMissingContract,
    /// Upgrade failed because the smart contract version of the module is
    /// not supported (Error code: -11).
    FailedUpgradeUnsupportedModuleVersion,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to contract upgrades to CustomContractError.
impl From<UpgradeError> for CustomContractError {
    fn from(ue: UpgradeError) -> Self {
        match ue {
            UpgradeError::MissingModule => Self::FailedUpgradeMissingModule,
            UpgradeError::MissingContract => Self::FailedUpgradeMissingContract,
            UpgradeError::UnsupportedModuleVersion => Self::FailedUpgradeUnsupportedModuleVersion,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
