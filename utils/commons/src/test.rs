pub use inner::*;

mod inner {
    use concordium_std::test_infrastructure::MockFn;
    use concordium_std::*;

    /// Mock an entrypoint that accepts a call only when its parameter
    /// parses as `D` and passes `check`, returning `return_value`.
    /// Annotate the closure argument to pin `D`.
    pub fn parse_and_check_mock<D: Deserial, S>(
        check: impl Fn(&D) -> bool + 'static,
        return_value: impl Clone + Serial + 'static,
    ) -> MockFn<S> {
        MockFn::new(move |parameter, _, _, _state| {
            let value =
                D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
            if !check(&value) {
                return Err(CallContractError::Trap);
            };
            Ok((false, Some(return_value.clone())))
        })
    }

    /// Mock an entrypoint that rejects every call.
    pub fn rejecting_mock<S>() -> MockFn<S> {
        MockFn::new(move |_parameter, _amount, _balance, _state| -> CallContractResult<()> {
            Err(CallContractError::Trap)
        })
    }
}
