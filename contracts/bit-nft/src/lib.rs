//! A fixed-supply NFT ledger following the NEP-11 surface.
//!
//! # Description
//! An instance of this smart contract tracks a capped collection of unique
//! tokens. Tokens are minted by paying the exact mint price to the `mint`
//! function, which derives the next token id from the live supply and
//! attaches a fixed attribute set (name, description, image and URI) to the
//! token. The owner of a token can transfer or burn it; a transfer to a
//! contract address notifies the recipient synchronously.
//!
//! Ownership, the token registry, per-owner balances, per-owner token
//! indices and the per-attribute metadata are kept in separate maps of the
//! contract state and stay mutually consistent under every state
//! transition. The total supply is never stored, it is derived from the
//! monotonic mint and burn counters.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, events::*, helper::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod helper;
mod impls;
mod structs;
