//! Test helpers and fixtures for the peggy contract tests

use std::cell::Cell;
use std::marker::PhantomData;

use alloy_primitives::U256;
use cosmwasm_std::testing::{mock_dependencies, MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{Addr, Empty, Order, OwnedDeps, Record, Storage};
use peggy_types::{
    BatchConfirm, BridgeValidator, Erc20Token, EthAddress, Nonce, OutgoingTransferTx,
    OutgoingTxBatch, Valset, ValsetConfirm,
};

use crate::msg::{InstantiateMsg, MemberMsg};

/// Ethereum keys of the members of [`valset`], highest power first
pub const MEMBER_KEYS: [u8; 3] = [0xa1, 0xa2, 0xa3];

/// Mock dependencies for testing
#[must_use]
pub fn mk_deps() -> OwnedDeps<MockStorage, MockApi, MockQuerier, Empty> {
    mock_dependencies()
}

/// Mock dependencies whose storage counts reads
#[must_use]
pub fn mk_counting_deps() -> OwnedDeps<CountingStorage, MockApi, MockQuerier, Empty> {
    OwnedDeps {
        storage: CountingStorage::default(),
        api: MockApi::default(),
        querier: MockQuerier::new(&[]),
        custom_query_type: PhantomData,
    }
}

/// Storage wrapper recording how many reads and range scans were issued
#[derive(Default)]
pub struct CountingStorage {
    inner: MockStorage,
    reads: Cell<usize>,
}

impl CountingStorage {
    /// Number of `get` and `range` calls since creation
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn record_read(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl Storage for CountingStorage {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.record_read();
        self.inner.get(key)
    }

    fn range<'a>(
        &'a self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        self.record_read();
        self.inner.range(start, end, order)
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.inner.set(key, value);
    }

    fn remove(&mut self, key: &[u8]) {
        self.inner.remove(key);
    }
}

/// An Ethereum address made of one repeated byte
pub fn eth(byte: u8) -> EthAddress {
    EthAddress::from([byte; 20])
}

/// A three member valset at `nonce`
pub fn valset(nonce: Nonce) -> Valset {
    let members = MEMBER_KEYS
        .iter()
        .zip([30, 20, 10])
        .map(|(&key, power)| BridgeValidator {
            power,
            ethereum_address: eth(key),
        })
        .collect();

    Valset::new(nonce, 100 + nonce, members)
}

/// A confirmation of the valset at `nonce` signed with the first member key
pub fn valset_confirm(nonce: Nonce, orchestrator: &Addr) -> ValsetConfirm {
    valset_confirm_with_key(nonce, orchestrator, MEMBER_KEYS[0])
}

/// A confirmation of the valset at `nonce` signed with the key `eth(key)`
pub fn valset_confirm_with_key(nonce: Nonce, orchestrator: &Addr, key: u8) -> ValsetConfirm {
    ValsetConfirm {
        nonce,
        orchestrator: orchestrator.clone(),
        eth_address: eth(key),
        signature: format!("0xvalset-{nonce}-{key:02x}"),
    }
}

/// A single transfer batch of `token_contract` at `nonce`
pub fn batch(nonce: Nonce, token_contract: EthAddress) -> OutgoingTxBatch {
    let token = |amount: u64| Erc20Token {
        amount: U256::from(amount),
        contract: token_contract,
    };

    OutgoingTxBatch {
        batch_nonce: nonce,
        transactions: vec![OutgoingTransferTx {
            id: nonce,
            sender: "cosmwasm1sender".to_string(),
            dest_address: eth(0x0d),
            erc20_token: token(1_000),
            erc20_fee: token(5),
        }],
        token_contract,
        block: 200 + nonce,
    }
}

/// A confirmation of the batch `(nonce, token_contract)` signed with the first member key
pub fn batch_confirm(nonce: Nonce, token_contract: EthAddress, orchestrator: &Addr) -> BatchConfirm {
    BatchConfirm {
        nonce,
        token_contract,
        eth_signer: eth(MEMBER_KEYS[0]),
        orchestrator: orchestrator.clone(),
        signature: format!("0xbatch-{nonce}"),
    }
}

/// An instantiate message installing the members of [`valset`]
pub fn instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        peggy_id: "defaultpeggyid".to_string(),
        bridge_ethereum_address: format!("0x{}", "be".repeat(20)),
        bridge_chain_id: 1,
        initial_members: valset(0)
            .members
            .into_iter()
            .map(|member| MemberMsg {
                power: member.power,
                ethereum_address: member.ethereum_address.to_string(),
            })
            .collect(),
    }
}
