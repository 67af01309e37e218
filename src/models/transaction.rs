//! Transactions as reported by the indexer.
//!
//! Exactly one of the per-type sections is populated, matching
//! [`Transaction::tx_type`]: `pay`, `keyreg`, `acfg`, `axfer`, `afrz` or
//! `appl`.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as, skip_serializing_none};

use super::ledger::{AccountStateDelta, AssetParams, EvalDeltaKeyValue, StateSchema};

/// Fields common to all transactions plus an envelope for each type.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Transaction {
    pub application_transaction: Option<TransactionApplication>,
    /// Asset creation, reconfiguration or destruction.
    pub asset_config_transaction: Option<TransactionAssetConfig>,
    pub asset_freeze_transaction: Option<TransactionAssetFreeze>,
    pub asset_transfer_transaction: Option<TransactionAssetTransfer>,
    /// The address that signed the transaction, when it differs from the
    /// sender because the sender was rekeyed.
    pub auth_addr: String,
    /// Rewards applied to the close-remainder-to account.
    pub close_rewards: u64,
    pub closing_amount: u64,
    pub confirmed_round: u64,
    /// Application ID created by this transaction, if any.
    pub created_application_index: u64,
    /// Asset ID created by this transaction, if any.
    pub created_asset_index: u64,
    pub fee: u64,
    pub first_valid: u64,
    #[serde_as(as = "Base64")]
    pub genesis_hash: Vec<u8>,
    pub genesis_id: String,
    /// Global state changes made by the application call.
    pub global_state_delta: Vec<EvalDeltaKeyValue>,
    /// SHA-512/256 digest of the transaction group, when part of one.
    #[serde_as(as = "Base64")]
    pub group: Vec<u8>,
    pub id: String,
    /// Offset into the round where this transaction was confirmed.
    pub intra_round_offset: u64,
    pub keyreg_transaction: Option<TransactionKeyreg>,
    pub last_valid: u64,
    /// 32-byte lease enforcing mutual exclusion of transactions.
    #[serde_as(as = "Base64")]
    pub lease: Vec<u8>,
    /// Local state changes made by the application call.
    pub local_state_delta: Vec<AccountStateDelta>,
    #[serde_as(as = "Base64")]
    pub note: Vec<u8>,
    pub payment_transaction: Option<TransactionPayment>,
    pub receiver_rewards: u64,
    /// New authorized address of the sender, when rekeying.
    pub rekey_to: String,
    /// Time the including block was confirmed, in seconds since the epoch.
    pub round_time: u64,
    pub sender: String,
    pub sender_rewards: u64,
    pub signature: Option<TransactionSignature>,
    pub tx_type: String,
}

/// Fields of an application call.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionApplication {
    /// Accounts besides the sender that the programs may access.
    pub accounts: Vec<String>,
    #[serde_as(as = "Vec<Base64>")]
    pub application_args: Vec<Vec<u8>>,
    /// Zero when the call creates the application.
    pub application_id: u64,
    #[serde_as(as = "Base64")]
    pub approval_program: Vec<u8>,
    #[serde_as(as = "Base64")]
    pub clear_state_program: Vec<u8>,
    /// Applications whose global state may be read.
    pub foreign_apps: Vec<u64>,
    pub global_state_schema: Option<StateSchema>,
    pub local_state_schema: Option<StateSchema>,
    /// One of `noop`, `optin`, `closeout`, `clear`, `update`, `delete`.
    pub on_completion: String,
}

/// Fields of an asset configuration. A zero `asset_id` means creation, absent
/// `params` means destruction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionAssetConfig {
    pub asset_id: u64,
    pub params: Option<AssetParams>,
}

/// Fields of an asset freeze.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionAssetFreeze {
    /// Account whose holding is frozen or thawed.
    pub address: String,
    pub asset_id: u64,
    pub new_freeze_status: bool,
}

/// Fields of an asset transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionAssetTransfer {
    pub amount: u64,
    pub asset_id: u64,
    /// Units sent to `close_to` when the holding was closed out.
    pub close_amount: u64,
    pub close_to: String,
    pub receiver: String,
    /// Effective sender of a clawback; empty otherwise.
    pub sender: String,
}

/// Fields of a key registration.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionKeyreg {
    pub non_participation: bool,
    #[serde_as(as = "Base64")]
    pub selection_participation_key: Vec<u8>,
    pub vote_first_valid: u64,
    pub vote_key_dilution: u64,
    pub vote_last_valid: u64,
    #[serde_as(as = "Base64")]
    pub vote_participation_key: Vec<u8>,
}

/// Fields of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionPayment {
    /// MicroAlgos transferred to `receiver`.
    pub amount: u64,
    /// MicroAlgos sent to `close_remainder_to` when closing the sender.
    pub close_amount: u64,
    pub close_remainder_to: String,
    pub receiver: String,
}

/// Signature of a transaction. Only one of the variants is set.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionSignature {
    pub logicsig: Option<TransactionSignatureLogicsig>,
    pub multisig: Option<TransactionSignatureMultisig>,
    /// Standard ed25519 signature.
    #[serde_as(as = "Base64")]
    pub sig: Vec<u8>,
}

/// Programmatic transaction signature.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionSignatureLogicsig {
    #[serde_as(as = "Vec<Base64>")]
    pub args: Vec<Vec<u8>>,
    /// The TEAL program.
    #[serde_as(as = "Base64")]
    pub logic: Vec<u8>,
    pub multisig_signature: Option<TransactionSignatureMultisig>,
    #[serde_as(as = "Base64")]
    pub signature: Vec<u8>,
}

/// Multisignature with its subsignatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionSignatureMultisig {
    pub subsignature: Vec<TransactionSignatureMultisigSubsignature>,
    pub threshold: u64,
    pub version: u64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionSignatureMultisigSubsignature {
    #[serde_as(as = "Base64")]
    pub public_key: Vec<u8>,
    #[serde_as(as = "Base64")]
    pub signature: Vec<u8>,
}
