//! Request and response bodies specific to the node (algod) API.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as, skip_serializing_none};

use super::ledger::{Account, AccountStateDelta, Application, EvalDeltaKeyValue, TealValue};

/// Body of a non-success response, shared by both APIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub data: Option<serde_json::Value>,
    pub message: String,
}

/// Node build and genesis information, served at `/versions`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Version {
    pub build: VersionBuild,
    #[serde_as(as = "Base64")]
    pub genesis_hash: Vec<u8>,
    pub genesis_id: String,
    pub versions: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VersionBuild {
    pub branch: String,
    pub build_number: u64,
    pub channel: String,
    #[serde_as(as = "Base64")]
    pub commit_hash: Vec<u8>,
    pub major: u64,
    pub minor: u64,
}

/// Encoded block object returned by `/v2/blocks/{round}`.
///
/// The node mirrors its internal msgpack structures here, so both members are
/// left as raw JSON.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockResponse {
    pub block: serde_json::Value,
    /// Only included when the format is message pack.
    pub cert: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CatchpointStartResponse {
    pub catchup_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CatchpointAbortResponse {
    pub catchup_message: String,
}

/// Current node status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NodeStatusResponse {
    /// The catchpoint currently being caught up to.
    pub catchpoint: String,
    pub catchpoint_acquired_blocks: u64,
    pub catchpoint_processed_accounts: u64,
    pub catchpoint_total_accounts: u64,
    pub catchpoint_total_blocks: u64,
    /// Nanoseconds.
    pub catchup_time: u64,
    pub last_catchpoint: String,
    /// Last round seen.
    pub last_round: u64,
    /// Last consensus version supported.
    pub last_version: String,
    pub next_version: String,
    /// Round at which the next consensus version applies.
    pub next_version_round: u64,
    pub next_version_supported: bool,
    /// The node does not support the new rounds and stopped making progress.
    pub stopped_at_unsupported_round: bool,
    /// Nanoseconds.
    pub time_since_last_round: u64,
}

/// A recently submitted transaction.
///
/// * committed: `confirmed_round > 0`
/// * still in the pool: `confirmed_round == 0` and `pool_error` empty
/// * removed from the pool: `confirmed_round == 0` and `pool_error` set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PendingTransactionResponse {
    /// Asset created by the transaction, if any.
    pub asset_index: u64,
    pub close_rewards: u64,
    pub closing_amount: u64,
    pub confirmed_round: u64,
    /// Why the transaction was kicked out of the pool. Empty if it was not.
    pub pool_error: String,
    pub receiver_rewards: u64,
    pub sender_rewards: u64,
    /// The raw signed transaction.
    pub txn: serde_json::Value,
}

/// A possibly truncated list of pool transactions. It is truncated when
/// `top_transactions` holds fewer than `total_transactions` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PendingTransactionsResponse {
    pub top_transactions: Vec<serde_json::Value>,
    pub total_transactions: u64,
}

impl PendingTransactionsResponse {
    pub fn is_truncated(&self) -> bool {
        (self.top_transactions.len() as u64) < self.total_transactions
    }
}

/// Transaction ID of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostTransactionsResponse {
    #[serde(rename = "txId")]
    pub tx_id: String,
}

/// Current supply of MicroAlgos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SupplyResponse {
    #[serde(rename = "current_round")]
    pub current_round: u64,
    pub online_money: u64,
    pub total_money: u64,
}

/// Parameters that help a client construct a new transaction.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionParametersResponse {
    /// Consensus protocol version as of `last_round`.
    pub consensus_version: String,
    /// Suggested fee, in MicroAlgos per byte. May be zero, in which case
    /// `min_fee` still applies.
    pub fee: u64,
    #[serde_as(as = "Base64")]
    pub genesis_hash: Vec<u8>,
    pub genesis_id: String,
    pub last_round: u64,
    /// Minimum fee per transaction, not per byte.
    pub min_fee: u64,
}

/// Result of compiling TEAL source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileResponse {
    /// Base32 SHA-512/256 of the program bytes, in address form.
    pub hash: String,
    /// Base64 encoded program bytes.
    pub result: String,
}

/// Input of a dryrun: transactions plus the ledger state to run them against.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DryrunRequest {
    pub accounts: Vec<Account>,
    pub apps: Vec<Application>,
    /// Available to some TEAL scripts. Defaults to the latest confirmed
    /// timestamp the node knows about.
    pub latest_timestamp: Option<u64>,
    /// Protocol version to run under. Defaults to the network's current one.
    pub protocol_version: Option<String>,
    /// Available to some TEAL scripts. Defaults to the current round.
    pub round: Option<u64>,
    pub sources: Vec<DryrunSource>,
    /// Signed transactions, in their JSON encoding.
    pub txns: Vec<serde_json::Value>,
}

/// TEAL source to be compiled and inserted into a transaction or an
/// application before the dryrun.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DryrunSource {
    pub app_index: u64,
    /// `lsig` places the program into `txns[txn_index]`, `approv` and
    /// `clearp` into the programs of application `app_index`.
    pub field_name: String,
    pub source: String,
    pub txn_index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DryrunState {
    /// Evaluation error, if any.
    pub error: String,
    pub line: u64,
    /// Program counter.
    pub pc: u64,
    pub scratch: Vec<TealValue>,
    pub stack: Vec<TealValue>,
}

/// Debug output and state changes of one transaction in a dryrun.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DryrunTxnResult {
    pub app_call_messages: Vec<String>,
    pub app_call_trace: Vec<DryrunState>,
    /// Disassembled program, line by line.
    pub disassembly: Vec<String>,
    pub global_delta: Vec<EvalDeltaKeyValue>,
    pub local_deltas: Vec<AccountStateDelta>,
    pub logic_sig_messages: Vec<String>,
    pub logic_sig_trace: Vec<DryrunState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DryrunResponse {
    pub error: String,
    /// Protocol version the dryrun ran under.
    pub protocol_version: String,
    pub txns: Vec<DryrunTxnResult>,
}
