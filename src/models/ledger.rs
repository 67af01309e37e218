//! Ledger state records shared by the node and the indexer: accounts, assets,
//! applications and their TEAL state.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as, skip_serializing_none};

/// Account information at a given round.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Account {
    /// The account public key.
    pub address: String,
    /// Total number of MicroAlgos in the account.
    pub amount: u64,
    /// MicroAlgos in the account, without the pending rewards.
    pub amount_without_pending_rewards: u64,
    /// Application local data stored in this account.
    pub apps_local_state: Vec<ApplicationLocalState>,
    /// Sum of all local and global schemas in this account.
    pub apps_total_schema: ApplicationStateSchema,
    /// Assets held by this account.
    pub assets: Vec<AssetHolding>,
    /// The address against which signing should be checked. Empty when the
    /// account has not been rekeyed.
    pub auth_addr: String,
    /// Applications created by this account, including their global data.
    pub created_apps: Vec<Application>,
    /// Assets created by this account.
    pub created_assets: Vec<Asset>,
    /// Consensus participation keys, present only for accounts that
    /// registered them.
    pub participation: Option<AccountParticipation>,
    /// MicroAlgos of pending rewards in this account.
    pub pending_rewards: u64,
    /// Used as part of the rewards computation; only meaningful for
    /// participating accounts.
    pub reward_base: u64,
    /// Total rewards received, including pending rewards.
    pub rewards: u64,
    /// The round for which this information is relevant.
    pub round: u64,
    /// One of `sig`, `msig`, `lsig`.
    pub sig_type: String,
    /// Delegation status: `Offline`, `Online` or `NotParticipating`.
    pub status: String,
}

/// Parameters used by an account in the consensus protocol.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountParticipation {
    /// Selection public key currently registered.
    #[serde_as(as = "Base64")]
    pub selection_participation_key: Vec<u8>,
    /// First round for which this participation is valid.
    pub vote_first_valid: u64,
    /// Number of subkeys in each batch of participation keys.
    pub vote_key_dilution: u64,
    /// Last round for which this participation is valid.
    pub vote_last_valid: u64,
    /// Root participation public key currently registered.
    #[serde_as(as = "Base64")]
    pub vote_participation_key: Vec<u8>,
}

/// Unique identifier and parameters of an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Asset {
    pub index: u64,
    pub params: AssetParams,
}

/// An asset held by an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AssetHolding {
    /// Number of units held.
    pub amount: u64,
    pub asset_id: u64,
    /// Address that created this asset.
    pub creator: String,
    pub is_frozen: bool,
}

/// A simplified [`AssetHolding`], as listed by the asset balances lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MiniAssetHolding {
    pub address: String,
    pub amount: u64,
    pub is_frozen: bool,
}

/// Parameters of an asset.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AssetParams {
    /// Account allowed to claw back holdings. Empty disables clawback.
    pub clawback: String,
    pub creator: String,
    /// Digits after the decimal point when displaying this asset (0..=19).
    pub decimals: u64,
    /// Whether holdings are frozen by default.
    pub default_frozen: bool,
    /// Account allowed to freeze holdings. Empty disables freezing.
    pub freeze: String,
    /// Account allowed to reconfigure or destroy the asset.
    pub manager: String,
    /// Commitment to unspecified asset metadata.
    #[serde_as(as = "Base64")]
    pub metadata_hash: Vec<u8>,
    pub name: String,
    /// Account holding the reserve (non-minted) units.
    pub reserve: String,
    /// Total number of units of this asset.
    pub total: u64,
    pub unit_name: String,
    pub url: String,
}

/// Maximum number of each value type an application may store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApplicationStateSchema {
    pub num_byte_slice: u64,
    pub num_uint: u64,
}

/// A local-state or global-state schema as it appears inside application
/// call transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StateSchema {
    /// Maximum number of TEAL byte slices in the key/value store.
    pub num_byte_slice: u64,
    /// Maximum number of TEAL uints in the key/value store.
    pub num_uint: u64,
}

/// Local state an account holds for one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApplicationLocalState {
    /// The application this local state is for.
    pub id: u64,
    pub key_value: Vec<TealKeyValue>,
    pub schema: ApplicationStateSchema,
}

/// A key-value pair in an application store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TealKeyValue {
    pub key: String,
    pub value: TealValue,
}

/// A TEAL value. `type` is 1 for bytes and 2 for uint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TealValue {
    pub bytes: String,
    #[serde(rename = "type")]
    pub value_type: u64,
    pub uint: u64,
}

/// Application state delta for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountStateDelta {
    pub address: String,
    pub delta: Vec<EvalDeltaKeyValue>,
}

/// Key-value pair of a state delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EvalDeltaKeyValue {
    pub key: String,
    pub value: EvalDelta,
}

/// A TEAL value delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EvalDelta {
    /// Delta action.
    pub action: u64,
    pub bytes: String,
    pub uint: u64,
}

/// Application index and its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Application {
    pub id: u64,
    pub params: ApplicationParams,
}

/// Global information associated with an application.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApplicationParams {
    #[serde_as(as = "Base64")]
    pub approval_program: Vec<u8>,
    #[serde_as(as = "Base64")]
    pub clear_state_program: Vec<u8>,
    /// Address that created this application; its global state lives there.
    pub creator: String,
    pub global_state: Vec<TealKeyValue>,
    pub global_state_schema: ApplicationStateSchema,
    pub local_state_schema: ApplicationStateSchema,
}
