use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use super::transaction::Transaction;

/// A block as reported by the indexer.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Block {
    /// Hash of the genesis block of this chain.
    #[serde_as(as = "Base64")]
    pub genesis_hash: Vec<u8>,
    pub genesis_id: String,
    #[serde_as(as = "Base64")]
    pub previous_block_hash: Vec<u8>,
    pub rewards: BlockRewards,
    /// Round at which this block was appended to the chain.
    pub round: u64,
    /// Sortition seed.
    #[serde_as(as = "Base64")]
    pub seed: Vec<u8>,
    /// Block creation time, in seconds since the epoch.
    pub timestamp: u64,
    pub transactions: Vec<Transaction>,
    /// Root of the merkle tree of the block's transaction IDs. It does not
    /// cover signatures.
    #[serde_as(as = "Base64")]
    pub transactions_root: Vec<u8>,
    /// Number of the next transaction that will be committed after this
    /// block.
    pub txn_counter: u64,
    pub upgrade_state: BlockUpgradeState,
    pub upgrade_vote: BlockUpgradeVote,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlockRewards {
    /// Accepts transaction fees; can only spend to the rewards pool.
    pub fee_sink: String,
    pub rewards_calculation_round: u64,
    /// MicroAlgos distributed to each reward unit since genesis.
    pub rewards_level: u64,
    /// Accepts periodic injections from the fee sink and redistributes them
    /// as rewards.
    pub rewards_pool: String,
    /// MicroAlgos added to the participation stake from rewards at the next
    /// round.
    pub rewards_rate: u64,
    /// Leftover MicroAlgos after distributing `rewards_rate`.
    pub rewards_residue: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlockUpgradeState {
    pub current_protocol: String,
    pub next_protocol: String,
    /// Number of blocks which approved the protocol upgrade.
    pub next_protocol_approvals: u64,
    /// Round on which the upgrade takes effect.
    pub next_protocol_switch_on: u64,
    /// Deadline round for votes on this upgrade.
    pub next_protocol_vote_before: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlockUpgradeVote {
    pub upgrade_approve: bool,
    /// Rounds between acceptance and execution.
    pub upgrade_delay: u64,
    pub upgrade_propose: String,
}
