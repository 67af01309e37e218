//! Parameter bags: the optional filters of each endpoint, serialized into the
//! query string.
//!
//! A filter is sent if and only if it is `Some`, so a deliberate zero (for
//! example `round=0`) stays distinguishable from "no filter". Keys are emitted
//! in field order.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Transaction type filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TxType {
    Pay,
    Keyreg,
    Acfg,
    Axfer,
    Afrz,
    Appl,
}

/// Signature type filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SigType {
    /// Standard.
    Sig,
    /// Multisig.
    Msig,
    /// Logic signature.
    Lsig,
}

/// Which role the `address` filter must play in a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AddressRole {
    Sender,
    Receiver,
    FreezeTarget,
}

/// Filters of the node's pending-transaction listings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingTransactionsParams {
    /// Truncate to this many transactions. Zero returns the whole pool.
    pub max: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchForAccountsParams {
    pub application_id: Option<u64>,
    pub asset_id: Option<u64>,
    /// Accounts configured to use this spending key.
    pub auth_addr: Option<String>,
    /// Balance strictly above this amount; MicroAlgos unless `asset_id` is
    /// set, in which case asset units.
    pub currency_greater_than: Option<u64>,
    pub currency_less_than: Option<u64>,
    pub limit: Option<u64>,
    pub next: Option<String>,
    /// May be disabled on some indexer configurations.
    pub round: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupAccountByIdParams {
    pub round: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupAccountTransactionsParams {
    /// RFC 3339.
    pub after_time: Option<String>,
    pub asset_id: Option<u64>,
    /// RFC 3339.
    pub before_time: Option<String>,
    pub currency_greater_than: Option<u64>,
    pub currency_less_than: Option<u64>,
    pub limit: Option<u64>,
    pub max_round: Option<u64>,
    pub min_round: Option<u64>,
    pub next: Option<String>,
    /// Standard base64.
    pub note_prefix: Option<String>,
    pub rekey_to: Option<bool>,
    pub round: Option<u64>,
    pub sig_type: Option<SigType>,
    pub tx_type: Option<TxType>,
    #[serde(rename = "txid")]
    pub tx_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchForApplicationsParams {
    pub application_id: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchForAssetsParams {
    pub asset_id: Option<u64>,
    pub creator: Option<String>,
    pub limit: Option<u64>,
    pub name: Option<String>,
    pub next: Option<String>,
    pub unit: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupAssetBalancesParams {
    pub currency_greater_than: Option<u64>,
    pub currency_less_than: Option<u64>,
    pub limit: Option<u64>,
    pub next: Option<String>,
    pub round: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupAssetTransactionsParams {
    pub address: Option<String>,
    pub address_role: Option<AddressRole>,
    pub after_time: Option<String>,
    pub before_time: Option<String>,
    pub currency_greater_than: Option<u64>,
    pub currency_less_than: Option<u64>,
    /// Close-to fields normally count as receivers; set to leave them out of
    /// the address match.
    pub exclude_close_to: Option<bool>,
    pub limit: Option<u64>,
    pub max_round: Option<u64>,
    pub min_round: Option<u64>,
    pub next: Option<String>,
    pub note_prefix: Option<String>,
    pub rekey_to: Option<bool>,
    pub round: Option<u64>,
    pub sig_type: Option<SigType>,
    pub tx_type: Option<TxType>,
    #[serde(rename = "txid")]
    pub tx_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchForTransactionsParams {
    pub address: Option<String>,
    pub address_role: Option<AddressRole>,
    pub after_time: Option<String>,
    pub application_id: Option<u64>,
    pub asset_id: Option<u64>,
    pub before_time: Option<String>,
    pub currency_greater_than: Option<u64>,
    pub currency_less_than: Option<u64>,
    pub exclude_close_to: Option<bool>,
    pub limit: Option<u64>,
    pub max_round: Option<u64>,
    pub min_round: Option<u64>,
    pub next: Option<String>,
    pub note_prefix: Option<String>,
    pub rekey_to: Option<bool>,
    pub round: Option<u64>,
    pub sig_type: Option<SigType>,
    pub tx_type: Option<TxType>,
    #[serde(rename = "txid")]
    pub tx_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_query;

    #[test]
    fn enums_use_wire_names() {
        let params = SearchForTransactionsParams {
            address_role: Some(AddressRole::FreezeTarget),
            sig_type: Some(SigType::Msig),
            tx_type: Some(TxType::Axfer),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&params).unwrap().as_deref(),
            Some("address-role=freeze-target&sig-type=msig&tx-type=axfer")
        );
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(TxType::Appl.to_string(), "appl");
        assert_eq!(SigType::Lsig.to_string(), "lsig");
        assert_eq!(AddressRole::FreezeTarget.to_string(), "freeze-target");
    }

    #[test]
    fn strings_agree_with_serde() {
        for tx_type in [
            TxType::Pay,
            TxType::Keyreg,
            TxType::Acfg,
            TxType::Axfer,
            TxType::Afrz,
            TxType::Appl,
        ] {
            let wire = serde_json::to_value(tx_type).unwrap();
            assert_eq!(wire, tx_type.as_ref());
        }
        for sig_type in [SigType::Sig, SigType::Msig, SigType::Lsig] {
            let wire = serde_json::to_value(sig_type).unwrap();
            assert_eq!(wire, sig_type.as_ref());
        }
        for role in [AddressRole::Sender, AddressRole::Receiver, AddressRole::FreezeTarget] {
            let wire = serde_json::to_value(role).unwrap();
            assert_eq!(wire, <&'static str>::from(role));
        }
    }

    #[test]
    fn parse_from_wire_names() {
        assert_eq!("axfer".parse::<TxType>(), Ok(TxType::Axfer));
        assert_eq!("msig".parse::<SigType>(), Ok(SigType::Msig));
        assert_eq!(
            "freeze-target".parse::<AddressRole>(),
            Ok(AddressRole::FreezeTarget)
        );
        assert!("payment".parse::<TxType>().is_err());
    }

    #[test]
    fn explicit_zero_is_sent() {
        let params = LookupAccountByIdParams { round: Some(0) };
        assert_eq!(encode_query(&params).unwrap().as_deref(), Some("round=0"));
        assert_eq!(encode_query(&LookupAccountByIdParams::default()).unwrap(), None);
    }

    #[test]
    fn booleans_and_tx_id_key() {
        let params = LookupAssetTransactionsParams {
            exclude_close_to: Some(true),
            rekey_to: Some(false),
            tx_id: Some("ABC".to_string()),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&params).unwrap().as_deref(),
            Some("exclude-close-to=true&rekey-to=false&txid=ABC")
        );
    }
}
