use crate::types::RecordKind;
use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitializedEvent {
    pub admin: Address,
    pub evs: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCommittedEvent {
    pub id: String,
    pub sender: Address,
    pub receiver: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RiskRuleAddedEvent {
    pub rule_id: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecryptionVerifiedEvent {
    pub kind: RecordKind,
    pub id: String,
    pub value: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionFlaggedEvent {
    pub id: String,
    pub risk_score: u32,
}

pub fn publish_initialized(env: &Env, admin: Address, evs: Address) {
    let event = LedgerInitializedEvent { admin, evs };
    env.events().publish(("ledger", "init"), event);
}

pub fn publish_transaction_committed(env: &Env, id: String, sender: Address, receiver: Address) {
    let event = TransactionCommittedEvent {
        id,
        sender,
        receiver,
    };
    env.events().publish(("ledger", "tx_new"), event);
}

pub fn publish_rule_added(env: &Env, rule_id: String) {
    let event = RiskRuleAddedEvent { rule_id };
    env.events().publish(("ledger", "rule_new"), event);
}

pub fn publish_decryption_verified(env: &Env, kind: RecordKind, id: String, value: u32) {
    let event = DecryptionVerifiedEvent { kind, id, value };
    env.events().publish(("ledger", "revealed"), event);
}

pub fn publish_transaction_flagged(env: &Env, id: String, risk_score: u32) {
    let event = TransactionFlaggedEvent { id, risk_score };
    env.events().publish(("ledger", "flagged"), event);
}
