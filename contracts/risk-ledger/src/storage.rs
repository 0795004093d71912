use crate::types::{DataKey, RiskRule, Transaction};
use soroban_sdk::{Address, Env, String, Vec};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
const INSTANCE_TTL_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// ========== Encrypted Value Service address ==========

pub fn get_evs(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::EvsAddress).unwrap()
}

pub fn set_evs(env: &Env, evs: &Address) {
    env.storage().instance().set(&DataKey::EvsAddress, evs);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Transactions ==========

pub fn has_transaction(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Transaction(id.clone()))
}

pub fn get_transaction(env: &Env, id: &String) -> Option<Transaction> {
    let key = DataKey::Transaction(id.clone());
    let record = env.storage().persistent().get::<_, Transaction>(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_transaction(env: &Env, record: &Transaction) {
    let key = DataKey::Transaction(record.id.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Risk rules ==========

pub fn has_rule(env: &Env, rule_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::RiskRule(rule_id.clone()))
}

pub fn get_rule(env: &Env, rule_id: &String) -> Option<RiskRule> {
    let key = DataKey::RiskRule(rule_id.clone());
    let record = env.storage().persistent().get::<_, RiskRule>(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_rule(env: &Env, record: &RiskRule) {
    let key = DataKey::RiskRule(record.rule_id.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Ordered identifier lists ==========

pub fn get_transaction_ids(env: &Env) -> Vec<String> {
    let key = DataKey::TransactionIds;
    let ids = env
        .storage()
        .persistent()
        .get::<_, Vec<String>>(&key)
        .unwrap_or(Vec::new(env));
    if !ids.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    ids
}

pub fn push_transaction_id(env: &Env, id: &String) {
    let key = DataKey::TransactionIds;
    let mut ids = get_transaction_ids(env);
    ids.push_back(id.clone());
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_rule_ids(env: &Env) -> Vec<String> {
    let key = DataKey::RuleIds;
    let ids = env
        .storage()
        .persistent()
        .get::<_, Vec<String>>(&key)
        .unwrap_or(Vec::new(env));
    if !ids.is_empty() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    ids
}

pub fn push_rule_id(env: &Env, rule_id: &String) {
    let key = DataKey::RuleIds;
    let mut ids = get_rule_ids(env);
    ids.push_back(rule_id.clone());
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
