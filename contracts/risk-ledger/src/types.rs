use soroban_sdk::{contracttype, Address, BytesN, String};

/// Storage keys for the ledger contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    EvsAddress,
    Transaction(String),
    RiskRule(String),
    TransactionIds,
    RuleIds,
}

/// Which record family a decryption proof targets.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RecordKind {
    Transaction = 0,
    RiskRule = 1,
}

/// A ledger transaction whose risk score is committed as an opaque
/// ciphertext handle until a decryption proof reveals it.
///
/// `decrypted_risk_score` is meaningful only while `is_verified` is true;
/// before that it holds its default of 0. `is_flagged` can only become true
/// after verification, via [`crate::RiskLedgerContract::scan`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub sender: Address,
    pub receiver: Address,
    pub amount: i128,
    pub timestamp: u64,
    pub encrypted_risk_score: BytesN<32>,
    pub decrypted_risk_score: u32,
    pub is_verified: bool,
    pub is_flagged: bool,
}

/// A compliance rule whose threshold is committed encrypted and revealed
/// through the same one-shot proof flow as transaction risk scores.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RiskRule {
    pub rule_id: String,
    pub encrypted_threshold: BytesN<32>,
    pub decrypted_threshold: u32,
    pub is_verified: bool,
}
