#![no_std]

//! # Confidential Risk Ledger
//!
//! Soroban smart contract implementing an append-only ledger of financial
//! transactions whose risk scores are committed in encrypted form and later
//! revealed through an authenticated decryption protocol, then compared
//! against encrypted compliance thresholds to flag suspicious activity.
//!
//! ## Record lifecycle
//!
//! 1. **Commit** ([`commit_transaction`] / [`commit_risk_rule`]) — an
//!    externally produced ciphertext is imported through the Encrypted Value
//!    Service, which returns an opaque handle stored immutably on the record.
//!    The plaintext risk score / threshold is unknown to everyone at this
//!    point.
//! 2. **Reveal** ([`finalize_decryption`]) — a claimed plaintext plus a
//!    decryption proof are checked against the committed handle; on success
//!    the decoded value is written and the record becomes verified, exactly
//!    once.
//! 3. **Scan** ([`scan`]) — two verified plaintexts are compared; a
//!    transaction whose risk score strictly exceeds a rule's threshold is
//!    flagged, monotonically and idempotently.
//!
//! Every entry point either commits its full effect or fails with zero side
//! effects; a failed precondition returns before the first write, and the
//! Soroban host rolls back the invocation on any trap.
//!
//! ## Modules
//!
//! - [`errors`]  — [`Error`] variants returned by fallible entry points.
//! - [`types`]   — [`Transaction`], [`RiskRule`], [`RecordKind`], [`DataKey`].
//! - [`storage`] — persistent record maps and ordered identifier lists.
//! - [`events`]  — published event payloads.
//! - [`evs`]     — the Encrypted Value Service cross-contract interface.
//!
//! [`commit_transaction`]: RiskLedgerContract::commit_transaction
//! [`commit_risk_rule`]: RiskLedgerContract::commit_risk_rule
//! [`finalize_decryption`]: RiskLedgerContract::finalize_decryption
//! [`scan`]: RiskLedgerContract::scan

use soroban_sdk::{contract, contractimpl, vec, Address, Bytes, BytesN, Env, String, Vec};

mod errors;
mod events;
pub mod evs;
mod storage;
mod types;

pub use errors::Error;
pub use evs::{EncryptedValueService, EncryptedValueServiceClient};
pub use types::{DataKey, RecordKind, RiskRule, Transaction};


#[contract]
pub struct RiskLedgerContract;

#[contractimpl]
impl RiskLedgerContract {
    // ========== INITIALIZATION ==========

    /// Initialize the ledger with its admin and the address of the
    /// Encrypted Value Service contract.
    pub fn initialize(env: Env, admin: Address, evs: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_evs(&env, &evs);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(&env, admin, evs);
        Ok(())
    }

    // ========== COMMITMENT ==========

    /// Commit a new transaction with an encrypted risk score.
    ///
    /// The ciphertext is imported through the Encrypted Value Service,
    /// authorized for this contract, and marked publicly revealable: any
    /// party may later finalize its decryption by supplying a valid proof.
    /// The returned handle is bound to the record for its entire lifetime.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateIdentifier`] — `id` is already a committed
    ///   transaction; the existing record is untouched.
    /// - [`Error::InvalidAmount`] — `amount` is negative.
    /// - [`Error::InvalidCiphertext`] — the ciphertext/inclusion-proof pair
    ///   is rejected by the service; no record is created.
    pub fn commit_transaction(
        env: Env,
        id: String,
        sender: Address,
        receiver: Address,
        amount: i128,
        external_ciphertext: Bytes,
        inclusion_proof: Bytes,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::has_transaction(&env, &id) {
            return Err(Error::DuplicateIdentifier);
        }

        let handle = Self::import_handle(&env, external_ciphertext, inclusion_proof)?;

        let record = Transaction {
            id: id.clone(),
            sender: sender.clone(),
            receiver: receiver.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
            encrypted_risk_score: handle,
            decrypted_risk_score: 0,
            is_verified: false,
            is_flagged: false,
        };
        storage::set_transaction(&env, &record);
        storage::push_transaction_id(&env, &id);

        events::publish_transaction_committed(&env, id, sender, receiver);
        Ok(())
    }

    /// Commit a new compliance rule with an encrypted threshold (admin only).
    ///
    /// # Errors
    ///
    /// - [`Error::Unauthorized`] — `admin` is not the stored admin.
    /// - [`Error::DuplicateIdentifier`] — `rule_id` already exists.
    /// - [`Error::InvalidCiphertext`] — ciphertext import rejected.
    pub fn commit_risk_rule(
        env: Env,
        admin: Address,
        rule_id: String,
        external_ciphertext: Bytes,
        inclusion_proof: Bytes,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &admin)?;
        storage::extend_instance_ttl(&env);

        if storage::has_rule(&env, &rule_id) {
            return Err(Error::DuplicateIdentifier);
        }

        let handle = Self::import_handle(&env, external_ciphertext, inclusion_proof)?;

        let record = RiskRule {
            rule_id: rule_id.clone(),
            encrypted_threshold: handle,
            decrypted_threshold: 0,
            is_verified: false,
        };
        storage::set_rule(&env, &record);
        storage::push_rule_id(&env, &rule_id);

        events::publish_rule_added(&env, rule_id);
        Ok(())
    }

    // ========== DECRYPTION VERIFICATION ==========

    /// Finalize the one-time reveal of a record's encrypted value.
    ///
    /// This is the single path by which a plaintext enters the ledger. The
    /// claimed plaintext must be a 4-byte big-endian u32 encoding, and the
    /// proof must bind it to exactly the ciphertext handle committed for the
    /// record — both checked before any write. Verification and value
    /// assignment happen in one record save, so a failure leaves the record
    /// exactly as committed. Returns the decoded value.
    ///
    /// # Errors
    ///
    /// - [`Error::RecordNotFound`] — no record of `kind` under `id`.
    /// - [`Error::AlreadyVerified`] — the record was already revealed; it is
    ///   never re-verified against a different proof.
    /// - [`Error::ProofVerificationFailed`] — malformed plaintext encoding
    ///   or proof check rejected; no value is written.
    pub fn finalize_decryption(
        env: Env,
        kind: RecordKind,
        id: String,
        claimed_plaintext: Bytes,
        decryption_proof: Bytes,
    ) -> Result<u32, Error> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);

        match kind {
            RecordKind::Transaction => {
                let mut record =
                    storage::get_transaction(&env, &id).ok_or(Error::RecordNotFound)?;
                if record.is_verified {
                    return Err(Error::AlreadyVerified);
                }
                let value = Self::check_decryption_proof(
                    &env,
                    &record.encrypted_risk_score,
                    claimed_plaintext,
                    decryption_proof,
                )?;
                record.decrypted_risk_score = value;
                record.is_verified = true;
                storage::set_transaction(&env, &record);

                events::publish_decryption_verified(&env, kind, id, value);
                Ok(value)
            }
            RecordKind::RiskRule => {
                let mut record = storage::get_rule(&env, &id).ok_or(Error::RecordNotFound)?;
                if record.is_verified {
                    return Err(Error::AlreadyVerified);
                }
                let value = Self::check_decryption_proof(
                    &env,
                    &record.encrypted_threshold,
                    claimed_plaintext,
                    decryption_proof,
                )?;
                record.decrypted_threshold = value;
                record.is_verified = true;
                storage::set_rule(&env, &record);

                events::publish_decryption_verified(&env, kind, id, value);
                Ok(value)
            }
        }
    }

    // ========== SCANNING ==========

    /// Compare a verified transaction's risk score against a verified rule's
    /// threshold and flag the transaction if the score strictly exceeds it.
    ///
    /// Flagging is monotonic: once set, no scan ever clears it, and
    /// re-scanning an already-flagged transaction is a silent no-op with no
    /// duplicate event. Ties are never flagged. Returns whether the score
    /// exceeded the threshold. Performs no cryptography — both values were
    /// bound to genuine ciphertexts by [`Self::finalize_decryption`].
    ///
    /// # Errors
    ///
    /// - [`Error::RecordNotFound`] — either record is absent.
    /// - [`Error::NotYetVerified`] — either record is still unrevealed;
    ///   scanning against an opaque value is rejected, not skipped.
    pub fn scan(env: Env, transaction_id: String, rule_id: String) -> Result<bool, Error> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);

        let mut tx = storage::get_transaction(&env, &transaction_id).ok_or(Error::RecordNotFound)?;
        let rule = storage::get_rule(&env, &rule_id).ok_or(Error::RecordNotFound)?;

        if !tx.is_verified || !rule.is_verified {
            return Err(Error::NotYetVerified);
        }

        let exceeded = tx.decrypted_risk_score > rule.decrypted_threshold;
        if exceeded && !tx.is_flagged {
            tx.is_flagged = true;
            storage::set_transaction(&env, &tx);
            events::publish_transaction_flagged(&env, transaction_id, tx.decrypted_risk_score);
        }
        Ok(exceeded)
    }

    // ========== QUERIES ==========

    pub fn get_transaction(env: Env, id: String) -> Result<Transaction, Error> {
        storage::get_transaction(&env, &id).ok_or(Error::RecordNotFound)
    }

    pub fn get_risk_rule(env: Env, rule_id: String) -> Result<RiskRule, Error> {
        storage::get_rule(&env, &rule_id).ok_or(Error::RecordNotFound)
    }

    /// All committed transaction ids, in insertion order.
    pub fn list_transaction_ids(env: Env) -> Vec<String> {
        storage::get_transaction_ids(&env)
    }

    /// All committed rule ids, in insertion order.
    pub fn list_rule_ids(env: Env) -> Vec<String> {
        storage::get_rule_ids(&env)
    }

    // ========== HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        if *admin != storage::get_admin(env) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Import a ciphertext through the Encrypted Value Service, authorize it
    /// for this contract, and opt it into permissionless proof-gated
    /// decryption.
    fn import_handle(
        env: &Env,
        external_ciphertext: Bytes,
        inclusion_proof: Bytes,
    ) -> Result<BytesN<32>, Error> {
        let evs = EncryptedValueServiceClient::new(env, &storage::get_evs(env));
        let handle = evs
            .import_ciphertext(&external_ciphertext, &inclusion_proof)
            .ok_or(Error::InvalidCiphertext)?;
        evs.authorize_for_core(&handle);
        evs.mark_publicly_revealable(&handle);
        Ok(handle)
    }

    /// Check a claimed plaintext + proof against a committed handle and
    /// decode the plaintext. Nothing is written here; callers persist the
    /// decoded value together with the verified flag in a single save.
    fn check_decryption_proof(
        env: &Env,
        handle: &BytesN<32>,
        claimed_plaintext: Bytes,
        decryption_proof: Bytes,
    ) -> Result<u32, Error> {
        // A claimed plaintext that is not a 4-byte big-endian u32 cannot be
        // the genuine plaintext of a 32-bit ciphertext.
        let value = Self::decode_plaintext_u32(&claimed_plaintext)
            .ok_or(Error::ProofVerificationFailed)?;

        let evs = EncryptedValueServiceClient::new(env, &storage::get_evs(env));
        let handles = vec![env, handle.clone()];
        if !evs.verify_decryption_proof(&handles, &claimed_plaintext, &decryption_proof) {
            return Err(Error::ProofVerificationFailed);
        }
        Ok(value)
    }

    fn decode_plaintext_u32(claimed_plaintext: &Bytes) -> Option<u32> {
        if claimed_plaintext.len() != 4 {
            return None;
        }
        let mut be = [0u8; 4];
        claimed_plaintext.copy_into_slice(&mut be);
        Some(u32::from_be_bytes(be))
    }
}
