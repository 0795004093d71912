//! Cross-contract interface to the Encrypted Value Service.
//!
//! The service is the external custodian of ciphertexts: it imports
//! externally produced ciphertexts, hands back opaque 32-byte handles, and
//! later checks decryption proofs binding a claimed plaintext to exactly one
//! of those handles. The ledger never sees a plaintext except through a
//! successful [`EncryptedValueService::verify_decryption_proof`] call.
//!
//! Failure is signalled in-band (`None` / `false`) so the ledger can map it
//! onto its own error taxonomy; a trapping service call aborts the whole
//! invocation, which the host rolls back atomically.

use soroban_sdk::{contractclient, Bytes, BytesN, Env, Vec};

#[contractclient(name = "EncryptedValueServiceClient")]
pub trait EncryptedValueService {
    /// Validate `external_ref` against its inclusion proof and return the
    /// handle of the imported ciphertext, or `None` if the proof rejects.
    fn import_ciphertext(env: Env, external_ref: Bytes, inclusion_proof: Bytes)
        -> Option<BytesN<32>>;

    /// Grant the calling contract permission to reference `handle` in
    /// future proof checks.
    fn authorize_for_core(env: Env, handle: BytesN<32>);

    /// Opt `handle` into permissionless, proof-gated decryption: any party
    /// may later supply a proof of its plaintext.
    fn mark_publicly_revealable(env: Env, handle: BytesN<32>);

    /// Check that `claimed_plaintext` is the genuine plaintext underlying
    /// exactly the ciphertexts in `handles`, and that `proof` was produced
    /// by the authorized decryption committee for them.
    fn verify_decryption_proof(
        env: Env,
        handles: Vec<BytesN<32>>,
        claimed_plaintext: Bytes,
        proof: Bytes,
    ) -> bool;
}
