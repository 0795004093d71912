use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    DuplicateIdentifier = 4,
    InvalidCiphertext = 5,
    InvalidAmount = 6,
    RecordNotFound = 7,
    AlreadyVerified = 8,
    ProofVerificationFailed = 9,
    NotYetVerified = 10,
}
