use chrono::{DateTime, SubsecRound, Utc};
use heapless::String as HeaplessString;
use serde::Serialize;
use std::hash::Hasher;
use std::str::FromStr;
use twox_hash::XxHash64;

use crate::models::audit::ChangeLogModel;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// This provides a stable hash across different runs and systems by:
/// - Serializing the data to CBOR format (deterministic binary representation)
/// - Using XxHash64 with a fixed seed (0) for consistent hashing
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Links an entry to its antecedent and computes its hash.
///
/// Must be called after `id` and `change_request_id` are assigned; both are
/// part of the hashed content.
pub fn seal_change_log(entry: &mut ChangeLogModel, antecedent_hash: i64) -> Result<(), String> {
    entry.antecedent_hash = antecedent_hash;
    entry.hash = 0;
    entry.hash = hash_as_i64(entry)?;
    Ok(())
}

/// Checks the hash chain of one change request's entries, given in append order.
///
/// Every entry must hash to its stored value, the first must have no
/// antecedent, and each following one must link to the hash of its predecessor.
pub fn verify_change_log_chain(entries: &[ChangeLogModel]) -> bool {
    let mut expected_antecedent = 0;
    for entry in entries {
        if entry.antecedent_hash != expected_antecedent {
            return false;
        }
        let mut unsealed = entry.clone();
        unsealed.hash = 0;
        match hash_as_i64(&unsealed) {
            Ok(hash) if hash == entry.hash => expected_antecedent = hash,
            _ => return false,
        }
    }
    true
}

/// Current instant at the precision the stores keep (microseconds), so that
/// hashes computed before a write still verify after a read.
pub fn audit_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Converts a str into a bounded string, naming the field when it does not fit.
///
/// The capacity `N` is in bytes, so multi-byte text fits fewer chars.
pub fn to_heapless<const N: usize>(value: &str, field: &str) -> Result<HeaplessString<N>, String> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for field '{field}' is too long (max {N} bytes)"))
}

pub fn to_optional_heapless<const N: usize>(
    value: Option<&str>,
    field: &str,
) -> Result<Option<HeaplessString<N>>, String> {
    value.map(|v| to_heapless(v, field)).transpose()
}
