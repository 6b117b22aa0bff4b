use soroban_sdk::{Address, String};

use crate::errors::ContractError;

/// Maximum byte length of a patient record identifier.
pub const MAX_RECORD_ID_LEN: u32 = 64;

/// Record identifiers must be non-empty and at most [`MAX_RECORD_ID_LEN`] bytes.
pub fn validate_record_id(record_id: &String) -> Result<(), ContractError> {
    if record_id.is_empty() || record_id.len() > MAX_RECORD_ID_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Grant durations must be strictly positive.
pub fn validate_duration(duration_seconds: u64) -> Result<(), ContractError> {
    if duration_seconds == 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Rejects self-targeting operations (self-grant, self-transfer, self-handover).
pub fn validate_distinct(target: &Address, caller: &Address) -> Result<(), ContractError> {
    if target == caller {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
