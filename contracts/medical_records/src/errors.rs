use soroban_sdk::contracttype;

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: invalid input parameters or format errors
    Validation = 1,
    /// Authorization errors: permission and access control failures
    Authorization = 2,
    /// Not found errors: resource lookup failures
    NotFound = 3,
    /// State conflict errors: duplicate identifiers, double initialization
    StateConflict = 4,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Low severity: non-critical errors, informational
    Low = 1,
    /// Medium severity: important but recoverable errors
    Medium = 2,
    /// High severity: significant errors requiring attention
    High = 3,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    RecordNotFound = 4,
    RecordAlreadyExists = 5,
    InvalidInput = 6,
    /// Reserved: an expired grant currently surfaces as a plain negative
    /// authorization result, indistinguishable from a grant that never
    /// existed.
    ExpiredAccess = 7,
}

impl ContractError {
    /// Returns the error category for this error.
    /// Categories help classify errors for better error handling and monitoring.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::InvalidInput => {
                ErrorCategory::Validation
            }
            ContractError::Unauthorized | ContractError::ExpiredAccess => {
                ErrorCategory::Authorization
            }
            ContractError::RecordNotFound => ErrorCategory::NotFound,
            ContractError::AlreadyInitialized | ContractError::RecordAlreadyExists => {
                ErrorCategory::StateConflict
            }
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidInput
            | ContractError::RecordNotFound
            | ContractError::RecordAlreadyExists => ErrorSeverity::Low,
            ContractError::Unauthorized
            | ContractError::ExpiredAccess
            | ContractError::AlreadyInitialized => ErrorSeverity::Medium,
            ContractError::NotInitialized => ErrorSeverity::High,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::RecordNotFound => "Record not found",
            ContractError::RecordAlreadyExists => "Record with this identifier already exists",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::ExpiredAccess => "Access grant has expired",
        }
    }
}
