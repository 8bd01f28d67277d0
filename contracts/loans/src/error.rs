use soroban_sdk::{self, contracterror};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LoanError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,

    // request
    TokenNotAllowed = 4,
    InvalidDuration = 5,
    NonPositiveAmount = 6,
    DeadlineInPast = 7,
    AmountExceedsValuation = 8,
    ValuationUnavailable = 9,

    // lifecycle
    LoanNotFound = 10,
    LoanAlreadyAccepted = 11,
    LoanAlreadyCancelled = 12,
    LoanAlreadyPaid = 13,
    LoanNotAccepted = 14,
    AcceptanceDeadlinePassed = 15,
    TooLate = 16,
    TooEarly = 17,

    // parameters
    ProtocolFeeTooHigh = 18,
    LiquidationFeeTooHigh = 19,
    OriginationFeeTooHigh = 20,
    GraceFeeTooHigh = 21,
    InterestRateTooHigh = 22,
    GracePeriodOutOfRange = 23,
    InvalidReductionFactor = 24,
    ThresholdsNotAscending = 25,
    LengthMismatch = 26,
    InvalidAddress = 27,
    UnsupportedOracle = 28,

    Reentrant = 29,
    MathOverflow = 30,
}
