use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("time to expiration must be positive")]
    NonPositiveTimeToExpiration,
    #[error("strike must be positive")]
    NonPositiveStrike,
    #[error("asset price must be positive")]
    NonPositiveAssetPrice,
    #[error("volatility must be positive")]
    NonPositiveVolatility,
    #[error("risk-free rate cannot be negative")]
    NegativeRiskFreeRate,
    #[error("purchase price cannot be negative")]
    NegativePurchasePrice,
    #[error("spot range cannot be empty")]
    EmptySpotRange,
}
