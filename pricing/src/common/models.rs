use crate::error::ValidationError;

#[derive(Clone, Copy, Debug)]
pub struct OptionParameter {
    /// the underlying's price at time t
    pub asset_price: f64,
    /// the exercise price of the option
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate, as a decimal
    pub rfr: f64,
    /// the annualized standard deviation of the underlying's returns, as a decimal
    pub vola: f64,
}

impl OptionParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Checks run in a fixed order: expiration, strike, asset price, volatility, rate.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.time_to_expiration <= 0.0 {
            return Err(ValidationError::NonPositiveTimeToExpiration);
        }
        if self.strike <= 0.0 {
            return Err(ValidationError::NonPositiveStrike);
        }
        if self.asset_price <= 0.0 {
            return Err(ValidationError::NonPositiveAssetPrice);
        }
        if self.vola <= 0.0 {
            return Err(ValidationError::NonPositiveVolatility);
        }
        if self.rfr < 0.0 {
            return Err(ValidationError::NegativeRiskFreeRate);
        }
        Ok(())
    }
}

/// Sensitivities of an option price to its pricing inputs.
/// https://en.wikipedia.org/wiki/Greeks_(finance)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionGreeks {
    /// change in option price per unit change of the asset price
    pub delta: f64,
    /// change in delta per unit change of the asset price
    pub gamma: f64,
    /// change in option price per year of elapsed time
    pub theta: f64,
    /// change in option price per unit change of volatility
    pub vega: f64,
    /// change in option price per unit change of the risk-free rate
    pub rho: f64,
}

impl OptionGreeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }
}
