use crate::common::models::{OptionGreeks, OptionParameter};
use crate::error::ValidationError;
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPrice {
    fn call(&self) -> f64;
    fn put(&self) -> f64;

    fn prices(&self) -> (f64, f64) {
        (self.call(), self.put())
    }
}

/// European Put and Call option prices and greeks for non-dividend-paying stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// The normalization terms d1 and d2 are derived once at construction and
/// shared by every query; the instance is read-only afterwards. A changed
/// input means a new instance.
#[derive(Debug)]
pub struct BlackScholesMerton {
    params: OptionParameter,
    d1: f64,
    d2: f64,
}

impl BlackScholesMerton {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Result<Self, ValidationError> {
        let params = OptionParameter::new(asset_price, strike, time_to_expiration, rfr, vola);
        Self::from_params(params)
    }

    pub fn from_params(params: OptionParameter) -> Result<Self, ValidationError> {
        params.validate()?;

        let sigma_exp = params.vola * params.time_to_expiration.sqrt();
        let d1 = ((params.asset_price / params.strike).ln()
            + (params.rfr + params.vola.powi(2) / 2.0) * params.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;

        Ok(Self { params, d1, d2 })
    }

    pub fn params(&self) -> &OptionParameter {
        &self.params
    }

    fn discount_factor(&self) -> f64 {
        (-self.params.rfr * self.params.time_to_expiration).exp()
    }

    /// The greeks of the call and the put option, in that order.
    /// Theta is per year; gamma and vega are shared between the two sides.
    pub fn greeks(&self) -> (OptionGreeks, OptionGreeks) {
        let disc_factor = self.discount_factor();
        let sqrt_t = self.params.time_to_expiration.sqrt();
        let d1_pdf = pdf(self.d1);

        let call_delta = cdf(self.d1);
        let gamma = d1_pdf / (self.params.asset_price * self.params.vola * sqrt_t);
        let call_theta = -(self.params.asset_price * d1_pdf * self.params.vola) / (2.0 * sqrt_t)
            - self.params.rfr * self.params.strike * disc_factor * cdf(self.d2);
        let vega = self.params.asset_price * sqrt_t * d1_pdf;
        let call_rho =
            self.params.strike * self.params.time_to_expiration * disc_factor * cdf(self.d2);

        let put_delta = call_delta - 1.0;
        let put_theta = -(self.params.asset_price * d1_pdf * self.params.vola) / (2.0 * sqrt_t)
            + self.params.rfr * self.params.strike * disc_factor * cdf(-self.d2);
        let put_rho =
            -self.params.strike * self.params.time_to_expiration * disc_factor * cdf(-self.d2);

        (
            OptionGreeks::new(call_delta, gamma, call_theta, vega, call_rho),
            OptionGreeks::new(put_delta, gamma, put_theta, vega, put_rho),
        )
    }

    /// Profit and loss at expiration over a range of terminal spot prices,
    /// for the call and the put, given the premium paid.
    ///
    /// Valued as intrinsic value at expiration against the strike alone;
    /// the instance's asset price, volatility and rate do not enter.
    pub fn expiration_pnl(
        &self,
        spot_range: &[f64],
        purchase_price: f64,
    ) -> Result<(Vec<f64>, Vec<f64>), ValidationError> {
        if purchase_price < 0.0 {
            return Err(ValidationError::NegativePurchasePrice);
        }
        if spot_range.is_empty() {
            return Err(ValidationError::EmptySpotRange);
        }

        let strike = self.params.strike;
        let call_pnl = spot_range
            .iter()
            .map(|spot| (spot - strike).max(0.0) - purchase_price)
            .collect();
        let put_pnl = spot_range
            .iter()
            .map(|spot| (strike - spot).max(0.0) - purchase_price)
            .collect();

        Ok((call_pnl, put_pnl))
    }
}

impl OptionPrice for BlackScholesMerton {
    fn call(&self) -> f64 {
        cdf(self.d1) * self.params.asset_price
            - cdf(self.d2) * self.params.strike * self.discount_factor()
    }

    fn put(&self) -> f64 {
        cdf(-self.d2) * self.params.strike * self.discount_factor()
            - cdf(-self.d1) * self.params.asset_price
    }
}
