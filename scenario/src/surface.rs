use crate::error::ScenarioError;
use ndarray::{Array1, Array2};
use pricing::analytic::{BlackScholesMerton, OptionPrice};
use pricing::common::models::OptionParameter;

/// Evenly spaced axis of `nr_points` values from `start` to `stop` inclusive.
pub fn scenario_axis(start: f64, stop: f64, nr_points: usize) -> Result<Array1<f64>, ScenarioError> {
    if nr_points == 0 {
        return Err(ScenarioError::EmptyAxis);
    }
    Ok(Array1::linspace(start, stop, nr_points))
}

/// Call and put price grids over a spot times volatility sweep,
/// indexed by `[volatility, spot]`.
pub struct PriceSurface {
    pub spot_range: Array1<f64>,
    pub vol_range: Array1<f64>,
    pub call_prices: Array2<f64>,
    pub put_prices: Array2<f64>,
}

impl PriceSurface {
    /// Reprices every grid cell with a fresh instance; strike, expiration
    /// and rate are held fixed from `base`, spot and volatility are swept.
    pub fn evaluate(
        base: &OptionParameter,
        spot_range: Array1<f64>,
        vol_range: Array1<f64>,
    ) -> Result<Self, ScenarioError> {
        if spot_range.is_empty() || vol_range.is_empty() {
            return Err(ScenarioError::EmptyAxis);
        }

        let mut call_prices = Array2::zeros((vol_range.len(), spot_range.len()));
        let mut put_prices = Array2::zeros((vol_range.len(), spot_range.len()));

        for (i, &vola) in vol_range.iter().enumerate() {
            for (j, &spot) in spot_range.iter().enumerate() {
                let bs = BlackScholesMerton::new(
                    spot,
                    base.strike,
                    base.time_to_expiration,
                    base.rfr,
                    vola,
                )?;
                let (call, put) = bs.prices();
                call_prices[[i, j]] = call;
                put_prices[[i, j]] = put;
            }
        }

        Ok(Self {
            spot_range,
            vol_range,
            call_prices,
            put_prices,
        })
    }
}
