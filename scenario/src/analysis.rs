use crate::error::ScenarioError;
use ndarray::Array1;
use pricing::analytic::{BlackScholesMerton, OptionPrice};
use pricing::common::models::OptionParameter;

/// One row of the profit and loss profile: expiration PnL of call and put
/// at a terminal spot, next to the live prices repriced at that spot.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisRow {
    pub spot: f64,
    pub call_pnl: f64,
    pub put_pnl: f64,
    pub call_price: f64,
    pub put_price: f64,
}

/// Builds the profile over `spot_range`, one row per spot point in order.
/// PnL is expiration payoff less `purchase_price`; the price columns hold
/// live values with volatility, rate and expiration fixed from `base`.
pub fn pnl_profile(
    base: &OptionParameter,
    spot_range: &Array1<f64>,
    purchase_price: f64,
) -> Result<Vec<AnalysisRow>, ScenarioError> {
    let bs = BlackScholesMerton::from_params(*base)?;

    let spots = spot_range.to_vec();
    let (call_pnl, put_pnl) = bs.expiration_pnl(&spots, purchase_price)?;

    let mut rows = Vec::with_capacity(spots.len());
    for (i, &spot) in spots.iter().enumerate() {
        let repriced = BlackScholesMerton::new(
            spot,
            base.strike,
            base.time_to_expiration,
            base.rfr,
            base.vola,
        )?;
        let (call_price, put_price) = repriced.prices();
        rows.push(AnalysisRow {
            spot,
            call_pnl: call_pnl[i],
            put_pnl: put_pnl[i],
            call_price,
            put_price,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::scenario_axis;
    use assert_approx_eq::assert_approx_eq;
    use pricing::error::ValidationError;

    const TOLERANCE: f64 = 1e-9;

    fn base_parameter() -> OptionParameter {
        OptionParameter::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    #[test]
    fn profile_rows_follow_the_axis() {
        let base = base_parameter();
        let spots = scenario_axis(80.0, 120.0, 9).unwrap();
        let rows = pnl_profile(&base, &spots, 5.0).unwrap();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].spot, 80.0);
        assert_eq!(rows[8].spot, 120.0);

        // at-the-money row: both options expire worthless, full premium lost
        assert_approx_eq!(rows[4].call_pnl, -5.0, TOLERANCE);
        assert_approx_eq!(rows[4].put_pnl, -5.0, TOLERANCE);

        // price columns match a directly repriced instance
        let repriced = BlackScholesMerton::new(
            rows[2].spot,
            base.strike,
            base.time_to_expiration,
            base.rfr,
            base.vola,
        )
        .unwrap();
        assert_approx_eq!(rows[2].call_price, repriced.call(), TOLERANCE);
        assert_approx_eq!(rows[2].put_price, repriced.put(), TOLERANCE);
    }

    #[test]
    fn profile_pnl_monotonicity() {
        let base = base_parameter();
        let spots = scenario_axis(60.0, 140.0, 41).unwrap();
        let rows = pnl_profile(&base, &spots, 4.0).unwrap();

        assert!(rows.windows(2).all(|w| w[0].call_pnl <= w[1].call_pnl));
        assert!(rows.windows(2).all(|w| w[0].put_pnl >= w[1].put_pnl));
    }

    #[test]
    fn profile_rejects_invalid_input() {
        let base = base_parameter();
        let spots = scenario_axis(80.0, 120.0, 9).unwrap();

        assert!(matches!(
            pnl_profile(&base, &spots, -1.0),
            Err(ScenarioError::Validation(
                ValidationError::NegativePurchasePrice
            ))
        ));

        let empty = Array1::from(vec![]);
        assert!(matches!(
            pnl_profile(&base, &empty, 5.0),
            Err(ScenarioError::Validation(ValidationError::EmptySpotRange))
        ));
    }
}
