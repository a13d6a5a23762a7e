//! Holt-Winters forecasting.
//!
//! Also known as triple exponential smoothing, this method handles data with
//! both trend and additive seasonality. Initial state is estimated from the
//! series itself, then a single pass updates level, trend and seasonal
//! indices before extrapolating past the end of the data.

use crate::core::{HoltWintersForecast, HoltWintersParams};
use crate::error::Result;
use crate::models::Smoother;
use crate::utils::validation::check_min_len;

/// Initial trend and seasonal indices estimated from the raw series.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState {
    /// Average per-step drift across one season of lookahead.
    pub trend: f64,
    /// Additive seasonal index per position in the cycle.
    pub seasonals: Vec<f64>,
}

/// Holt-Winters forecaster with additive seasonality.
///
/// The update equations, with `m` the season length and `k = t mod m`:
/// - Level: `l_t = α(y_t - s_k) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_k = γ(y_t - l_t) + (1-γ)s_k`
/// - Fitted: `l_t + b_t + s_k`
/// - Forecast: `ŷ_{n-1+h} = l_{n-1} + h × b_{n-1} + s_{(n-1+h) mod m}`
///
/// The first output is `y_0` itself. Forecasts hold level and trend fixed
/// and reuse the last in-sample seasonal index for each position.
///
/// # Example
/// ```
/// use exp_smoothing::core::HoltWintersParams;
/// use exp_smoothing::models::exponential::HoltWinters;
///
/// let data = [10.0, 20.0, 12.0, 22.0, 14.0, 24.0];
/// let model = HoltWinters::new(HoltWintersParams::new(0.5, 0.1, 0.5, 2, 4)).unwrap();
/// let forecast = model.forecast(&data).unwrap();
/// assert_eq!(forecast.smoothed().len(), 6);
/// assert_eq!(forecast.predictions().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoltWinters {
    params: HoltWintersParams,
}

impl HoltWinters {
    /// Create a forecaster from validated parameters.
    pub fn new(params: HoltWintersParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Get the parameters.
    pub fn params(&self) -> &HoltWintersParams {
        &self.params
    }

    /// Get the season length.
    pub fn season_length(&self) -> usize {
        self.params.season_length
    }

    /// Get the forecast horizon.
    pub fn horizon(&self) -> usize {
        self.params.horizon
    }

    /// Estimate the initial trend and seasonal indices.
    ///
    /// The trend averages `(y_{i+m} - y_i) / m` over the first season. Each
    /// seasonal index averages `y_{jm+i}` minus the mean of season `j` over
    /// all complete seasons; a trailing partial season is ignored.
    ///
    /// Requires `season_length > 0` and at least two complete seasons.
    pub fn initial_state(data: &[f64], season_length: usize) -> Result<InitialState> {
        let params = HoltWintersParams {
            season_length,
            ..Default::default()
        };
        params.validate()?;
        check_min_len(data, params.two_seasons()?)?;

        Ok(Self::estimate_initial_state(data, season_length))
    }

    fn estimate_initial_state(data: &[f64], period: usize) -> InitialState {
        let p = period as f64;

        let trend = (0..period)
            .map(|i| (data[i + period] - data[i]) / p)
            .sum::<f64>()
            / p;

        let seasons: Vec<&[f64]> = data.chunks_exact(period).collect();
        let season_averages: Vec<f64> = seasons
            .iter()
            .map(|season| season.iter().sum::<f64>() / p)
            .collect();

        let num_seasons = seasons.len() as f64;
        let seasonals = (0..period)
            .map(|i| {
                seasons
                    .iter()
                    .zip(season_averages.iter())
                    .map(|(season, avg)| season[i] - avg)
                    .sum::<f64>()
                    / num_seasons
            })
            .collect();

        tracing::trace!(trend, seasons = seasons.len(), "estimated initial state");

        InitialState { trend, seasonals }
    }

    /// Validate the series and return the output length.
    fn check_data(&self, data: &[f64]) -> Result<usize> {
        check_min_len(data, 3)?;
        check_min_len(data, self.params.two_seasons()?)?;
        self.params.output_len(data.len())
    }

    /// Run the recurrence, returning `output_len` values.
    fn run(&self, data: &[f64], output_len: usize) -> Vec<f64> {
        let HoltWintersParams {
            alpha,
            beta,
            gamma,
            season_length: period,
            horizon,
        } = self.params;
        let n = data.len();

        let InitialState {
            mut trend,
            mut seasonals,
        } = Self::estimate_initial_state(data, period);

        let mut output = Vec::with_capacity(output_len);
        let mut level = data[0];
        output.push(data[0]);

        for (t, &y) in data.iter().enumerate().skip(1) {
            let k = t % period;
            let level_prev = level;

            level = alpha * (y - seasonals[k]) + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            seasonals[k] = gamma * (y - level) + (1.0 - gamma) * seasonals[k];

            output.push(level + trend + seasonals[k]);
        }

        for h in 1..=horizon {
            let k = (n - 1 + h) % period;
            output.push(level + h as f64 * trend + seasonals[k]);
        }

        output
    }

    /// Smooth the series and forecast, keeping the two parts separate.
    pub fn forecast(&self, data: &[f64]) -> Result<HoltWintersForecast> {
        let output_len = self.check_data(data)?;
        Ok(HoltWintersForecast::split_combined(
            self.run(data, output_len),
            data.len(),
        ))
    }
}

impl Smoother for HoltWinters {
    /// Smoothed values followed by forecasts, `n + horizon` in total.
    fn smooth(&self, data: &[f64]) -> Result<Vec<f64>> {
        let output_len = self.check_data(data)?;
        Ok(self.run(data, output_len))
    }

    fn name(&self) -> &str {
        "HoltWinters"
    }
}

/// Holt-Winters smoothing followed by `num_predictions` forecasts, as one
/// series of length `data.len() + num_predictions`.
///
/// Rejects series shorter than 3 or shorter than two full seasons, weights
/// outside [0, 1] and a zero season length.
pub fn holt_winters(
    data: &[f64],
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
    num_predictions: usize,
) -> Result<Vec<f64>> {
    let params = HoltWintersParams::new(alpha, beta, gamma, season_length, num_predictions);
    HoltWinters::new(params)?.smooth(data)
}

/// Same values as [`holt_winters`], split into in-sample and forecast parts.
pub fn holt_winters_partitioned(
    data: &[f64],
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
    num_predictions: usize,
) -> Result<HoltWintersForecast> {
    let params = HoltWintersParams::new(alpha, beta, gamma, season_length, num_predictions);
    HoltWinters::new(params)?.forecast(data)
}
