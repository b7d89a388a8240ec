//! Compound-growth forecasting, evaluated by plain recursion and by a
//! memoized recursion over a caller-owned cache.
//!
//! Both entry points follow the same recurrence:
//!
//! ```text
//! value(0)    = initial_value
//! value(year) = value(year - 1) * (1 + growth_rate)
//! ```

use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{DemoError, Result};

pub const MAX_FORECAST_YEARS: u32 = 1000;

// =============================================================================
// Parameters
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastParams {
    pub initial_value: f64,
    pub growth_rate: f64,
    pub years: u32,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            initial_value: 10_000.0,
            growth_rate: 0.1,
            years: 5,
        }
    }
}

impl ForecastParams {
    pub fn new(initial_value: f64, growth_rate: f64, years: u32) -> Result<Self> {
        let params = Self {
            initial_value,
            growth_rate,
            years,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_value.is_finite() {
            return Err(DemoError::invalid_forecast(
                "initial_value",
                format!("must be a finite number, got {}", self.initial_value),
            ));
        }
        if !self.growth_rate.is_finite() {
            return Err(DemoError::invalid_forecast(
                "growth_rate",
                format!("must be a finite number, got {}", self.growth_rate),
            ));
        }
        if self.growth_rate < -1.0 {
            return Err(DemoError::invalid_forecast(
                "growth_rate",
                format!("must be at least -1.0, got {}", self.growth_rate),
            ));
        }
        if self.years > MAX_FORECAST_YEARS {
            return Err(DemoError::invalid_forecast(
                "years",
                format!("must be at most {MAX_FORECAST_YEARS}, got {}", self.years),
            ));
        }
        Ok(())
    }

    /// `initial_value * (1 + growth_rate)^years`, used to check the recursive forms.
    pub fn closed_form(&self) -> f64 {
        self.initial_value * (1.0 + self.growth_rate).powf(f64::from(self.years))
    }
}

// =============================================================================
// Plain recursion
// =============================================================================

/// Recurses `years` levels deep. Callers taking untrusted input should go
/// through [`ForecastParams::validate`], which caps `years` at
/// [`MAX_FORECAST_YEARS`].
pub fn forecast_recursive(initial_value: f64, growth_rate: f64, years: u32) -> f64 {
    if years == 0 {
        return initial_value;
    }
    forecast_recursive(initial_value, growth_rate, years - 1) * (1.0 + growth_rate)
}

// =============================================================================
// Memoized recursion
// =============================================================================

/// Year-indexed cache for [`forecast_memo`].
///
/// A cache remembers the `(initial_value, growth_rate)` pair that filled it.
/// Calling [`forecast_memo`] with a different pair clears it first, so an
/// entry for year `y` always equals `initial_value * (1 + growth_rate)^y` for
/// the pair currently bound.
#[derive(Debug, Clone, Default)]
pub struct ForecastCache {
    bound_to: Option<(u64, u64)>,
    values: Vec<Option<f64>>,
    computations: usize,
}

impl ForecastCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(years: u32) -> Self {
        Self {
            bound_to: None,
            values: Vec::with_capacity(years as usize + 1),
            computations: 0,
        }
    }

    pub fn get(&self, year: u32) -> Option<f64> {
        self.values.get(year as usize).copied().flatten()
    }

    /// Number of years with a stored value.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recurrence steps evaluated since the cache was created or last cleared.
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn clear(&mut self) {
        self.bound_to = None;
        self.values.clear();
        self.computations = 0;
    }

    fn bind(&mut self, initial_value: f64, growth_rate: f64) {
        let key = (initial_value.to_bits(), growth_rate.to_bits());
        match self.bound_to {
            Some(current) if current == key => {}
            Some(_) => {
                debug!(
                    initial_value,
                    growth_rate, "forecast inputs changed, clearing cache"
                );
                self.clear();
                self.bound_to = Some(key);
            }
            None => self.bound_to = Some(key),
        }
    }

    fn store(&mut self, year: u32, value: f64) {
        let idx = year as usize;
        if self.values.len() <= idx {
            self.values.resize(idx + 1, None);
        }
        self.values[idx] = Some(value);
        self.computations += 1;
    }
}

/// Memoized form of [`forecast_recursive`], sharing its depth contract: a
/// call recurses once per uncached year and grows `cache` to `years + 1`
/// slots.
pub fn forecast_memo(
    initial_value: f64,
    growth_rate: f64,
    years: u32,
    cache: &mut ForecastCache,
) -> f64 {
    cache.bind(initial_value, growth_rate);
    memo_step(initial_value, growth_rate, years, cache)
}

fn memo_step(initial_value: f64, growth_rate: f64, years: u32, cache: &mut ForecastCache) -> f64 {
    if years == 0 {
        return initial_value;
    }
    if let Some(value) = cache.get(years) {
        trace!(years, value, "forecast cache hit");
        return value;
    }
    let value = memo_step(initial_value, growth_rate, years - 1, cache) * (1.0 + growth_rate);
    cache.store(years, value);
    value
}

// =============================================================================
// Year-by-year projection
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub value: f64,
}

/// Every year from 0 to `params.years`, read through one shared cache.
pub fn projection(params: &ForecastParams) -> Vec<ProjectionRow> {
    let mut cache = ForecastCache::with_capacity(params.years);
    forecast_memo(params.initial_value, params.growth_rate, params.years, &mut cache);

    let mut rows = Vec::with_capacity(params.years as usize + 1);
    for year in 0..=params.years {
        let value = forecast_memo(params.initial_value, params.growth_rate, year, &mut cache);
        rows.push(ProjectionRow { year, value });
    }
    debug!(
        years = params.years,
        computations = cache.computations(),
        "projection built"
    );
    rows
}

// =============================================================================
// Report
// =============================================================================

pub fn render_report(params: &ForecastParams, currency: &str) -> String {
    let mut out = String::new();
    let years = params.years;

    out.push_str(&format!(
        "{}\n",
        "📈 Financial Forecast using Basic Recursion:".bold().cyan()
    ));
    let recursive = forecast_recursive(params.initial_value, params.growth_rate, years);
    out.push_str(&format!(
        "Future value after {years} years: {currency}{recursive:.2}\n"
    ));

    out.push_str(&format!(
        "\n{}\n",
        "⚡ Financial Forecast using Optimized Recursion (Memoization):"
            .bold()
            .cyan()
    ));
    let mut cache = ForecastCache::with_capacity(years);
    let memo = forecast_memo(params.initial_value, params.growth_rate, years, &mut cache);
    out.push_str(&format!(
        "Future value after {years} years: {currency}{memo:.2}\n"
    ));
    out.push_str(&format!(
        "Recurrence steps computed: {}\n",
        cache.computations()
    ));

    out.push_str(&format!("\n{}\n", "📅 Year-by-year projection:".bold().cyan()));
    for row in projection(params) {
        out.push_str(&format!(
            "  Year {:>3}: {currency}{:.2}\n",
            row.year, row.value
        ));
    }

    out.push_str(&format!("\n{}\n", "📊 Time Complexity Analysis:".bold().cyan()));
    out.push_str("- Recursive: O(n) because it calls itself 'years' times.\n");
    out.push_str("- With Memoization: Also O(n), but avoids redundant recomputation.\n");
    out
}
