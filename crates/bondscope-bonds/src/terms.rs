//! Contractual terms of a plain fixed-coupon bond.

use serde::Serialize;

use bondscope_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// Contractual inputs of a bullet fixed-coupon bond.
///
/// Instances only exist in a validated state: `face_value` is positive,
/// `coupon_rate` lies in `[0, 1)` and settlement is not after maturity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondTerms {
    face_value: f64,
    coupon_rate: f64,
    frequency: Frequency,
    settlement: Date,
    maturity: Date,
}

impl BondTerms {
    /// Starts a builder.
    #[must_use]
    pub fn builder() -> BondTermsBuilder {
        BondTermsBuilder::new()
    }

    /// Face (redemption) value.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Annual coupon rate as a decimal fraction.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupon frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Coupon payments per year as a float.
    pub fn periods_per_year(&self) -> f64 {
        f64::from(self.frequency.periods_per_year())
    }

    /// Settlement date.
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Maturity date.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Coupon paid each period: `F * c / f`.
    pub fn coupon_payment(&self) -> f64 {
        self.face_value * self.coupon_rate / self.periods_per_year()
    }

    /// Whole coupon periods to maturity used for pricing.
    ///
    /// Complete months between settlement and maturity divided by the
    /// months in one period, truncated.
    pub fn pricing_periods(&self) -> u32 {
        let months = self.settlement.months_between(&self.maturity);
        let per_period = i64::from(self.frequency.months_per_period());
        (months / per_period) as u32
    }

    /// Coupon periods used by the risk measures: frequency times complete
    /// years to maturity.
    pub fn risk_periods(&self) -> u32 {
        let years = self.settlement.years_between(&self.maturity) as u32;
        self.frequency.periods_per_year() * years
    }

    /// Calendar days from settlement to maturity.
    pub fn days_to_maturity(&self) -> i64 {
        self.settlement.days_between(&self.maturity)
    }
}

/// Builder for [`BondTerms`].
#[derive(Debug, Clone, Default)]
pub struct BondTermsBuilder {
    face_value: Option<f64>,
    coupon_rate: Option<f64>,
    frequency: Frequency,
    settlement: Option<Date>,
    maturity: Option<Date>,
}

impl BondTermsBuilder {
    /// Creates a new builder with semi-annual coupons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: f64) -> Self {
        self.face_value = Some(value);
        self
    }

    /// Sets the annual coupon rate (decimal, 0.05 for 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = freq;
        self
    }

    /// Sets the settlement date.
    #[must_use]
    pub fn settlement(mut self, date: Date) -> Self {
        self.settlement = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Validates and builds the terms.
    pub fn build(self) -> BondResult<BondTerms> {
        let face_value = self
            .face_value
            .ok_or_else(|| BondError::missing_field("face_value"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let settlement = self
            .settlement
            .ok_or_else(|| BondError::missing_field("settlement"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;

        if !face_value.is_finite() || face_value <= 0.0 {
            return Err(BondError::invalid_spec(format!(
                "Face value must be positive, got {face_value}"
            )));
        }

        if !coupon_rate.is_finite() || !(0.0..1.0).contains(&coupon_rate) {
            return Err(BondError::invalid_spec(format!(
                "Coupon rate must be in [0, 1), got {coupon_rate}"
            )));
        }

        if settlement > maturity {
            return Err(BondError::SettlementAfterMaturity {
                settlement: settlement.to_string(),
                maturity: maturity.to_string(),
            });
        }

        Ok(BondTerms {
            face_value,
            coupon_rate,
            frequency: self.frequency,
            settlement,
            maturity,
        })
    }
}
