//! Annualised investment costs for cooling supply technologies.
//!
//! Cost-curve parameters come from an external table keyed by region and technology
//! code. Each technology covers a set of capacity brackets; the bracket containing the
//! peak design capacity supplies the coefficients of a parametric investment cost curve,
//! which is then annualised with the capital recovery factor.
use crate::finance::annualise;
use crate::id::define_id_type;
use crate::region::RegionID;
use crate::units::{Dimensionless, Money, MoneyPerYear, Power};
use anyhow::{ensure, Context, Result};
use indexmap::IndexMap;
use itertools::Itertools;

define_id_type! {TechnologyID}

/// Cost-curve parameters for one capacity bracket of a technology.
///
/// The bracket applies to peak capacities in the range `[cap_min, cap_max)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBracket {
    /// Smallest capacity covered by this bracket (W), inclusive
    pub cap_min: Power,
    /// Largest capacity covered by this bracket (W), exclusive
    pub cap_max: Power,
    /// Constant term of the investment cost curve
    pub a: f64,
    /// Scale of the power-law term of the investment cost curve
    pub b: f64,
    /// Exponent of the power-law term of the investment cost curve
    pub c: f64,
    /// Constant scale of the logarithmic term of the investment cost curve
    pub d: f64,
    /// Capacity-proportional scale of the logarithmic term of the investment cost curve
    pub e: f64,
    /// Interest rate as a fraction
    pub interest_rate: Dimensionless,
    /// Lifetime of the equipment in years
    pub lifetime: u32,
    /// Annual operation and maintenance cost as a fraction of the annualised capital cost
    pub fixed_operating_fraction: Dimensionless,
}

impl CostBracket {
    /// Whether this bracket covers the given capacity (lower-inclusive, upper-exclusive)
    pub fn contains(&self, capacity: Power) -> bool {
        self.cap_min <= capacity && capacity < self.cap_max
    }

    /// Evaluates the investment cost curve at the given capacity.
    fn investment_cost(&self, capacity: Power) -> Money {
        let q = capacity.value();
        Money(self.a + self.b * q.powf(self.c) + (self.d + self.e * q) * q.ln())
    }
}

/// An immutable lookup table of cost-curve parameters.
///
/// Brackets are stored per region and technology code, ordered by `cap_min`. The table
/// is loaded once from the cost-parameter file and shared by all subsequent cost
/// calculations.
#[derive(Debug, PartialEq)]
pub struct CostTable(IndexMap<(RegionID, TechnologyID), Vec<CostBracket>>);

impl CostTable {
    /// Creates a cost table from unsorted per-technology brackets.
    ///
    /// # Errors
    ///
    /// Returns an error if any technology has no brackets or has brackets with
    /// overlapping capacity ranges.
    pub fn new(mut map: IndexMap<(RegionID, TechnologyID), Vec<CostBracket>>) -> Result<Self> {
        for ((region_id, technology), brackets) in map.iter_mut() {
            ensure!(
                !brackets.is_empty(),
                "No capacity brackets for technology {technology} in region {region_id}"
            );
            brackets.sort_by(|x, y| x.cap_min.value().total_cmp(&y.cap_min.value()));
            for (current, next) in brackets.iter().tuple_windows() {
                ensure!(
                    current.cap_max <= next.cap_min,
                    "Overlapping capacity brackets for technology {technology} in region \
                    {region_id} (brackets starting at {} W and {} W)",
                    current.cap_min.value(),
                    next.cap_min.value()
                );
            }
        }
        Ok(CostTable(map))
    }

    /// The ordered capacity brackets for a technology in a region.
    pub fn brackets(
        &self,
        region_id: &RegionID,
        technology: &TechnologyID,
    ) -> Result<&[CostBracket]> {
        let brackets = self
            .0
            .get(&(region_id.clone(), technology.clone()))
            .with_context(|| {
                format!("No cost data for technology {technology} in region {region_id}")
            })?;
        Ok(brackets)
    }

    /// Calculates the annualised investment cost of a chiller of the given peak capacity.
    ///
    /// A peak capacity of zero or below costs nothing. A capacity below the smallest
    /// bracket of the technology is replaced by that bracket's lower bound before the
    /// cost curve is evaluated. A capacity not covered by any bracket is an error.
    ///
    /// # Arguments
    ///
    /// * `region_id` - The region whose cost data applies
    /// * `technology` - Code of the chiller technology to cost
    /// * `peak_capacity` - Peak cooling demand on the chiller (W)
    pub fn annualised_cost(
        &self,
        region_id: &RegionID,
        technology: &TechnologyID,
        peak_capacity: Power,
    ) -> Result<ChillerCost> {
        if peak_capacity <= Power(0.0) {
            return Ok(ChillerCost::zero());
        }

        let brackets = self.brackets(region_id, technology)?;

        // A design capacity below the least capacity available for the technology is
        // replaced by that least capacity
        let minimum = brackets[0].cap_min;
        let capacity = if peak_capacity < minimum {
            minimum
        } else {
            peak_capacity
        };

        let bracket = brackets
            .iter()
            .find(|bracket| bracket.contains(capacity))
            .with_context(|| {
                format!(
                    "No capacity bracket covering {} W for technology {technology} in region \
                    {region_id}",
                    capacity.value()
                )
            })?;

        let capital = annualise(
            bracket.investment_cost(capacity),
            bracket.lifetime,
            bracket.interest_rate,
        );

        Ok(ChillerCost {
            capital,
            fixed_operating: capital * bracket.fixed_operating_fraction,
        })
    }
}

/// The annualised cost of owning a chiller, in currency per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChillerCost {
    /// Annualised capital cost of the investment
    pub capital: MoneyPerYear,
    /// Annual fixed operation and maintenance cost
    pub fixed_operating: MoneyPerYear,
}

impl ChillerCost {
    /// The cost of a chiller which is never built.
    pub const fn zero() -> Self {
        ChillerCost {
            capital: MoneyPerYear(0.0),
            fixed_operating: MoneyPerYear(0.0),
        }
    }
}
