//! Code for reading the chiller cost-parameter CSV file.
use super::*;
use crate::cost::{CostBracket, CostTable, TechnologyID};
use crate::id::IDCollection;
use crate::region::RegionID;
use crate::units::{Dimensionless, Power};
use ::log::warn;
use serde::Deserialize;
use std::collections::HashSet;

const CHILLER_COSTS_FILE_NAME: &str = "chiller_costs.csv";

/// Cost-curve parameters for one capacity bracket of a chiller technology
#[derive(PartialEq, Debug, Deserialize, Clone)]
struct CostRowRaw {
    /// The region to which this cost data applies
    region_id: String,
    /// Code identifying the chiller technology (e.g. "VCC1")
    code: String,
    /// Smallest capacity covered by this bracket (W)
    cap_min: f64,
    /// Largest capacity covered by this bracket (W)
    cap_max: f64,
    /// Cost curve coefficients
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    /// Interest rate in percent
    #[serde(rename = "IR_%")]
    interest_rate_pct: f64,
    /// Lifetime of the equipment in years
    #[serde(rename = "LT_yr")]
    lifetime: u32,
    /// Annual operation and maintenance cost in percent of the annualised capital cost
    #[serde(rename = "O&M_%")]
    fixed_operating_pct: f64,
}

impl CostRowRaw {
    /// Validates the raw row and converts it into a keyed [`CostBracket`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The region ID is unknown.
    /// - The capacity bracket is empty, negative or non-finite.
    /// - `LT_yr` is 0.
    /// - `IR_%` or `O&M_%` is negative.
    ///
    /// # Warnings
    ///
    /// Logs a warning if the interest rate is greater than 100%.
    fn into_bracket(
        self,
        region_ids: &HashSet<RegionID>,
    ) -> Result<((RegionID, TechnologyID), CostBracket)> {
        let region_id = region_ids.get_id_by_str(&self.region_id)?;

        ensure!(
            self.cap_min >= 0.0 && self.cap_max.is_finite(),
            "Error in cost data for technology {}: capacity bounds must be non-negative and \
            finite",
            self.code
        );
        ensure!(
            self.cap_min < self.cap_max,
            "Error in cost data for technology {}: cap_min must be below cap_max",
            self.code
        );
        ensure!(
            self.lifetime > 0,
            "Error in cost data for technology {}: lifetime must be greater than 0",
            self.code
        );
        ensure!(
            self.interest_rate_pct >= 0.0,
            "Error in cost data for technology {}: interest rate must be positive",
            self.code
        );
        if self.interest_rate_pct > 100.0 {
            warn!(
                "Warning in cost data for technology {}: interest rate is greater than 100%",
                self.code
            );
        }
        ensure!(
            self.fixed_operating_pct >= 0.0,
            "Error in cost data for technology {}: O&M fraction must be positive",
            self.code
        );

        let bracket = CostBracket {
            cap_min: Power(self.cap_min),
            cap_max: Power(self.cap_max),
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
            e: self.e,
            interest_rate: Dimensionless(self.interest_rate_pct / 100.0),
            lifetime: self.lifetime,
            fixed_operating_fraction: Dimensionless(self.fixed_operating_pct / 100.0),
        };

        Ok(((region_id, self.code.into()), bracket))
    }
}

/// Read chiller cost-curve parameters from the specified model directory.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
/// * `region_ids` - All possible region IDs
///
/// # Returns
///
/// A validated [`CostTable`] or an error.
pub fn read_chiller_costs(model_dir: &Path, region_ids: &HashSet<RegionID>) -> Result<CostTable> {
    let file_path = model_dir.join(CHILLER_COSTS_FILE_NAME);
    let iter = read_csv::<CostRowRaw>(&file_path)?;
    read_chiller_costs_from_iter(iter, region_ids).with_context(|| input_err_msg(&file_path))
}

fn read_chiller_costs_from_iter<I>(iter: I, region_ids: &HashSet<RegionID>) -> Result<CostTable>
where
    I: Iterator<Item = CostRowRaw>,
{
    let mut map: IndexMap<(RegionID, TechnologyID), Vec<CostBracket>> = IndexMap::new();
    for row in iter {
        let (key, bracket) = row.into_bracket(region_ids)?;
        map.entry(key).or_default().push(bracket);
    }

    CostTable::new(map)
}
