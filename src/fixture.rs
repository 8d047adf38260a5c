//! Fixtures for tests

use crate::cost::{CostBracket, CostTable, TechnologyID};
use crate::region::RegionID;
use crate::units::{Dimensionless, Power};
use rstest::fixture;
use std::collections::HashSet;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn region_id() -> RegionID {
    "CH".into()
}

#[fixture]
pub fn region_ids() -> HashSet<RegionID> {
    ["CH".into(), "SG".into()].into_iter().collect()
}

#[fixture]
pub fn technology() -> TechnologyID {
    "VCC1".into()
}

/// Two contiguous capacity brackets for the fixture technology, given out of order
#[fixture]
pub fn cost_brackets() -> Vec<CostBracket> {
    vec![
        CostBracket {
            cap_min: Power(1_000_000.0),
            cap_max: Power(10_000_000.0),
            a: 0.0,
            b: 1.0,
            c: 1.0,
            d: 0.0,
            e: 0.0,
            interest_rate: Dimensionless(0.05),
            lifetime: 20,
            fixed_operating_fraction: Dimensionless(0.02),
        },
        CostBracket {
            cap_min: Power(50_000.0),
            cap_max: Power(1_000_000.0),
            a: 300_000.0,
            b: 0.85,
            c: 0.95,
            d: 400.0,
            e: 0.0,
            interest_rate: Dimensionless(0.05),
            lifetime: 25,
            fixed_operating_fraction: Dimensionless(0.05),
        },
    ]
}

#[fixture]
pub fn cost_table(
    region_id: RegionID,
    technology: TechnologyID,
    cost_brackets: Vec<CostBracket>,
) -> CostTable {
    let map = [((region_id, technology), cost_brackets)]
        .into_iter()
        .collect();
    CostTable::new(map).unwrap()
}
