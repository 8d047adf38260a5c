//! Operating model for a vapor-compression chiller serving a district cooling network.
//!
//! The chiller sits between the chilled-water loop of the network and a condenser loop
//! supplied with fresh water from a cooling tower. Its part-load electricity demand is
//! derived from the steady-state COP correlation of D.J. Swider (2003), "A comparison of
//! empirically based steady-state models for vapor-compression liquid chillers", Applied
//! Thermal Engineering.
use crate::units::{Dimensionless, MassFlow, Power, SpecificHeat, Temperature};

/// Specific heat capacity of water in J/(kg·K)
pub const HEAT_CAPACITY_OF_WATER: SpecificHeat = SpecificHeat(4187.0);

/// Nominal condenser-water inlet temperature from the cooling tower in K
pub const CONDENSER_WATER_INLET_TEMPERATURE: Temperature = Temperature(303.15);

// Empirical coefficients of the Swider correlation
const COP_COEFF_1: f64 = 0.0201e-3;
const COP_COEFF_2: f64 = 0.1980e3;
const COP_COEFF_3: f64 = 168.1846e3;

/// The instantaneous operating state of a chiller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChillerOperation {
    /// Electric power requirement of the compressor in W
    pub power: Power,
    /// Heat rejected to the condenser water loop in W
    pub heat_rejection: Power,
}

impl ChillerOperation {
    /// The operating state of a chiller which is switched off.
    pub const fn idle() -> Self {
        ChillerOperation {
            power: Power(0.0),
            heat_rejection: Power(0.0),
        }
    }
}

/// Calculates the operating point of a chiller for the current network conditions.
///
/// Heat rejection always equals the electric power plus the evaporator cooling duty
/// (energy balance over the refrigeration cycle). A zero mass flow rate yields an idle
/// result with both fields exactly zero.
///
/// The correlation is only meaningful for a cooling duty, i.e. `return_temperature`
/// above `supply_temperature`. No validation is performed; degenerate inputs with a
/// non-zero mass flow rate propagate as non-finite values.
///
/// # Arguments
///
/// * `mass_flow` - Plant supply mass flow rate to the district cooling network (kg/s)
/// * `supply_temperature` - Plant supply temperature to the network (K)
/// * `return_temperature` - Plant return temperature from the network (K)
pub fn operating_point(
    mass_flow: MassFlow,
    supply_temperature: Temperature,
    return_temperature: Temperature,
) -> ChillerOperation {
    if mass_flow == MassFlow(0.0) {
        return ChillerOperation::idle();
    }

    // Cooling duty required at the chiller evaporator
    let cooling_load =
        mass_flow * HEAT_CAPACITY_OF_WATER * (return_temperature - supply_temperature);
    let cop = coefficient_of_performance(cooling_load, return_temperature);
    let power = cooling_load / cop;

    ChillerOperation {
        power,
        heat_rejection: power + cooling_load,
    }
}

/// Calculates the COP of the chiller from the Swider correlation.
fn coefficient_of_performance(
    cooling_load: Power,
    return_temperature: Temperature,
) -> Dimensionless {
    let q = cooling_load.value();
    let t_re = return_temperature.value();
    let t_cw_in = CONDENSER_WATER_INLET_TEMPERATURE.value();

    let a = COP_COEFF_1 * q / t_cw_in;
    let b = t_re / t_cw_in;
    let c = COP_COEFF_2 * t_re / q + COP_COEFF_3 * (t_cw_in - t_re) / (t_cw_in * q);

    Dimensionless(1.0 / ((1.0 + c) / (b - a) - 1.0))
}
