//! The top-level representation of a cooling supply model.
use crate::cost::{ChillerCost, CostTable, TechnologyID};
use crate::id::IDCollection;
use crate::input::cost::read_chiller_costs;
use crate::input::region::read_regions;
use crate::region::{RegionID, RegionMap};
use crate::settings::Settings;
use crate::units::Power;
use anyhow::{Context, Result};
use log::info;
use std::collections::HashSet;
use std::path::Path;

/// A cooling supply model for a single region.
///
/// Holds the input data loaded once from the model directory, most notably the chiller
/// cost-parameter table shared by all subsequent cost calculations.
pub struct Model {
    /// The region whose cost data applies to this model
    region_id: RegionID,
    /// All regions known to the model
    pub regions: RegionMap,
    /// Investment cost parameters for cooling supply technologies
    pub cost_table: CostTable,
}

impl Model {
    /// Load a model from the specified directory.
    ///
    /// The directory must contain `settings.toml`, `regions.csv` and `chiller_costs.csv`.
    /// The region configured in the settings must be one of the known regions.
    pub fn from_path(model_dir: &Path) -> Result<Model> {
        let settings = Settings::from_path(model_dir)?;
        let regions = read_regions(model_dir)?;
        let region_ids: HashSet<RegionID> = regions.keys().cloned().collect();
        let region_id = region_ids
            .get_id_by_str(&settings.region_id)
            .context("Settings refer to an unknown region")?;
        let cost_table = read_chiller_costs(model_dir, &region_ids)?;

        info!("Loaded model for region {region_id}");

        Ok(Model {
            region_id,
            regions,
            cost_table,
        })
    }

    /// The region whose cost data applies to this model
    pub fn region_id(&self) -> &RegionID {
        &self.region_id
    }

    /// Calculates the annualised investment cost of a chiller in the model's region.
    ///
    /// # Arguments
    ///
    /// * `technology` - Code of the chiller technology to cost
    /// * `peak_capacity` - Peak cooling demand on the chiller (W)
    pub fn chiller_cost(
        &self,
        technology: &TechnologyID,
        peak_capacity: Power,
    ) -> Result<ChillerCost> {
        self.cost_table
            .annualised_cost(&self.region_id, technology, peak_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    /// Create a complete model directory with the given settings file contents
    fn create_model_dir(dir_path: &Path, settings: &str) {
        let mut file = File::create(dir_path.join("settings.toml")).unwrap();
        writeln!(file, "{settings}").unwrap();

        let mut file = File::create(dir_path.join("regions.csv")).unwrap();
        writeln!(
            file,
            "id,description
CH,Switzerland
SG,Singapore"
        )
        .unwrap();

        let mut file = File::create(dir_path.join("chiller_costs.csv")).unwrap();
        writeln!(
            file,
            "region_id,code,cap_min,cap_max,a,b,c,d,e,IR_%,LT_yr,O&M_%
CH,VCC1,50000,1000000,300000,0.85,0.95,400,0,5,25,5
CH,VCC1,1000000,10000000,0,1,1,0,0,5,20,2"
        )
        .unwrap();
    }

    #[test]
    fn test_model_from_path() {
        let dir = tempdir().unwrap();
        create_model_dir(dir.path(), "region_id = \"CH\"");

        let model = Model::from_path(dir.path()).unwrap();
        assert_eq!(model.region_id(), &"CH".into());
        assert_eq!(model.regions.len(), 2);

        let cost = model
            .chiller_cost(&"VCC1".into(), Power(600_000.0))
            .unwrap();
        assert_approx_eq!(f64, cost.capital.value(), 40268.35351381396, epsilon = 1e-8);
        assert_approx_eq!(
            f64,
            cost.fixed_operating.value(),
            2013.4176756906982,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_model_from_path_unknown_region() {
        let dir = tempdir().unwrap();
        create_model_dir(dir.path(), "region_id = \"XX\"");
        assert!(Model::from_path(dir.path()).is_err());
    }

    #[test]
    fn test_model_from_path_missing_settings() {
        let dir = tempdir().unwrap();
        assert!(Model::from_path(dir.path()).is_err());
    }
}
