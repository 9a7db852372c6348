use std::{fs::File, path::Path};

use serde::Deserialize;

use super::N_SLOT;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to open the settings file")]
    Io(#[from] std::io::Error),
    #[error("Failed to deserialize the CSV file")]
    Csv(#[from] csv::Error),
    #[error("slot #{0} does not exist, expected 1 to {max}", max = N_SLOT)]
    Slot(usize),
}
type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Deserialize, Debug)]
struct Record {
    slot: usize,
    weight: Option<f64>,
    phase: Option<f64>,
}

/// Merger weighting parameters
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSettings {
    pub use_weights: bool,
    /// slot #1 to #10 weights
    pub weights: [f64; N_SLOT],
    /// slot #1 to #10 phases [rad]
    pub phases: [f64; N_SLOT],
}
impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            use_weights: false,
            weights: [1f64; N_SLOT],
            phases: [0f64; N_SLOT],
        }
    }
}
impl MergeSettings {
    /// Loads the slot weights and phases from a CSV file with the header `slot,weight,phase`
    ///
    /// Weighting is enabled, missing slots or values keep their default.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::info!("Loading {:?}...", path.as_ref());
        Self::from_reader(file)
    }
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut this = Self {
            use_weights: true,
            ..Default::default()
        };
        for result in rdr.deserialize() {
            let record: Record = result?;
            if !(1..=N_SLOT).contains(&record.slot) {
                return Err(SettingsError::Slot(record.slot));
            }
            let i = record.slot - 1;
            if let Some(weight) = record.weight {
                this.weights[i] = weight;
            }
            if let Some(phase) = record.phase {
                this.phases[i] = phase;
            }
        }
        Ok(this)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = MergeSettings::default();
        assert!(!settings.use_weights);
        assert!(settings.weights.iter().all(|&w| w == 1.));
        assert!(settings.phases.iter().all(|&p| p == 0.));
    }

    #[test]
    fn from_csv() {
        let csv = "slot,weight,phase\n2, 0.5, 1.5\n10,2,\n";
        let settings = MergeSettings::from_reader(csv.as_bytes()).unwrap();
        assert!(settings.use_weights);
        assert_eq!(settings.weights[1], 0.5);
        assert_eq!(settings.phases[1], 1.5);
        assert_eq!(settings.weights[9], 2.);
        assert_eq!(settings.phases[9], 0.);
        assert_eq!(settings.weights[0], 1.);
    }

    #[test]
    fn unknown_slot() {
        let csv = "slot,weight,phase\n11,1,0\n";
        assert!(matches!(
            MergeSettings::from_reader(csv.as_bytes()),
            Err(SettingsError::Slot(11))
        ));
    }
}
