//! Coherent superposition of wavefronts
//!
//! Up to [N_SLOT] wavefronts are stored into numbered slots and summed
//! coherently, i.e. the complex amplitudes are added sample by sample.
//! If weighting is enabled, every slot wavefront is first rescaled by the slot
//! weight and shifted by the slot phase.
//!
//! ```
//! use wavefront_merge::{
//!     merge::CoherentSuperposition,
//!     wavefront::generic::{GenericWavefront1D, Initialization},
//! };
//!
//! let wavefront = GenericWavefront1D::new(Initialization::Range { from: -1e-3, to: 1e-3 }, 500)
//!     .build()
//!     .unwrap();
//! let mut merger = CoherentSuperposition::default();
//! merger.set_slot(1, Some(wavefront.clone())).unwrap();
//! merger.set_slot(2, Some(wavefront)).unwrap();
//! merger.set_weighting_enabled(true);
//! merger.set_phase(2, std::f64::consts::PI).unwrap();
//! let merged = merger.combine().unwrap().unwrap();
//! ```

use crate::wavefront::{CMatrix, Field, Shape, Wavefront, WavefrontError};

mod settings;
pub use settings::{MergeSettings, SettingsError};

/// Number of input slots
pub const N_SLOT: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("slot #{0} does not exist, expected 1 to {max}", max = N_SLOT)]
    SlotIndex(usize),
    #[error("data #{slot} not displayable")]
    Unreadable {
        slot: usize,
        #[source]
        source: WavefrontError,
    },
    #[error("slot #{0} weight must be finite and strictly positive, found {1}")]
    Weight(usize, f64),
    #[error("slot #{0} phase must be finite, found {1}")]
    Phase(usize, f64),
    #[error("Energies must match {reference:.6} != {found:.6}")]
    EnergyMismatch { reference: f64, found: f64 },
    #[error("Wavefronts must have the same dimension and size: {reference} != {found}")]
    ShapeMismatch { reference: Shape, found: Shape },
    #[error("failed to merge the wavefronts")]
    Wavefront(#[from] WavefrontError),
}
type Result<T> = std::result::Result<T, MergeError>;

/// Merger input
#[derive(Debug, Clone)]
pub struct Slot<W> {
    pub wavefront: Option<W>,
    /// amplitude rescaling factor
    pub weight: f64,
    /// phase shift [rad]
    pub phase: f64,
}
impl<W> Default for Slot<W> {
    fn default() -> Self {
        Self {
            wavefront: None,
            weight: 1f64,
            phase: 0f64,
        }
    }
}

/// Coherent superposition of up to [N_SLOT] wavefronts
#[derive(Debug, Clone)]
pub struct CoherentSuperposition<W = Wavefront> {
    slots: [Slot<W>; N_SLOT],
    weighting_enabled: bool,
}
impl<W> Default for CoherentSuperposition<W> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            weighting_enabled: false,
        }
    }
}
impl<W: Field> CoherentSuperposition<W> {
    /// Creates a new merger with the weighting flag, weights and phases from `settings`
    pub fn new(settings: &MergeSettings) -> Result<Self> {
        let mut this = Self::default();
        this.apply_settings(settings)?;
        Ok(this)
    }
    fn slot_index(index: usize) -> Result<usize> {
        if (1..=N_SLOT).contains(&index) {
            Ok(index - 1)
        } else {
            Err(MergeError::SlotIndex(index))
        }
    }
    /// Stores or clears (`None`) the wavefront of slot `index` (1 to [N_SLOT])
    ///
    /// The slot is left empty if the wavefront complex amplitude cannot be read.
    pub fn set_slot(&mut self, index: usize, wavefront: Option<W>) -> Result<()> {
        let slot = &mut self.slots[Self::slot_index(index)?];
        slot.wavefront = None;
        let Some(wavefront) = wavefront else {
            return Ok(());
        };
        if let Err(source) = wavefront.complex_amplitude() {
            log::warn!("slot #{index} rejected: {source}");
            return Err(MergeError::Unreadable {
                slot: index,
                source,
            });
        }
        slot.wavefront = Some(wavefront);
        Ok(())
    }
    pub fn slot(&self, index: usize) -> Result<&Slot<W>> {
        Ok(&self.slots[Self::slot_index(index)?])
    }
    /// Iterator over the populated slots in slot order
    pub fn populated(&self) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.wavefront.as_ref().map(|w| (i + 1, w)))
    }
    /// Empties all the slots, weights and phases are kept
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| slot.wavefront = None);
    }
    pub fn set_weighting_enabled(&mut self, enabled: bool) {
        self.weighting_enabled = enabled;
    }
    pub fn is_weighting_enabled(&self) -> bool {
        self.weighting_enabled
    }
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        let i = Self::slot_index(index)?;
        if !(weight.is_finite() && weight > 0f64) {
            return Err(MergeError::Weight(index, weight));
        }
        self.slots[i].weight = weight;
        Ok(())
    }
    pub fn weight(&self, index: usize) -> Result<f64> {
        Ok(self.slot(index)?.weight)
    }
    pub fn set_phase(&mut self, index: usize, phase: f64) -> Result<()> {
        let i = Self::slot_index(index)?;
        if !phase.is_finite() {
            return Err(MergeError::Phase(index, phase));
        }
        self.slots[i].phase = phase;
        Ok(())
    }
    pub fn phase(&self, index: usize) -> Result<f64> {
        Ok(self.slot(index)?.phase)
    }
    /// Sets the weighting flag and all the slot weights and phases
    pub fn apply_settings(&mut self, settings: &MergeSettings) -> Result<()> {
        for (i, (&weight, &phase)) in settings
            .weights
            .iter()
            .zip(settings.phases.iter())
            .enumerate()
        {
            self.set_weight(i + 1, weight)?;
            self.set_phase(i + 1, phase)?;
        }
        self.weighting_enabled = settings.use_weights;
        Ok(())
    }
    /// Sums coherently the wavefronts of the populated slots
    ///
    /// The merged wavefront is a copy of the first populated slot wavefront with
    /// the summed complex amplitude.
    /// Returns `None` if all the slots are empty.
    pub fn combine(&self) -> Result<Option<W>> {
        // (reference wavefront, reference shape, cumulated complex amplitude)
        let mut merged: Option<(W, Shape, CMatrix)> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            let Some(wavefront) = slot.wavefront.as_ref() else {
                continue;
            };
            let mut wavefront = wavefront.clone();
            if self.weighting_enabled {
                wavefront.rescale_amplitude(slot.weight);
                wavefront.add_phase_shift(slot.phase);
            }
            let Some((reference, shape, cumulated)) = merged.as_mut() else {
                let shape = wavefront.shape()?;
                log::debug!("slot #{} is the reference: {}", i + 1, shape);
                let cumulated = wavefront.complex_amplitude()?.clone();
                merged = Some((wavefront, shape, cumulated));
                continue;
            };
            if wavefront.photon_energy() != reference.photon_energy() {
                return Err(MergeError::EnergyMismatch {
                    reference: reference.photon_energy(),
                    found: wavefront.photon_energy(),
                });
            }
            let found = wavefront.shape()?;
            if found != *shape {
                return Err(MergeError::ShapeMismatch {
                    reference: *shape,
                    found,
                });
            }
            *cumulated += wavefront.complex_amplitude()?;
        }
        let Some((mut wavefront, shape, cumulated)) = merged else {
            return Ok(None);
        };
        wavefront.set_complex_amplitude(cumulated)?;
        log::info!(
            "merged {} wavefront(s) into a {} wavefront",
            self.populated().count(),
            shape
        );
        Ok(Some(wavefront))
    }
}
