//! Sampled complex wavefronts on uniform 1D or 2D grids

use std::{f64::consts::PI, fmt};

use nalgebra::{Complex, DMatrix};
use serde::{Deserialize, Serialize};

pub mod combine;
pub mod generic;
mod io;

/// Complex amplitude samples, x along rows
pub type CMatrix = DMatrix<Complex<f64>>;

/// h·c/e [eV.m], photon energy to wavelength conversion factor
pub const HC_EV_M: f64 = 6.62607015e-34 * 299792458. / 1.602176634e-19;

#[derive(Debug, thiserror::Error)]
pub enum WavefrontError {
    #[error("photon energy must be finite and strictly positive, found {0}")]
    PhotonEnergy(f64),
    #[error("wavelength must be finite and strictly positive, found {0}")]
    Wavelength(f64),
    #[error("wavefront has no samples")]
    Empty,
    #[error("complex amplitude is {found:?}, expected {expected} from the grid")]
    Amplitude {
        expected: Shape,
        found: (usize, usize),
    },
    #[error("failed to open the wavefront file")]
    Io(#[from] std::io::Error),
    #[error("failed to (de)serialize the wavefront pickle")]
    Pickle(#[from] serde_pickle::Error),
    #[error("missing decompression protocol")]
    Decompression,
}
type Result<T> = std::result::Result<T, WavefrontError>;

/// Array shape of a wavefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    OneD(usize),
    TwoD(usize, usize),
}
impl Shape {
    /// Matrix dimensions of the amplitude samples
    pub fn dim(&self) -> (usize, usize) {
        match *self {
            Shape::OneD(n) => (n, 1),
            Shape::TwoD(nx, ny) => (nx, ny),
        }
    }
    pub fn len(&self) -> usize {
        let (n, m) = self.dim();
        n * m
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::OneD(n) => write!(f, "({},)", n),
            Shape::TwoD(nx, ny) => write!(f, "({}, {})", nx, ny),
        }
    }
}

/// Uniformly sampled coordinate axis [m]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub start: f64,
    pub step: f64,
    pub n: usize,
}
impl Axis {
    /// Axis of `n` points spanning `[min,max]`
    pub fn from_range(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            (max - min) / (n - 1) as f64
        } else {
            0f64
        };
        Self {
            start: min,
            step,
            n,
        }
    }
    /// Axis of `n` points starting at `start` and spaced by `step`
    pub fn from_steps(start: f64, step: f64, n: usize) -> Self {
        Self { start, step, n }
    }
    /// Last coordinate
    pub fn end(&self) -> f64 {
        self.start + self.step * self.n.saturating_sub(1) as f64
    }
    pub fn abscissas(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(move |i| self.start + self.step * i as f64)
    }
}

/// Wavefront sampling geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Grid {
    OneD { x: Axis },
    TwoD { x: Axis, y: Axis },
}
impl Grid {
    pub fn shape(&self) -> Shape {
        match self {
            Grid::OneD { x } => Shape::OneD(x.n),
            Grid::TwoD { x, y } => Shape::TwoD(x.n, y.n),
        }
    }
    /// Area (or length) of a sample cell
    pub fn cell_size(&self) -> f64 {
        match self {
            Grid::OneD { x } => x.step.abs(),
            Grid::TwoD { x, y } => (x.step * y.step).abs(),
        }
    }
}

/// Wavefront container contract
///
/// Duplication is `Clone`: a clone must be independent of the original.
pub trait Field: Clone {
    /// Complex amplitude samples, an error if they are inconsistent with the field geometry
    fn complex_amplitude(&self) -> Result<&CMatrix>;
    fn set_complex_amplitude(&mut self, amplitude: CMatrix) -> Result<()>;
    /// Photon energy [eV]
    fn photon_energy(&self) -> f64;
    fn shape(&self) -> Result<Shape>;
    /// Multiplies every sample by `factor`
    fn rescale_amplitude(&mut self, factor: f64);
    /// Multiplies every sample by `exp(i.phase)`
    fn add_phase_shift(&mut self, phase: f64);
}

/// Complex wavefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wavefront {
    grid: Grid,
    photon_energy: f64,
    amplitude: CMatrix,
}
impl Wavefront {
    /// Creates a new wavefront from its grid, photon energy [eV] and samples
    pub fn new(grid: Grid, photon_energy: f64, amplitude: CMatrix) -> Result<Self> {
        check_photon_energy(photon_energy)?;
        let this = Self {
            grid,
            photon_energy,
            amplitude,
        };
        this.complex_amplitude()?;
        Ok(this)
    }
    /// Creates a zero-valued wavefront
    pub fn from_grid(grid: Grid, photon_energy: f64) -> Result<Self> {
        let (n, m) = grid.shape().dim();
        Self::new(grid, photon_energy, CMatrix::zeros(n, m))
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn dimension(&self) -> usize {
        match self.grid {
            Grid::OneD { .. } => 1,
            Grid::TwoD { .. } => 2,
        }
    }
    pub fn set_photon_energy(&mut self, photon_energy: f64) -> Result<()> {
        check_photon_energy(photon_energy)?;
        self.photon_energy = photon_energy;
        Ok(())
    }
    /// Wavelength [m]
    pub fn wavelength(&self) -> f64 {
        HC_EV_M / self.photon_energy
    }
    /// Sets the photon energy from the wavelength [m]
    pub fn set_wavelength(&mut self, wavelength: f64) -> Result<()> {
        if !(wavelength.is_finite() && wavelength > 0f64) {
            return Err(WavefrontError::Wavelength(wavelength));
        }
        self.photon_energy = HC_EV_M / wavelength;
        Ok(())
    }
    /// Wavenumber 2π/λ [m^-1]
    pub fn wavenumber(&self) -> f64 {
        2. * PI / self.wavelength()
    }
    /// Mutable access to the samples; the matrix dimensions must not change
    pub(crate) fn amplitude_mut(&mut self) -> &mut CMatrix {
        &mut self.amplitude
    }
    /// |amplitude|²
    pub fn intensity(&self) -> DMatrix<f64> {
        self.amplitude.map(|a| a.norm_sqr())
    }
    /// Argument of the complex amplitude [rad]
    pub fn phase(&self) -> DMatrix<f64> {
        self.amplitude.map(|a| a.arg())
    }
    /// Intensity summed over the grid and multiplied by the cell size
    pub fn integrated_intensity(&self) -> f64 {
        self.amplitude.iter().map(|a| a.norm_sqr()).sum::<f64>() * self.grid.cell_size()
    }
    /// Prints a summary of the wavefront
    pub fn summary(&self) {
        let intensity = self.intensity();
        let peak = intensity.iter().cloned().fold(0f64, f64::max);
        println!("WAVEFRONT:");
        println!(" - dimension: {}D", self.dimension());
        println!(" - shape: {}", self.grid.shape());
        println!(" - photon energy: {:.3}eV", self.photon_energy);
        println!(" - wavelength: {:.6e}m", self.wavelength());
        match &self.grid {
            Grid::OneD { x } => {
                println!(" - x range: [{:.6e},{:.6e}]m", x.start, x.end());
            }
            Grid::TwoD { x, y } => {
                println!(" - x range: [{:.6e},{:.6e}]m", x.start, x.end());
                println!(" - y range: [{:.6e},{:.6e}]m", y.start, y.end());
            }
        }
        println!(" - peak intensity: {:.6e}", peak);
        println!(" - integrated intensity: {:.6e}", self.integrated_intensity());
    }
}
impl Field for Wavefront {
    fn complex_amplitude(&self) -> Result<&CMatrix> {
        let expected = self.grid.shape();
        if expected.is_empty() {
            return Err(WavefrontError::Empty);
        }
        if self.amplitude.shape() != expected.dim() {
            return Err(WavefrontError::Amplitude {
                expected,
                found: self.amplitude.shape(),
            });
        }
        Ok(&self.amplitude)
    }
    fn set_complex_amplitude(&mut self, amplitude: CMatrix) -> Result<()> {
        let expected = self.grid.shape();
        if amplitude.shape() != expected.dim() {
            return Err(WavefrontError::Amplitude {
                expected,
                found: amplitude.shape(),
            });
        }
        self.amplitude = amplitude;
        Ok(())
    }
    fn photon_energy(&self) -> f64 {
        self.photon_energy
    }
    fn shape(&self) -> Result<Shape> {
        self.complex_amplitude()?;
        Ok(self.grid.shape())
    }
    fn rescale_amplitude(&mut self, factor: f64) {
        self.amplitude.iter_mut().for_each(|a| *a *= factor);
    }
    fn add_phase_shift(&mut self, phase: f64) {
        let shift = Complex::from_polar(1f64, phase);
        self.amplitude.iter_mut().for_each(|a| *a *= shift);
    }
}

fn check_photon_energy(photon_energy: f64) -> Result<()> {
    if photon_energy.is_finite() && photon_energy > 0f64 {
        Ok(())
    } else {
        Err(WavefrontError::PhotonEnergy(photon_energy))
    }
}
