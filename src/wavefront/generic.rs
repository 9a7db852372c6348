//! Generic 1D wavefront generator

use nalgebra::Complex;

use super::{Axis, Field, Grid, Wavefront, WavefrontError};

#[derive(Debug, thiserror::Error)]
pub enum GenericWavefrontError {
    #[error("{0} must be strictly positive, found {1}")]
    StrictlyPositive(&'static str, f64),
    #[error("range to ({to}) must be greater than range from ({from})")]
    Range { from: f64, to: f64 },
    #[error("number of points must be strictly positive")]
    NumberOfPoints,
    #[error("failed to create the wavefront")]
    Wavefront(#[from] WavefrontError),
}
type Result<T> = std::result::Result<T, GenericWavefrontError>;

/// Photon energy [eV] or wavelength [m]
#[derive(Debug, Clone, Copy)]
pub enum Units {
    ElectronVolts(f64),
    Meters(f64),
}
impl Default for Units {
    fn default() -> Self {
        Units::ElectronVolts(1000.)
    }
}

/// Spatial sampling
#[derive(Debug, Clone, Copy)]
pub enum Initialization {
    Range { from: f64, to: f64 },
    Steps { start: f64, step: f64 },
}

/// Plane wave amplitude
#[derive(Debug, Clone, Copy)]
pub enum PlaneAmplitude {
    Complex(Complex<f64>),
    AmplitudePhase { amplitude: f64, phase: f64 },
}
impl PlaneAmplitude {
    pub fn value(&self) -> Complex<f64> {
        match *self {
            PlaneAmplitude::Complex(value) => value,
            PlaneAmplitude::AmplitudePhase { amplitude, phase } => {
                Complex::from_polar(amplitude, phase)
            }
        }
    }
}

/// Kind of wave
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Plane(PlaneAmplitude),
    /// Spherical wave of radius of curvature `radius` [m] centered on x=0
    Spherical { radius: f64, amplitude: Complex<f64> },
}

/// Generic 1D wavefront builder
///
/// ```
/// use wavefront_merge::wavefront::generic::{GenericWavefront1D, Initialization};
///
/// let wavefront = GenericWavefront1D::new(Initialization::Range { from: -1e-3, to: 1e-3 }, 1000)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GenericWavefront1D {
    units: Units,
    number_of_points: usize,
    initialization: Initialization,
    kind: Kind,
}
impl GenericWavefront1D {
    pub fn new(initialization: Initialization, number_of_points: usize) -> Self {
        Self {
            units: Units::default(),
            number_of_points,
            initialization,
            kind: Kind::Plane(PlaneAmplitude::Complex(Complex::new(1., 0.))),
        }
    }
    pub fn units(self, units: Units) -> Self {
        Self { units, ..self }
    }
    pub fn kind(self, kind: Kind) -> Self {
        Self { kind, ..self }
    }
    fn check_fields(&self) -> Result<()> {
        match self.units {
            Units::ElectronVolts(energy) => check_strictly_positive("Energy", energy)?,
            Units::Meters(wavelength) => check_strictly_positive("Wavelength", wavelength)?,
        }
        if self.number_of_points == 0 {
            return Err(GenericWavefrontError::NumberOfPoints);
        }
        match self.initialization {
            Initialization::Range { from, to } if !(to > from) => {
                return Err(GenericWavefrontError::Range { from, to })
            }
            Initialization::Steps { step, .. } => check_strictly_positive("Step", step)?,
            _ => (),
        }
        if let Kind::Spherical { radius, .. } = self.kind {
            check_strictly_positive("Radius", radius)?;
        }
        Ok(())
    }
    /// Checks the parameters and returns the wavefront
    pub fn build(&self) -> Result<Wavefront> {
        self.check_fields()?;
        let n = self.number_of_points;
        let x = match self.initialization {
            Initialization::Range { from, to } => Axis::from_range(from, to, n),
            Initialization::Steps { start, step } => Axis::from_steps(start, step, n),
        };
        let mut wavefront = match self.units {
            Units::ElectronVolts(energy) => Wavefront::from_grid(Grid::OneD { x }, energy)?,
            Units::Meters(wavelength) => {
                let mut wavefront = Wavefront::from_grid(Grid::OneD { x }, 1.)?;
                wavefront.set_wavelength(wavelength)?;
                wavefront
            }
        };
        match self.kind {
            Kind::Plane(amplitude) => {
                wavefront.amplitude_mut().fill(amplitude.value());
            }
            Kind::Spherical { radius, amplitude } => {
                let k = wavefront.wavenumber();
                let phases: Vec<f64> = x.abscissas().map(|x| k * x * x / (2. * radius)).collect();
                wavefront
                    .amplitude_mut()
                    .iter_mut()
                    .zip(phases)
                    .for_each(|(a, phase)| *a = amplitude * Complex::from_polar(1f64, phase));
            }
        }
        log::info!(
            "generated a {} wavefront at {:.3}eV",
            wavefront.grid().shape(),
            wavefront.photon_energy()
        );
        Ok(wavefront)
    }
}

fn check_strictly_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0f64 {
        Ok(())
    } else {
        Err(GenericWavefrontError::StrictlyPositive(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn plane_wave_from_range() {
        let wf = GenericWavefront1D::new(Initialization::Range { from: -1., to: 1. }, 11)
            .kind(Kind::Plane(PlaneAmplitude::Complex(Complex::new(1., 2.))))
            .build()
            .unwrap();
        assert_eq!(wf.photon_energy(), 1000.);
        assert_eq!(*wf.grid(), Grid::OneD { x: Axis::from_range(-1., 1., 11) });
        assert!(wf
            .complex_amplitude()
            .unwrap()
            .iter()
            .all(|&a| a == Complex::new(1., 2.)));
    }

    #[test]
    fn plane_wave_from_amplitude_and_phase() {
        let wf = GenericWavefront1D::new(Initialization::Steps { start: 0., step: 1e-6 }, 5)
            .units(Units::Meters(1e-10))
            .kind(Kind::Plane(PlaneAmplitude::AmplitudePhase {
                amplitude: 2.,
                phase: PI / 2.,
            }))
            .build()
            .unwrap();
        assert!((wf.wavelength() - 1e-10).abs() < 1e-22);
        wf.complex_amplitude().unwrap().iter().for_each(|a| {
            assert!((a.re).abs() < 1e-12);
            assert!((a.im - 2.).abs() < 1e-12);
        });
    }

    #[test]
    fn spherical_wave() {
        let radius = 10.;
        let wf = GenericWavefront1D::new(Initialization::Range { from: -1e-4, to: 1e-4 }, 101)
            .kind(Kind::Spherical {
                radius,
                amplitude: Complex::new(1., 0.),
            })
            .build()
            .unwrap();
        let k = wf.wavenumber();
        let amplitude = wf.complex_amplitude().unwrap();
        assert!((amplitude[(50, 0)] - Complex::new(1., 0.)).norm() < 1e-12);
        let x = 1e-4;
        let expected = Complex::from_polar(1f64, k * x * x / (2. * radius));
        assert!((amplitude[(100, 0)] - expected).norm() < 1e-6);
        assert!(wf.intensity().iter().all(|&i| (i - 1.).abs() < 1e-12));
    }

    #[test]
    fn field_checks() {
        let range = Initialization::Range { from: 1., to: 0. };
        assert!(matches!(
            GenericWavefront1D::new(range, 10).build(),
            Err(GenericWavefrontError::Range { .. })
        ));
        let steps = Initialization::Steps { start: 0., step: 0. };
        assert!(matches!(
            GenericWavefront1D::new(steps, 10).build(),
            Err(GenericWavefrontError::StrictlyPositive("Step", _))
        ));
        let range = Initialization::Range { from: 0., to: 1. };
        assert!(matches!(
            GenericWavefront1D::new(range, 0).build(),
            Err(GenericWavefrontError::NumberOfPoints)
        ));
        assert!(matches!(
            GenericWavefront1D::new(range, 10)
                .units(Units::ElectronVolts(-5.))
                .build(),
            Err(GenericWavefrontError::StrictlyPositive("Energy", _))
        ));
        assert!(GenericWavefront1D::new(range, 10)
            .kind(Kind::Spherical {
                radius: 0.,
                amplitude: Complex::new(1., 0.)
            })
            .build()
            .is_err());
    }
}
