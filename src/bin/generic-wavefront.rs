use std::path::PathBuf;

use nalgebra::Complex;
use structopt::StructOpt;
use wavefront_merge::wavefront::generic::{
    GenericWavefront1D, Initialization, Kind, PlaneAmplitude, Units,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "generic-wavefront", about = "Generic 1D wavefront generator")]
struct Opt {
    /// Photon energy [eV]
    #[structopt(short, long, default_value = "1000")]
    energy: f64,
    /// Wavelength [m], overrides the photon energy
    #[structopt(short, long)]
    wavelength: Option<f64>,
    /// Number of points
    #[structopt(short, long, default_value = "1000")]
    number_of_points: usize,
    /// Abscissas range [m]: from,to
    #[structopt(long, number_of_values = 2, allow_hyphen_values = true)]
    range: Option<Vec<f64>>,
    /// Abscissas steps [m]: start,step
    #[structopt(long, number_of_values = 2, allow_hyphen_values = true)]
    steps: Option<Vec<f64>>,
    /// Complex amplitude (real part)
    #[structopt(long, default_value = "1", allow_hyphen_values = true)]
    re: f64,
    /// Complex amplitude (imaginary part)
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    im: f64,
    /// Plane wave amplitude, replaces the complex amplitude
    #[structopt(long)]
    amplitude: Option<f64>,
    /// Plane wave phase [rad], used with the amplitude
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    phase: f64,
    /// Spherical wave radius [m]
    #[structopt(long)]
    radius: Option<f64>,
    /// Wavefront pickle file
    #[structopt(short, long, parse(from_os_str), default_value = "wavefront.pkl")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let initialization = match (opt.range.as_deref(), opt.steps.as_deref()) {
        (_, Some(&[start, step])) => Initialization::Steps { start, step },
        (Some(&[from, to]), None) => Initialization::Range { from, to },
        _ => Initialization::Range {
            from: -1e-3,
            to: 1e-3,
        },
    };
    let units = match opt.wavelength {
        Some(wavelength) => Units::Meters(wavelength),
        None => Units::ElectronVolts(opt.energy),
    };
    let complex_amplitude = Complex::new(opt.re, opt.im);
    let kind = match (opt.radius, opt.amplitude) {
        (Some(radius), _) => Kind::Spherical {
            radius,
            amplitude: complex_amplitude,
        },
        (None, Some(amplitude)) => Kind::Plane(PlaneAmplitude::AmplitudePhase {
            amplitude,
            phase: opt.phase,
        }),
        (None, None) => Kind::Plane(PlaneAmplitude::Complex(complex_amplitude)),
    };

    let wavefront = GenericWavefront1D::new(initialization, opt.number_of_points)
        .units(units)
        .kind(kind)
        .build()?;
    wavefront.summary();
    wavefront.save(&opt.output)?;

    Ok(())
}
