use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde_pickle as pickle;

use super::{check_photon_energy, Field, Wavefront, WavefrontError};

type Result<T> = std::result::Result<T, WavefrontError>;

impl Wavefront {
    /// Loads a wavefront from a pickle file, bzip2 compressed if the extension is `bz2`
    ///
    /// The photon energy and the complex amplitude are checked as in [Wavefront::new].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading {:?}...", path);
        let file = File::open(path)?;
        let buf = BufReader::new(file);
        let this: Self = match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "bzip2")]
            Some("bz2") => {
                let bz2 = bzip2::bufread::BzDecoder::new(buf);
                pickle::from_reader(bz2, Default::default())?
            }
            #[cfg(not(feature = "bzip2"))]
            Some("bz2") => return Err(WavefrontError::Decompression),
            _ => pickle::from_reader(buf, Default::default())?,
        };
        check_photon_energy(this.photon_energy)?;
        this.complex_amplitude()?;
        Ok(this)
    }
    /// Saves the wavefront to a pickle file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(File::create(path)?);
        pickle::to_writer(&mut file, self, Default::default())?;
        log::info!("Wavefront saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavefront::{Axis, CMatrix, Field, Grid};
    use nalgebra::Complex;

    #[test]
    fn save_and_load() {
        let grid = Grid::TwoD {
            x: Axis::from_range(-1e-3, 1e-3, 3),
            y: Axis::from_steps(0., 1e-4, 2),
        };
        let amplitude = CMatrix::from_fn(3, 2, |i, j| Complex::new(i as f64, j as f64 - 0.5));
        let wf = Wavefront::new(grid, 1234.5, amplitude).unwrap();
        let path = std::env::temp_dir().join("wavefront-merge_save_and_load.pkl");
        wf.save(&path).unwrap();
        let loaded = Wavefront::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, wf);
        assert!(loaded.complex_amplitude().is_ok());
    }

    #[derive(serde::Serialize)]
    struct Raw {
        grid: Grid,
        photon_energy: f64,
        amplitude: CMatrix,
    }
    fn save_raw(raw: &Raw, name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = BufWriter::new(File::create(&path).unwrap());
        pickle::to_writer(&mut file, raw, Default::default()).unwrap();
        path
    }

    #[test]
    fn load_invalid_photon_energy() {
        let grid = Grid::OneD {
            x: Axis::from_range(0., 1., 4),
        };
        for (k, photon_energy) in [f64::NAN, 0., -1000.].into_iter().enumerate() {
            let raw = Raw {
                grid,
                photon_energy,
                amplitude: CMatrix::zeros(4, 1),
            };
            let path = save_raw(&raw, &format!("wavefront-merge_invalid_energy_{k}.pkl"));
            let loaded = Wavefront::load(&path);
            std::fs::remove_file(&path).ok();
            assert!(matches!(loaded, Err(WavefrontError::PhotonEnergy(_))));
        }
    }

    #[test]
    fn load_inconsistent_amplitude() {
        let raw = Raw {
            grid: Grid::OneD {
                x: Axis::from_range(0., 1., 4),
            },
            photon_energy: 1000.,
            amplitude: CMatrix::zeros(3, 1),
        };
        let path = save_raw(&raw, "wavefront-merge_inconsistent_amplitude.pkl");
        let loaded = Wavefront::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(loaded, Err(WavefrontError::Amplitude { .. })));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Wavefront::load("this/file/does/not/exist.pkl"),
            Err(WavefrontError::Io(_))
        ));
    }
}
