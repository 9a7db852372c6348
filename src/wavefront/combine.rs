//! Combination of a horizontal and a vertical 1D wavefront into a 2D wavefront

use super::{CMatrix, Field, Grid, Wavefront, WavefrontError};

#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error("energies must match {0} != {1}")]
    Energy(f64, f64),
    #[error("expected a 1D wavefront for the {0} axis")]
    Dimension(&'static str),
    #[error("cannot normalize a 2D wavefront with a zero cell size (single point or zero step axis)")]
    CellSize,
    #[error("2D wavefront has no intensity to normalize")]
    Normalization,
    #[error("failed to combine the wavefronts")]
    Wavefront(#[from] WavefrontError),
}

/// Integrated intensity the 2D wavefront is scaled to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Normalization {
    #[default]
    Horizontal,
    Vertical,
    None,
}

/// Outer product of the horizontal and vertical wavefronts
///
/// Normalizing requires both axes to have a non-zero step, a single point axis
/// has no cell size to integrate the intensity over.
pub fn combine_1d_into_2d(
    horizontal: &Wavefront,
    vertical: &Wavefront,
    normalize_to: Normalization,
) -> Result<Wavefront, CombineError> {
    if horizontal.photon_energy() != vertical.photon_energy() {
        return Err(CombineError::Energy(
            horizontal.photon_energy(),
            vertical.photon_energy(),
        ));
    }
    let Grid::OneD { x } = *horizontal.grid() else {
        return Err(CombineError::Dimension("horizontal"));
    };
    let Grid::OneD { x: y } = *vertical.grid() else {
        return Err(CombineError::Dimension("vertical"));
    };
    let h = horizontal.complex_amplitude()?;
    let v = vertical.complex_amplitude()?;
    let amplitude = CMatrix::from_fn(x.n, y.n, |i, j| h[(i, 0)] * v[(j, 0)]);
    let mut wavefront = Wavefront::new(Grid::TwoD { x, y }, horizontal.photon_energy(), amplitude)?;

    let norm = match normalize_to {
        Normalization::Horizontal => Some(horizontal.integrated_intensity()),
        Normalization::Vertical => Some(vertical.integrated_intensity()),
        Normalization::None => None,
    };
    if let Some(norm) = norm {
        if wavefront.grid().cell_size() == 0f64 {
            return Err(CombineError::CellSize);
        }
        let integrated_intensity = wavefront.integrated_intensity();
        if integrated_intensity <= 0f64 {
            return Err(CombineError::Normalization);
        }
        wavefront.rescale_amplitude((norm / integrated_intensity).sqrt());
    }
    log::info!("combined 1D wavefronts into a {} wavefront", wavefront.grid().shape());
    Ok(wavefront)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavefront::Axis;
    use nalgebra::Complex;

    fn line(n: usize, step: f64, energy: f64, value: f64) -> Wavefront {
        let grid = Grid::OneD {
            x: Axis::from_steps(0., step, n),
        };
        Wavefront::new(grid, energy, CMatrix::from_element(n, 1, Complex::new(value, 0.))).unwrap()
    }

    #[test]
    fn outer_product() {
        let h = Wavefront::new(
            Grid::OneD {
                x: Axis::from_steps(0., 1., 2),
            },
            1000.,
            CMatrix::from_column_slice(2, 1, &[Complex::new(1., 0.), Complex::new(0., 1.)]),
        )
        .unwrap();
        let v = Wavefront::new(
            Grid::OneD {
                x: Axis::from_steps(0., 1., 3),
            },
            1000.,
            CMatrix::from_column_slice(
                3,
                1,
                &[Complex::new(2., 0.), Complex::new(3., 0.), Complex::new(0., 4.)],
            ),
        )
        .unwrap();
        let wf = combine_1d_into_2d(&h, &v, Normalization::None).unwrap();
        assert_eq!(wf.shape().unwrap(), crate::wavefront::Shape::TwoD(2, 3));
        let a = wf.complex_amplitude().unwrap();
        assert_eq!(a[(0, 1)], Complex::new(3., 0.));
        assert_eq!(a[(1, 2)], Complex::new(-4., 0.));
    }

    #[test]
    fn normalized_to_horizontal() {
        let h = line(4, 0.5, 1000., 2.);
        let v = line(3, 0.1, 1000., 3.);
        let wf = combine_1d_into_2d(&h, &v, Normalization::Horizontal).unwrap();
        assert!((wf.integrated_intensity() - h.integrated_intensity()).abs() < 1e-12);
        let wf = combine_1d_into_2d(&h, &v, Normalization::Vertical).unwrap();
        assert!((wf.integrated_intensity() - v.integrated_intensity()).abs() < 1e-12);
    }

    #[test]
    fn energy_mismatch() {
        let h = line(4, 0.5, 1000., 2.);
        let v = line(3, 0.1, 1200., 3.);
        assert!(matches!(
            combine_1d_into_2d(&h, &v, Normalization::None),
            Err(CombineError::Energy(_, _))
        ));
    }

    #[test]
    fn single_point_axis() {
        let h = line(4, 0.5, 1000., 2.);
        let v = Wavefront::new(
            Grid::OneD {
                x: Axis::from_range(0., 0., 1),
            },
            1000.,
            CMatrix::from_element(1, 1, Complex::new(3., 0.)),
        )
        .unwrap();
        assert!(matches!(
            combine_1d_into_2d(&h, &v, Normalization::Horizontal),
            Err(CombineError::CellSize)
        ));
        let wf = combine_1d_into_2d(&h, &v, Normalization::None).unwrap();
        assert!(wf.intensity().iter().all(|&i| i == 36.));
    }

    #[test]
    fn zero_intensity() {
        let h = line(4, 0.5, 1000., 0.);
        let v = line(3, 0.1, 1000., 3.);
        assert!(matches!(
            combine_1d_into_2d(&h, &v, Normalization::Vertical),
            Err(CombineError::Normalization)
        ));
    }

    #[test]
    fn not_1d() {
        let h = line(4, 0.5, 1000., 2.);
        let v = line(3, 0.1, 1000., 3.);
        let wf = combine_1d_into_2d(&h, &v, Normalization::None).unwrap();
        assert!(matches!(
            combine_1d_into_2d(&wf, &v, Normalization::None),
            Err(CombineError::Dimension("horizontal"))
        ));
    }
}
