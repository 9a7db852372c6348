/*!
# Wavefront merge

Coherent superposition of sampled complex optical wavefronts.

## Key Components

- [`Wavefront`](wavefront::Wavefront) - complex field on a uniform 1D or 2D grid tagged with a photon energy
- [`CoherentSuperposition`](merge::CoherentSuperposition) - sums up to [`N_SLOT`](merge::N_SLOT) wavefronts with optional per slot weights and phases
- [`GenericWavefront1D`](wavefront::generic::GenericWavefront1D) - plane and spherical 1D wavefront generator
- [`combine_1d_into_2d`](wavefront::combine::combine_1d_into_2d) - outer product of a horizontal and a vertical 1D wavefront

## Usage

```rust,no_run
use wavefront_merge::{merge::{CoherentSuperposition, MergeSettings}, wavefront::Wavefront};

let settings = MergeSettings::from_path("weights.csv")?;
let mut merger = CoherentSuperposition::new(&settings)?;
merger.set_slot(1, Some(Wavefront::load("beam1.pkl")?))?;
merger.set_slot(2, Some(Wavefront::load("beam2.pkl")?))?;
if let Some(merged) = merger.combine()? {
    merged.save("merged.pkl")?;
}
# Ok::<(), wavefront_merge::Error>(())
```
*/

mod error;
pub mod merge;
pub mod wavefront;

pub use error::Error;
pub use merge::{CoherentSuperposition, MergeError, MergeSettings, N_SLOT};
pub use wavefront::{Field, Wavefront};
