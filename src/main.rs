use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use wavefront_merge::{CoherentSuperposition, MergeError, MergeSettings, Wavefront, N_SLOT};

#[derive(Debug, StructOpt)]
#[structopt(name = "wavefront-merge", about = "Coherent superposition of wavefronts")]
struct Opt {
    /// Wavefront pickle files, assigned to slots #1 to #10 in order; "_" leaves a slot empty
    #[structopt(parse(from_os_str))]
    inputs: Vec<PathBuf>,
    /// Apply the slot relative weights and phases
    #[structopt(short, long)]
    use_weights: bool,
    /// CSV file with the slot weights and phases (header: slot,weight,phase)
    #[structopt(short, long, parse(from_os_str))]
    settings: Option<PathBuf>,
    /// Merged wavefront pickle file
    #[structopt(short, long, parse(from_os_str), default_value = "merged.pkl")]
    output: PathBuf,
    /// Print a summary of the merged wavefront
    #[structopt(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    if opt.inputs.len() > N_SLOT {
        anyhow::bail!("at most {} wavefronts can be merged", N_SLOT);
    }

    let settings = match &opt.settings {
        Some(path) => MergeSettings::from_path(path)?,
        None => MergeSettings::default(),
    };
    let mut merger = CoherentSuperposition::<Wavefront>::new(&settings)?;
    if opt.use_weights {
        merger.set_weighting_enabled(true);
    }

    for (i, path) in opt.inputs.iter().enumerate() {
        if path.as_os_str() == "_" {
            continue;
        }
        let wavefront = Wavefront::load(path).with_context(|| format!("failed to load {:?}", path))?;
        match merger.set_slot(i + 1, Some(wavefront)) {
            Err(e @ MergeError::Unreadable { .. }) => log::error!("{} ({:?})", e, path),
            result => result?,
        }
    }

    match merger.combine()? {
        Some(merged) => {
            if opt.summary {
                merged.summary();
            }
            merged.save(&opt.output)?;
        }
        None => println!("No wavefront to merge"),
    }

    Ok(())
}
