use std::path::PathBuf;

use structopt::StructOpt;
use wavefront_merge::wavefront::{
    combine::{combine_1d_into_2d, Normalization},
    Wavefront,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "wavefront-1d-to-2d", about = "Wavefronts 1D to 2D")]
struct Opt {
    /// Horizontal 1D wavefront pickle file
    #[structopt(parse(from_os_str))]
    horizontal: PathBuf,
    /// Vertical 1D wavefront pickle file
    #[structopt(parse(from_os_str))]
    vertical: PathBuf,
    /// Normalize to: horizontal, vertical or none
    #[structopt(short, long, default_value = "horizontal")]
    normalize_to: String,
    /// 2D wavefront pickle file
    #[structopt(short, long, parse(from_os_str), default_value = "wavefront2d.pkl")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let normalize_to = match opt.normalize_to.to_lowercase().as_str() {
        "horizontal" | "h" => Normalization::Horizontal,
        "vertical" | "v" => Normalization::Vertical,
        "none" => Normalization::None,
        other => anyhow::bail!(
            r#"normalization {} is not recognized, expected "horizontal", "vertical" or "none""#,
            other
        ),
    };

    let horizontal = Wavefront::load(&opt.horizontal)?;
    let vertical = Wavefront::load(&opt.vertical)?;
    let wavefront = combine_1d_into_2d(&horizontal, &vertical, normalize_to)?;
    wavefront.summary();
    wavefront.save(&opt.output)?;

    Ok(())
}
