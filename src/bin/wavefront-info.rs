use std::path::PathBuf;

use structopt::StructOpt;
use wavefront_merge::Wavefront;

#[derive(Debug, StructOpt)]
#[structopt(name = "wavefront-info", about = "Wavefront pickle file summary")]
struct Opt {
    /// Wavefront pickle files
    #[structopt(parse(from_os_str))]
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    for path in opt.paths {
        println!("{:?}", path);
        Wavefront::load(&path)?.summary();
    }

    Ok(())
}
