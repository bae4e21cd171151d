use fractal_viewer::input::cli::{Opt, run};
use structopt::StructOpt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let opt = Opt::from_args();
    for path in run(&opt)? {
        println!("{}", path.display());
    }

    Ok(())
}
