use std::path::PathBuf;

use structopt::StructOpt;

use lumen::{bitmap::Bitmap, loader, variant::Variant};

/// Renders a scene description file and writes the result to output.png.
#[derive(StructOpt)]
#[structopt(name = "lumen")]
struct Opt {
    /// Path to the scene file
    #[structopt(parse(from_os_str))]
    scene: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let variant = Variant::select();
    println!("Using variant: {}", variant);

    let (scene, renderer) = loader::load(&opt.scene)?;

    let begin_time = std::time::SystemTime::now();
    let film = renderer.render(&scene, variant);
    let duration = std::time::SystemTime::now().duration_since(begin_time)?;
    log::info!("render finished, time used: {:?}", duration);

    let bitmap = Bitmap::from_film(&film);
    println!("{}", bitmap);

    bitmap.write("output.png")?;

    Ok(())
}
