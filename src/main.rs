use anyhow::{Context, Result};
use clap::Parser;

use scene_merge::cli::Cli;
use scene_merge::scene::{merge, write_scene, Fragment, DEFAULT_TEMPLATE};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.composition()?;

    let mut entries = Vec::with_capacity(config.inputs.len());
    for entry in &config.inputs {
        let fragment = Fragment::from_file(&entry.path)?;
        entries.push((fragment, entry.transform()));
    }

    let scene = merge(entries);

    let template = match &config.template {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .context(format!("Failed to read template file: {:?}", path))?,
        ),
        None if config.wrap => Some(DEFAULT_TEMPLATE.to_string()),
        None => None,
    };

    write_scene(&config.output, &scene, template.as_deref())
        .context(format!("Failed to write merged scene: {:?}", config.output))?;

    println!(
        "Merged {} files into {:?} ({} vertices, {} faces)",
        config.inputs.len(),
        config.output,
        scene.vertex_count(),
        scene.face_count()
    );

    Ok(())
}
