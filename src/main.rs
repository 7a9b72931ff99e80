use reflectrace::config::{self, Command, Config};
use reflectrace::example_scenes::{self, StandardView};
use reflectrace::renderer::Renderer;
use reflectrace::*;

use log::*;
use std::time::Instant;

fn run(config: &Config) -> Result<(), Error> {
    let view = StandardView::new();
    let scene = example_scenes::make_scene(config.complexity);
    info!("{:?} scene with {} objects", config.complexity, scene.objects().len());

    let mut render_config = view.render_config();
    if let Some(light) = config.light {
        render_config.light = light;
    }
    if let Some(depth) = config.max_reflection_depth {
        render_config.max_reflection_depth = depth;
    }

    let image_plane = view.image_plane(config.width, config.height);
    let start = Instant::now();
    let image = Renderer::new(&scene, render_config).render(&image_plane);
    info!("rendered in {:.2?}", start.elapsed());

    image.write(&config.output)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match config::parse_args(&args) {
        Ok(Command::Render(config)) => config,
        Ok(Command::Help) => {
            println!("{}", config::usage());
            return;
        }
        Err(e) => {
            eprintln!("Error in arguments. {}", e);
            eprintln!("{}", config::usage());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
