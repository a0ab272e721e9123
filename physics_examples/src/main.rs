use continuum::PhysicsWorld;
use log::{error, info};
use std::env;

mod scenes;
mod visual;

use scenes::Scene;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    // Check if first arg is "visual"
    if args.len() > 1 && args[1] == "visual" {
        let name = if args.len() > 2 { &args[2] } else { "box_pile" };
        info!("running visual scene {name}");

        if let Err(e) = visual::run_visual(name) {
            error!("error running visual scene: {e}");
        }
        return;
    }

    let name = if args.len() > 1 { &args[1] } else { "box_pile" };
    let Some(scene) = Scene::from_name(name) else {
        println!("Unknown scene: {}. Available scenes: {}", name, Scene::NAMES);
        return;
    };

    match scene.build() {
        Ok(world) => run_headless(world, 600),
        Err(e) => error!("could not build scene {name}: {e}"),
    }
}

/// Steps the world without a window, printing every moving body now and then.
fn run_headless(mut world: PhysicsWorld, ticks: usize) {
    println!("Simulating {} bodies, {} joints", world.objects().len(), world.joints().len());
    for tick in 0..ticks {
        world.step();
        if tick % 100 == 0 {
            for (handle, body) in world.objects().iter().filter(|(_, b)| !b.do_not_push) {
                println!(
                    "Tick {}: body {} at ({:.2}, {:.2}), velocity ({:.2}, {:.2})",
                    tick,
                    handle.index(),
                    body.position().x,
                    body.position().y,
                    body.velocity.x,
                    body.velocity.y
                );
            }
        }
    }
    println!("Simulation finished.");
}
