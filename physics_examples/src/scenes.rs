//! Scene builders shared by the headless and windowed drivers.
//!
//! Coordinates are in pixels with y growing downward, sized for an
//! 800x600 window.

use continuum::{AttractionJoint, Body, Material, PhysicsWorld, RepulsionJoint, Result, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    BoxPile,
    Rope,
    Springs,
}

impl Scene {
    pub const NAMES: &'static str = "box_pile, rope, springs";

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "box_pile" => Some(Scene::BoxPile),
            "rope" => Some(Scene::Rope),
            "springs" => Some(Scene::Springs),
            _ => None,
        }
    }

    pub fn build(self) -> Result<PhysicsWorld> {
        match self {
            Scene::BoxPile => create_box_pile(),
            Scene::Rope => create_rope(6, 40.0),
            Scene::Springs => create_springs(),
        }
    }
}

/// Floor and two side walls around the visible area.
fn add_walls(world: &mut PhysicsWorld, width: f64, height: f64) -> Result<()> {
    let thickness = 40.0;
    let floor = Body::new(Vec2::new(0.0, height - thickness), Vec2::new(width, thickness), 1.0, Material::BASIC)?;
    let left = Body::new(Vec2::new(-thickness, 0.0), Vec2::new(thickness, height), 1.0, Material::BASIC)?;
    let right = Body::new(Vec2::new(width, 0.0), Vec2::new(thickness, height), 1.0, Material::BASIC)?;
    for wall in [floor, left, right] {
        world.add_body(wall.immovable());
    }
    Ok(())
}

fn create_box_pile() -> Result<PhysicsWorld> {
    let mut world = PhysicsWorld::new();
    add_walls(&mut world, 800.0, 600.0)?;

    let materials = [Material::BASIC, Material::REBOUNCE, Material::SUPERSLIP];
    for i in 0..12 {
        let size = 20.0 + (i % 3) as f64 * 10.0;
        let x = 120.0 + (i % 6) as f64 * 90.0;
        let y = 60.0 + (i / 6) as f64 * 120.0;
        let body = Body::new(Vec2::new(x, y), Vec2::new(size, size), 1.0 + (i % 4) as f64, materials[i % 3])?
            .with_velocity(Vec2::new(((i % 5) as f64 - 2.0) * 0.5, 0.0));
        world.add_body(body);
    }

    Ok(world)
}

fn create_rope(links: usize, link_length: f64) -> Result<PhysicsWorld> {
    let mut world = PhysicsWorld::new();
    add_walls(&mut world, 800.0, 600.0)?;

    // Heavy enough that the rope barely moves it.
    let anchor = Body::new(Vec2::new(390.0, 40.0), Vec2::new(20.0, 20.0), 1e9, Material::BASIC)?.immovable();
    let mut previous = world.add_body(anchor);
    // Hang each link from its top edge.
    let top_edge = Vec2::new(0.0, -10.0);

    for i in 0..links {
        // Start the rope horizontal so it swings down.
        let position = Vec2::new(390.0 + (i + 1) as f64 * link_length, 40.0);
        let link = world.spawn(position, Vec2::new(20.0, 20.0), 1.0, Material::BASIC)?;
        let joint = AttractionJoint::new(previous, link, link_length, 8.0)?.with_offsets(Vec2::ZERO, top_edge);
        world.add_joint(joint)?;
        previous = link;
    }

    Ok(world)
}

fn create_springs() -> Result<PhysicsWorld> {
    let mut world = PhysicsWorld::new();
    add_walls(&mut world, 800.0, 600.0)?;

    for (i, hardness) in [1.0, 3.0, 6.0].into_iter().enumerate() {
        let x = 150.0 + i as f64 * 220.0;
        let left = world.spawn(Vec2::new(x, 400.0), Vec2::new(30.0, 30.0), 2.0, Material::BASIC)?;
        let right = world.spawn(Vec2::new(x + 40.0, 400.0), Vec2::new(30.0, 30.0), 2.0, Material::BASIC)?;
        world.add_joint(RepulsionJoint::new(left, right, 120.0, hardness)?)?;

        // A hanging pair that bobs under gravity.
        let top = Body::new(Vec2::new(x + 20.0, 60.0), Vec2::new(20.0, 20.0), 1e9, Material::BASIC)?.immovable();
        let top = world.add_body(top);
        let weight = world.spawn(Vec2::new(x + 20.0, 120.0), Vec2::new(20.0, 20.0), 1.0, Material::BASIC)?;
        world.add_joint(AttractionJoint::new(top, weight, 80.0, hardness)?)?;
    }

    Ok(world)
}
