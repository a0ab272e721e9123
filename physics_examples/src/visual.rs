use continuum::{Aabb, BodyHandle, PhysicsWorld, RenderTarget, Rgb, Vec2};
use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Rect};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use log::warn;

use crate::scenes::Scene;

/// Window configuration for the visual driver.
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub background: Rgb,
    /// Wall-clock time between simulation ticks.
    pub frame_delay_ms: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Continuum".to_string(),
            background: Rgb(20, 20, 24),
            frame_delay_ms: 10,
        }
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::from_rgb(r, g, b)
}

/// Draws bodies and joints straight onto a ggez canvas.
struct CanvasTarget<'a> {
    ctx: &'a Context,
    canvas: &'a mut Canvas,
}

impl RenderTarget for CanvasTarget<'_> {
    type Error = GameError;

    fn draw_box(&mut self, body: BodyHandle, bounds: Aabb) -> GameResult {
        // Cycle a few shades so neighbouring boxes stay distinguishable.
        let shade = 140 + (body.index() * 37 % 100) as u8;
        let rect = Rect::new(
            bounds.left() as f32,
            bounds.top() as f32,
            bounds.width() as f32,
            bounds.height() as f32,
        );
        let mesh = Mesh::new_rectangle(self.ctx, DrawMode::fill(), rect, Color::from_rgb(shade, shade, 255))?;
        self.canvas.draw(&mesh, DrawParam::new());
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, colour: Rgb, width: f32) -> GameResult {
        let points = [
            GVec2::new(from.x as f32, from.y as f32),
            GVec2::new(to.x as f32, to.y as f32),
        ];
        // Zero-length lines make the tessellator fail.
        if points[0] == points[1] {
            return Ok(());
        }
        let mesh = Mesh::new_line(self.ctx, &points, width, to_color(colour))?;
        self.canvas.draw(&mesh, DrawParam::new());
        Ok(())
    }
}

struct MainState {
    world: PhysicsWorld,
    settings: WindowSettings,
    paused: bool,
}

impl MainState {
    fn new(world: PhysicsWorld, settings: WindowSettings) -> Self {
        MainState {
            world,
            settings,
            paused: false,
        }
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let ticks_per_second = 1000 / self.settings.frame_delay_ms.max(1);
        while ctx.time.check_update_time(ticks_per_second) {
            if !self.paused {
                self.world.step();
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, to_color(self.settings.background));
        {
            let mut target = CanvasTarget {
                ctx,
                canvas: &mut canvas,
            };
            self.world.render(&mut target, Rgb(230, 90, 60))?;
        }
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(KeyCode::Space) => self.paused = !self.paused,
            // Arrow keys scroll the camera.
            Some(KeyCode::Left) => self.world.render_context.offset.x += 20.0,
            Some(KeyCode::Right) => self.world.render_context.offset.x -= 20.0,
            Some(KeyCode::Up) => self.world.render_context.offset.y += 20.0,
            Some(KeyCode::Down) => self.world.render_context.offset.y -= 20.0,
            _ => {}
        }
        Ok(())
    }
}

pub fn run_visual(name: &str) -> GameResult {
    let scene = Scene::from_name(name).unwrap_or_else(|| {
        warn!("unknown scene {name}, falling back to box_pile (available: {})", Scene::NAMES);
        Scene::BoxPile
    });
    let world = scene.build().map_err(|e| GameError::CustomError(e.to_string()))?;
    let settings = WindowSettings::default();

    let cb = ggez::ContextBuilder::new("physics_examples", "continuum")
        .window_setup(ggez::conf::WindowSetup::default().title(&settings.title))
        .window_mode(ggez::conf::WindowMode::default().dimensions(settings.width, settings.height));

    let (ctx, event_loop) = cb.build()?;
    let state = MainState::new(world, settings);
    event::run(ctx, event_loop, state)
}
