use boid_core::{Boid, Simulation};
use boid_shared::velocity_to_color;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

mod controls;
mod shape;

pub use controls::{Controls, Weight};
pub use shape::{plane_outline, PLANE_SHAPE};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// A flock seeded from the platform RNG (`crypto.getRandomValues` in the
/// browser)
pub fn entropy_simulation(boid_count: usize, controls: &Controls) -> Simulation<ChaCha8Rng> {
    Simulation::new(boid_count, controls.config(), ChaCha8Rng::from_entropy())
}

#[wasm_bindgen]
pub struct BoidSimulation {
    simulation: Simulation<ChaCha8Rng>,
    controls: Controls,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl BoidSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        width: u32,
        height: u32,
        boid_count: usize,
    ) -> Result<BoidSimulation, JsValue> {
        console_log!("Initializing boid simulation with {} boids", boid_count);

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut controls = Controls::new(width, height);
        if !controls.resize(width, height) {
            return Err("canvas size must be positive".into());
        }
        let simulation = entropy_simulation(boid_count, &controls);

        Ok(BoidSimulation {
            simulation,
            controls,
            canvas,
            context,
        })
    }

    /// Advances one tick. Setter changes made since the last call take
    /// effect here.
    pub fn update(&mut self) {
        self.simulation.step();
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());

        self.context.set_fill_style_str("#ffffff");
        self.context.fill_rect(0.0, 0.0, width, height);

        let max_speed = self.simulation.flock().config.max_speed;
        for boid in &self.simulation.flock().boids {
            self.draw_boid(boid, max_speed);
        }

        Ok(())
    }

    fn draw_boid(&self, boid: &Boid, max_speed: f64) {
        let outline = plane_outline(boid.position, boid.velocity);
        let color = velocity_to_color(boid.velocity, max_speed);

        self.context.begin_path();
        let (x, y) = outline[0];
        self.context.move_to(x, y);
        for &(x, y) in &outline[1..] {
            self.context.line_to(x, y);
        }
        self.context.close_path();

        self.context.set_fill_style_str(&color.to_css());
        self.context.fill();
    }

    pub fn boid_count(&self) -> usize {
        self.simulation.flock().len()
    }

    /// Respawns the whole flock at the next tick
    pub fn set_boid_count(&mut self, count: usize) {
        if count == 0 {
            console_log!("Ignoring boid count of 0");
            return;
        }
        self.simulation.set_boid_count(count);
    }

    pub fn set_cohesion_weight(&mut self, weight: f64) {
        self.edit_weight(Weight::Cohesion, weight);
    }

    pub fn set_alignment_weight(&mut self, weight: f64) {
        self.edit_weight(Weight::Alignment, weight);
    }

    pub fn set_separation_weight(&mut self, weight: f64) {
        self.edit_weight(Weight::Separation, weight);
    }

    pub fn set_perception_radius(&mut self, radius: f64) {
        if self.controls.set_perception_radius(radius) {
            self.simulation.set_config(self.controls.config());
        } else {
            console_log!("Ignoring perception radius {}", radius);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.controls.resize(width, height) {
            console_log!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.simulation.set_config(self.controls.config());
        console_log!("Resized to {}x{}", width, height);
    }

    fn edit_weight(&mut self, weight: Weight, value: f64) {
        if self.controls.set_weight(weight, value) {
            self.simulation.set_config(self.controls.config());
        } else {
            console_log!("Ignoring {:?} weight {}", weight, value);
        }
    }
}
