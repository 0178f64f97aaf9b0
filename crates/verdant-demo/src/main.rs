#![forbid(unsafe_code)]

//! Terminal demo: the particle field rendered as Braille frames, plus a
//! contact-form submission against an in-memory backend.
//!
//! Run with `cargo run -p verdant-demo`; set `RUST_LOG=debug` to watch the
//! controller's state transitions.

use std::thread;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use verdant::prelude::*;
use verdant::{BrailleSurface, SubmissionError, SubmissionRecord};

/// Backend that accepts everything and remembers what it saw.
#[derive(Default)]
struct InMemoryBackend {
    received: Vec<Vec<(String, String)>>,
}

impl SubmissionBackend for InMemoryBackend {
    fn submit(&mut self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        self.received.push(
            record
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        );
        Ok(())
    }
}

fn run_form_demo() {
    let mut form = FormController::new(FormSchema::contact());
    let mut backend = InMemoryBackend::default();

    // First attempt: missing required fields, rejected locally.
    form.set_field("email", "visitor@example.com");
    form.submit_with(&mut backend);
    info!(status = ?form.status(), "submit with missing fields");

    // Second attempt: complete and valid.
    form.set_field("name", "Visitor");
    form.set_field("email", "visitor@example.com");
    form.set_field("message", "Tell me about the coastal program.");
    form.submit_with(&mut backend);
    info!(
        status = ?form.status(),
        stored = backend.received.len(),
        "submit with valid fields"
    );

    let score = password_strength("Tr0pical!reef");
    info!(score = score.score(), label = score.label(), "password check");
}

fn run_particle_demo() {
    // 80x24 text cells at Braille resolution.
    let mut surface = BrailleSurface::for_cells(80, 24);
    let bounds = surface.size();

    let params = ParticleFieldParams {
        count: 40,
        // Faster than the web defaults so motion is visible at 20 FPS.
        speed_half_range: 1.5,
        link_threshold: 24.0,
        ..ParticleFieldParams::default()
    };
    let mut field = ParticleField::with_seed(params, bounds, 0xC0FFEE);

    let mut dark_mode: Observable<bool> = Observable::new(false);
    dark_mode.subscribe(|on| info!(dark_mode = on, "theme toggled"));
    dark_mode.set(true);

    print!("\x1b[2J");
    for _ in 0..120 {
        field.tick();
        field.render(&mut surface);
        // Home the cursor and repaint in place.
        print!("\x1b[H{}", surface.to_text());
        thread::sleep(Duration::from_millis(50));
    }
    field.dispose();
    info!(state = ?field.state(), "particle field torn down");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run_form_demo();
    run_particle_demo();
}
