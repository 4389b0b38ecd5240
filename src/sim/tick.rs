//! Per-frame simulation tick and the loop that drives it

use std::cell::Cell;
use std::rc::Rc;

use glam::DVec2;

use super::collision::collide_with_population;
use super::scene::Scene;
use crate::color::Color;
use crate::platform::{FrameScheduler, TextDisplay};
use crate::renderer::Surface;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Ball-ball contacts that caused a recolor
    pub contacts: usize,
    /// Balls eaten by the evil circle
    pub eaten: usize,
}

/// Advance the scene by one frame, drawing it as it goes
pub fn tick<S: Surface + ?Sized>(
    scene: &mut Scene,
    surface: &mut S,
    display: Option<&mut (dyn TextDisplay + '_)>,
) -> FrameReport {
    let mut report = FrameReport::default();
    let bounds = scene.bounds;

    // Translucent fill instead of a clear leaves fading trails
    surface.fill_rect(
        DVec2::ZERO,
        bounds.size(),
        Color::fade(scene.config.trail_alpha),
    );

    let Scene { balls, rng, .. } = scene;
    for index in 0..balls.len() {
        if !balls[index].exists {
            continue;
        }
        balls[index].draw(surface);
        balls[index].update(bounds);
        report.contacts += collide_with_population(balls, index, rng);
    }

    scene.evil.move_by_keys();
    scene.evil.check_bounds(bounds);
    scene.evil.draw(surface);

    report.eaten = scene
        .evil
        .collision_detect(&mut scene.balls, &mut scene.counter, display);

    scene.frame += 1;
    if report.eaten > 0 && scene.counter.count() == 0 {
        log::info!("All balls eaten after {} frames", scene.frame);
    }

    report
}

/// Shared flag that ends a run loop at the next frame boundary
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Rc<Cell<bool>>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Tick repeatedly until `stop` is raised, waiting on `scheduler` between
/// frames. Returns the number of frames run.
pub fn run<S: Surface + ?Sized>(
    scene: &mut Scene,
    surface: &mut S,
    mut display: Option<&mut (dyn TextDisplay + '_)>,
    scheduler: &mut dyn FrameScheduler,
    stop: &StopFlag,
) -> u64 {
    let mut frames = 0;
    while !stop.is_stopped() {
        tick(scene, surface, display.as_deref_mut());
        frames += 1;
        scheduler.next_frame(scene);
    }
    log::info!(
        "Run loop stopped after {} frames ({} balls left)",
        frames,
        scene.counter.count()
    );
    frames
}
