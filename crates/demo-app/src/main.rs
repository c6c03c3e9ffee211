//! Headless demo of the Glint effects runtime.
//!
//! Runs the full page load sequence without a window: the loader overlay
//! fades out, the hero entrance cascades in off the loader's finished
//! event, scroll triggers reveal each section as a simulated viewport
//! scrolls down the page, and the particle backdrop advances and repaints
//! every frame into a recording painter. Frames are driven by a fixed
//! 60 fps delta, so a run is fully deterministic apart from particle
//! seeding.

mod populate;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use glint_config::ContentConfig;
use glint_motion::{TweenEngine, TweenEvent, TweenSpec};
use glint_stage::{
    DisplayListPainter, NodeId, ObserveSpec, ParticleField, Rect, ScrollTrigger, Stage,
};

use populate::{populate_stage, PAGE_WIDTH};

const VIEWPORT_HEIGHT: f64 = 600.0;
const FRAME_MS: f32 = 1000.0 / 60.0;
const TOTAL_FRAMES: usize = 900;
/// Frame at which the simulated window resize happens.
const RESIZE_FRAME: usize = 450;

/// Reveal kinds the scroll triggers can request.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reveal {
    FadeUp,
    SlideRight,
    ScaleIn,
    Counter,
    SkillBar,
}

/// The entrance tween for a reveal kind.
///
/// Skill bars additionally slide proportionally to their configured
/// proficiency, read back from the node's `data-percent` attribute.
fn reveal_spec(kind: Reveal, stage: &Stage, node: NodeId) -> TweenSpec {
    match kind {
        Reveal::FadeUp => TweenSpec::new()
            .opacity(1.0)
            .y(-24.0)
            .duration_s(0.8)
            .ease_name("easeOutQuad"),
        Reveal::SlideRight => TweenSpec::new()
            .opacity(1.0)
            .x(32.0)
            .duration_s(0.8)
            .ease_name("easeOutQuad"),
        Reveal::ScaleIn => TweenSpec::new()
            .opacity(1.0)
            .scale(1.02)
            .duration_s(0.6)
            .ease_name("easeOutBack"),
        Reveal::Counter => TweenSpec::new()
            .opacity(1.0)
            .duration_s(1.2)
            .ease_name("easeOutExpo"),
        Reveal::SkillBar => {
            let percent = stage
                .get(node)
                .and_then(|n| n.attributes.get("data-percent").cloned())
                .and_then(|p| p.parse::<f64>().ok())
                .unwrap_or(0.0);
            TweenSpec::new()
                .opacity(1.0)
                .x(percent * 4.0)
                .duration_s(1.0)
                .ease_name("easeOutExpo")
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = ContentConfig::load("glint.toml")?;
    log::info!(
        "loaded content config: {} skills, {} logos",
        config.skills.len(),
        config.logos.len()
    );

    let mut stage = Stage::new();
    let page_height = populate_stage(&mut stage, &config);
    log::info!("stage populated, {} nodes, page height {page_height}", stage.len());

    let mut engine = TweenEngine::new();
    let mut trigger = ScrollTrigger::new();
    let mut field = ParticleField::new(PAGE_WIDTH, VIEWPORT_HEIGHT);
    let mut painter = DisplayListPainter::new();

    // Scroll triggers push reveal requests into a queue the frame loop
    // drains; callbacks never re-enter the engine directly.
    let reveals: Rc<RefCell<Vec<(NodeId, Reveal)>>> = Rc::new(RefCell::new(Vec::new()));
    let registrations = [
        ("[data-anim=\"fade-up\"]", Reveal::FadeUp),
        ("[data-anim=\"slide-right\"]", Reveal::SlideRight),
        ("[data-anim=\"scale-in\"]", Reveal::ScaleIn),
        (".counter", Reveal::Counter),
        (".skill-bar-item", Reveal::SkillBar),
    ];
    for (selector, kind) in registrations {
        let queue = reveals.clone();
        trigger.observe(
            &stage,
            selector,
            ObserveSpec::new()
                .once()
                .on_enter(move |node| queue.borrow_mut().push((node, kind))),
        );
    }
    log::info!("observing {} reveal targets", trigger.watcher_count());

    // Load sequence: fade the loader out, then cascade the hero in off the
    // loader's finished event.
    let loader_handle = engine
        .animate(
            &stage,
            "#loader",
            TweenSpec::new()
                .opacity(0.0)
                .duration_s(0.6)
                .ease_name("easeOutExpo"),
        )
        .first()
        .copied();

    let mut hero_started = false;
    let mut revealed = 0usize;
    let mut scroll_y = 0.0;
    let scroll_step = (page_height - VIEWPORT_HEIGHT).max(0.0) / 600.0;

    for frame in 0..TOTAL_FRAMES {
        engine.update(&mut stage, FRAME_MS);

        for event in engine.drain_events() {
            if let TweenEvent::Finished { id, .. } = event {
                if Some(id) == loader_handle && !hero_started {
                    hero_started = true;
                    log::info!("loader finished at frame {frame}, starting hero entrance");
                    engine.animate(
                        &stage,
                        ".hero-item",
                        TweenSpec::new()
                            .opacity(1.0)
                            .y(-24.0)
                            .duration_s(0.8)
                            .stagger_s(0.12)
                            .ease_name("easeOutBack"),
                    );
                }
            }
        }

        // Start scrolling once the hero has had its moment.
        if hero_started && frame > 120 {
            scroll_y += scroll_step;
        }
        let viewport = Rect::new(0.0, scroll_y, PAGE_WIDTH, VIEWPORT_HEIGHT);
        trigger.check(&stage, viewport);

        let pending: Vec<(NodeId, Reveal)> = reveals.borrow_mut().drain(..).collect();
        for (node, kind) in pending {
            log::debug!("frame {frame}: revealing {node:?} as {kind:?}");
            let spec = reveal_spec(kind, &stage, node);
            engine.animate(&stage, node, spec);
            revealed += 1;
        }

        field.update();
        field.paint(&mut painter);
        let commands = painter.take();
        if frame == 0 {
            log::debug!("first particle frame recorded {} commands", commands.len());
        }

        if frame == RESIZE_FRAME {
            field.resize(1024.0, 768.0);
            log::info!("viewport resized at frame {frame}, particle pool respawned");
        }
    }

    log::info!(
        "run complete: {revealed} reveals fired, {} tweens still active, {} watchers remaining",
        engine.active_count(),
        trigger.watcher_count()
    );
    Ok(())
}
