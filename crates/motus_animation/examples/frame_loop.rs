//! Frame Loop Demo
//!
//! Drives a handful of scene nodes through a fixed 60 Hz loop:
//! - A saved "intro" timeline replayed on several nodes
//! - A builder-made sequence with a bouncy landing
//! - A looping preset stopped by name
//!
//! Run with: RUST_LOG=motus_animation=debug cargo run -p motus_animation --example frame_loop

use motus_animation::{CurveKind, Operation, Preset, Scheduler, SchedulerConfig, Target, Timeline};
use motus_core::{paths, Color, Node, Vec2};
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let nodes: Vec<Rc<RefCell<Node>>> = (0..3)
        .map(|i| Rc::new(RefCell::new(Node::new(format!("card_{i}")))))
        .collect();
    let handles: Vec<Target> = nodes.iter().map(|n| n.clone() as Target).collect();

    let mut scheduler = Scheduler::with_config(SchedulerConfig::new().with_max_frame_delta(0.1));

    scheduler.save(
        "intro",
        Timeline::parallel()
            .with_operation(Operation::to(
                paths::POSITION,
                Vec2::new(100.0, 0.0),
                1.0,
                CurveKind::Exponential,
            ))
            .with_operation(Operation::to(paths::SCALE, 2.0, 1.0, CurveKind::Bouncy)),
    );
    scheduler.save("spin", Preset::spin(0.75));

    for handle in &handles {
        scheduler.run_saved(handle, "intro");
    }
    scheduler.run_saved(&handles[0], "spin");

    scheduler
        .animate(&handles[2])
        .sequence()
        .rise_to(30.0, 0.25, CurveKind::Linear)
        .rise_to(0.0, 0.5, CurveKind::Elastic)
        .tint_to(Color::from_hex(0x3366ff), 0.4, CurveKind::FadeInOut)
        .run();

    let mut frame = 0u32;
    while scheduler.has_active_animations() {
        scheduler.update(FRAME);
        frame += 1;

        if frame == 120 {
            scheduler.stop_named(&handles[0], "spin");
        }
        if frame % 30 == 0 {
            for node in &nodes {
                let node = node.borrow();
                tracing::info!(
                    "frame {:>3} {}: pos={:?} scale={:?} rot={:?} alt={:.1}",
                    frame,
                    node.name,
                    node.position(),
                    node.scale(),
                    node.rotation(),
                    node.altitude
                );
            }
        }
    }

    tracing::info!("All animations finished after {} frames", frame);
    tracing::info!("{:?}", scheduler.diagnostics());
}
