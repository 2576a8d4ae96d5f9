//! Ambient particle canvas behind both views.

use std::f64::consts::TAU;

use chrono::Utc;
use dioxus::prelude::*;
use web_sys::CanvasRenderingContext2d;
use wishcard_core::effects::effect_rng;
use wishcard_core::{FramePacer, ParticleField, PARTICLE_CORE, PARTICLE_GLOW};

use crate::browser;
use crate::context::use_settings;

const CANVAS_ID: &str = "particle-canvas";

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);

    for p in field.particles() {
        ctx.set_global_alpha(p.alpha * 0.5);
        ctx.set_fill_style_str(PARTICLE_GLOW);
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.glow_radius(), 0.0, TAU).is_ok() {
            ctx.fill();
        }

        ctx.set_global_alpha(p.core_alpha());
        ctx.set_fill_style_str(PARTICLE_CORE);
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
    ctx.set_global_alpha(1.0);
}

/// Full-screen canvas of rising motes.
///
/// Steps on animation frames, at most once per configured frame interval.
/// The frame loop belongs to this component and stops when it unmounts.
#[component]
pub fn ParticleBackground() -> Element {
    let settings = use_settings();
    let frame_ms = settings.frame().as_secs_f64() * 1_000.0;
    let count = settings.particle_count;

    use_future(move || async move {
        // Let the canvas mount before looking it up
        browser::next_frame().await;
        let Some((canvas, ctx)) = browser::canvas_2d(CANVAS_ID) else {
            tracing::warn!("Particle canvas not found");
            return;
        };

        let mut rng = effect_rng(Utc::now().timestamp_millis().unsigned_abs());
        let (width, height) = browser::viewport_size();
        let mut field = ParticleField::new(count, width, height, &mut rng);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let mut pacer = FramePacer::new(frame_ms);
        loop {
            if !pacer.ready(browser::next_frame().await) {
                continue;
            }

            let viewport = browser::viewport_size();
            if viewport != field.size() {
                field.resize(viewport.0, viewport.1);
                canvas.set_width(viewport.0 as u32);
                canvas.set_height(viewport.1 as u32);
            }

            field.step(&mut rng);
            draw(&ctx, &field);
        }
    });

    rsx! {
        canvas { id: CANVAS_ID, class: "particle-canvas", "aria-hidden": "true" }
    }
}
