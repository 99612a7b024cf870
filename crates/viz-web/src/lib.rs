#![cfg(target_arch = "wasm32")]
//! WASM entry point: canvas + WebGPU bootstrap, state wiring, frame loop.

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod render;
pub mod roster;

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster::Roster;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{CinematicDirector, RingField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::install_resize_listener(&canvas);

    // visual seed varies per session; determinism only matters within a frame
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(js_sys::Date::now() as u64)));

    let roster = Rc::new(RefCell::new(Roster::new()));
    let field = Rc::new(RefCell::new(RingField::new()));
    {
        let subjects = roster.borrow().window();
        field.borrow_mut().rebuild(&subjects, &mut *rng.borrow_mut());
    }
    let director = Rc::new(RefCell::new(CinematicDirector::new()));
    let hover_id = Rc::new(RefCell::new(None::<String>));
    let camera_pose = Rc::new(RefCell::new(frame::manual_pose()));

    // Renderer init failure is fatal for the scene; no degraded path.
    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU init failed"))?;

    events::wire_pointer(&canvas, field.clone(), hover_id.clone(), camera_pose.clone());
    events::wire_keyboard(
        field.clone(),
        director.clone(),
        roster.clone(),
        rng.clone(),
        camera_pose.clone(),
    );

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        director,
        roster,
        rng,
        hover_id,
        camera_pose,
        canvas,
        gpu: Some(gpu),
        start_instant: now,
        last_instant: now,
        last_cinematic_pose: frame::manual_pose(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
