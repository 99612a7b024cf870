//! Pointer and keyboard wiring.
//!
//! Pointer moves run the core's pick query against the pose the frame was
//! rendered with; `c` toggles the cinematic mode; arrow keys page the
//! subject window manually.

use crate::dom;
use crate::roster::Roster;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{pick_ring, screen_to_world_ray, CameraPose, CinematicDirector, RingField};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    field: Rc<RefCell<RingField>>,
    hover_id: Rc<RefCell<Option<String>>>,
    camera_pose: Rc<RefCell<CameraPose>>,
) {
    {
        let canvas_move = canvas.clone();
        let field_m = field.clone();
        let hover_m = hover_id.clone();
        let pose_m = camera_pose.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = pointer_canvas_px(&ev, &canvas_move);
            let pose = *pose_m.borrow();
            let (ro, rd) = screen_to_world_ray(
                px.x,
                px.y,
                canvas_move.width() as f32,
                canvas_move.height() as f32,
                pose.eye,
                pose.look_at,
            );
            let field = field_m.borrow();
            let hit = pick_ring(ro, rd, &field).map(|s| s.to_string());
            *hover_m.borrow_mut() = hit;
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let hover_c = hover_id;
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if let Some(id) = hover_c.borrow().as_deref() {
                log::info!("[pick] {}", id);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    field: &Rc<RefCell<RingField>>,
    director: &Rc<RefCell<CinematicDirector>>,
    roster: &Rc<RefCell<Roster>>,
    rng: &Rc<RefCell<StdRng>>,
    camera_pose: &Rc<RefCell<CameraPose>>,
) {
    let key = ev.key();
    match key.as_str() {
        "c" | "C" => {
            let mut director = director.borrow_mut();
            if director.is_active() {
                if let Some(pose) = director.disable() {
                    *camera_pose.borrow_mut() = pose;
                }
            } else {
                let field = field.borrow();
                let targets = field.targets();
                let pose = director.enable(
                    &mut *rng.borrow_mut(),
                    &targets,
                    *camera_pose.borrow(),
                );
                *camera_pose.borrow_mut() = pose;
            }
            if let Some(doc) = dom::window_document() {
                dom::set_cinematic_hud(&doc, director.is_active());
            }
        }
        "ArrowRight" => {
            let subjects = roster.borrow_mut().advance();
            field.borrow_mut().rebuild(&subjects, &mut *rng.borrow_mut());
            director.borrow_mut().notify_rebuilt();
            ev.prevent_default();
        }
        "ArrowLeft" => {
            let subjects = roster.borrow_mut().previous();
            field.borrow_mut().rebuild(&subjects, &mut *rng.borrow_mut());
            director.borrow_mut().notify_rebuilt();
            ev.prevent_default();
        }
        _ => {}
    }
}

pub fn wire_keyboard(
    field: Rc<RefCell<RingField>>,
    director: Rc<RefCell<CinematicDirector>>,
    roster: Rc<RefCell<Roster>>,
    rng: Rc<RefCell<StdRng>>,
    camera_pose: Rc<RefCell<CameraPose>>,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &field, &director, &roster, &rng, &camera_pose);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
