//! Per-frame driver: ticks the ring field and the cinematic director, builds
//! the particle instance buffer and hands camera + instances to the renderer.

use crate::constants::{HOVER_BRIGHTEN, PARTICLE_SCALE_DENSE, PARTICLE_SCALE_SPARSE};
use crate::render::{self, ParticleInstance};
use crate::roster::Roster;
use glam::{Mat3, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{
    CameraPose, CinematicDirector, RingField, RingLayer, DENSE_PARTICLES, MANUAL_EYE,
    MANUAL_LOOK_AT, SPARSE_PARTICLES,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn manual_pose() -> CameraPose {
    CameraPose::new(Vec3::from(MANUAL_EYE), Vec3::from(MANUAL_LOOK_AT))
}

pub struct FrameContext<'a> {
    pub field: Rc<RefCell<RingField>>,
    pub director: Rc<RefCell<CinematicDirector>>,
    pub roster: Rc<RefCell<Roster>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub hover_id: Rc<RefCell<Option<String>>>,
    /// Pose the current frame is rendered with; shared with the pointer
    /// handlers so picking rays match what is on screen.
    pub camera_pose: Rc<RefCell<CameraPose>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub start_instant: Instant,
    pub last_instant: Instant,
    /// Held across the between-shot gap so the camera does not snap back to
    /// the manual pose while a window advance is in flight.
    pub last_cinematic_pose: CameraPose,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let t = (now - self.start_instant).as_secs_f32();

        let mut field = self.field.borrow_mut();
        field.tick(t, dt);

        // Director: advance clock, resolve pose, handle shot expiry. The
        // expiry side effect (advance the subject window) is applied before
        // the next tick can sample, per the pending-reset hand-off.
        let targets = field.targets();
        let mut advance_requested = false;
        let pose_opt = {
            let mut rng = self.rng.borrow_mut();
            self.director
                .borrow_mut()
                .tick(dt, &mut *rng, &targets, || advance_requested = true)
        };
        if advance_requested {
            let subjects = self.roster.borrow_mut().advance();
            let mut rng = self.rng.borrow_mut();
            field.rebuild(&subjects, &mut *rng);
            self.director.borrow_mut().notify_rebuilt();
        }

        let active = self.director.borrow().is_active();
        let pose = match pose_opt {
            Some(p) => {
                self.last_cinematic_pose = p;
                p
            }
            None if active => self.last_cinematic_pose,
            None => manual_pose(),
        };
        *self.camera_pose.borrow_mut() = pose;

        // Build instance data from the (possibly rebuilt) particle buffers.
        let hovered = {
            let hover = self.hover_id.borrow();
            hover.as_deref().and_then(|id| field.index_of(id))
        };
        let mut instances: Vec<ParticleInstance> =
            Vec::with_capacity(field.len() * (DENSE_PARTICLES + SPARSE_PARTICLES));
        for (k, entity) in field.entities.iter_mut().enumerate() {
            let rot =
                Mat3::from_rotation_x(entity.rotation_x) * Mat3::from_rotation_z(entity.rotation_z);
            let brighten = if hovered == Some(k) { HOVER_BRIGHTEN } else { 1.0 };
            push_layer_instances(
                &mut instances,
                &mut entity.dense,
                rot,
                PARTICLE_SCALE_DENSE,
                brighten,
            );
            push_layer_instances(
                &mut instances,
                &mut entity.sparse,
                rot,
                PARTICLE_SCALE_SPARSE,
                brighten,
            );
        }
        drop(field);

        if let Some(g) = &mut self.gpu {
            g.set_camera(pose.eye, pose.look_at);
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn push_layer_instances(
    instances: &mut Vec<ParticleInstance>,
    layer: &mut RingLayer,
    rot: Mat3,
    scale: f32,
    brighten: f32,
) {
    for (pos, color) in layer.positions.iter().zip(&layer.colors) {
        let world = rot * Vec3::from(*pos);
        instances.push(ParticleInstance {
            pos: world.to_array(),
            scale,
            color: [
                (color[0] * brighten).min(1.0),
                (color[1] * brighten).min(1.0),
                (color[2] * brighten).min(1.0),
                color[3],
            ],
        });
    }
    layer.dirty = false;
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
