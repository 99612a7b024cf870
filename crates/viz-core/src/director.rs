//! Cinematic director: the shot-scheduling state machine.
//!
//! Two states, Inactive and Active. While Active the director owns a
//! monotonically advancing clock and at most one current shot. Shot expiry
//! does not resample immediately: it raises `pending_reset` and asks the
//! host to advance the displayed subject window. Only after the host's
//! rebuild lands (and calls [`CinematicDirector::notify_rebuilt`]) does the
//! next tick sample a fresh shot, anchored at the then-current clock. That
//! two-phase hand-off is what keeps a freshly sampled shot from referencing
//! a target index the in-flight rebuild is about to invalidate.

use crate::shots::{resolve_pose, sample_shot, RingTarget, ShotDescriptor};
use crate::state::CameraPose;
use rand::Rng;

pub struct CinematicDirector {
    active: bool,
    clock: f32,
    current_shot: Option<ShotDescriptor>,
    pending_reset: bool,
    saved_pose: Option<CameraPose>,
}

impl Default for CinematicDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl CinematicDirector {
    pub fn new() -> Self {
        Self {
            active: false,
            clock: 0.0,
            current_shot: None,
            pending_reset: false,
            saved_pose: None,
        }
    }

    /// Whether the cinematic mode is Active (exposed so the host UI can
    /// react, e.g. show a letterbox HUD).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn current_shot(&self) -> Option<&ShotDescriptor> {
        self.current_shot.as_ref()
    }

    pub fn pending_reset(&self) -> bool {
        self.pending_reset
    }

    /// Inactive → Active. Captures `manual_pose` for restore on disable,
    /// resets the clock, samples the first shot anchored at 0 and returns
    /// its resolved pose so the host can apply it on the same frame (no
    /// visible jump cut).
    pub fn enable(
        &mut self,
        rng: &mut impl Rng,
        targets: &[RingTarget],
        manual_pose: CameraPose,
    ) -> CameraPose {
        self.active = true;
        self.saved_pose = Some(manual_pose);
        self.clock = 0.0;
        self.pending_reset = false;
        let shot = sample_shot(rng, targets, 0.0);
        log::info!("cinematic on, first shot {:?}", shot.archetype);
        let pose = resolve_pose(&shot, 0.0, targets);
        self.current_shot = Some(shot);
        pose
    }

    /// Active → Inactive. Discards any current shot and returns the manual
    /// pose captured on enable, exactly as saved. No-op when already
    /// Inactive.
    pub fn disable(&mut self) -> Option<CameraPose> {
        if !self.active {
            return None;
        }
        log::info!("cinematic off");
        self.active = false;
        self.clock = 0.0;
        self.current_shot = None;
        self.pending_reset = false;
        self.saved_pose.take()
    }

    /// Called by the host once an external subject-list rebuild has been
    /// applied; allows the next tick to sample again.
    pub fn notify_rebuilt(&mut self) {
        self.pending_reset = false;
    }

    /// Advance the cinematic clock by `dt` and return the pose to apply this
    /// frame, or `None` while Inactive or between shots.
    ///
    /// On expiry the current shot is discarded, `pending_reset` is raised
    /// and `on_expire` is invoked synchronously; sampling the next shot is
    /// deferred to a tick after [`Self::notify_rebuilt`].
    pub fn tick(
        &mut self,
        dt: f32,
        rng: &mut impl Rng,
        targets: &[RingTarget],
        mut on_expire: impl FnMut(),
    ) -> Option<CameraPose> {
        if !self.active {
            return None;
        }
        self.clock += dt;

        if self.current_shot.is_none() && !self.pending_reset {
            let shot = sample_shot(rng, targets, self.clock);
            log::debug!("new shot {:?} at clock {:.2}", shot.archetype, self.clock);
            self.current_shot = Some(shot);
        }

        if let Some(shot) = &self.current_shot {
            let elapsed = self.clock - shot.start_time;
            if elapsed >= shot.duration {
                log::debug!("shot {:?} expired", shot.archetype);
                self.pending_reset = true;
                self.current_shot = None;
                on_expire();
                return None;
            }
            return Some(resolve_pose(shot, elapsed, targets));
        }
        None
    }
}
