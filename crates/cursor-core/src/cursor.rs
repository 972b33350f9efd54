//! The cursor overlay: motion filter + interaction tracker + capture stretch + magnets.

use crate::config::CursorConfig;
use crate::constants::SNAP_EASE;
use crate::geometry::Transform2D;
use crate::host::Stage;
use crate::magnet::{MagneticTarget, TargetSpec};
use crate::motion::{MotionFilter, Stretch};
use crate::tracker::InteractionTracker;
use crate::tween::Tween;
use glam::Vec2;
use smallvec::SmallVec;

/// Eased settle into the captured scale pair. Replaced wholesale on every restart.
#[derive(Clone, Copy, Debug)]
struct SnapTween {
    scale_x: Tween,
    scale_y: Tween,
}

pub struct Cursor<E> {
    element: E,
    filter: MotionFilter,
    tracker: InteractionTracker<E>,
    magnets: Vec<MagneticTarget<E>>,
    // indices into `magnets` with a tween in flight; only these are ticked
    animating: SmallVec<[usize; 4]>,
    snap: Option<SnapTween>,
    transform: Transform2D,
    config: CursorConfig,
}

impl<E: Clone + PartialEq + std::fmt::Debug> Cursor<E> {
    pub fn new(element: E, targets: Vec<TargetSpec<E>>, config: CursorConfig) -> Self {
        let (regions, magnets): (Vec<E>, Vec<MagneticTarget<E>>) = targets
            .into_iter()
            .map(|t| (t.hover_region, MagneticTarget::new(t.element, &config)))
            .unzip();
        Self {
            element,
            filter: MotionFilter::new(&config),
            tracker: InteractionTracker::new(&config, regions),
            magnets,
            animating: SmallVec::new(),
            snap: None,
            transform: Transform2D::at(config.start_position_vec2()),
            config,
        }
    }

    #[inline]
    pub fn filter(&self) -> &MotionFilter {
        &self.filter
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.tracker.is_captured()
    }

    #[inline]
    pub fn capture_target(&self) -> Option<&E> {
        self.tracker.capture_target()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.filter.position().current()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.filter.scale().current()
    }

    /// Last transform written to the cursor element.
    #[inline]
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    #[inline]
    pub fn target_count(&self) -> usize {
        self.magnets.len()
    }

    /// Targets whose pull tween is still in flight.
    #[inline]
    pub fn animating_magnets(&self) -> usize {
        self.animating.len()
    }

    /// A capture snap tween is still settling.
    #[inline]
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    pub fn hover_enter(&mut self, target: usize) {
        self.tracker.hover_enter(target);
    }

    pub fn hover_exit(&mut self, target: usize) {
        self.tracker.hover_exit(target);
    }

    /// Raw pointer movement anywhere in the viewport.
    pub fn pointer_move<S>(&mut self, pointer: Vec2, stage: &S)
    where
        S: Stage<Element = E> + ?Sized,
    {
        let aim = self.tracker.on_pointer_move(pointer, stage);
        self.filter.chase(aim.position, aim.scale);
        if let Some(snap) = aim.snap {
            self.transform.rotation_deg = snap.rotation_deg;
            self.start_snap(snap);
        }
    }

    /// Pointer movement inside a target's hover region.
    pub fn magnet_move<S>(&mut self, target: usize, pointer: Vec2, stage: &S)
    where
        S: Stage<Element = E> + ?Sized,
    {
        if let Some(m) = self.magnets.get_mut(target) {
            m.track(pointer, stage);
            self.mark_animating(target);
        }
    }

    /// Pointer left a target's hover region.
    pub fn magnet_release(&mut self, target: usize) {
        if let Some(m) = self.magnets.get_mut(target) {
            m.release();
            self.mark_animating(target);
        }
    }

    fn mark_animating(&mut self, target: usize) {
        if !self.animating.contains(&target) {
            self.animating.push(target);
        }
    }

    /// One display frame.
    pub fn frame<S>(&mut self, dt: f32, stage: &S)
    where
        S: Stage<Element = E> + ?Sized,
    {
        let motion = self.filter.update(self.tracker.is_captured());
        self.transform.x = motion.position.x;
        self.transform.y = motion.position.y;

        match motion.stretch {
            Some(stretch) => {
                // a direct assignment overwrites any in-flight snap
                self.snap = None;
                self.transform.rotation_deg = stretch.rotation_deg;
                self.transform.scale_x = stretch.scale_x;
                self.transform.scale_y = stretch.scale_y;
            }
            None => self.advance_snap(dt),
        }
        stage.set_transform(&self.element, &self.transform);

        let magnets = &mut self.magnets;
        self.animating.retain(|i| {
            let m = &mut magnets[*i];
            if let Some(offset) = m.advance(dt) {
                stage.set_offset(m.element(), offset);
            }
            m.is_animating()
        });
    }

    fn start_snap(&mut self, to: Stretch) {
        let duration = self.config.snap_duration_sec;
        let ease = SNAP_EASE;
        self.snap = Some(SnapTween {
            scale_x: Tween::new(self.transform.scale_x, to.scale_x, duration, ease),
            scale_y: Tween::new(self.transform.scale_y, to.scale_y, duration, ease),
        });
    }

    fn advance_snap(&mut self, dt: f32) {
        let Some(snap) = self.snap.as_mut() else {
            return;
        };
        self.transform.scale_x = snap.scale_x.advance(dt);
        self.transform.scale_y = snap.scale_y.advance(dt);
        if snap.scale_x.is_finished() && snap.scale_y.is_finished() {
            self.snap = None;
        }
    }
}
