// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Binding of a [`FlagGrid`] to a rendering host

use super::{ClickOutcome, FlagGrid, FlagOptions};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Container rectangle in host coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Bounds {
    /// Whether (`px`, `py`) lies inside
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.width && py < self.y + self.height
    }

    /// Pointer position normalized to [-1, 1] per axis around the centre
    #[must_use]
    pub fn normalize(&self, px: f64, py: f64) -> (f64, f64) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let nx = if half_w > 0.0 { (px - (self.x + half_w)) / half_w } else { 0.0 };
        let ny = if half_h > 0.0 { (py - (self.y + half_h)) / half_h } else { 0.0 };
        (nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
    }
}

/// Identifier of a requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// What the widget needs from its environment
pub trait RenderHost {
    /// Container rectangle, `None` when there is nothing to mount into
    fn container(&self) -> Option<Bounds>;
    /// The user asked for reduced motion
    fn prefers_reduced_motion(&self) -> bool;
    /// A fine pointer (mouse, trackpad) is available
    fn has_fine_pointer(&self) -> bool;
    /// Start delivering pointer move/leave events
    fn listen_pointer(&mut self);
    /// Stop delivering pointer events
    fn unlisten_pointer(&mut self);
    /// Ask for one animation callback
    fn request_frame(&mut self) -> FrameHandle;
    /// Withdraw a pending animation callback
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A mounted flag
pub struct FlagWidget {
    grid: Option<FlagGrid>,
    bounds: Option<Bounds>,
    frame: Option<FrameHandle>,
    listening: bool,
    rng: StdRng,
}

impl FlagWidget {
    /// Mount into `host`. Without a container the widget is inert. Pointer
    /// listeners and the frame loop start only when motion is allowed and a
    /// fine pointer is present.
    pub fn mount<H: RenderHost + ?Sized>(host: &mut H, options: &FlagOptions) -> Result<Self> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let Some(bounds) = host.container() else {
            debug!("No flag container, nothing to mount");
            return Ok(Self {
                grid: None,
                bounds: None,
                frame: None,
                listening: false,
                rng,
            });
        };

        let grid = FlagGrid::new(options.cols, options.rows, options.mode, options.motion, &mut rng)?;
        let mut widget = Self {
            grid: Some(grid),
            bounds: Some(bounds),
            frame: None,
            listening: false,
            rng,
        };

        if !host.prefers_reduced_motion() && host.has_fine_pointer() {
            host.listen_pointer();
            widget.listening = true;
            widget.frame = Some(host.request_frame());
        } else {
            debug!("Flag motion disabled by host preferences");
        }
        Ok(widget)
    }

    /// The grid, if mounted
    #[must_use]
    pub fn grid(&self) -> Option<&FlagGrid> {
        self.grid.as_ref()
    }

    /// Whether a frame is pending
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.frame.is_some()
    }

    /// Whether pointer listeners are registered
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Current container
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// The container moved or resized
    pub fn resize(&mut self, bounds: Bounds) {
        if self.grid.is_some() {
            self.bounds = Some(bounds);
        }
    }

    /// Animation callback: tick the grid and request the next frame. Stale
    /// handles (cancelled or superseded) are ignored.
    pub fn on_frame<H: RenderHost + ?Sized>(&mut self, host: &mut H, handle: FrameHandle, now_ms: f64) {
        if self.frame != Some(handle) {
            return;
        }
        let Some(grid) = self.grid.as_mut() else {
            self.frame = None;
            return;
        };
        grid.tick(now_ms);
        self.frame = Some(host.request_frame());
    }

    /// Pointer moved to (`x`, `y`) in host coordinates
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.listening {
            return;
        }
        if let (Some(grid), Some(bounds)) = (self.grid.as_mut(), self.bounds) {
            let (nx, ny) = bounds.normalize(x, y);
            grid.set_pointer_target(nx, ny);
        }
    }

    /// Pointer left the container
    pub fn on_pointer_leave(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.clear_pointer();
        }
    }

    /// Index of the tile under (`x`, `y`)
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let grid = self.grid.as_ref()?;
        let bounds = self.bounds?;
        if !bounds.contains(x, y) {
            return None;
        }
        let col = ((x - bounds.x) / bounds.width * grid.cols() as f64) as usize;
        let row = ((y - bounds.y) / bounds.height * grid.rows() as f64) as usize;
        grid.index_of(col.min(grid.cols() - 1), row.min(grid.rows() - 1))
    }

    /// Click at (`x`, `y`); works regardless of the motion policy
    pub fn on_click(&mut self, x: f64, y: f64) -> Option<ClickOutcome> {
        let index = self.hit_test(x, y)?;
        self.click_tile(index)
    }

    /// Click the tile at `index`. Without a frame loop the celebration is
    /// settled immediately.
    pub fn click_tile(&mut self, index: usize) -> Option<ClickOutcome> {
        let grid = self.grid.as_mut()?;
        let outcome = grid.click(index)?;
        if outcome.just_solved && self.frame.is_none() {
            grid.finish_celebration();
        }
        Some(outcome)
    }

    /// The scramble control was pressed
    pub fn scramble(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.scramble(&mut self.rng);
        }
    }

    /// Tear down: remove listeners and cancel the pending frame
    pub fn unmount<H: RenderHost + ?Sized>(mut self, host: &mut H) {
        if self.listening {
            host.unlisten_pointer();
            self.listening = false;
        }
        if let Some(handle) = self.frame.take() {
            host.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::FlagMode;

    /// Records every call the widget makes
    #[derive(Default)]
    struct MockHost {
        container: Option<Bounds>,
        reduced_motion: bool,
        coarse_pointer: bool,
        listening: bool,
        listen_calls: usize,
        next_frame: u64,
        pending: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl MockHost {
        fn with_container() -> Self {
            Self {
                container: Some(Bounds { x: 0.0, y: 0.0, width: 100.0, height: 50.0 }),
                ..Self::default()
            }
        }
    }

    impl RenderHost for MockHost {
        fn container(&self) -> Option<Bounds> {
            self.container
        }
        fn prefers_reduced_motion(&self) -> bool {
            self.reduced_motion
        }
        fn has_fine_pointer(&self) -> bool {
            !self.coarse_pointer
        }
        fn listen_pointer(&mut self) {
            self.listening = true;
            self.listen_calls += 1;
        }
        fn unlisten_pointer(&mut self) {
            self.listening = false;
        }
        fn request_frame(&mut self) -> FrameHandle {
            self.next_frame += 1;
            let handle = FrameHandle(self.next_frame);
            self.pending.push(handle);
            handle
        }
        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.pending.retain(|h| *h != handle);
            self.cancelled.push(handle);
        }
    }

    fn options(mode: FlagMode) -> FlagOptions {
        FlagOptions {
            mode,
            seed: Some(42),
            ..FlagOptions::default()
        }
    }

    #[test]
    fn test_no_container_is_inert() {
        let mut host = MockHost::default();
        let mut widget = FlagWidget::mount(&mut host, &options(FlagMode::Puzzle)).unwrap();
        assert!(widget.grid().is_none());
        assert!(!widget.is_animating());
        assert!(widget.on_click(1.0, 1.0).is_none());
        widget.scramble();
        assert_eq!(host.listen_calls, 0);
        assert!(host.pending.is_empty());
    }

    #[test]
    fn test_frame_loop_reschedules_and_cancels() {
        let mut host = MockHost::with_container();
        let mut widget = FlagWidget::mount(&mut host, &options(FlagMode::Shuffled)).unwrap();
        assert!(host.listening);
        assert_eq!(host.pending, vec![FrameHandle(1)]);

        widget.on_frame(&mut host, FrameHandle(1), 16.0);
        assert_eq!(host.next_frame, 2);

        // stale handle: no tick, no new request
        widget.on_frame(&mut host, FrameHandle(1), 32.0);
        assert_eq!(host.next_frame, 2);

        widget.unmount(&mut host);
        assert!(!host.listening);
        assert_eq!(host.cancelled, vec![FrameHandle(2)]);
    }

    #[test]
    fn test_pointer_drives_parallax() {
        let mut host = MockHost::with_container();
        let mut widget = FlagWidget::mount(&mut host, &options(FlagMode::Shuffled)).unwrap();
        widget.on_pointer_move(100.0, 25.0);
        assert_eq!(widget.grid().unwrap().pointer().target(), (1.0, 0.0));
        widget.on_pointer_leave();
        assert_eq!(widget.grid().unwrap().pointer().target(), (0.0, 0.0));
    }

    #[test]
    fn test_click_hit_test() {
        let mut host = MockHost::with_container();
        host.reduced_motion = true;
        let mut widget = FlagWidget::mount(&mut host, &options(FlagMode::Puzzle)).unwrap();
        assert!(!widget.is_animating());

        assert_eq!(widget.hit_test(0.0, 0.0), Some(0));
        assert_eq!(widget.hit_test(99.9, 49.9), Some(49));
        assert_eq!(widget.hit_test(15.0, 15.0), Some(11));
        assert_eq!(widget.hit_test(120.0, 10.0), None);

        let before = widget.grid().unwrap().tiles()[11].color;
        let outcome = widget.on_click(15.0, 15.0).unwrap();
        assert_eq!(outcome.color, before.next());
    }

    fn solve(widget: &mut FlagWidget) -> bool {
        let mut just_solved = false;
        let len = widget.grid().unwrap().len();
        for i in 0..len {
            while widget.grid().unwrap().tiles()[i].color != widget.grid().unwrap().target(i) {
                just_solved |= widget.click_tile(i).unwrap().just_solved;
            }
        }
        just_solved
    }

    #[test]
    fn test_solve_without_frames_does_not_linger() {
        let mut host = MockHost::with_container();
        host.reduced_motion = true;
        let mut widget = FlagWidget::mount(&mut host, &options(FlagMode::Puzzle)).unwrap();

        assert!(solve(&mut widget));
        let grid = widget.grid().unwrap();
        assert!(grid.is_solved());
        assert!(!grid.is_celebrating());
        assert!(grid.tiles().iter().all(|t| t.style.scale == 1.0));
    }

    #[test]
    fn test_solve_with_frames_celebrates() {
        let mut host = MockHost::with_container();
        let mut widget = FlagWidget::mount(&mut host, &options(FlagMode::Puzzle)).unwrap();

        assert!(solve(&mut widget));
        assert!(widget.grid().unwrap().is_celebrating());
        widget.on_frame(&mut host, FrameHandle(1), 0.0);
        widget.on_frame(&mut host, FrameHandle(2), 10_000.0);
        assert!(!widget.grid().unwrap().is_celebrating());
    }
}
