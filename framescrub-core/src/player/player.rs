use std::time::Duration;

use crate::{
    assets::{
        frame_set::{FrameSet, LoadProgress},
        loader::{FrameLoader, FrameSource, LoadState},
    },
    config::{PlayerConfig, RegionIds},
    device::tier::TierSettings,
    foundation::core::{LayoutSnapshot, ViewportSize},
    foundation::error::FramescrubResult,
    player::{
        host::{EventHost, FrameRequestId, HostEvent, LayoutProbe, ListenerId, Presenter},
        scheduler::{FrameDecision, PaintScheduler},
        state::PlaybackState,
    },
    render::{painter::SurfaceRenderer, surface::Surface},
    scroll::{
        mapper::ScrollMapper,
        resolver::{ResolveMode, resolve_pick},
    },
};

/// Scroll-driven frame sequence player.
///
/// The scroll path (`update`) is the only writer of [`PlaybackState`]; `paint` only reads it.
#[derive(Debug)]
pub struct FrameSequencePlayer {
    settings: TierSettings,
    mapper: ScrollMapper,
    mode: ResolveMode,
    renderer: SurfaceRenderer,
    scheduler: PaintScheduler,
    regions: RegionIds,
    frames: Option<FrameSet>,
    load_state: LoadState,
    state: PlaybackState,
    surface: Surface,
    paints: u64,
}

impl FrameSequencePlayer {
    pub fn new(
        config: &PlayerConfig,
        settings: TierSettings,
        viewport: ViewportSize,
    ) -> FramescrubResult<Self> {
        config.validate()?;
        settings.validate()?;
        let surface = Surface::new(viewport, settings.dpr_cap)?;
        Ok(Self {
            mode: PlayerConfig::resolve_mode(&settings),
            renderer: SurfaceRenderer::new(config.fit, settings.smoothing),
            mapper: config.scroll,
            scheduler: PaintScheduler::new(config.throttle),
            regions: config.regions.clone(),
            load_state: LoadState::Loading(LoadProgress {
                settled: 0,
                total: settings.frame_count,
                placeholders: 0,
            }),
            frames: None,
            state: PlaybackState::default(),
            surface,
            settings,
            paints: 0,
        })
    }

    pub fn settings(&self) -> &TierSettings {
        &self.settings
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn frames(&self) -> Option<&FrameSet> {
        self.frames.as_ref()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn regions(&self) -> &RegionIds {
        &self.regions
    }

    pub fn resolve_mode(&self) -> ResolveMode {
        self.mode
    }

    /// Number of paints performed so far.
    pub fn paint_count(&self) -> u64 {
        self.paints
    }

    /// Populate the frame set through `loader`.
    ///
    /// A failure of the load call itself moves the player to [`LoadState::Failed`]; the player keeps
    /// handling scroll and paints the empty fill.
    pub fn load_frames<S>(
        &mut self,
        loader: &FrameLoader,
        source: &S,
        mut on_progress: impl FnMut(LoadProgress),
    ) -> &LoadState
    where
        S: FrameSource + ?Sized,
    {
        let load_state = &mut self.load_state;
        let result = loader.load(source, &self.settings, |p| {
            *load_state = LoadState::Loading(p);
            on_progress(p);
        });
        match result {
            Ok(set) => {
                self.attach_frames(set);
            }
            Err(err) => {
                tracing::error!(error = %err, "frame loading failed");
                self.load_state = LoadState::Failed("Failed to load images".to_string());
            }
        }
        &self.load_state
    }

    /// Install a fully loaded frame set.
    ///
    /// The current pick was resolved against no frames, so a paint is owed; the next animation
    /// frame re-measures the layout against the new set. Returns `true` when an animation frame
    /// must be requested.
    pub fn attach_frames(&mut self, set: FrameSet) -> bool {
        let progress = LoadProgress {
            settled: set.len(),
            total: set.len(),
            placeholders: set.placeholder_count(),
        };
        self.frames = Some(set);
        self.load_state = LoadState::Ready(progress);
        self.request_paint()
    }

    /// Scroll handler: map `layout` into playback state.
    ///
    /// Returns `false` and leaves the state untouched when either region is missing.
    pub fn update(&mut self, layout: &LayoutSnapshot) -> bool {
        let Some(sample) = self.mapper.map(layout) else {
            return false;
        };
        let n = self.frames.as_ref().map_or(0, FrameSet::len);
        self.state.apply(sample, resolve_pick(sample.progress, n, self.mode));
        true
    }

    /// Paint the current state onto the surface.
    pub fn paint(&mut self) -> FramescrubResult<()> {
        self.renderer
            .paint(self.frames.as_ref(), self.state.frame, &mut self.surface)?;
        self.paints += 1;
        Ok(())
    }

    /// Resize the surface for `viewport`. Playback state is kept.
    pub fn resize(&mut self, viewport: ViewportSize) -> FramescrubResult<bool> {
        self.surface.resize(viewport, self.settings.dpr_cap)
    }

    /// Mark a paint as owed after a scroll or resize. Returns `true` when an animation frame must
    /// be requested.
    pub fn request_paint(&mut self) -> bool {
        self.scheduler.request()
    }

    /// Animation-frame tick: update from `layout` and paint if a paint is owed.
    pub fn on_animation_frame(
        &mut self,
        now: Duration,
        layout: &LayoutSnapshot,
    ) -> FramescrubResult<FrameDecision> {
        let decision = self.scheduler.on_frame(now);
        if decision == FrameDecision::Paint {
            self.update(layout);
            self.paint()?;
        }
        Ok(decision)
    }

    fn cancel_pending(&mut self) {
        self.scheduler.cancel();
    }
}

/// A player attached to an [`EventHost`].
///
/// Mounting registers scroll and resize listeners; dropping the guard removes them and cancels any
/// pending animation frame, whichever way the owner exits.
pub struct MountedPlayer<H: EventHost> {
    player: FrameSequencePlayer,
    host: H,
    listeners: Vec<ListenerId>,
    pending_frame: Option<FrameRequestId>,
}

impl<H: EventHost> MountedPlayer<H> {
    /// Register listeners on `host`, then paint and present the initial frame.
    ///
    /// A paint still owed from before mounting (frames attached earlier) gets an animation frame.
    pub fn mount<R>(
        player: FrameSequencePlayer,
        mut host: H,
        presenter: &mut R,
    ) -> FramescrubResult<Self>
    where
        R: Presenter + ?Sized,
    {
        let listeners = vec![
            host.add_listener(HostEvent::Scroll),
            host.add_listener(HostEvent::Resize),
        ];
        let mut mounted = Self {
            player,
            host,
            listeners,
            pending_frame: None,
        };
        mounted.player.paint()?;
        presenter.present(mounted.player.surface(), mounted.player.state().opacity)?;
        if mounted.player.scheduler.is_pending() {
            mounted.pending_frame = Some(mounted.host.request_animation_frame());
        }
        Ok(mounted)
    }

    pub fn player(&self) -> &FrameSequencePlayer {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut FrameSequencePlayer {
        &mut self.player
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_frame
    }

    /// Install frames loaded after mounting and schedule the repaint they owe.
    pub fn attach_frames(&mut self, set: FrameSet) {
        if self.player.attach_frames(set) {
            self.pending_frame = Some(self.host.request_animation_frame());
        }
    }

    /// Dispatch a host event.
    ///
    /// Resize recomputes the surface dimensions at once. Both events then only owe a paint, which
    /// the next animation frame measures and performs.
    pub fn handle<P>(&mut self, event: HostEvent, probe: &P) -> FramescrubResult<()>
    where
        P: LayoutProbe + ?Sized,
    {
        if event == HostEvent::Resize {
            self.player.resize(probe.viewport())?;
        }
        if self.player.request_paint() {
            self.pending_frame = Some(self.host.request_animation_frame());
        }
        Ok(())
    }

    /// Run the animation-frame callback the host scheduled.
    pub fn animation_frame<P, R>(
        &mut self,
        now: Duration,
        probe: &P,
        presenter: &mut R,
    ) -> FramescrubResult<FrameDecision>
    where
        P: LayoutProbe + ?Sized,
        R: Presenter + ?Sized,
    {
        self.pending_frame = None;
        let layout = probe.snapshot(&self.player.regions.hero, &self.player.regions.next);
        let decision = self.player.on_animation_frame(now, &layout)?;
        match decision {
            FrameDecision::Paint => {
                presenter.present(self.player.surface(), self.player.state().opacity)?;
            }
            FrameDecision::Defer => {
                self.pending_frame = Some(self.host.request_animation_frame());
            }
            FrameDecision::Idle => {}
        }
        Ok(decision)
    }

    fn teardown(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            self.host.cancel_animation_frame(id);
        }
        self.player.cancel_pending();
        for id in self.listeners.drain(..) {
            self.host.remove_listener(id);
        }
    }
}

impl<H: EventHost> Drop for MountedPlayer<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/player.rs"]
mod tests;
