use crate::{
    foundation::core::{LayoutSnapshot, Region, ViewportSize},
    foundation::error::FramescrubResult,
    render::surface::Surface,
};

/// Host events the player listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Scroll,
    Resize,
}

/// Handle returned by [`EventHost::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Handle returned by [`EventHost::request_animation_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Listener registration and animation-frame scheduling provided by the host.
pub trait EventHost {
    fn add_listener(&mut self, event: HostEvent) -> ListenerId;
    fn remove_listener(&mut self, id: ListenerId);
    fn request_animation_frame(&mut self) -> FrameRequestId;
    fn cancel_animation_frame(&mut self, id: FrameRequestId);
}

impl<T: EventHost + ?Sized> EventHost for &mut T {
    fn add_listener(&mut self, event: HostEvent) -> ListenerId {
        (**self).add_listener(event)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id)
    }

    fn request_animation_frame(&mut self) -> FrameRequestId {
        (**self).request_animation_frame()
    }

    fn cancel_animation_frame(&mut self, id: FrameRequestId) {
        (**self).cancel_animation_frame(id)
    }
}

/// Read access to the live layout.
pub trait LayoutProbe {
    fn scroll_y(&self) -> f64;
    fn viewport(&self) -> ViewportSize;
    /// Offset and height of the region named `id`, if it is in the layout.
    fn region(&self, id: &str) -> Option<Region>;

    fn snapshot(&self, hero_id: &str, next_id: &str) -> LayoutSnapshot {
        LayoutSnapshot {
            scroll_y: self.scroll_y(),
            viewport: self.viewport(),
            hero: self.region(hero_id),
            next: self.region(next_id),
        }
    }
}

/// Receives painted surfaces.
pub trait Presenter {
    /// Show `surface` at `opacity`.
    fn present(&mut self, surface: &Surface, opacity: f64) -> FramescrubResult<()>;
}

/// Fixed layout, used by the CLI and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticLayout {
    pub scroll_y: f64,
    pub viewport: ViewportSize,
    pub regions: Vec<(String, Region)>,
}

impl LayoutProbe for StaticLayout {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn region(&self, id: &str) -> Option<Region> {
        self.regions
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, r)| *r)
    }
}
