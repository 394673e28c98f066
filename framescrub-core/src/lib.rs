//! framescrub plays a pre-rendered image sequence as a scroll-scrubbed animation.
//!
//! A hero section holds a drawing surface; as the page scrolls from the hero's top to the start of
//! the next section, progress through that span selects which frame is painted.
//!
//! # Pipeline overview
//!
//! 1. **Tier**: `DeviceProfile -> PerformanceTier -> TierSettings` (frame count, batch size, DPR cap)
//! 2. **Load**: `FrameLoader` fills a `FrameSet` in batches; failed frames become placeholders
//! 3. **Map**: `ScrollMapper` turns a `LayoutSnapshot` into eased progress and a fade amount
//! 4. **Resolve**: progress becomes a `FramePick` (one frame, or two with a blend weight)
//! 5. **Paint**: `SurfaceRenderer` draws the pick onto a DPR-scaled `Surface`
//!
//! [`FrameSequencePlayer`] ties these together; [`MountedPlayer`] attaches it to an [`EventHost`]
//! and detaches on drop.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single writer**: only the scroll path writes playback state; painting reads it.
//! - **Premultiplied RGBA8** end-to-end: frames and surfaces hold premultiplied pixels.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod device;
mod foundation;
mod player;
mod render;
mod scroll;

/// Serde-backed player configuration.
pub mod config;
/// Light/dark theme helper for the hosting page.
pub mod theme;

pub use animation::ease::Ease;
pub use assets::decode::decode_frame;
pub use assets::frame_set::{FrameOrigin, FrameSet, FrameSetBuilder, LoadProgress, PreparedFrame};
pub use assets::loader::{DirSource, FrameLoader, FrameSource, LoadState, LoaderOpts, MemorySource};
pub use assets::naming::FramePathTemplate;
pub use assets::placeholder::{PlaceholderPainter, PlaceholderStyle};
pub use config::{PlayerConfig, RegionIds};
pub use device::tier::{
    DeviceProfile, PerformanceTier, Smoothing, TierSettings, TierTable, TierThresholds,
    resolve_settings, select_tier,
};
pub use foundation::core::{FrameIndex, LayoutSnapshot, Rect, Region, Size, ViewportSize};
pub use foundation::error::{FramescrubError, FramescrubResult};
pub use player::host::{
    EventHost, FrameRequestId, HostEvent, LayoutProbe, ListenerId, Presenter, StaticLayout,
};
pub use player::player::{FrameSequencePlayer, MountedPlayer};
pub use player::scheduler::{FrameDecision, PaintScheduler, ThrottleMode};
pub use player::state::PlaybackState;
pub use render::composite::{PremulRgba8, over, unpremultiply};
pub use render::fit::{FitMode, fit_rect};
pub use render::painter::SurfaceRenderer;
pub use render::surface::Surface;
pub use scroll::mapper::{FadeEnd, ScrollMapper, ScrollSample};
pub use scroll::resolver::{FramePick, ResolveMode, resolve_frame_index, resolve_pick};
pub use theme::{JsonFileStore, PreferenceStore, Theme, ThemeRoot, apply_theme};
