//! Scrolly is a scroll-driven animation synchronization engine for
//! scrollytelling pages.
//!
//! A pre-baked frame animation plays under the reader's control: scroll
//! position inside a trigger region becomes normalized progress, progress
//! becomes a discrete frame command for an external player, and time-coded
//! markdown blurbs land at fixed pixel offsets along the same scroll
//! timeline.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: `ViewportHost -> LayoutState` (letterboxed surface for the viewport)
//! 2. **Track**: `scroll offset + TriggerBounds -> progress` in `[0, 1]`
//! 3. **Drive**: `progress -> FrameIndex -> FramePlayer::seek_and_hold`
//! 4. **Overlay**: `Narrative -> blurb offsets` down the scroll trigger
//! 5. **Settle**: the first full progress completes the story and collapses the trigger
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure solvers**: sizing, progress, offsets, and frame mapping are pure
//!   functions; all mutable session state lives in one [`Scroller`].
//! - **No IO in the engine**: the viewport and the player sit behind capability
//!   traits; the engine only computes.
//! - **Single-threaded**: a session owns its state and takes events on one thread.
//!
//! # Getting started
//!
//! ```
//! use scrolly::{
//!     Narrative, RecordingPlayer, Scroller, ScrollerConfig, Size, StaticHost, TriggerBounds,
//! };
//!
//! let host = StaticHost::new(Size::new(1280.0, 800.0));
//! let player = RecordingPlayer::new(300);
//! let mut scroller = Scroller::new(host.clone(), ScrollerConfig::default(), Narrative::sample())
//!     .unwrap()
//!     .with_player(player.clone());
//! scroller.mount();
//! scroller.on_player_ready();
//!
//! // The host lays the trigger out, then scroll events drive frames.
//! host.set_trigger_bounds(TriggerBounds::new(800.0, scroller.trigger_height_px()));
//! host.set_scroll_y(7900.0);
//! scroller.handle_scroll();
//! assert_eq!(scroller.current_frame().0, 149);
//! assert_eq!(player.held_frame().unwrap().0, 149);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod engine;
mod foundation;
mod layout;
mod narrative;
mod scroll;
mod timeline;
mod view;

pub use driver::frame::frame_for_progress;
pub use driver::player::{FramePlayer, RecordingPlayer};
pub use engine::config::{DEFAULT_TOTAL_FRAMES, ScrollerConfig};
pub use engine::debounce::Debouncer;
pub use engine::host::{StaticHost, ViewportHost, is_touch_handset};
pub use engine::scroller::{Phase, Scroller};
pub use foundation::core::{FRAME_RATE, FrameIndex, Size};
pub use foundation::error::{ScrollyError, ScrollyResult};
pub use layout::sizer::{AspectClass, LayoutOptions, LayoutState, render_size};
pub use narrative::markup::{MarkdownMarkup, MarkupRenderer};
pub use narrative::model::{Narrative, Step};
pub use scroll::tracker::{ScrollState, TriggerBounds, scroll_progress};
pub use timeline::overlay::TimelineScale;
pub use view::html::render_page;
pub use view::scene::{Blurb, Scene, SurfaceView, TriggerView};
