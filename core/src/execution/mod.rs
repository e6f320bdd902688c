//! Step playback
//!
//! A synchronous [`PlaybackController`] owns the cursor over a step sequence;
//! a [`Player`] drives it from a tokio timer and publishes [`Frame`]s; a
//! [`Session`] binds a generator and a dataset source to a player.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod playback;
pub mod ticker;
pub mod player;
pub mod session;

pub use self::playback::{Frame, PlaybackController};
pub use self::player::{PlaybackError, Player};
pub use self::session::{Dataset, Session};
pub use self::ticker::Ticker;
