//! # twitch-tags
//!
//! Decodes single IRCv3-tagged Twitch chat lines into typed events.
//!
//! ## Features
//!
//! - Tag segment parsing into a borrowed, last-write-wins [`TagMap`]
//! - Payload isolation that keeps every embedded ` :` and `:` intact
//! - Typed [`ChatMessage`] and [`Resub`] events with a derived moderator flag
//! - Configurable wire convention ([`DecoderConfig`]) for bare tag lines or
//!   full TMI lines with an IRC envelope
//! - Optional `tracing` instrumentation and `serde` support

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use twitch_tags::decode_chat;
//!
//! let raw = "display-name=Ash;color=#FF0000;mod=0;subscriber=1;turbo=0;room-id=1;user-id=2 \
//!            :hello world :) :smile";
//! let msg = decode_chat(raw).expect("valid chat line");
//!
//! assert_eq!(msg.username, "Ash");
//! assert!(msg.is_subscriber);
//! assert_eq!(msg.text, "hello world :) :smile");
//! ```
//!
//! ## Wire convention
//!
//! By default a line is `[@]<tags> :<payload>`. A single leading `@` is
//! stripped so tag keys are always bare, and the payload is everything
//! after the first ` :`. Lines taken straight off a TMI socket carry an
//! envelope before the payload; decode those with [`DecoderConfig::tmi`].

pub mod config;
pub mod decode;
pub mod error;
pub mod event;
pub mod message;

pub use self::config::{DecoderConfig, Framing, MarkerPolicy};
pub use self::decode::{decode, decode_chat, decode_resub, Decoder};
pub use self::error::{DecodeError, Result};
pub use self::event::{ChatMessage, EventKind, Resub, TwitchEvent};
pub use self::message::{parse_tags, unescape_tag_value, TagMap};
