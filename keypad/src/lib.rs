//! Debounced scanning of small key matrices.
//!
//! A [`matrix::Matrix`] drives a button grid column by column through a [`matrix::GridReader`],
//! runs every reading through a per-key [`debounce::LockoutDebouncer`], and reports each debounced
//! press and release, mapped to a symbol by the [`keymap::Keymap`], to an [`sink::EventSink`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
pub use embedded_hal;
pub use usbd_hid::descriptor::KeyboardReport;

pub mod channel;
pub mod config;
pub mod debounce;
pub mod event;
pub mod keymap;
pub mod matrix;
pub mod sink;

pub use config::KeypadConfig;
pub use debounce::{DebouncerTrait, KeyState, KeyTransition, LockoutDebouncer};
pub use event::KeyEvent;
pub use keymap::{KEYPAD_4X3, KEYPAD_4X4, Keymap};
pub use matrix::pin_grid::{ActiveLevel, PinGrid};
pub use matrix::{GridReader, Matrix};
pub use sink::{ChannelSink, EventSink, HidReportSink, LogSink};

pub type RawMutex = CriticalSectionRawMutex;
