//! Configuration module for Bli.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    AudioSettings, DispatchSettings, GeneralSettings, MuxSettings, Settings, VideoSettings,
};
