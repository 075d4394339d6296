//! Fuzz target for sidebar options documents.
//!
//! Tests that arbitrary JSON never panics the options parser or the render planner.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slideout_core::{plan, Frame, SidebarConfig, SidebarOptions, VisualState};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(options) = SidebarOptions::from_json(json) {
        let mut config = SidebarConfig::new("fuzz", true);
        config.options = options;
        let _ = plan(&config, Frame::settled(VisualState::Open));
        let _ = plan(&config, Frame::settled(VisualState::Closed));
    }
});
