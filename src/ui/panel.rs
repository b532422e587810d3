//! Parameter panel
//!
//! Two live values tuned at runtime. The panel only edits [`PanelParams`];
//! the caller pushes them onto the scene when [`parameter_panel`] reports a
//! change.

use std::ops::RangeInclusive;

/// Allowed range of [`PanelParams::vertical_offset`].
pub const VERTICAL_OFFSET_RANGE: RangeInclusive<f32> = -3.0..=3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelParams {
    /// Y position of the title, within [`VERTICAL_OFFSET_RANGE`]
    pub vertical_offset: f32,
    pub show_title: bool,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            vertical_offset: 0.0,
            show_title: true,
        }
    }
}

impl PanelParams {
    /// Sets the offset, clamped to the allowed range. Non-finite values are ignored.
    pub fn set_vertical_offset(&mut self, offset: f32) {
        if offset.is_finite() {
            self.vertical_offset =
                offset.clamp(*VERTICAL_OFFSET_RANGE.start(), *VERTICAL_OFFSET_RANGE.end());
        }
    }

    pub fn set_show_title(&mut self, show: bool) {
        self.show_title = show;
    }
}

/// Draws the parameter window. Returns whether any value changed.
pub fn parameter_panel(ui: &imgui::Ui, params: &mut PanelParams) -> bool {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return false;
    }

    let mut changed = false;
    ui.window("Parameters")
        .size([260.0, 110.0], imgui::Condition::FirstUseEver)
        .position([display_size[0] - 280.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(false)
        .collapsible(true)
        .build(|| {
            let mut offset = params.vertical_offset;
            if ui.slider(
                "y",
                *VERTICAL_OFFSET_RANGE.start(),
                *VERTICAL_OFFSET_RANGE.end(),
                &mut offset,
            ) {
                params.set_vertical_offset(offset);
                changed = true;
            }

            let mut show = params.show_title;
            if ui.checkbox("show title", &mut show) {
                params.set_show_title(show);
                changed = true;
            }
        });

    changed
}
