use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_window: Color32,
    pub bg_panel: Color32,
    pub bg_field: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_window: Color32::from_rgb(18, 20, 23),
        bg_panel: Color32::from_rgb(24, 27, 31),
        bg_field: Color32::from_rgb(34, 38, 43),
        outline: Color32::from_rgb(52, 58, 64),
        text_primary: Color32::from_rgb(208, 214, 220),
        text_muted: Color32::from_rgb(136, 144, 152),
        accent: Color32::from_rgb(112, 184, 202),
        warning: Color32::from_rgb(206, 152, 84),
        danger: Color32::from_rgb(198, 94, 84),
        success: Color32::from_rgb(110, 178, 130),
    }
}

/// Badge tones for the footer status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

pub fn status_tone_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Info => "Info",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.outline,
        StatusTone::Info => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.danger,
    }
}

/// Color for validation messages inside the add prompt.
pub fn error_text() -> Color32 {
    palette().danger
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_panel;
    visuals.panel_fill = palette.bg_panel;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_window;
    visuals.faint_bg_color = palette.bg_field;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_field;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_panel;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    style_widgets(&mut visuals.widgets.inactive, palette);
    style_widgets(&mut visuals.widgets.hovered, palette);
    style_widgets(&mut visuals.widgets.active, palette);
    style_widgets(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.window_stroke = Stroke::new(1.0, palette.outline);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn style_widgets(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(3);
    vis.bg_fill = palette.bg_field;
    vis.weak_bg_fill = palette.bg_field;
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
