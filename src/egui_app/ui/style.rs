use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::view_model::StatusVariant;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub danger: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(8, 14, 22),
        bg_secondary: Color32::from_rgb(16, 26, 38),
        bg_tertiary: Color32::from_rgb(30, 44, 60),
        panel_outline: Color32::from_rgb(44, 62, 82),
        text_primary: Color32::from_rgb(214, 228, 240),
        text_muted: Color32::from_rgb(136, 156, 176),
        accent_ice: Color32::from_rgb(110, 196, 255),
        warning: Color32::from_rgb(230, 164, 84),
        success: Color32::from_rgb(72, 214, 150),
        danger: Color32::from_rgb(240, 84, 96),
    }
}

/// Colors that distinguish the two result variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantColors {
    pub ring: Color32,
    pub glow: Color32,
    pub text: Color32,
}

pub fn variant_colors(variant: StatusVariant) -> VariantColors {
    let palette = palette();
    let base = match variant {
        StatusVariant::Safe => palette.success,
        StatusVariant::Danger => palette.danger,
    };
    VariantColors {
        ring: base,
        glow: base.gamma_multiply(0.25),
        text: base,
    }
}

pub fn error_banner_fill() -> Color32 {
    palette().danger.gamma_multiply(0.2)
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}
