//! Harbor theme and color utilities.

use ratatui::style::Color;
use waypoint_core::PlanType;

#[derive(Debug, Clone)]
pub struct HarborTheme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl HarborTheme {
    pub fn harbor() -> Self {
        Self {
            bg: Color::Rgb(13, 17, 23),
            bg_secondary: Color::Rgb(22, 27, 34),
            bg_highlight: Color::Rgb(33, 38, 45),
            primary: Color::Rgb(88, 166, 255),
            primary_dim: Color::Rgb(31, 77, 135),
            secondary: Color::Rgb(63, 185, 80),
            success: Color::Rgb(63, 185, 80),
            warning: Color::Rgb(210, 153, 34),
            error: Color::Rgb(248, 81, 73),
            text: Color::Rgb(230, 237, 243),
            text_dim: Color::Rgb(139, 148, 158),
            text_muted: Color::Rgb(72, 79, 88),
            border: Color::Rgb(48, 54, 61),
            border_focus: Color::Rgb(88, 166, 255),
        }
    }
}

pub fn plan_type_color(plan_type: PlanType, theme: &HarborTheme) -> Color {
    match plan_type {
        PlanType::Manual => theme.text,
        PlanType::Ai => theme.primary,
        PlanType::Hybrid => theme.warning,
    }
}
