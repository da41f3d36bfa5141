// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast overlay.
//!
//! Colors, opacities and sizes shared by [`super::toast`], [`super::layer`]
//! and the demo window. Scales follow an 8px grid.
//!
//! ```
//! use iced_notify::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let faded = Color {
//!     a: opacity::HIDDEN_TOAST,
//!     ..palette::INFO_500
//! };
//! assert!(faded.a < 1.0);
//! ```

use iced::Color;

/// Category accents and neutrals.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    /// Accent of uncategorized toasts.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Dismiss button hover.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Dismiss button pressed or disabled.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
    /// Toasts that are hidden and waiting for teardown.
    pub const HIDDEN_TOAST: f32 = 0.35;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    /// Gap between a stack and the window edge.
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Category badge diameter.
    pub const BADGE: f32 = 10.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Side panel of the demo window; fits one toast plus margins.
    pub const PANEL_WIDTH: f32 = TOAST_WIDTH + 2.0 * super::spacing::LG;
}

pub mod typography {
    /// Toast title.
    pub const BODY_LG: f32 = 16.0;
    /// Toast content.
    pub const BODY: f32 = 14.0;
}

pub mod border {
    /// Category accent around a toast.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Raised toast.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::HIDDEN_TOAST > opacity::TRANSPARENT);
    assert!(opacity::HIDDEN_TOAST < opacity::OPAQUE);

    assert!(sizing::PANEL_WIDTH > sizing::TOAST_WIDTH);
    assert!(typography::BODY_LG > typography::BODY);
};
