//! Start-up splash shown in the main window.

use crate::config::SplashConfig;
use egui::{Align2, Color32, FontId, Rect, Stroke, pos2, vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Splash {
    hold: f64,
    fade: f64,
}

impl Splash {
    pub(crate) fn new(hold: f64, fade: f64) -> Self {
        Self {
            hold: hold.max(0.0),
            fade: fade.max(0.0),
        }
    }

    pub(crate) fn from_config(config: &SplashConfig) -> Self {
        Self::new(config.hold_secs, config.fade_secs)
    }

    /// Opacity `elapsed` seconds after the splash first appeared.
    pub(crate) fn opacity(&self, elapsed: f64) -> f32 {
        let elapsed = elapsed.max(0.0);
        if elapsed < self.hold {
            return 1.0;
        }
        if self.fade <= 0.0 {
            return 0.0;
        }
        let t = (elapsed - self.hold) / self.fade;
        (1.0 - t).clamp(0.0, 1.0) as f32
    }

    pub(crate) fn finished(&self, elapsed: f64) -> bool {
        elapsed >= self.hold + self.fade
    }
}

/// Paint the splash centred in `ui` at the given opacity.
pub(crate) fn show(ui: &mut egui::Ui, opacity: f32) {
    ui.multiply_opacity(opacity);
    let rect = ui.max_rect();
    let painter = ui.painter_at(rect);
    let center = rect.center();

    let accent = Color32::from_rgb(10, 132, 255);
    let icon = Rect::from_center_size(center - vec2(0.0, 60.0), vec2(100.0, 100.0));
    draw_crop_marks(&painter, icon, Stroke::new(6.0, accent));

    let text = ui.visuals().text_color();
    let weak = ui.visuals().weak_text_color();
    let title_y = icon.bottom() + 20.0;
    painter.text(
        pos2(center.x, title_y),
        Align2::CENTER_TOP,
        "Cropper",
        FontId::proportional(36.0),
        text,
    );
    painter.text(
        pos2(center.x, title_y + 52.0),
        Align2::CENTER_TOP,
        "Simple Image Editing Tools",
        FontId::proportional(18.0),
        weak,
    );
    painter.text(
        pos2(center.x, title_y + 92.0),
        Align2::CENTER_TOP,
        "Use the menu bar to get started",
        FontId::proportional(14.0),
        weak.gamma_multiply(0.7),
    );
}

// Two interlocking corner brackets, the usual crop tool glyph.
fn draw_crop_marks(painter: &egui::Painter, r: Rect, stroke: Stroke) {
    let inset = r.width() * 0.2;
    let a = pos2(r.left() + inset, r.top());
    painter.line_segment([a, pos2(a.x, r.bottom() - inset)], stroke);
    painter.line_segment(
        [pos2(a.x, r.bottom() - inset), pos2(r.right(), r.bottom() - inset)],
        stroke,
    );
    let b = pos2(r.right() - inset, r.bottom());
    painter.line_segment([b, pos2(b.x, r.top() + inset)], stroke);
    painter.line_segment([pos2(b.x, r.top() + inset), pos2(r.left(), r.top() + inset)], stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_while_holding() {
        let s = Splash::new(3.0, 0.5);
        assert_eq!(s.opacity(0.0), 1.0);
        assert_eq!(s.opacity(2.99), 1.0);
        assert!(!s.finished(3.2));
    }

    #[test]
    fn fades_linearly() {
        let s = Splash::new(3.0, 0.5);
        assert!((s.opacity(3.25) - 0.5).abs() < 1e-6);
        assert_eq!(s.opacity(3.5), 0.0);
        assert_eq!(s.opacity(10.0), 0.0);
        assert!(s.finished(3.5));
    }

    #[test]
    fn zero_fade_cuts() {
        let s = Splash::new(1.0, 0.0);
        assert_eq!(s.opacity(0.5), 1.0);
        assert_eq!(s.opacity(1.0), 0.0);
        assert!(s.finished(1.0));
    }

    #[test]
    fn negative_inputs_are_clamped() {
        let s = Splash::new(-1.0, -1.0);
        assert_eq!(s.opacity(-5.0), 0.0);
        assert_eq!(Splash::new(2.0, 1.0).opacity(-5.0), 1.0);
    }

    #[test]
    fn built_from_config() {
        let s = Splash::from_config(&SplashConfig::default());
        assert_eq!(s, Splash::new(3.0, 0.5));
    }
}
