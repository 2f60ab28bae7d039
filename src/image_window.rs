//! One window per opened image.

use crate::geometry::{Size, fit_to_screen};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File extensions offered by the open dialog.
pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

pub(crate) struct ImageWindow {
    viewport_id: egui::ViewportId,
    window_id: egui::Id,
    title: String,
    path: PathBuf,
    texture: egui::TextureHandle,
    natural: Size,
    open: bool,
}

impl ImageWindow {
    /// Decode `path` and upload it as a texture.
    pub(crate) fn load(ctx: &egui::Context, path: &Path, serial: u64) -> Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("failed to open image {}", path.display()))?;
        let natural = Size::new(decoded.width() as f32, decoded.height() as f32);

        let max_side = ctx.input(|i| i.max_texture_side);
        let rgba = fit_texture(decoded, max_side).to_rgba8();
        let (w, h) = rgba.dimensions();
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());

        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let texture = ctx.load_texture(
            format!("image-{serial}"),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        Ok(Self {
            viewport_id: egui::ViewportId::from_hash_of(("image", serial)),
            window_id: egui::Id::new(("image-window", serial)),
            title,
            path: path.to_path_buf(),
            texture,
            natural,
            open: true,
        })
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn natural_size(&self) -> Size {
        self.natural
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Show the image in its own viewport, sized to fit `screen`.
    pub(crate) fn show(&mut self, ctx: &egui::Context, screen: Option<Size>) {
        let size = fit_to_screen(self.natural, screen);
        let builder = egui::ViewportBuilder::default()
            .with_title(&self.title)
            .with_inner_size(egui::Vec2::from(size))
            .with_resizable(true);

        let texture = &self.texture;
        let title = &self.title;
        let window_id = self.window_id;
        let mut close = false;
        ctx.show_viewport_immediate(self.viewport_id, builder, |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                // No native multi-window support; fall back to an in-app window.
                let mut open = true;
                egui::Window::new(title.as_str())
                    .id(window_id)
                    .open(&mut open)
                    .default_size(egui::Vec2::from(size))
                    .resizable(true)
                    .show(ctx, |ui| image_ui(ui, texture));
                close = !open;
                return;
            }

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| image_ui(ui, texture));
            if ctx.input(|i| i.viewport().close_requested()) {
                close = true;
            }
        });

        if close {
            log::debug!("closed {}", self.path.display());
            self.open = false;
        }
    }
}

/// Shrink `image` so neither side exceeds what the GPU accepts as a texture.
fn fit_texture(image: image::DynamicImage, max_side: usize) -> image::DynamicImage {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    if image.width() <= max_side && image.height() <= max_side {
        return image;
    }
    log::debug!(
        "downscaling {}x{} texture to fit {max_side}",
        image.width(),
        image.height()
    );
    image.thumbnail(max_side, max_side)
}

fn image_ui(ui: &mut egui::Ui, texture: &egui::TextureHandle) {
    let avail = ui.available_size();
    ui.centered_and_justified(|ui| {
        ui.add(
            egui::Image::new((texture.id(), texture.size_vec2()))
                .fit_to_exact_size(avail)
                .maintain_aspect_ratio(true),
        );
    });
}
