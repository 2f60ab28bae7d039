use crate::{
    command::{self, Command},
    config::AppConfig,
    geometry::Size,
    image_window::{IMAGE_EXTENSIONS, ImageWindow},
    menu::{self, Menu, MenuAction, MenuEntry, Shortcut},
    splash::{self, Splash},
};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

const HELP_TEXT: &str = "Cropper is a simple image editing tool.\n\n\
                         Use the File menu to open and save images.\n\
                         Use the Edit menu to modify your images.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    About,
    Help,
}

pub(crate) struct CropperApp {
    menus: Vec<Menu>,
    shortcuts: Vec<(Shortcut, MenuAction)>,
    splash: Option<Splash>,
    /// Frame time at which the splash first appeared
    splash_started: Option<f64>,
    images: Vec<ImageWindow>,
    next_image: u64,
    /// Paths from the command line, opened on the first frame
    pending_open: Vec<PathBuf>,
    dialog: Option<Dialog>,
    /// Status message to display
    status_message: Option<(String, Instant)>,
}

impl CropperApp {
    pub(crate) fn new(config: &AppConfig, images: Vec<PathBuf>) -> Self {
        let menus = menu::menu_bar();
        let shortcuts = menu::enabled_shortcuts(&menus);
        Self {
            menus,
            shortcuts,
            splash: config.splash.enabled.then(|| Splash::from_config(&config.splash)),
            splash_started: None,
            images: Vec::new(),
            next_image: 0,
            pending_open: images,
            dialog: None,
            status_message: None,
        }
    }

    /// Set a status message that will auto-clear after a few seconds
    fn set_status(&mut self, msg: String) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.status_message = Some((format!("[{stamp}] {msg}"), Instant::now()));
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: MenuAction) {
        log::debug!("menu action {action:?}");
        match action {
            MenuAction::Run(Command::About) => self.dialog = Some(Dialog::About),
            MenuAction::Run(Command::Help) => self.dialog = Some(Dialog::Help),
            MenuAction::Run(Command::Open) => self.open_with_dialog(ctx),
            MenuAction::Run(Command::Quit) | MenuAction::CloseWindow => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            MenuAction::Minimize => ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true)),
            MenuAction::Zoom => {
                let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
            }
            MenuAction::Run(cmd) => {
                if let Some(msg) = cmd.message() {
                    self.set_status(msg.to_string());
                }
            }
        }
    }

    fn open_with_dialog(&mut self, ctx: &egui::Context) {
        let Some(paths) = rfd::FileDialog::new()
            .set_title("Open Image")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_files()
        else {
            return;
        };
        for path in paths {
            self.open_image(ctx, &path);
        }
    }

    fn open_image(&mut self, ctx: &egui::Context, path: &Path) {
        self.next_image += 1;
        match ImageWindow::load(ctx, path, self.next_image) {
            Ok(window) => {
                let natural = window.natural_size();
                log::info!(
                    "opened {} ({natural}, aspect {:.3})",
                    path.display(),
                    natural.aspect_ratio()
                );
                self.set_status(format!("Opened {}", window.title()));
                self.images.push(window);
            }
            Err(e) => {
                log::warn!("{e:#}");
                self.set_status(format!("Open failed: {e:#}"));
            }
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) -> Vec<MenuAction> {
        let mut actions = Vec::new();
        egui::MenuBar::new().ui(ui, |ui| {
            for menu in &self.menus {
                ui.menu_button(menu.title, |ui| {
                    for entry in &menu.entries {
                        let item = match entry {
                            MenuEntry::Separator => {
                                ui.separator();
                                continue;
                            }
                            MenuEntry::Item(item) => item,
                        };
                        let mut button = egui::Button::new(item.title);
                        if let Some(shortcut) = item.shortcut {
                            let text = keyboard_shortcut(shortcut)
                                .map(|ks| ui.ctx().format_shortcut(&ks))
                                .unwrap_or_else(|| shortcut.to_string());
                            button = button.shortcut_text(text);
                        }
                        if ui.add_enabled(item.enabled, button).clicked() {
                            actions.push(item.action);
                            ui.close_kind(egui::UiKind::Menu);
                        }
                    }
                });
            }
        });

        // Show status message if recent
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_TIMEOUT {
                ui.horizontal(|ui| {
                    ui.label(msg);
                });
            } else {
                self.status_message = None;
            }
        }
        actions
    }

    fn splash_ui(&mut self, ctx: &egui::Context) {
        let Some(splash) = self.splash else {
            egui::CentralPanel::default().show(ctx, |_ui| {});
            return;
        };
        let now = ctx.input(|i| i.time);
        let elapsed = now - *self.splash_started.get_or_insert(now);
        if splash.finished(elapsed) {
            log::debug!("splash finished after {elapsed:.2}s");
            self.splash = None;
            egui::CentralPanel::default().show(ctx, |_ui| {});
            return;
        }

        let opacity = splash.opacity(elapsed);
        egui::CentralPanel::default().show(ctx, |ui| splash::show(ui, opacity));
        ctx.request_repaint();
    }

    fn dialog_ui(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog else {
            return;
        };
        let (title, body) = match dialog {
            Dialog::About => ("Cropper", command::about_body()),
            Dialog::Help => ("Cropper Help", HELP_TEXT.to_string()),
        };

        let mut ok = false;
        let response = egui::Modal::new(egui::Id::new(("dialog", dialog as u8))).show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.heading(title);
            ui.add_space(8.0);
            ui.label(body);
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ok = ui.button("OK").clicked();
            });
        });
        if ok || response.should_close() {
            self.dialog = None;
        }
    }
}

fn keyboard_shortcut(shortcut: Shortcut) -> Option<egui::KeyboardShortcut> {
    let key = match shortcut.key {
        '?' => egui::Key::Questionmark,
        c => egui::Key::from_name(&c.to_ascii_uppercase().to_string())?,
    };
    let modifiers = if shortcut.shift {
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT
    } else {
        egui::Modifiers::COMMAND
    };
    Some(egui::KeyboardShortcut::new(modifiers, key))
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for path in std::mem::take(&mut self.pending_open) {
            self.open_image(ctx, &path);
        }

        // Keyboard shortcuts - check input first, then apply changes
        let mut actions: Vec<MenuAction> = self
            .shortcuts
            .iter()
            .filter(|(shortcut, _)| {
                keyboard_shortcut(*shortcut)
                    .is_some_and(|ks| ctx.input_mut(|i| i.consume_shortcut(&ks)))
            })
            .map(|(_, action)| *action)
            .collect();

        let clicked = egui::TopBottomPanel::top("menubar")
            .show(ctx, |ui| self.top_bar(ui))
            .inner;
        actions.extend(clicked);

        self.splash_ui(ctx);
        self.dialog_ui(ctx);

        let screen = ctx.input(|i| i.viewport().monitor_size).map(Size::from);
        for window in &mut self.images {
            window.show(ctx, screen);
        }
        self.images.retain(ImageWindow::is_open);

        for action in actions {
            self.dispatch(ctx, action);
        }

        if self.status_message.is_some() {
            ctx.request_repaint_after(STATUS_TIMEOUT);
        }
    }
}
