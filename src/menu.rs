//! Menu bar layout, shared by the GUI and its tests.

use crate::command::Command;
use std::fmt;

/// Key combination with the platform command modifier implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Shortcut {
    pub(crate) key: char,
    pub(crate) shift: bool,
}

impl Shortcut {
    const fn cmd(key: char) -> Self {
        Self { key, shift: false }
    }

    const fn cmd_shift(key: char) -> Self {
        Self { key, shift: true }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = if cfg!(target_os = "macos") { "Cmd" } else { "Ctrl" };
        if self.shift {
            write!(f, "{modifier}+Shift+{}", self.key.to_ascii_uppercase())
        } else {
            write!(f, "{modifier}+{}", self.key.to_ascii_uppercase())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Run(Command),
    CloseWindow,
    Minimize,
    Zoom,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MenuItem {
    pub(crate) title: &'static str,
    pub(crate) shortcut: Option<Shortcut>,
    pub(crate) action: MenuAction,
    pub(crate) enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MenuEntry {
    Item(MenuItem),
    Separator,
}

#[derive(Clone, Debug)]
pub(crate) struct Menu {
    pub(crate) title: &'static str,
    pub(crate) entries: Vec<MenuEntry>,
}

impl Menu {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    fn item(mut self, title: &'static str, shortcut: Option<Shortcut>, action: MenuAction) -> Self {
        self.entries.push(MenuEntry::Item(MenuItem {
            title,
            shortcut,
            action,
            enabled: true,
        }));
        self
    }

    // Present in the bar but greyed out until the feature exists.
    fn stub(mut self, title: &'static str, shortcut: Option<Shortcut>, command: Command) -> Self {
        self.entries.push(MenuEntry::Item(MenuItem {
            title,
            shortcut,
            action: MenuAction::Run(command),
            enabled: false,
        }));
        self
    }

    fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    pub(crate) fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|e| match e {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        })
    }
}

pub(crate) fn menu_bar() -> Vec<Menu> {
    use Command as C;
    use MenuAction::Run;

    vec![
        Menu::new("Cropper")
            .item("About Cropper", None, Run(C::About))
            .separator()
            .item("Quit Cropper", Some(Shortcut::cmd('q')), Run(C::Quit)),
        Menu::new("File")
            .stub("New", Some(Shortcut::cmd('n')), C::New)
            .separator()
            .item("Open...", Some(Shortcut::cmd('o')), Run(C::Open))
            .separator()
            .item("Close", Some(Shortcut::cmd('w')), MenuAction::CloseWindow)
            .separator()
            .stub("Save", Some(Shortcut::cmd('s')), C::Save)
            .stub("Save As...", Some(Shortcut::cmd_shift('s')), C::SaveAs),
        Menu::new("Edit")
            .stub("Undo", Some(Shortcut::cmd('z')), C::Undo)
            .stub("Redo", Some(Shortcut::cmd_shift('z')), C::Redo)
            .separator()
            .stub("Cut", Some(Shortcut::cmd('x')), C::Cut)
            .stub("Copy", Some(Shortcut::cmd('c')), C::Copy)
            .stub("Paste", Some(Shortcut::cmd('v')), C::Paste)
            .stub("Delete", None, C::Delete)
            .separator()
            .stub("Select All", Some(Shortcut::cmd('a')), C::SelectAll),
        Menu::new("Window")
            .item("Minimize", Some(Shortcut::cmd('m')), MenuAction::Minimize)
            .item("Zoom", None, MenuAction::Zoom),
        Menu::new("Help").item("Cropper Help", Some(Shortcut::cmd('?')), Run(C::Help)),
    ]
}

/// Shortcuts of enabled items, for keyboard dispatch.
pub(crate) fn enabled_shortcuts(menus: &[Menu]) -> Vec<(Shortcut, MenuAction)> {
    menus
        .iter()
        .flat_map(Menu::items)
        .filter(|item| item.enabled)
        .filter_map(|item| item.shortcut.map(|s| (s, item.action)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find<'a>(menus: &'a [Menu], title: &str) -> &'a MenuItem {
        menus
            .iter()
            .flat_map(Menu::items)
            .find(|i| i.title == title)
            .unwrap_or_else(|| panic!("missing item {title}"))
    }

    #[test]
    fn menus_in_standard_order() {
        let titles: Vec<_> = menu_bar().iter().map(|m| m.title).collect();
        assert_eq!(titles, ["Cropper", "File", "Edit", "Window", "Help"]);
    }

    #[test]
    fn open_is_enabled_and_editing_is_not() {
        let menus = menu_bar();
        assert!(find(&menus, "Open...").enabled);
        assert!(find(&menus, "Close").enabled);
        for title in ["New", "Save", "Save As...", "Undo", "Redo", "Cut", "Copy", "Paste", "Delete", "Select All"] {
            assert!(!find(&menus, title).enabled, "{title} should be disabled");
        }
    }

    #[test]
    fn shortcuts_are_unique() {
        let menus = menu_bar();
        let all: Vec<_> = menus.iter().flat_map(Menu::items).filter_map(|i| i.shortcut).collect();
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn disabled_items_do_not_get_shortcuts() {
        let shortcuts = enabled_shortcuts(&menu_bar());
        assert!(shortcuts.contains(&(Shortcut::cmd('o'), MenuAction::Run(Command::Open))));
        assert!(shortcuts.contains(&(Shortcut::cmd('q'), MenuAction::Run(Command::Quit))));
        assert!(!shortcuts.iter().any(|(s, _)| *s == Shortcut::cmd('z')));
        assert_eq!(shortcuts.len(), 5);
    }

    #[test]
    fn separators_are_skipped_by_items() {
        let menus = menu_bar();
        let file = &menus[1];
        assert_eq!(file.entries.len(), 8);
        assert_eq!(file.items().count(), 5);
    }

    #[test]
    fn shortcut_display_names_the_key() {
        let text = Shortcut::cmd_shift('s').to_string();
        assert!(text.ends_with("+Shift+S"));
    }
}
