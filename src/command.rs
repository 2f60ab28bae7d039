//! Text commands understood by the simulation console.
//!
//! Every command maps to a menu action of the desktop app. Only `help`,
//! `about` and `quit` do anything; the rest report that the feature does
//! not exist yet.

/// A recognised console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Command {
    Help,
    About,
    New,
    Open,
    Save,
    SaveAs,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,
    Quit,
    Unknown,
}

/// Menu a command belongs to, used to group the help listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    File,
    Edit,
    Help,
    Other,
}

impl Section {
    const ORDER: [Section; 4] = [Section::File, Section::Edit, Section::Help, Section::Other];

    pub(crate) const fn display_name(&self) -> &'static str {
        match self {
            Section::File => "File Menu",
            Section::Edit => "Edit Menu",
            Section::Help => "Help Menu",
            Section::Other => "Other",
        }
    }
}

/// What the read loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

struct Entry {
    command: Command,
    names: &'static [&'static str],
    section: Section,
    summary: &'static str,
}

const TABLE: &[Entry] = &[
    Entry {
        command: Command::New,
        names: &["new"],
        section: Section::File,
        summary: "Create a new image (disabled)",
    },
    Entry {
        command: Command::Open,
        names: &["open"],
        section: Section::File,
        summary: "Open an image file (disabled)",
    },
    Entry {
        command: Command::Save,
        names: &["save"],
        section: Section::File,
        summary: "Save current image (disabled)",
    },
    Entry {
        command: Command::SaveAs,
        names: &["saveas", "save as"],
        section: Section::File,
        summary: "Save image with new name (disabled)",
    },
    Entry {
        command: Command::Undo,
        names: &["undo"],
        section: Section::Edit,
        summary: "Undo last action (disabled)",
    },
    Entry {
        command: Command::Redo,
        names: &["redo"],
        section: Section::Edit,
        summary: "Redo last undone action (disabled)",
    },
    Entry {
        command: Command::Cut,
        names: &["cut"],
        section: Section::Edit,
        summary: "Cut selection (disabled)",
    },
    Entry {
        command: Command::Copy,
        names: &["copy"],
        section: Section::Edit,
        summary: "Copy selection (disabled)",
    },
    Entry {
        command: Command::Paste,
        names: &["paste"],
        section: Section::Edit,
        summary: "Paste from clipboard (disabled)",
    },
    Entry {
        command: Command::Delete,
        names: &["delete"],
        section: Section::Edit,
        summary: "Delete selection (disabled)",
    },
    Entry {
        command: Command::SelectAll,
        names: &["selectall", "select all"],
        section: Section::Edit,
        summary: "Select all content (disabled)",
    },
    Entry {
        command: Command::About,
        names: &["about"],
        section: Section::Help,
        summary: "Show about information",
    },
    Entry {
        command: Command::Help,
        names: &["help", "h"],
        section: Section::Help,
        summary: "Show this help",
    },
    Entry {
        command: Command::Quit,
        names: &["quit", "exit", "q"],
        section: Section::Other,
        summary: "Exit application",
    },
];

/// Trim surrounding whitespace and lower-case. Inner spacing is kept.
pub(crate) fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

impl Command {
    /// Parse one line of input. Blank input yields `None`.
    pub(crate) fn parse(line: &str) -> Option<Command> {
        let word = normalize(line);
        if word.is_empty() {
            return None;
        }
        let command = TABLE
            .iter()
            .find(|e| e.names.contains(&word.as_str()))
            .map_or(Command::Unknown, |e| e.command);
        Some(command)
    }

    pub(crate) const fn flow(&self) -> Flow {
        match self {
            Command::Quit => Flow::Quit,
            _ => Flow::Continue,
        }
    }

    /// Placeholder reported by actions that are not implemented.
    pub(crate) const fn message(&self) -> Option<&'static str> {
        let msg = match self {
            Command::New => "[File → New] - Feature not yet implemented",
            Command::Open => "[File → Open] - Feature not yet implemented",
            Command::Save => "[File → Save] - Feature not yet implemented",
            Command::SaveAs => "[File → Save As] - Feature not yet implemented",
            Command::Undo => "[Edit → Undo] - Feature not yet implemented",
            Command::Redo => "[Edit → Redo] - Feature not yet implemented",
            Command::Cut => "[Edit → Cut] - Feature not yet implemented",
            Command::Copy => "[Edit → Copy] - Feature not yet implemented",
            Command::Paste => "[Edit → Paste] - Feature not yet implemented",
            Command::Delete => "[Edit → Delete] - Feature not yet implemented",
            Command::SelectAll => "[Edit → Select All] - Feature not yet implemented",
            Command::Help | Command::About | Command::Quit | Command::Unknown => return None,
        };
        Some(msg)
    }
}

/// Command listing grouped by menu.
pub(crate) fn help_text() -> String {
    let mut out = String::from("Available Commands:\n");
    for section in Section::ORDER {
        out.push('\n');
        out.push_str(section.display_name());
        out.push_str(":\n");
        for e in TABLE.iter().filter(|e| e.section == section) {
            out.push_str(&format!("    {:<10}- {}\n", e.names[0], e.summary));
        }
    }
    out
}

/// Tagline, version and copyright; shared by the console and the About dialog.
pub(crate) fn about_body() -> String {
    format!(
        "Simple Image Editing Tools\n\
         \n\
         Version {}\n\
         \n\
         Copyright © 2025 Elliotte Rusty Harold",
        env!("CARGO_PKG_VERSION")
    )
}

pub(crate) fn about_text() -> String {
    format!(
        "About Cropper\n\
         =============\n\
         \n\
         {}\n\
         \n\
         This is an application skeleton demonstrating\n\
         the standard menu structure.\n",
        about_body()
    )
}
