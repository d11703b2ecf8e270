//! PDF file picker state
//!
//! Lists one directory at a time: directories first, then files, each group
//! in case-insensitive alphabetical order. Hidden entries are skipped.

use std::path::{Path, PathBuf};

use ankillm_core::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl PickerEntry {
    pub fn is_pdf(&self) -> bool {
        !self.is_dir
            && self
                .path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }

    /// Directories and PDFs can be chosen; everything else is shown dimmed
    pub fn is_selectable(&self) -> bool {
        self.is_dir || self.is_pdf()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePickerState {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub cursor: usize,
}

impl FilePickerState {
    /// Create an empty picker rooted at `dir`; call [`Self::load`] to list it
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Re-read the current directory. On failure the listing is left empty.
    pub fn load(&mut self) -> Result<()> {
        self.cursor = 0;
        self.entries.clear();
        self.entries = read_entries(&self.dir)?;
        trace!("Listed {} entries in {}", self.entries.len(), self.dir.display());
        Ok(())
    }

    pub fn selected(&self) -> Option<&PickerEntry> {
        self.entries.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Descend into `dir`
    pub fn enter(&mut self, dir: PathBuf) -> Result<()> {
        self.dir = dir;
        self.load()
    }

    /// Go to the parent directory, keeping the cursor on the directory we
    /// came from. Returns `Ok(false)` at the filesystem root.
    pub fn go_up(&mut self) -> Result<bool> {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return Ok(false);
        };
        let previous = std::mem::replace(&mut self.dir, parent);
        self.load()?;

        if let Some(idx) = self.entries.iter().position(|e| e.path == previous) {
            self.cursor = idx;
        }
        Ok(true)
    }
}

fn read_entries(dir: &Path) -> Result<Vec<PickerEntry>> {
    let mut entries: Vec<PickerEntry> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                return None;
            }
            let path = entry.path();
            // Follows symlinks so linked directories stay navigable
            let is_dir = path.is_dir();
            Some(PickerEntry { name, path, is_dir })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(entries)
}
