//! Directory walking implementation using walkdir.

use super::{filter::ImageFilter, ImageFile, ImageScanner, ScanResult};
use crate::error::ScanError;
use crate::events::{null_sender, Event, EventSender, ScanEvent};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Configuration for the folder scanner
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Descend into subfolders (default: only the folder's direct children)
    pub recursive: bool,
    /// Whether to follow symbolic links
    pub follow_symlinks: bool,
    /// Whether to include hidden files and directories
    pub include_hidden: bool,
    /// Custom extensions to include (None = png, jpg, jpeg)
    pub extensions: Option<Vec<String>>,
}

/// Scanner implementation using the walkdir crate
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: ImageFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let mut filter = ImageFilter::new().with_hidden(config.include_hidden);

        if let Some(ref extensions) = config.extensions {
            filter = filter.with_extensions(extensions.clone());
        }

        Self { config, filter }
    }

    fn is_hidden_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| name.starts_with('.'))
                .unwrap_or(false)
    }

    fn walk_error(error: walkdir::Error) -> ScanError {
        let path = error.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let message = error.to_string();

        match error.into_io_error() {
            Some(source) if source.kind() == std::io::ErrorKind::PermissionDenied => {
                ScanError::PermissionDenied { path }
            }
            Some(source) => ScanError::ReadDirectory { path, source },
            // Loops found while following links carry no io::Error
            None => ScanError::ReadDirectory {
                path,
                source: std::io::Error::other(message),
            },
        }
    }
}

impl ImageScanner for WalkDirScanner {
    fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        self.scan_with_events(root, &null_sender())
    }

    fn scan_with_events(
        &self,
        root: &Path,
        events: &EventSender,
    ) -> Result<ScanResult, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        events.send(Event::Scan(ScanEvent::Started {
            root: root.to_path_buf(),
        }));

        let mut images = Vec::new();
        let mut errors = Vec::new();

        let mut walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);

        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        let include_hidden = self.config.include_hidden;
        let entries = walker
            .into_iter()
            .filter_entry(|entry| include_hidden || !self.is_hidden_dir(entry));

        for entry_result in entries {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    let error = Self::walk_error(e);
                    tracing::warn!("{}", error);
                    events.send(Event::Scan(ScanEvent::Error {
                        path,
                        message: error.to_string(),
                    }));
                    errors.push(error);
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_dir() || !self.filter.should_include(path) {
                continue;
            }

            tracing::debug!(path = %path.display(), "found image");
            events.send(Event::Scan(ScanEvent::ImageFound {
                path: path.to_path_buf(),
            }));

            images.push(ImageFile {
                path: path.to_path_buf(),
                format: self.filter.get_format(path),
            });
        }

        images.sort_by(|a, b| a.path.cmp(&b.path));

        events.send(Event::Scan(ScanEvent::Completed {
            total_images: images.len(),
        }));

        Ok(ScanResult { images, errors })
    }
}
