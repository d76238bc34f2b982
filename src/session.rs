//! Viewer state: which lecture is showing and the document texts already fetched.

use std::collections::HashMap;

use crate::config::{Config, Direction};
use crate::error::LoadError;
use crate::parser::Converter;
use crate::source::DocumentSource;
use crate::debug;

/// A lecture ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureView {
    pub id: u32,
    pub title: String,
    pub pdf: String,
    /// Converted document body.
    pub html: String,
}

pub struct Session<S> {
    config: Config,
    source: S,
    converter: Converter,
    current: Option<u32>,
    cache: HashMap<u32, String>,
}

impl<S: DocumentSource> Session<S> {
    pub fn new(config: Config, source: S) -> Self {
        let current = config.start_id();
        Self {
            config,
            source,
            converter: Converter::new(),
            current,
            cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The lecture last opened successfully, or the start lecture before that.
    pub fn current(&self) -> Option<u32> {
        self.current
    }

    /// Fetch (or reuse) the lecture text, convert it and make it current.
    ///
    /// On failure nothing is cached and the current lecture does not change.
    pub fn open(&mut self, id: u32) -> Result<LectureView, LoadError> {
        let lecture = self
            .config
            .lecture(id)
            .ok_or(LoadError::UnknownLecture(id))?;

        if self.cache.contains_key(&id) {
            debug!("session"; "cache hit for lecture {}", id);
        } else {
            debug!("session"; "fetching `{}` for lecture {}", lecture.file, id);
            let text = self
                .source
                .fetch(&lecture.file)
                .map_err(|source| LoadError::Fetch {
                    id,
                    file: lecture.file.clone(),
                    source,
                })?;
            self.cache.insert(id, text);
        }
        let markdown = &self.cache[&id];

        let view = LectureView {
            id,
            title: lecture.title.clone(),
            pdf: lecture.pdf.clone(),
            html: self.converter.parse(markdown),
        };
        self.current = Some(id);
        Ok(view)
    }

    /// Open the lecture after the current one. `None` at the end of the catalog.
    pub fn next(&mut self) -> Option<Result<LectureView, LoadError>> {
        self.step(Direction::Next)
    }

    /// Open the lecture before the current one. `None` at the start of the catalog.
    pub fn previous(&mut self) -> Option<Result<LectureView, LoadError>> {
        self.step(Direction::Previous)
    }

    fn step(&mut self, direction: Direction) -> Option<Result<LectureView, LoadError>> {
        let target = self.config.neighbor(self.current?, direction)?;
        Some(self.open(target))
    }

    pub fn is_cached(&self, id: u32) -> bool {
        self.cache.contains_key(&id)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
