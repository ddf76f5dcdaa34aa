use std::{fmt, io};

use ratatui::{layout::Rect, text::Line, widgets::Block, Frame};

use crate::{
    model::build::Build,
    service::{
        data_manager::{DataManager, DataRetrievalError},
        filter::{FilterSelection, SortDirection},
        lookup::{IdNotFoundError, LookupService},
    },
};

pub mod repl;
pub mod views;

/// Read-only bundle handed to view constructors.
pub struct Controller<'a> {
    pub manager: &'a DataManager,
    pub lookup: &'a LookupService<'a>,
    pub filters: &'a FilterSelection,
    pub sort: SortDirection,
    pub build: &'a Build,
}

pub struct RenderContext<'a, 'b> {
    pub frame: &'a mut Frame<'b>,
    pub area: Rect,
    pub scroll_offset: u16,
    pub block: Block<'static>,
    /// Potato mode: strip all color styling.
    pub plain: bool,
}

pub type ViewResult = Result<(), ReplError>;
pub type TextCreationResult = Result<Vec<Line<'static>>, ViewDataError>;

#[derive(Debug)]
pub enum ViewDataError {
    Data(DataRetrievalError),
    Lookup(IdNotFoundError),
}

impl fmt::Display for ViewDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewDataError::Data(err) => write!(f, "{}", err),
            ViewDataError::Lookup(err) => write!(f, "{}", err),
        }
    }
}

impl From<DataRetrievalError> for ViewDataError {
    fn from(error: DataRetrievalError) -> Self {
        Self::Data(error)
    }
}

impl From<IdNotFoundError> for ViewDataError {
    fn from(error: IdNotFoundError) -> Self {
        Self::Lookup(error)
    }
}

#[derive(Debug)]
pub enum ReplError {
    Io(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Io(err) => write!(f, "Terminal error: {}", err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
