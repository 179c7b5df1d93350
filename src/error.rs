//! Errors for structural misuse of the window tree.
//!
//! Input handling never fails: navigation dead-ends and unknown events are
//! ordinary outcomes. Only building the tree wrong is reported here.

use thiserror::Error;

use crate::window::WindowId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no live window with id {0:?}")]
    NoSuchWindow(WindowId),
    #[error("the screen already has a root window")]
    RootExists,
}

pub type Result<T> = std::result::Result<T, Error>;
