//! Window registry: stable ids for windows owned by the library
//!
//! Callers hold a [`WindowId`] instead of a reference. Ids are never
//! reused, so a destroyed window's id stays invalid forever; all damage
//! operations that need a live window resolve the id here.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::window::Window;
use crate::WindowError;

/// Opaque handle to a window in a [`WindowSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns all windows and maps ids to them
#[derive(Debug, Default)]
pub struct WindowSet {
    windows: HashMap<WindowId, Window>,
    next_id: u32,
}

impl WindowSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a window and return its id
    pub fn create(&mut self, width: u16, height: u16) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        debug!("creating window {} ({}x{})", id, width, height);
        self.windows.insert(id, Window::new(width, height));
        id
    }

    /// Remove a window from the set, returning it
    pub fn destroy(&mut self, id: WindowId) -> Result<Window, WindowError> {
        debug!("destroying window {}", id);
        self.windows
            .remove(&id)
            .ok_or(WindowError::UnknownWindow(id))
    }

    /// Look up a window, if it is still alive
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Look up a window mutably, if it is still alive
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Resolve an id that the caller expects to be alive
    pub fn window(&self, id: WindowId) -> Result<&Window, WindowError> {
        self.get(id).ok_or(WindowError::UnknownWindow(id))
    }

    /// Resolve an id mutably
    pub fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, WindowError> {
        self.get_mut(id).ok_or(WindowError::UnknownWindow(id))
    }

    /// Number of live windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True if no windows are alive
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterate over live windows in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &Window)> {
        self.windows.iter().map(|(id, win)| (*id, win))
    }

    /// Mark a window fully dirty
    pub fn mark_all_dirty(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.window_mut(id)?.damage_mut().mark_all();
        Ok(())
    }

    /// Mark a row range of a window fully dirty
    pub fn mark_rows_dirty(
        &mut self,
        id: WindowId,
        start: u16,
        count: u16,
    ) -> Result<(), WindowError> {
        self.window_mut(id)?.damage_mut().mark_rows(start, count)
    }

    /// Discard all pending damage on a window
    pub fn clear_damage(&mut self, id: WindowId) -> Result<(), WindowError> {
        self.window_mut(id)?.damage_mut().clear_all();
        Ok(())
    }

    /// Set a row range of a window fully dirty or clean
    pub fn set_row_damage(
        &mut self,
        id: WindowId,
        start: u16,
        count: u16,
        dirty: bool,
    ) -> Result<(), WindowError> {
        self.window_mut(id)?.damage_mut().set_rows(start, count, dirty)
    }

    /// True if the row of that window has pending damage
    ///
    /// Unknown ids and rows outside the window report clean.
    pub fn is_row_dirty(&self, id: WindowId, row: u16) -> bool {
        self.get(id)
            .map(|win| win.damage().is_row_dirty(row))
            .unwrap_or(false)
    }

    /// True if any row of that window has pending damage
    ///
    /// Unknown ids report clean.
    pub fn is_dirty(&self, id: WindowId) -> bool {
        self.get(id)
            .map(|win| win.damage().is_dirty())
            .unwrap_or(false)
    }
}
