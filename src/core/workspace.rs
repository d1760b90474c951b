//! Workspace controller - panel lifecycle, interaction intake, and
//! persistence triggers
//!
//! The whole workspace is an explicit owned struct; all mutation goes
//! through the methods below, never ambient assignment. The controller
//! enforces the ordering rules: creation appends without auto-focusing,
//! geometry changes are clamped before commit, removing the front panel
//! resets focus, and every committed mutation fires the on-change
//! callback so the embedder can persist write-through.

use log::{debug, info};

use tradedeck_types::{ContentKind, Exchange, Instrument, PanelData, PanelGeometry, Timeframe};

use super::constants::{
    DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_X, DEFAULT_PANEL_Y,
    NEW_PANEL_CASCADE,
};
use super::geometry::{apply_drag_delta, clamp_size, compute_canvas_extent};
use super::link;
use super::tiling::compute_tile_layout;

/// Callback invoked after every committed workspace mutation
///
/// The embedder persists the panel list here (write-through; there is no
/// explicit save action and no dirty tracking). Persistence failures are
/// the embedder's to log - the in-memory workspace stays authoritative
/// either way.
pub type ChangeCallback = Box<dyn Fn(&[PanelData])>;

/// The ordered panel collection plus session state
///
/// Z-order and the snap toggle are session state: they are owned here but
/// never persisted.
pub struct Workspace {
    panels: Vec<PanelData>,
    /// Panel currently raised above its siblings; None when none is focused
    front_panel_id: Option<String>,
    /// Workspace-wide drag quantization toggle
    snap_to_grid: bool,
    /// Panel that opened the currently-active instrument search, if any
    search_origin: Option<String>,
    /// Instrument applied to panels created without an explicit instrument
    default_instrument: Instrument,
    /// Timeframe stamped onto newly created panels
    global_timeframe: Timeframe,
    on_change: Option<ChangeCallback>,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new(default_instrument: Instrument) -> Self {
        Self::with_panels(Vec::new(), default_instrument)
    }

    /// Create a workspace from an already-validated panel list (restore path)
    pub fn with_panels(panels: Vec<PanelData>, default_instrument: Instrument) -> Self {
        Self {
            panels,
            front_panel_id: None,
            snap_to_grid: false,
            search_origin: None,
            default_instrument,
            global_timeframe: Timeframe::default(),
            on_change: None,
        }
    }

    /// Set a callback to be called after every committed mutation
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: Fn(&[PanelData]) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    fn notify_change(&self) {
        if let Some(callback) = &self.on_change {
            callback(&self.panels);
        }
    }

    // =====================================================
    // Read access
    // =====================================================

    pub fn panels(&self) -> &[PanelData] {
        &self.panels
    }

    pub fn panel(&self, id: &str) -> Option<&PanelData> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn front_panel_id(&self) -> Option<&str> {
        self.front_panel_id.as_deref()
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    /// Canvas size needed right now; recomputed on demand, never cached
    pub fn canvas_extent(&self) -> (f64, f64) {
        compute_canvas_extent(&self.panels)
    }

    /// Members of the panel's link group including itself; 0 when unlinked
    pub fn link_group_size(&self, id: &str) -> usize {
        link::group_size(&self.panels, id)
    }

    // =====================================================
    // Panel lifecycle
    // =====================================================

    /// Add a panel hosting the given content kind
    ///
    /// The panel is appended with cascaded default geometry, the default
    /// instrument, and the current global timeframe. It does not
    /// auto-focus; it becomes the front panel on its first interaction.
    pub fn add_panel(&mut self, content: ContentKind) -> String {
        let instrument = self.default_instrument.clone();
        self.add_panel_with_instrument(content, instrument)
    }

    fn add_panel_with_instrument(&mut self, content: ContentKind, instrument: Instrument) -> String {
        let cascade = self.panels.len() as f64 * NEW_PANEL_CASCADE;
        let geometry = PanelGeometry::new(
            DEFAULT_PANEL_X + cascade,
            DEFAULT_PANEL_Y + cascade,
            DEFAULT_PANEL_WIDTH,
            DEFAULT_PANEL_HEIGHT,
        );

        let mut panel = PanelData::new(content, instrument, geometry);
        panel.timeframe = self.global_timeframe;
        let id = panel.id.clone();

        info!("Adding panel {} ({})", id, content.id());
        self.panels.push(panel);
        self.notify_change();
        id
    }

    /// Remove a panel
    ///
    /// Removing the front panel resets focus to None, not to another
    /// arbitrary panel. The panel's link group simply shrinks.
    pub fn remove_panel(&mut self, id: &str) {
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        if self.panels.len() == before {
            debug!("remove_panel: unknown panel {}", id);
            return;
        }

        if self.front_panel_id.as_deref() == Some(id) {
            self.front_panel_id = None;
        }
        if self.search_origin.as_deref() == Some(id) {
            self.search_origin = None;
        }

        info!("Removed panel {}", id);
        self.notify_change();
    }

    // =====================================================
    // Geometry
    // =====================================================

    /// Replace a panel's geometry, clamping the size to the minimums
    pub fn update_geometry(&mut self, id: &str, geometry: PanelGeometry) {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            debug!("update_geometry: unknown panel {}", id);
            return;
        };

        let (width, height) = clamp_size(geometry.width, geometry.height);
        panel.geometry = PanelGeometry {
            width,
            height,
            ..geometry
        };
        self.notify_change();
    }

    /// Apply a pointer drag delta to a panel
    ///
    /// Deltas arrive in event order per panel; snapping follows the
    /// workspace-wide toggle.
    pub fn drag_by(&mut self, id: &str, dx: f64, dy: f64) {
        let snap = self.snap_to_grid;
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            debug!("drag_by: unknown panel {}", id);
            return;
        };

        panel.geometry = apply_drag_delta(panel.geometry, dx, dy, snap);
        self.notify_change();
    }

    /// Apply an in-progress or final resize to a panel
    pub fn resize_to(&mut self, id: &str, width: f64, height: f64) {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            debug!("resize_to: unknown panel {}", id);
            return;
        };

        let (width, height) = clamp_size(width, height);
        panel.geometry.width = width;
        panel.geometry.height = height;
        self.notify_change();
    }

    /// Re-tile every panel into a grid for the given viewport
    ///
    /// Atomic over the whole panel list: either every geometry is
    /// replaced or (for an empty workspace) nothing happens.
    pub fn auto_tile(&mut self, container_width: f64, container_height: f64) {
        let cells = compute_tile_layout(self.panels.len(), container_width, container_height);
        if cells.is_empty() {
            return;
        }

        for (panel, cell) in self.panels.iter_mut().zip(cells) {
            panel.geometry = cell;
        }
        info!(
            "Auto-tiled {} panels into {}x{} viewport",
            self.panels.len(),
            container_width,
            container_height
        );
        self.notify_change();
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    // =====================================================
    // Z-order
    // =====================================================

    /// Raise a panel above its siblings
    ///
    /// Called on any pointer interaction with the panel. Idempotent;
    /// unknown ids are ignored. Focus carries no other semantics.
    pub fn bring_to_front(&mut self, id: &str) {
        if self.panels.iter().any(|p| p.id == id) {
            self.front_panel_id = Some(id.to_string());
        } else {
            debug!("bring_to_front: unknown panel {}", id);
        }
    }

    /// Clear focus, called when a pointer interaction lands on empty
    /// canvas space
    pub fn clear_focus(&mut self) {
        self.front_panel_id = None;
    }

    // =====================================================
    // Instrument, linking, and per-panel settings
    // =====================================================

    /// Toggle a panel's membership in the shared link group
    pub fn toggle_link(&mut self, id: &str) {
        if self.panel(id).is_none() {
            debug!("toggle_link: unknown panel {}", id);
            return;
        }
        link::toggle_link(&mut self.panels, id);
        self.notify_change();
    }

    /// Route an instrument change
    ///
    /// With a target panel, the change fans out across the panel's link
    /// group (or just the panel when unlinked). With no target - a
    /// workspace-level search - a brand-new chart panel is created
    /// instead of mutating an existing one. Returns the affected ids.
    pub fn change_instrument(&mut self, target: Option<&str>, instrument: Instrument) -> Vec<String> {
        match target {
            Some(id) => {
                let updated =
                    link::propagate_instrument_change(&mut self.panels, id, &instrument);
                if !updated.is_empty() {
                    self.notify_change();
                }
                updated
            }
            None => {
                let id = self.add_panel_with_instrument(ContentKind::Chart, instrument);
                vec![id]
            }
        }
    }

    /// Record which panel opened the instrument search
    pub fn open_search(&mut self, panel_id: &str) {
        if self.panels.iter().any(|p| p.id == panel_id) {
            self.search_origin = Some(panel_id.to_string());
        }
    }

    /// Abandon the active search without changing anything
    pub fn cancel_search(&mut self) {
        self.search_origin = None;
    }

    /// Apply a search result to whichever panel opened the search
    ///
    /// A panel-scoped search routes to the recorded origin (and its link
    /// group); a workspace-level search - no recorded origin - creates a
    /// new panel. The origin attribution is consumed either way.
    pub fn submit_search(&mut self, instrument: Instrument) -> Vec<String> {
        let origin = self.search_origin.take();
        self.change_instrument(origin.as_deref(), instrument)
    }

    /// Change a panel's market data source
    pub fn change_exchange(&mut self, id: &str, exchange: Exchange) {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            debug!("change_exchange: unknown panel {}", id);
            return;
        };
        panel.exchange = exchange;
        self.notify_change();
    }

    /// Change a panel's candle interval
    pub fn change_timeframe(&mut self, id: &str, timeframe: Timeframe) {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            debug!("change_timeframe: unknown panel {}", id);
            return;
        };
        panel.timeframe = timeframe;
        self.notify_change();
    }

    /// Swap which widget a panel hosts, keeping everything else
    pub fn change_content(&mut self, id: &str, content: ContentKind) {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            debug!("change_content: unknown panel {}", id);
            return;
        };
        panel.content = content;
        self.notify_change();
    }

    /// Timeframe stamped onto newly created panels
    pub fn set_global_timeframe(&mut self, timeframe: Timeframe) {
        self.global_timeframe = timeframe;
    }
}
