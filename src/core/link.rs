//! Link groups - cross-panel instrument synchronization
//!
//! A link group is not a stored entity; it is the equivalence class of
//! panels sharing the same non-null `link_group` token, computed on
//! demand. The base design has a single well-known token: "linking" a
//! panel joins it to that one shared group, which is enough for the
//! chart + order book + news + alerts all-track-one-coin workflow.
//! Multiple independent groups would only need distinct tokens; see
//! DESIGN.md for the extension point.

use log::debug;

use tradedeck_types::{Instrument, PanelData};

use super::constants::MAIN_LINK_GROUP;

/// Toggle a panel's link membership
///
/// Linked panels leave their group; unlinked panels join the shared
/// group. Unknown ids are ignored.
pub fn toggle_link(panels: &mut [PanelData], panel_id: &str) {
    if let Some(panel) = panels.iter_mut().find(|p| p.id == panel_id) {
        panel.link_group = match panel.link_group {
            Some(_) => None,
            None => Some(MAIN_LINK_GROUP.to_string()),
        };
        debug!("Panel {} link group is now {:?}", panel.id, panel.link_group);
    }
}

/// Number of panels in the given panel's link group, including itself
///
/// Returns 0 for an unlinked or unknown panel. Used for UI affordance
/// ("linked with N other panels"); a singleton group is inert, not an
/// error.
pub fn group_size(panels: &[PanelData], panel_id: &str) -> usize {
    let Some(group) = panels
        .iter()
        .find(|p| p.id == panel_id)
        .and_then(|p| p.link_group.as_deref())
    else {
        return 0;
    };

    panels
        .iter()
        .filter(|p| p.link_group.as_deref() == Some(group))
        .count()
}

/// Apply an instrument change from one panel to its whole link group
///
/// A linked origin fans the change out to every member of its group
/// (origin included) in one synchronous pass; an unlinked origin changes
/// alone. Returns the ids of the panels that were updated.
pub fn propagate_instrument_change(
    panels: &mut [PanelData],
    origin_id: &str,
    instrument: &Instrument,
) -> Vec<String> {
    let group = panels
        .iter()
        .find(|p| p.id == origin_id)
        .and_then(|p| p.link_group.clone());

    let mut updated = Vec::new();
    for panel in panels.iter_mut() {
        let in_scope = match &group {
            Some(token) => panel.link_group.as_deref() == Some(token.as_str()),
            None => panel.id == origin_id,
        };
        if in_scope {
            panel.instrument = instrument.clone();
            updated.push(panel.id.clone());
        }
    }

    debug!(
        "Instrument change to {} from panel {} applied to {} panel(s)",
        instrument.symbol,
        origin_id,
        updated.len()
    );
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedeck_types::{ContentKind, PanelGeometry};

    fn instrument(symbol: &str) -> Instrument {
        Instrument::new(symbol, symbol, "icons/generic.svg")
    }

    fn panel(id: &str, linked: bool) -> PanelData {
        let mut data = PanelData::new(
            ContentKind::Chart,
            instrument("BTCUSDT"),
            PanelGeometry::new(0.0, 0.0, 300.0, 200.0),
        );
        data.id = id.to_string();
        if linked {
            data.link_group = Some(MAIN_LINK_GROUP.to_string());
        }
        data
    }

    #[test]
    fn test_toggle_link_round_trip() {
        let mut panels = vec![panel("a", false)];

        toggle_link(&mut panels, "a");
        assert_eq!(panels[0].link_group.as_deref(), Some(MAIN_LINK_GROUP));

        toggle_link(&mut panels, "a");
        assert!(panels[0].link_group.is_none());
    }

    #[test]
    fn test_group_size() {
        let panels = vec![panel("a", true), panel("b", true), panel("c", false)];
        assert_eq!(group_size(&panels, "a"), 2);
        assert_eq!(group_size(&panels, "c"), 0);
        assert_eq!(group_size(&panels, "missing"), 0);
    }

    #[test]
    fn test_singleton_group_is_inert() {
        let mut panels = vec![panel("a", true), panel("b", false)];
        assert_eq!(group_size(&panels, "a"), 1);

        let updated = propagate_instrument_change(&mut panels, "a", &instrument("ETHUSDT"));
        assert_eq!(updated, vec!["a".to_string()]);
        assert_eq!(panels[1].instrument.symbol, "BTCUSDT");
    }

    #[test]
    fn test_propagation_covers_group_and_nothing_else() {
        // A and B linked, C unlinked: a change from A reaches B, not C
        let mut panels = vec![panel("a", true), panel("b", true), panel("c", false)];

        let updated = propagate_instrument_change(&mut panels, "a", &instrument("ETHUSDT"));

        assert_eq!(updated.len(), 2);
        assert_eq!(panels[0].instrument.symbol, "ETHUSDT");
        assert_eq!(panels[1].instrument.symbol, "ETHUSDT");
        assert_eq!(panels[2].instrument.symbol, "BTCUSDT");
    }

    #[test]
    fn test_unlinked_origin_changes_alone() {
        let mut panels = vec![panel("a", true), panel("b", true), panel("c", false)];

        let updated = propagate_instrument_change(&mut panels, "c", &instrument("SOLUSDT"));

        assert_eq!(updated, vec!["c".to_string()]);
        assert_eq!(panels[0].instrument.symbol, "BTCUSDT");
        assert_eq!(panels[1].instrument.symbol, "BTCUSDT");
        assert_eq!(panels[2].instrument.symbol, "SOLUSDT");
    }

    #[test]
    fn test_unknown_origin_changes_nothing() {
        let mut panels = vec![panel("a", true)];
        let updated = propagate_instrument_change(&mut panels, "missing", &instrument("ETHUSDT"));
        assert!(updated.is_empty());
        assert_eq!(panels[0].instrument.symbol, "BTCUSDT");
    }
}
