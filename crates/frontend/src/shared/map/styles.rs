//! Map feature styles
//!
//! Constructed once at startup and passed by reference into map
//! construction; never mutated afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Circle marker rendered at a point feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    pub radius: u32,
    pub fill_color: &'static str,
    pub stroke_color: Option<&'static str>,
    pub stroke_width: Option<u32>,
}

/// Fill/stroke/marker style of one vector layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub fill_color: Option<&'static str>,
    pub stroke_color: Option<&'static str>,
    pub stroke_width: Option<u32>,
    pub circle: Option<CircleStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyles {
    pub facility: Style,
    pub selected_facility: Style,
    pub hub: Style,
}

pub static MAP_STYLES: Lazy<MapStyles> = Lazy::new(|| MapStyles {
    facility: Style {
        fill_color: Some("rgba(255, 255, 255, 0.5)"),
        stroke_color: Some("#FF6319"),
        stroke_width: Some(2),
        circle: Some(CircleStyle {
            radius: 7,
            fill_color: "#ffcc33",
            stroke_color: None,
            stroke_width: None,
        }),
    },
    selected_facility: Style {
        fill_color: Some("rgba(255, 255, 255, 0.5)"),
        stroke_color: Some("#007AC9"),
        stroke_width: Some(3),
        circle: None,
    },
    hub: Style {
        fill_color: None,
        stroke_color: None,
        stroke_width: None,
        circle: Some(CircleStyle {
            radius: 8,
            fill_color: "#ffffff",
            stroke_color: Some("#000000"),
            stroke_width: Some(3),
        }),
    },
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_and_selection_strokes_differ() {
        let styles = &*MAP_STYLES;
        assert_ne!(styles.facility.stroke_color, styles.selected_facility.stroke_color);
        assert_eq!(styles.facility.stroke_color, Some("#FF6319"));
        assert_eq!(styles.selected_facility.stroke_color, Some("#007AC9"));
    }

    #[test]
    fn hub_renders_as_marker_only() {
        let hub = MAP_STYLES.hub;
        assert!(hub.circle.is_some());
        assert_eq!(hub.fill_color, None);
    }
}
