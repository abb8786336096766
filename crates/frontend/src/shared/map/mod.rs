//! Map construction for facility and hub views
//!
//! Builds a serializable configuration (layers, controls, interactions,
//! styles) and hands it to the external map renderer through the
//! `wasm_bindgen` boundary. Rendering and pointer handling live entirely on
//! the JS side; this module only decides what the map may do.

pub mod styles;
pub mod view;

use serde::Serialize;
use styles::{MapStyles, MAP_STYLES};
use wasm_bindgen::prelude::*;

/// Map center, WGS84 lon/lat (central Helsinki)
pub const MAP_CENTER: [f64; 2] = [24.941025, 60.173324];
pub const MAP_ZOOM: u8 = 12;

/// Pointer/keyboard interactions the map may enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Interaction {
    KeyboardZoom,
    DoubleClickZoom,
    MouseWheelZoom,
    DragZoom,
    KeyboardPan,
    DragPan,
}

/// On-map controls, always present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    Attribution,
    Zoom,
    FullScreen,
}

/// Style key a vector layer renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    Facility,
    SelectedFacility,
    Hub,
}

/// Extra vector layer on top of the base tile layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorLayer {
    pub name: &'static str,
    pub style: StyleKey,
    /// GeoJSON FeatureCollection
    pub features: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    /// Read-only maps keep keyboard zoom but take no pointer input
    pub read_only: bool,
    pub layers: Vec<VectorLayer>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapConfig<'a> {
    center: [f64; 2],
    zoom: u8,
    controls: Vec<Control>,
    interactions: Vec<Interaction>,
    layers: &'a [VectorLayer],
    styles: &'a MapStyles,
}

/// Interactions for the given mode
///
/// Keyboard zoom stays available in read-only mode; everything driven by
/// the pointer does not.
pub fn interactions_for(read_only: bool) -> Vec<Interaction> {
    let mut interactions = vec![Interaction::KeyboardZoom];
    if !read_only {
        interactions.extend([
            Interaction::DoubleClickZoom,
            Interaction::MouseWheelZoom,
            Interaction::DragZoom,
            Interaction::KeyboardPan,
            Interaction::DragPan,
        ]);
    }
    interactions
}

pub fn controls() -> Vec<Control> {
    vec![Control::Attribution, Control::Zoom, Control::FullScreen]
}

/// Wrap raw GeoJSON geometries into a FeatureCollection for a vector layer
pub fn feature_collection<'a>(
    geometries: impl IntoIterator<Item = &'a serde_json::Value>,
) -> serde_json::Value {
    let features: Vec<serde_json::Value> = geometries
        .into_iter()
        .map(|geometry| {
            serde_json::json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {},
            })
        })
        .collect();
    serde_json::json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

#[wasm_bindgen]
extern "C" {
    /// Map renderer entry point provided by the host page
    #[wasm_bindgen(js_namespace = window, js_name = renderFacilityMap)]
    fn render_facility_map(target: &web_sys::HtmlElement, config: JsValue);
}

/// Construct a map surface on `target`
pub fn create_map(target: &web_sys::HtmlElement, options: &MapOptions) -> Result<(), String> {
    let config = MapConfig {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        controls: controls(),
        interactions: interactions_for(options.read_only),
        layers: &options.layers,
        styles: &MAP_STYLES,
    };
    let config = serde_wasm_bindgen::to_value(&config).map_err(|e| e.to_string())?;
    render_facility_map(target, config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_map_keeps_only_keyboard_zoom() {
        assert_eq!(interactions_for(true), vec![Interaction::KeyboardZoom]);
    }

    #[test]
    fn editable_map_enables_pointer_interactions() {
        let interactions = interactions_for(false);
        assert_eq!(interactions[0], Interaction::KeyboardZoom);
        for expected in [
            Interaction::DoubleClickZoom,
            Interaction::MouseWheelZoom,
            Interaction::DragZoom,
            Interaction::KeyboardPan,
            Interaction::DragPan,
        ] {
            assert!(interactions.contains(&expected));
        }
    }

    #[test]
    fn controls_do_not_depend_on_mode() {
        assert_eq!(
            controls(),
            vec![Control::Attribution, Control::Zoom, Control::FullScreen]
        );
    }

    #[test]
    fn feature_collection_wraps_each_geometry() {
        let point = serde_json::json!({"type": "Point", "coordinates": [24.9, 60.2]});
        let collection = feature_collection([&point]);
        assert_eq!(collection["type"], "FeatureCollection");
        assert_eq!(collection["features"][0]["geometry"], point);
    }
}
