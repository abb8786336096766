use super::{create_map, MapOptions, VectorLayer};
use leptos::prelude::*;

/// Host element for a map surface
///
/// The map is constructed once the div is mounted; the renderer owns the
/// element from then on.
#[component]
pub fn MapView(
    #[prop(optional)] read_only: bool,
    #[prop(optional)] layers: Vec<VectorLayer>,
) -> impl IntoView {
    let host = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |initialized: Option<bool>| {
        if initialized.unwrap_or(false) {
            return true;
        }
        let Some(element) = host.get() else {
            return false;
        };
        let options = MapOptions {
            read_only,
            layers: layers.clone(),
        };
        if let Err(e) = create_map(&element, &options) {
            log::error!("map init failed: {}", e);
        }
        true
    });

    view! { <div class="map-host" node_ref=host></div> }
}
