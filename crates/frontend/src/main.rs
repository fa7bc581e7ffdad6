mod components;
mod pages;

use dioxus::prelude::*;
use sector66_shared::models::View;
use sector66_shared::registry;

#[derive(Debug, Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/tower/:tower")]
    TowerView { tower: String },
    #[route("/tower/:tower/floor/:floor")]
    FloorView { tower: String, floor: String },
    #[route("/tower/:tower/floor/:floor/unit/:unit")]
    UnitView { tower: String, floor: String, unit: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::project::ProjectPage {}
    }
}

#[component]
fn TowerView(tower: String) -> Element {
    rsx! {
        pages::tower::TowerPage { tower }
    }
}

#[component]
fn FloorView(tower: String, floor: String) -> Element {
    rsx! {
        pages::floor::FloorPage { tower, floor }
    }
}

#[component]
fn UnitView(tower: String, floor: String, unit: String) -> Element {
    rsx! {
        pages::unit::UnitPage { tower, floor, unit }
    }
}

/// The address of a view. Total: every view variant has exactly one route.
fn route_for(view: &View) -> Route {
    match view {
        View::Project => Route::Home {},
        View::Tower { tower } => Route::TowerView {
            tower: tower.clone(),
        },
        View::Floor { tower, floor } => Route::FloorView {
            tower: tower.clone(),
            floor: floor.clone(),
        },
        View::Unit { tower, floor, unit } => Route::UnitView {
            tower: tower.clone(),
            floor: floor.clone(),
            unit: unit.clone(),
        },
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    use_hook(|| {
        let registry = registry::global();
        tracing::info!(
            regions = registry.region_count(),
            floor_plans = registry.floor_plan_count(),
            "Loaded hotspot registry"
        );
    });

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for_covers_every_view() {
        assert_eq!(route_for(&View::Project), Route::Home {});
        assert_eq!(
            route_for(&View::Tower {
                tower: "T3".to_string(),
            }),
            Route::TowerView {
                tower: "T3".to_string(),
            }
        );
        assert_eq!(
            route_for(&View::Floor {
                tower: "T3".to_string(),
                floor: "5".to_string(),
            }),
            Route::FloorView {
                tower: "T3".to_string(),
                floor: "5".to_string(),
            }
        );
        assert_eq!(
            route_for(&View::Unit {
                tower: "T2".to_string(),
                floor: "5".to_string(),
                unit: "Unit 5".to_string(),
            }),
            Route::UnitView {
                tower: "T2".to_string(),
                floor: "5".to_string(),
                unit: "Unit 5".to_string(),
            }
        );
    }

    #[test]
    fn test_route_paths() {
        let route = Route::TowerView {
            tower: "T3".to_string(),
        };
        assert_eq!(route.to_string(), "/tower/T3");
        let route = Route::FloorView {
            tower: "T3".to_string(),
            floor: "5".to_string(),
        };
        assert_eq!(route.to_string(), "/tower/T3/floor/5");
    }
}
