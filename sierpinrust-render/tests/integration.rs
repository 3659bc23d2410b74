use sierpinrust_core::{hit_test, leaves, SubdivisionParams, Triangle, View};
use sierpinrust_render::{Scene, SurfaceMapping};

/// Full frame pipeline: generate, focus via a simulated click, map to
/// a surface, build the scene, and resolve a hover back through the
/// inverse mapping.
#[test]
fn frame_pipeline_round_trip() {
    let params = SubdivisionParams::new(4).unwrap();
    let mut view = View::new();
    let all = leaves(Triangle::ROOT, &params);

    // Frame 1: root view on an 800×600 surface.
    let vp = view.viewport();
    let mapping = SurfaceMapping::new(&vp, 800.0, 600.0).unwrap();
    let scene = Scene::build(&all, &vp, &mapping);
    // Everything is visible except the apex leaves clipped above the
    // centroid-centered viewport.
    assert_eq!(scene.triangles.len() + scene.culled, all.len());
    assert_eq!(scene.culled, 3);

    // Simulate a click in the middle of a projected polygon.
    let target = scene.triangles[40].source;
    let (sx, sy) = mapping.logical_to_screen(target.centroid());
    let logical = mapping.screen_to_logical(sx, sy);
    assert!(vp.contains(logical));
    let hit = hit_test(&Triangle::ROOT, &params, logical).expect("click must land on a leaf");
    assert_eq!(hit, target);

    // Frame 2: the view focused on the clicked leaf.
    view.focus_on(hit);
    let vp = view.viewport();
    let mapping = SurfaceMapping::new(&vp, 800.0, 600.0).unwrap();
    let scene = Scene::build(&all, &vp, &mapping);
    assert!(scene.culled > 0);
    assert!(scene
        .triangles
        .iter()
        .any(|screen| screen.source == target));
}

/// The same inputs must always produce the same scene.
#[test]
fn scene_building_is_deterministic() {
    let params = SubdivisionParams::new(5).unwrap();
    let all = leaves(Triangle::ROOT, &params);
    let vp = View::new().viewport();
    let mapping = SurfaceMapping::new(&vp, 640.0, 480.0).unwrap();

    let first = Scene::build(&all, &vp, &mapping);
    let second = Scene::build(&all, &vp, &mapping);
    assert_eq!(first.triangles, second.triangles);
    assert_eq!(first.culled, second.culled);
}

/// A click in the pillarbox border must resolve to no triangle.
#[test]
fn border_clicks_resolve_to_nothing() {
    let params = SubdivisionParams::default();
    let view = View::new();
    let vp = view.viewport();
    // Wide surface: square-ish viewport gets pillarboxed.
    let mapping = SurfaceMapping::new(&vp, 1000.0, 500.0).unwrap();

    let logical = mapping.screen_to_logical(5.0, 250.0);
    assert!(!vp.contains(logical));
}
