mod common;

use common::boxed_scene;
use rustlight::scene::buddy_offsets;
use rustlight::{CommandList, Config, DrawCommand, FrameStyle, Rgba, Scene, SceneLayout};

fn default_scene(config: &Config) -> Scene {
    let mut scene = Scene::from_config(config, &SceneLayout::default()).unwrap();
    scene.set_light(700.0, 150.0);
    scene
}

#[test]
fn default_scene_composes_nine_layers() {
    let config = Config::default();
    let scene = default_scene(&config);

    // Border plus the five built-in obstacles
    assert_eq!(scene.shapes().len(), 9);

    let frame = scene.compose().unwrap();
    assert_eq!(frame.layers.len(), 9);
    for (layer, (dx, dy)) in frame.layers.iter().zip(buddy_offsets(7.0)) {
        assert_eq!(layer.source, scene.light().offset(dx, dy));
        assert!(!layer.polygon.is_empty());
    }
}

#[test]
fn primary_layer_is_opaque_and_buddies_are_faint() {
    let config = Config::default();
    let scene = default_scene(&config);
    let frame = scene.compose().unwrap();

    let mut surface = CommandList::new();
    frame.render(&mut surface, &FrameStyle::from_config(&config));

    let fills: Vec<&Rgba> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPolygon { color, .. } => Some(color),
            _ => None,
        })
        .collect();

    assert_eq!(fills.len(), 9);
    assert_eq!(*fills[0], Rgba::WHITE);
    assert!(fills[1..].iter().all(|c| (c.a - 0.2).abs() < 1e-6));
}

#[test]
fn fills_are_hubbed_on_their_light() {
    let config = Config::default();
    let scene = default_scene(&config);
    let frame = scene.compose().unwrap();

    let mut surface = CommandList::new();
    frame.render(&mut surface, &FrameStyle::default());

    let hubs: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPolygon { hub, .. } => Some(*hub),
            _ => None,
        })
        .collect();
    let sources: Vec<_> = frame.layers.iter().map(|l| l.source).collect();
    assert_eq!(hubs, sources);
}

#[test]
fn zero_jitter_casts_one_ray_per_vertex() {
    let config = Config::parse("[sampling]\njitter = 0.0").unwrap();
    let scene = default_scene(&config);

    // 4 two-point border edges + 3 + 3 + 4 + 4 + 5 obstacle vertices
    assert_eq!(scene.visibility().unwrap().len(), 27);
}

#[test]
fn default_jitter_casts_five_rays_per_vertex() {
    let config = Config::default();
    let scene = default_scene(&config);
    assert_eq!(scene.visibility().unwrap().len(), 27 * 5);
}

#[test]
fn config_canvas_shapes_the_border() {
    let config = Config::parse("[canvas]\nwidth = 640.0\nheight = 480.0").unwrap();
    let layout = SceneLayout {
        width: config.canvas.width,
        height: config.canvas.height,
        obstacles: Vec::new(),
    };
    let scene = Scene::from_config(&config, &layout).unwrap();
    assert_eq!(scene.width(), 640.0);

    let polygon = scene.visibility().unwrap().simplified(0.01);
    assert_eq!(polygon.len(), 4);
    assert!(polygon
        .points()
        .iter()
        .any(|p| (p.x - 640.0).abs() < 0.01 && (p.y - 480.0).abs() < 0.01));
}

#[test]
fn invalid_layout_fails_scene_construction() {
    let layout = SceneLayout {
        width: 100.0,
        height: 100.0,
        obstacles: vec![vec![[5.0, 5.0]]],
    };
    assert!(Scene::from_config(&Config::default(), &layout).is_err());
}

#[test]
fn light_follows_updates_between_frames() {
    let mut scene = boxed_scene((100.0, 100.0), &[]);
    let before = scene.compose().unwrap().primary().unwrap().clone();

    scene.set_light(900.0, 500.0);
    let frame = scene.compose().unwrap();
    let after = frame.primary().unwrap();

    assert_eq!(after.source.x, 900.0);
    assert_ne!(&before, after);
}

#[test]
fn light_near_the_edge_still_composes() {
    let config = Config::default();
    let mut scene = default_scene(&config);

    for (x, y) in [(1.0, 300.0), (3.0, 300.0), (500.0, 2.0), (999.0, 300.0), (500.0, 598.0)] {
        scene.set_light(x, y);
        let frame = scene
            .compose()
            .unwrap_or_else(|e| panic!("light at ({}, {}): {:#}", x, y, e));

        assert_eq!(frame.layers.len(), 9);
        let primary = frame.primary().expect("primary layer");
        assert_eq!(primary.source, scene.light());
        assert_eq!(primary, &scene.visibility().unwrap());

        for layer in &frame.layers {
            let p = layer.source;
            assert!(
                p.x > 0.0 && p.x < scene.width() && p.y > 0.0 && p.y < scene.height(),
                "buddy source {:?} left the border",
                p
            );
        }
    }
}
