use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::RequestRedraw;
use island_render_engine::engine::assets::scene_config::SceneConfig;
use island_render_engine::engine::scene::nodes::{EnvironmentMap, SceneNode, WaterSurface};
use island_render_engine::engine::simulation::{IslandSimulation, ObjectId};
use island_render_engine::engine::systems::IslandSimulationPlugin;

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(IslandSimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)));

    let world = app.world_mut();
    world.spawn((SceneNode::Island, Transform::default()));
    world.spawn((SceneNode::Trunk, Transform::default()));
    for leaf in 0..4 {
        world.spawn((SceneNode::Leaf(leaf), Transform::default()));
    }
    world.spawn((
        SceneNode::Coconut(ObjectId(1)),
        Transform::from_xyz(-5.0, 22.0, 0.0),
    ));
    world.spawn((
        SceneNode::Coconut(ObjectId(2)),
        Transform::from_xyz(5.0, 22.0, 0.0),
    ));
    world.spawn(WaterSurface::default());

    app.insert_resource(IslandSimulation::new(&SceneConfig::default(), 0.0));
    app
}

fn node_transform(app: &mut App, node: SceneNode) -> Transform {
    let world = app.world_mut();
    let mut query = world.query::<(&SceneNode, &Transform)>();
    query
        .iter(world)
        .find(|(n, _)| **n == node)
        .map(|(_, t)| *t)
        .expect("node exists")
}

#[test]
fn drives_scene_entities_each_frame() {
    let mut app = headless_app();
    for _ in 0..130 {
        app.update();
    }

    let slider = node_transform(&mut app, SceneNode::Coconut(ObjectId(1)));
    assert!(slider.translation.y < 21.0);

    let rester = node_transform(&mut app, SceneNode::Coconut(ObjectId(2)));
    assert_eq!(rester.translation, Vec3::new(5.0, 22.0, 0.0));

    let island = node_transform(&mut app, SceneNode::Island);
    assert_ne!(island.rotation, Quat::IDENTITY);

    let leaf = node_transform(&mut app, SceneNode::Leaf(0));
    assert_ne!(leaf.translation, Vec3::ZERO);

    let world = app.world_mut();
    let water_time = world
        .query::<&WaterSurface>()
        .iter(world)
        .map(|water| water.time)
        .next()
        .unwrap_or_default();
    assert!(water_time > 2.0);

    assert!(app.world().resource::<EnvironmentMap>().generation >= 130);
    assert!(!app.world().resource::<Events<RequestRedraw>>().is_empty());
}

#[test]
fn sunset_tints_the_clear_colour() {
    let mut app = headless_app();
    app.update();
    let noon = app.world().resource::<ClearColor>().0.to_srgba();

    // 0.05 s per frame: the sunset runs from 1 s to 11 s.
    for _ in 0..240 {
        app.update();
    }
    let dusk = app.world().resource::<ClearColor>().0.to_srgba();
    assert!(dusk.blue < noon.blue);
    assert!(app.world().resource::<IslandSimulation>().sun().elevation() < 10.0);
}

#[test]
fn app_exit_shuts_the_simulation_down() {
    let mut app = headless_app();
    for _ in 0..10 {
        app.update();
    }
    app.world_mut()
        .run_system_once(|mut exits: EventWriter<AppExit>| {
            exits.write(AppExit::Success);
        })
        .expect("exit event written");
    app.update();

    let frames = app.world().resource::<IslandSimulation>().frames();
    assert!(!app.world().resource::<IslandSimulation>().is_active());

    for _ in 0..200 {
        app.update();
    }
    let simulation = app.world().resource::<IslandSimulation>();
    assert_eq!(simulation.frames(), frames);
    assert!(simulation.context().body_of(ObjectId(1)).is_none());
}
