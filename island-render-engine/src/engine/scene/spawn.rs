use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;

use constants::render_settings::{
    BARK_COLOUR, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION, CAMERA_TARGET,
    COCONUT_SEGMENTS, ISLAND_COLOUR, ISLAND_SEGMENTS, LEAF_COLOUR, SUN_COLOUR, SUN_ILLUMINANCE,
    TRUNK_SEGMENTS, WATER_COLOUR,
};

use super::nodes::{SceneNode, SunLight, WaterSurface};
use crate::engine::assets::scene_config::{FoliageConfig, SceneConfig};
use crate::engine::scene::height_field::HeightField;

/// Build every visual entity of the island scene from the loaded config.
pub fn spawn_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_island(&mut commands, &config.island, &mut meshes, &mut materials);
    spawn_palm(&mut commands, &config.foliage, &mut meshes, &mut materials);
    spawn_coconuts(&mut commands, &config, &mut meshes, &mut materials);
    spawn_water(&mut commands, &config, &mut meshes, &mut materials);
    spawn_camera(&mut commands);
    spawn_sun(&mut commands);

    info!(
        "Scene spawned: island r={}, {} leaves, {} coconut(s)",
        config.island.radius,
        config.foliage.leaves.len(),
        config.coconuts.len()
    );
}

/// Flattened sphere whose upper half matches the height field.
fn spawn_island(
    commands: &mut Commands,
    field: &HeightField,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let mesh = Sphere::new(field.radius)
        .mesh()
        .uv(ISLAND_SEGMENTS, ISLAND_SEGMENTS);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ISLAND_COLOUR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, field.centre_height, 0.0)
            .with_scale(Vec3::new(1.0, field.vertical_scale, 1.0)),
        SceneNode::Island,
    ));
}

/// Trunk with the leaves parented to it so they follow the bend.
fn spawn_palm(
    commands: &mut Commands,
    foliage: &FoliageConfig,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let trunk = &foliage.trunk;
    let trunk_mesh = Cylinder::new(trunk.radius, trunk.height)
        .mesh()
        .resolution(TRUNK_SEGMENTS);
    let bark = materials.add(StandardMaterial {
        base_color: BARK_COLOUR,
        perceptual_roughness: 1.0,
        ..default()
    });

    let [width, length] = foliage.leaf_size;
    let leaf_mesh = meshes.add(Ellipse::new(width * 0.5, length * 0.5));
    let leaf_material = materials.add(StandardMaterial {
        base_color: LEAF_COLOUR,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(meshes.add(trunk_mesh)),
            MeshMaterial3d(bark),
            Transform::from_translation(Vec3::from_array(trunk.position))
                .with_rotation(Quat::from_rotation_x(trunk.base_angle)),
            SceneNode::Trunk,
        ))
        .with_children(|parent| {
            for (index, leaf) in foliage.leaves.iter().enumerate() {
                let [x, y, z] = leaf.rotation_degrees;
                let rotation = Quat::from_euler(
                    EulerRot::XYZ,
                    x.to_radians(),
                    y.to_radians(),
                    z.to_radians(),
                );

                parent.spawn((
                    Mesh3d(leaf_mesh.clone()),
                    MeshMaterial3d(leaf_material.clone()),
                    Transform::from_translation(Vec3::from_array(leaf.base_offset))
                        .with_rotation(rotation),
                    SceneNode::Leaf(index),
                ));
            }
        });
}

/// Coconuts are visible from the start; bodies only exist once their spawn fires.
fn spawn_coconuts(
    commands: &mut Commands,
    config: &SceneConfig,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: BARK_COLOUR,
        ..default()
    });

    for coconut in &config.coconuts {
        let mesh = Sphere::new(coconut.radius)
            .mesh()
            .uv(COCONUT_SEGMENTS, COCONUT_SEGMENTS);
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(coconut.position()),
            SceneNode::Coconut(coconut.id),
        ));
    }
}

fn spawn_water(
    commands: &mut Commands,
    config: &SceneConfig,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let size = config.water.size;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: WATER_COLOUR,
            perceptual_roughness: 0.1,
            reflectance: 0.8,
            ..default()
        })),
        Transform::IDENTITY,
        WaterSurface::from_config(&config.water),
    ));
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Transform::from_translation(Vec3::from_array(CAMERA_POSITION))
            .looking_at(Vec3::from_array(CAMERA_TARGET), Vec3::Y),
    ));
}

fn spawn_sun(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            color: SUN_COLOUR,
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::Y).looking_at(Vec3::ZERO, Vec3::Y),
        SunLight,
    ));
}
