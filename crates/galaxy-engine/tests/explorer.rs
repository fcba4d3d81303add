use std::f32::consts::TAU;

use galaxy_engine::api::explorer::planet_orbit_speed;
use galaxy_engine::systems::picking::{pick_nearest, PickTarget};
use galaxy_engine::{BodyId, Command, Explorer, ExplorerConfig, GalaxyParams, InputEvent, ZoomStep};
use glam::{Vec2, Vec3};

fn small_explorer(seed: u64) -> Explorer {
    Explorer::new(ExplorerConfig {
        seed: Some(seed),
        galaxy: GalaxyParams {
            star_count: 500,
            background_count: 100,
            ..GalaxyParams::default()
        },
        ..ExplorerConfig::default()
    })
}

/// CSS pixel position at which `world` appears on screen.
fn screen_position(explorer: &Explorer, world: Vec3) -> Vec2 {
    let ndc = explorer.camera().project(world);
    let viewport = explorer.viewport();
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * viewport.width,
        (1.0 - ndc.y) / 2.0 * viewport.height,
    )
}

fn planar_angle(p: Vec3) -> f32 {
    p.z.atan2(p.x)
}

#[test]
fn nothing_visible_means_no_hit() {
    let explorer = small_explorer(1);
    assert!(!explorer.view().show_planets);
    assert!(!explorer.view().show_nebulae);
    for ix in -10..=10 {
        for iy in -10..=10 {
            let ndc = Vec2::new(ix as f32 / 10.0, iy as f32 / 10.0);
            assert!(explorer.pick_at(ndc).is_none());
        }
    }
    // Aim straight at a planet while the group is hidden.
    let planet = explorer.planet_ids()[0];
    let world = explorer.world_position(planet).unwrap();
    let ndc = explorer.camera().project(world);
    assert!(explorer.pick_at(Vec2::new(ndc.x, ndc.y)).is_none());
}

#[test]
fn target_on_forward_ray_is_hit() {
    let explorer = small_explorer(2);
    let ray = explorer.camera().ray_from_ndc(Vec2::ZERO);
    let target = PickTarget {
        id: BodyId(77),
        center: ray.at(30.0),
        radius: 2.0,
    };
    let hit = pick_nearest(&ray, [target]).unwrap();
    assert_eq!(hit.id, BodyId(77));
    assert!((hit.distance - 28.0).abs() < 1e-2);
}

#[test]
fn click_on_visible_planet_selects_it() {
    let mut explorer = small_explorer(3);
    explorer.apply(Command::TogglePlanets);

    let planet = explorer.planet_ids()[0];
    let px = screen_position(&explorer, explorer.world_position(planet).unwrap());

    explorer.apply(Command::PointerMoved { px });
    assert_eq!(explorer.view().hovered, Some(planet));
    let tooltip = explorer.tooltip(Vec2::new(200.0, 80.0)).unwrap();
    assert_eq!(tooltip.name, "Kepler-442b");
    assert_eq!(tooltip.kind, "EXOPLANET");

    explorer.apply(Command::Select);
    assert_eq!(explorer.view().selected, Some(planet));
    assert_eq!(explorer.selection_panel().name, "Kepler-442b");
    assert_eq!(explorer.selection_panel().kind, "Exoplanet");
}

#[test]
fn click_on_empty_space_clears_selection() {
    let mut explorer = small_explorer(4);
    explorer.apply(Command::TogglePlanets);
    let planet = explorer.planet_ids()[0];
    let px = screen_position(&explorer, explorer.world_position(planet).unwrap());
    explorer.apply(Command::PointerMoved { px });
    explorer.apply(Command::Select);
    assert!(explorer.view().selected.is_some());

    // Top-left corner looks above the disk.
    explorer.apply(Command::PointerMoved { px: Vec2::new(1.0, 1.0) });
    assert!(explorer.view().hovered.is_none());
    assert!(explorer.tooltip(Vec2::new(200.0, 80.0)).is_none());
    explorer.apply(Command::Select);
    assert!(explorer.view().selected.is_none());
    assert_eq!(explorer.selection_panel().name, "None");
}

#[test]
fn toggling_twice_changes_nothing() {
    let mut explorer = small_explorer(5);
    let before: Vec<Vec3> = explorer.arena().iter().map(|(_, b)| b.position).collect();
    let view = explorer.view().clone();

    for command in [Command::TogglePlanets, Command::ToggleNebulae, Command::ToggleAutoRotate] {
        explorer.apply(command);
        explorer.apply(command);
    }

    assert_eq!(explorer.view().show_planets, view.show_planets);
    assert_eq!(explorer.view().show_nebulae, view.show_nebulae);
    assert_eq!(explorer.view().auto_rotate, view.auto_rotate);
    let after: Vec<Vec3> = explorer.arena().iter().map(|(_, b)| b.position).collect();
    assert_eq!(before, after);
}

#[test]
fn deep_scan_reverts_after_three_seconds() {
    let mut explorer = small_explorer(6);
    explorer.push_input(InputEvent::Custom { kind: 4, a: 0.0, b: 0.0, c: 0.0 });
    explorer.tick(0.0);
    assert!(explorer.view().deep_scan.is_active());
    explorer.tick(1.0);
    explorer.tick(1.0);
    assert!(explorer.view().deep_scan.is_active());
    explorer.tick(1.0);
    assert!(!explorer.view().deep_scan.is_active());
}

#[test]
fn deep_scan_lasts_exactly_180_frames_at_60fps() {
    let mut explorer = small_explorer(12);
    explorer.push_input(InputEvent::Custom { kind: 4, a: 0.0, b: 0.0, c: 0.0 });
    let dt = 1.0 / 60.0;
    for frame in 1..180 {
        explorer.tick(dt);
        assert!(explorer.view().deep_scan.is_active(), "inactive after frame {frame}");
    }
    explorer.tick(dt);
    assert!(!explorer.view().deep_scan.is_active());
}

#[test]
fn hiding_planets_releases_hover_and_selection() {
    let mut explorer = small_explorer(13);
    explorer.apply(Command::TogglePlanets);
    let planet = explorer.planet_ids()[0];
    let px = screen_position(&explorer, explorer.world_position(planet).unwrap());
    explorer.apply(Command::PointerMoved { px });
    explorer.apply(Command::Select);
    assert_eq!(explorer.view().selected, Some(planet));

    explorer.apply(Command::TogglePlanets);
    explorer.tick(1.0 / 60.0);
    assert!(explorer.view().hovered.is_none());
    assert!(explorer.view().selected.is_none());
    assert!(explorer.tooltip(Vec2::new(200.0, 80.0)).is_none());
    assert_eq!(explorer.selection_panel().name, "None");
}

#[test]
fn hiding_nebulae_keeps_planet_selection() {
    let mut explorer = small_explorer(14);
    explorer.apply(Command::TogglePlanets);
    let planet = explorer.planet_ids()[0];
    let px = screen_position(&explorer, explorer.world_position(planet).unwrap());
    explorer.apply(Command::PointerMoved { px });
    explorer.apply(Command::Select);

    explorer.apply(Command::ToggleNebulae);
    explorer.apply(Command::ToggleNebulae);
    assert_eq!(explorer.view().hovered, Some(planet));
    assert_eq!(explorer.view().selected, Some(planet));
}

#[test]
fn wheel_saturates_and_zoom_converges() {
    let mut explorer = small_explorer(7);
    for _ in 0..100 {
        explorer.push_input(InputEvent::Wheel { delta_y: 100.0 });
    }
    explorer.tick(0.0);
    assert_eq!(explorer.view().target_zoom(), 8.0);

    for _ in 0..300 {
        explorer.tick(1.0 / 60.0);
    }
    assert!((explorer.view().current_zoom - 8.0).abs() < 0.01);
    assert!((explorer.camera().position.z - 100.0 / 8.0).abs() < 0.05);

    for _ in 0..100 {
        explorer.apply(Command::Zoom(ZoomStep::In));
    }
    assert_eq!(explorer.view().target_zoom(), 0.5);
}

#[test]
fn rotation_is_per_tick() {
    let mut explorer = small_explorer(8);
    explorer.tick(1.0 / 60.0);
    explorer.tick(0.5);
    assert!((explorer.view().galaxy_rotation - 0.002).abs() < 1e-7);
    assert!((explorer.view().nebula_rotation + 0.0004).abs() < 1e-7);

    explorer.apply(Command::ToggleAutoRotate);
    explorer.tick(1.0 / 60.0);
    assert!((explorer.view().galaxy_rotation - 0.002).abs() < 1e-7);
}

#[test]
fn hidden_planets_do_not_orbit() {
    let mut explorer = small_explorer(9);
    let ids = explorer.planet_ids().to_vec();
    let before: Vec<Vec3> = ids.iter().map(|&id| explorer.arena().get(id).unwrap().position).collect();
    for _ in 0..10 {
        explorer.tick(1.0 / 60.0);
    }
    let after: Vec<Vec3> = ids.iter().map(|&id| explorer.arena().get(id).unwrap().position).collect();
    assert_eq!(before, after);
}

#[test]
fn later_planets_orbit_faster() {
    for i in 1..5 {
        assert!(planet_orbit_speed(i) > planet_orbit_speed(i - 1));
    }

    let mut explorer = small_explorer(10);
    explorer.apply(Command::TogglePlanets);
    let ids = explorer.planet_ids().to_vec();
    let before: Vec<Vec3> = ids.iter().map(|&id| explorer.arena().get(id).unwrap().position).collect();
    let ticks = 100;
    for _ in 0..ticks {
        explorer.tick(1.0 / 60.0);
    }
    for (index, (&id, start)) in ids.iter().zip(&before).enumerate() {
        let end = explorer.arena().get(id).unwrap().position;
        let swept = (planar_angle(*start) - planar_angle(end)).rem_euclid(TAU);
        let expected = ticks as f32 * planet_orbit_speed(index);
        assert!((swept - expected).abs() < 1e-3, "planet {index}: {swept} vs {expected}");
        assert!((end.y - start.y).abs() < 1e-4);
    }
}

#[test]
fn same_seed_same_frame() {
    let mut a = small_explorer(42);
    let mut b = small_explorer(42);
    for _ in 0..5 {
        a.tick(1.0 / 60.0);
        b.tick(1.0 / 60.0);
    }
    assert_eq!(a.frame(), b.frame());
    assert_eq!(a.scene().disk.points, b.scene().disk.points);
}

#[test]
fn hud_reports_counts_and_zoom() {
    let mut explorer = small_explorer(11);
    explorer.tick(1.0 / 60.0);
    let hud = explorer.hud_snapshot();
    assert_eq!(hud.star_count, "500");
    assert_eq!(hud.particle_count, "600");
    assert_eq!(hud.zoom, "1.00x");
    assert_eq!(hud.fps, 60.0);
    assert!((hud.rotation_percent - 10.0).abs() < 1e-3);
}
