mod support;

use std::collections::BTreeSet;

use pano_core::camera::TeleportAnchor;
use pano_core::grid::{BackingList, GridInput, compute_visible};
use pano_core::model::{GridPosition, ItemDimensions, PixelRect, Vec2, Viewport};
use pano_core::preview::PreviewRotation;
use pano_core::InMemoryProvider;

use support::fixture_galleries;

fn input(
    camera: Vec2,
    viewport: Viewport,
    columns: usize,
) -> Option<GridInput> {
    let dims = ItemDimensions::for_viewport(viewport.width, columns, 32.0)?;
    Some(GridInput {
        camera,
        viewport,
        dims,
        columns,
        buffer_zone: 1.5,
    })
}

/// Items intersecting the viewport as (screen rect in milli-pixels, index).
fn on_screen(
    input: &GridInput,
    list: &BackingList<'_>,
) -> BTreeSet<(i64, i64, usize)> {
    let bounds =
        PixelRect::new(0.0, 0.0, input.viewport.width, input.viewport.height);
    compute_visible(input, list)
        .iter()
        .map(|item| (item.screen_rect(input.camera), item.wrapped_index))
        .filter(|(rect, _)| rect.intersects(&bounds))
        .map(|(rect, index)| {
            (
                (rect.x * 1000.0).round() as i64,
                (rect.y * 1000.0).round() as i64,
                index,
            )
        })
        .collect()
}

#[test]
fn teleport_distance_is_visually_transparent() {
    let viewports = [Viewport::new(1200.0, 800.0), Viewport::new(731.0, 1013.0)];
    let cameras = [
        Vec2::new(0.5, 0.25),
        Vec2::new(123.4, -57.25),
        Vec2::new(-2041.7, 913.3),
    ];
    for galleries in [1usize, 3, 4, 6, 7] {
        let provider = InMemoryProvider::new(fixture_galleries(galleries, 1));
        let previews = PreviewRotation::new();
        let list = BackingList::Galleries {
            provider: &provider,
            previews: &previews,
        };
        for columns in [1usize, 2, 4, 6] {
            for viewport in viewports {
                for camera in cameras {
                    let Some(base) = input(camera, viewport, columns) else {
                        continue;
                    };
                    let mut anchor = TeleportAnchor::default();
                    anchor.reconfigure(
                        viewport,
                        &base.dims,
                        columns,
                        galleries,
                        1.5,
                    );
                    let d = anchor.distance();
                    assert!(d.x > 0.0 && d.y > 0.0);
                    let expected = on_screen(&base, &list);
                    assert!(!expected.is_empty());
                    for shift in [
                        Vec2::new(d.x, 0.0),
                        Vec2::new(-d.x, 0.0),
                        Vec2::new(0.0, d.y),
                        Vec2::new(d.x, -d.y),
                    ] {
                        let moved = GridInput {
                            camera: camera + shift,
                            ..base
                        };
                        assert_eq!(
                            on_screen(&moved, &list),
                            expected,
                            "n={galleries} cols={columns} camera={camera:?} shift={shift:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_cell_touching_the_viewport_is_rendered() {
    let provider = InMemoryProvider::new(fixture_galleries(5, 1));
    let previews = PreviewRotation::new();
    let list = BackingList::Galleries {
        provider: &provider,
        previews: &previews,
    };
    let viewports = [
        Viewport::new(1200.0, 800.0),
        Viewport::new(320.0, 640.0),
        Viewport::new(1920.0, 1080.0),
    ];
    for viewport in viewports {
        for columns in 1..=8 {
            for step in -12..=12 {
                let camera = Vec2::new(step as f64 * 77.3, step as f64 * -41.9);
                let Some(grid) = input(camera, viewport, columns) else {
                    continue;
                };
                let rendered: BTreeSet<GridPosition> = compute_visible(&grid, &list)
                    .iter()
                    .map(|item| item.grid)
                    .collect();
                let cw = grid.dims.cell_width;
                let ch = grid.dims.cell_height;
                let first_col = (-camera.x / cw).floor() as i64 - 1;
                let last_col = ((-camera.x + viewport.width) / cw).ceil() as i64 + 1;
                let first_row = (-camera.y / ch).floor() as i64 - 1;
                let last_row = ((-camera.y + viewport.height) / ch).ceil() as i64 + 1;
                for row in first_row..=last_row {
                    for col in first_col..=last_col {
                        let cell = PixelRect::new(
                            col as f64 * cw + camera.x,
                            row as f64 * ch + camera.y,
                            cw,
                            ch,
                        );
                        let screen = PixelRect::new(
                            0.0,
                            0.0,
                            viewport.width,
                            viewport.height,
                        );
                        if cell.intersects(&screen) {
                            assert!(
                                rendered.contains(&GridPosition::new(row, col)),
                                "cell ({row}, {col}) missing at {camera:?}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn creation_order_is_stable_across_repetitions() {
    let provider = InMemoryProvider::new(fixture_galleries(3, 1));
    let previews = PreviewRotation::new();
    let list = BackingList::Galleries {
        provider: &provider,
        previews: &previews,
    };
    let grid = input(Vec2::ZERO, Viewport::new(1200.0, 800.0), 4).expect("fits");
    for item in compute_visible(&grid, &list) {
        assert_eq!(item.creation_order, 3 - item.wrapped_index);
        assert!(item.wrapped_index < 3);
    }
}
