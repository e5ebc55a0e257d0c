use gridborder_core::constants::{DEFAULT_CELL_SIZE, LABEL_GUTTER, MAX_CELL_SIZE, MIN_CELL_SIZE};
use gridborder_designer::viewport::{grid_to_screen, screen_to_grid, GridPoint, ScreenPoint, Viewport};

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.cell_size(), DEFAULT_CELL_SIZE);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
}

#[test]
fn test_grid_origin_sits_after_gutter() {
    let vp = Viewport::new(1200.0, 600.0);
    let grid = vp.screen_to_grid(ScreenPoint::new(LABEL_GUTTER, LABEL_GUTTER));
    assert!(grid.x.abs() < 1e-9);
    assert!(grid.y.abs() < 1e-9);
}

#[test]
fn test_screen_to_grid_with_offset_and_cell_size() {
    // 30px gutter + 20px offset, cells of 25px: screen 100 is (100 - 50) / 25 = 2.0
    let grid = screen_to_grid(100.0, 125.0, 20.0, 20.0, 25.0);
    assert!((grid.x - 2.0).abs() < 1e-9);
    assert!((grid.y - 3.0).abs() < 1e-9);
}

#[test]
fn test_roundtrip_conversion() {
    let original = GridPoint::new(3.37, 8.91);
    let screen = grid_to_screen(original.x, original.y, -42.0, 17.5, 33.0);
    let back = screen_to_grid(screen.x, screen.y, -42.0, 17.5, 33.0);

    assert!((back.x - original.x).abs() < 1e-9);
    assert!((back.y - original.y).abs() < 1e-9);
}

#[test]
fn test_cell_size_constraints() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_cell_size(1.0);
    assert_eq!(vp.cell_size(), MIN_CELL_SIZE);

    vp.set_cell_size(1000.0);
    assert_eq!(vp.cell_size(), MAX_CELL_SIZE);

    vp.set_cell_size(f64::NAN);
    assert_eq!(vp.cell_size(), MAX_CELL_SIZE);
}

#[test]
fn test_zoom_at_keeps_anchor_fixed() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_offset(13.0, -7.0);
    let anchor = ScreenPoint::new(400.0, 300.0);
    let before = vp.screen_to_grid(anchor);

    vp.zoom_in_at(anchor);
    assert!(vp.cell_size() > DEFAULT_CELL_SIZE);

    let after = vp.screen_to_grid(anchor);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn test_zoom_in_out() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let anchor = ScreenPoint::new(200.0, 200.0);
    vp.zoom_in_at(anchor);
    vp.zoom_out_at(anchor);
    assert!((vp.cell_size() - DEFAULT_CELL_SIZE).abs() < 1e-9);
}

#[test]
fn test_pan_sequence() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.pan_by(-50.0, -50.0);
    vp.pan_by(25.0, 25.0);
    vp.pan_by(-75.0, -100.0);
    assert!((vp.offset_x() - (-100.0)).abs() < 0.01);
    assert!((vp.offset_y() - (-125.0)).abs() < 0.01);
}

#[test]
fn test_fit_grid_centers_content() {
    let mut vp = Viewport::new(830.0, 630.0);
    vp.fit_grid(10, 10, 0.0);

    // 800x600 available, limited by height: 60px cells
    assert!((vp.cell_size() - 60.0).abs() < 1e-9);
    let top_left = vp.grid_to_screen(GridPoint::new(0.0, 0.0));
    let bottom_right = vp.grid_to_screen(GridPoint::new(10.0, 10.0));
    let left_margin = top_left.x - LABEL_GUTTER;
    let right_margin = 830.0 - bottom_right.x;
    assert!((left_margin - right_margin).abs() < 1e-9);
}

#[test]
fn test_fit_grid_ignores_invalid_sizes() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.fit_grid(0, 10, 0.0);
    assert_eq!(vp.cell_size(), DEFAULT_CELL_SIZE);
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_cell_size(60.0);
    vp.set_offset(100.0, 200.0);
    vp.reset();

    assert_eq!(vp.cell_size(), DEFAULT_CELL_SIZE);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
}

#[test]
fn test_contains() {
    let vp = Viewport::new(100.0, 50.0);
    assert!(vp.contains(&ScreenPoint::new(0.0, 0.0)));
    assert!(!vp.contains(&ScreenPoint::new(100.0, 10.0)));
    assert!(!vp.contains(&ScreenPoint::new(-1.0, 10.0)));
}
