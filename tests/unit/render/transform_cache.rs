use super::*;

fn camera(frame_rate: u32, cycle_secs: u32) -> CameraConfig {
    CameraConfig {
        frame_rate,
        cycle_secs,
        ..CameraConfig::default()
    }
}

#[test]
fn angle_count_is_rate_times_cycle() {
    let c = TransformCache::new(&CameraConfig::default()).unwrap();
    assert_eq!(c.camera_angle_count(), 300);
    assert_eq!(c.frame_period_ms(), 16);

    let small = TransformCache::new(&camera(2, 2)).unwrap();
    assert_eq!(small.camera_angle_count(), 4);
    assert_eq!(small.frame_period_ms(), 500);
}

#[test]
fn empty_cycle_is_a_configuration_error() {
    assert!(TransformCache::new(&camera(60, 0)).is_err());
    assert!(TransformCache::new(&camera(2000, 1)).is_err());
}

#[test]
fn identity_until_first_valid_resize() {
    let mut c = TransformCache::new(&camera(2, 2)).unwrap();
    assert_eq!(*c.view_projection(1), DMat4::IDENTITY);
    assert_eq!(*c.ambient_view_projection(), DMat4::IDENTITY);
    assert!(c.resize(SurfaceSize::new(0, 0)).is_err());
    assert_eq!(*c.view_projection(1), DMat4::IDENTITY);
    assert_eq!(c.aspect(), None);
}

#[test]
fn same_aspect_yields_identical_matrices() {
    let mut c = TransformCache::new(&camera(3, 2)).unwrap();
    assert_eq!(c.resize(SurfaceSize::new(320, 240)), Ok(true));
    let first: Vec<DMat4> = (0..6).map(|i| *c.view_projection(i)).collect();
    assert_eq!(c.resize(SurfaceSize::new(640, 480)), Ok(false));
    let second: Vec<DMat4> = (0..6).map(|i| *c.view_projection(i)).collect();
    assert_eq!(first, second);
}

#[test]
fn aspect_change_matches_a_fresh_build() {
    let mut c = TransformCache::new(&camera(3, 2)).unwrap();
    c.resize(SurfaceSize::new(400, 400)).unwrap();
    c.resize(SurfaceSize::new(400, 200)).unwrap();

    let mut fresh = TransformCache::new(&camera(3, 2)).unwrap();
    fresh.resize(SurfaceSize::new(400, 200)).unwrap();
    for i in 0..6 {
        assert_eq!(c.view_projection(i), fresh.view_projection(i));
    }
    assert_eq!(c.ambient_view_projection(), fresh.ambient_view_projection());
}

#[test]
fn degenerate_resize_keeps_previous_cache() {
    let mut c = TransformCache::new(&camera(2, 2)).unwrap();
    c.resize(SurfaceSize::new(400, 300)).unwrap();
    let before = *c.view_projection(2);
    assert_eq!(
        c.resize(SurfaceSize::new(400, 0)),
        Err(FaceWarning::DegenerateSurface {
            width: 400,
            height: 0
        })
    );
    assert_eq!(*c.view_projection(2), before);
    assert!(c.view_projection(2).is_finite());
}

#[test]
fn reciprocal_aspects_mirror_the_frustum() {
    let a = 1.6;
    let wide = Frustum::for_aspect(a, 2.0, 7.0);
    let tall = Frustum::for_aspect(1.0 / a, 2.0, 7.0);
    assert_eq!(wide.left, -wide.right);
    assert_eq!(tall.left, -tall.right);
    assert!((wide.right * tall.right - 1.0).abs() < 1e-12);

    let mut c = TransformCache::new(&camera(2, 2)).unwrap();
    c.resize(SurfaceSize::new(1600, 1000)).unwrap();
    let p_wide = *c.projection();
    c.resize(SurfaceSize::new(1000, 1600)).unwrap();
    let p_tall = *c.projection();
    // x scale is near / aspect; off-centre terms stay zero.
    assert!((p_wide.x_axis.x * p_tall.x_axis.x - 4.0).abs() < 1e-12);
    assert_eq!(p_wide.z_axis.x, 0.0);
    assert_eq!(p_tall.z_axis.x, 0.0);
}

#[test]
fn camera_index_follows_frame_period_and_wraps() {
    let c = TransformCache::new(&CameraConfig::default()).unwrap();
    assert_eq!(c.camera_index(0), 0);
    assert_eq!(c.camera_index(15), 0);
    assert_eq!(c.camera_index(16), 1);
    assert_eq!(c.camera_index(16 * 300), 0);
    assert_eq!(c.camera_index(16 * 301 + 5), 1);
    assert_eq!(c.view_projection(301), c.view_projection(1));
}

#[test]
fn model_matrices_truncate_to_whole_degrees() {
    let c = TransformCache::new(&camera(2, 2)).unwrap();
    assert_eq!(c.model(90.9), &crate::foundation::math::rotation_z_degrees(90.0));
    assert_eq!(c.model(360.5), c.model(0.0));
    assert_eq!(c.model(-1.0), c.model(359.0));
}

#[test]
fn ambient_camera_looks_straight_at_the_face() {
    let mut c = TransformCache::new(&CameraConfig::default()).unwrap();
    c.resize(SurfaceSize::new(400, 400)).unwrap();
    let clip = crate::foundation::math::to_clip(c.ambient_view_projection(), DVec3::ZERO);
    assert!(clip.x.abs() < 1e-12);
    assert!(clip.y.abs() < 1e-12);
    assert!(clip.w > 0.0);
}
