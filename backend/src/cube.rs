//! Fixed unit-cube geometry and the transforms that orient it on screen.

use glam::{Mat4, Vec3};

use crate::orientation::Orientation;

/// Distance the viewpoint is pulled back along the view axis.
pub const VIEW_DISTANCE: f32 = 7.0;
/// Vertical field of view of the perspective projection, in degrees.
pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 100.0;

/// One quadrilateral cube face with its flat fill color.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub vertices: [Vec3; 4],
    pub color: [u8; 3],
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// The six faces of the unit cube: front red, back green, left blue,
/// right yellow, top cyan, bottom magenta.
pub const FACES: [Face; 6] = [
    Face {
        vertices: [v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0), v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0)],
        color: [255, 0, 0],
    },
    Face {
        vertices: [v(1.0, 1.0, -1.0), v(-1.0, 1.0, -1.0), v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0)],
        color: [0, 255, 0],
    },
    Face {
        vertices: [v(-1.0, 1.0, 1.0), v(-1.0, 1.0, -1.0), v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0)],
        color: [0, 0, 255],
    },
    Face {
        vertices: [v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0), v(1.0, -1.0, 1.0), v(1.0, -1.0, -1.0)],
        color: [255, 255, 0],
    },
    Face {
        vertices: [v(1.0, 1.0, -1.0), v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0)],
        color: [0, 255, 255],
    },
    Face {
        vertices: [v(1.0, -1.0, 1.0), v(-1.0, -1.0, 1.0), v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0)],
        color: [255, 0, 255],
    },
];

/// Model transform for the given orientation, rebuilt from scratch on every
/// call: translate back by [`VIEW_DISTANCE`], then rotate roll about Z,
/// pitch about X and yaw about Y, in that fixed order. Angles are degrees.
pub fn model_matrix(orientation: &Orientation) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -VIEW_DISTANCE))
        * Mat4::from_rotation_z(orientation.roll.to_radians())
        * Mat4::from_rotation_x(orientation.pitch.to_radians())
        * Mat4::from_rotation_y(orientation.yaw.to_radians())
}

/// Perspective projection for a viewport of the given pixel size. A zero
/// height falls back to a square aspect instead of dividing by zero.
pub fn projection_matrix(width: f32, height: f32) -> Mat4 {
    let aspect = if height > 0.0 { width / height } else { 1.0 };
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// A cube face projected to normalized device coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedFace {
    /// Corner positions in NDC; x and y each span [-1, 1] across the
    /// viewport, +y up.
    pub points: [[f32; 2]; 4],
    /// Mean view-space depth, used for the paint order.
    pub depth: f32,
    pub color: [u8; 3],
}

/// Projects all six faces for the given orientation and viewport, sorted
/// back-to-front. Filling the quads in the returned order reproduces the
/// depth-tested image: the cube is convex, so nearer faces always overdraw
/// farther ones.
pub fn project_cube(orientation: &Orientation, viewport: [f32; 2]) -> [ProjectedFace; 6] {
    let model = model_matrix(orientation);
    let projection = projection_matrix(viewport[0], viewport[1]);

    let mut faces = FACES.map(|face| {
        let mut points = [[0.0f32; 2]; 4];
        let mut depth = 0.0;
        for (point, vertex) in points.iter_mut().zip(face.vertices) {
            let view = model.transform_point3(vertex);
            let clip = projection * view.extend(1.0);
            *point = [clip.x / clip.w, clip.y / clip.w];
            depth += view.z;
        }
        ProjectedFace {
            points,
            depth: depth / 4.0,
            color: face.color,
        }
    });
    // View-space z grows more negative with distance, so ascending order
    // paints the farthest face first.
    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn roll_rotates_about_view_axis_only() {
        let model = model_matrix(&Orientation::new(90.0, 0.0, 0.0));
        let mapped = model.transform_point3(Vec3::X);
        assert!(mapped.abs_diff_eq(Vec3::new(0.0, 1.0, -VIEW_DISTANCE), EPS));
    }

    #[test]
    fn pitch_rotates_about_x() {
        let model = model_matrix(&Orientation::new(0.0, 90.0, 0.0));
        let mapped = model.transform_point3(Vec3::Y);
        assert!(mapped.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0 - VIEW_DISTANCE), EPS));
    }

    #[test]
    fn rotations_apply_in_z_x_y_order() {
        // Roll 90 + pitch 90: pitch acts on the vertex first, so unit Y
        // lands on +Z and roll leaves it there. The reversed order would
        // send it to -X instead.
        let model = model_matrix(&Orientation::new(90.0, 90.0, 0.0));
        let mapped = model.transform_point3(Vec3::Y);
        assert!(mapped.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0 - VIEW_DISTANCE), EPS));
    }

    #[test]
    fn updates_do_not_accumulate() {
        let mut orientation = Orientation::new(90.0, 0.0, 0.0);
        orientation.set(0.0, 45.0, 30.0);
        let after_two_updates = model_matrix(&orientation);
        let fresh = model_matrix(&Orientation::new(0.0, 45.0, 30.0));
        assert!(after_two_updates.abs_diff_eq(fresh, EPS));
    }

    #[test]
    fn projection_uses_viewport_aspect() {
        let wide = projection_matrix(1000.0, 500.0);
        let reference = Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), 2.0, Z_NEAR, Z_FAR);
        assert!(wide.abs_diff_eq(reference, EPS));
    }

    #[test]
    fn zero_height_viewport_falls_back_to_square_aspect() {
        let degenerate = projection_matrix(640.0, 0.0);
        assert!(degenerate.abs_diff_eq(projection_matrix(500.0, 500.0), EPS));
        assert!(degenerate.to_cols_array().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn faces_sort_back_to_front_at_rest() {
        let faces = project_cube(&Orientation::default(), [500.0, 500.0]);
        // Green back face is farthest, red front face nearest.
        assert_eq!(faces[0].color, [0, 255, 0]);
        assert_eq!(faces[5].color, [255, 0, 0]);
        assert!(faces.windows(2).all(|pair| pair[0].depth <= pair[1].depth));
    }

    #[test]
    fn front_face_projects_to_centered_square() {
        let faces = project_cube(&Orientation::default(), [500.0, 500.0]);
        let front = faces[5];
        let centroid_x: f32 = front.points.iter().map(|p| p[0]).sum::<f32>() / 4.0;
        let centroid_y: f32 = front.points.iter().map(|p| p[1]).sum::<f32>() / 4.0;
        assert!(centroid_x.abs() < EPS && centroid_y.abs() < EPS);
        // Half-extent 1 at distance 6 under a 45 degree fov.
        let expected = 1.0 / ((FOV_Y_DEGREES / 2.0).to_radians().tan() * 6.0);
        for point in front.points {
            assert!((point[0].abs() - expected).abs() < EPS);
            assert!((point[1].abs() - expected).abs() < EPS);
        }
    }

    #[test]
    fn wide_viewport_compresses_x() {
        let square = project_cube(&Orientation::default(), [500.0, 500.0]);
        let wide = project_cube(&Orientation::default(), [1000.0, 500.0]);
        let square_x = square[5].points[0][0];
        let wide_x = wide[5].points[0][0];
        assert!((wide_x - square_x / 2.0).abs() < EPS);
    }
}
