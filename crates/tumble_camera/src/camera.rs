use tumble_logging::{log_debug, log_verbose};
use tumble_math::*;

use crate::{CameraSettings, LOG_CAT};

/// Orbit/tumble camera.
///
/// The camera looks from `position` along `forward`, with `target` at `target_distance` in front of it.
/// Tumbling and rolling rotate the basis around the eye and move the target, orbiting rotates the basis and moves the eye around the target.
///
/// The basis is not re-orthogonalized after a rotation, so rounding drift accumulates over long sessions.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera<T: Real> {
    position        : Vec3<T>,
    target          : Vec3<T>,
    right           : Vec3<T>,
    up              : Vec3<T>,
    forward         : Vec3<T>,
    target_distance : T,
}

impl<T: Real> Camera<T> {
    /// Create a camera at the configured position, looking down -z with +y as up
    pub fn from_settings(settings: &CameraSettings<T>) -> Self {
        let zero = T::zero();
        let one = T::one();

        let forward = Vec3::new(zero, zero, -one);
        let position = settings.position;
        let target_distance = settings.target_distance;

        log_debug!(LOG_CAT, Self::from_settings, "camera created at {} with a target distance of {}", position, target_distance);

        Self {
            position,
            target: position + forward * target_distance,
            right: Vec3::new(one, zero, zero),
            up: Vec3::new(zero, one, zero),
            forward,
            target_distance,
        }
    }

    /// Get the eye position
    #[inline]
    pub fn position(&self) -> Vec3<T> {
        self.position
    }

    /// Get the point the camera looks at
    #[inline]
    pub fn target(&self) -> Vec3<T> {
        self.target
    }

    /// Get the right axis of the camera
    #[inline]
    pub fn right(&self) -> Vec3<T> {
        self.right
    }

    /// Get the up axis of the camera
    #[inline]
    pub fn up(&self) -> Vec3<T> {
        self.up
    }

    /// Get the view direction
    #[inline]
    pub fn forward(&self) -> Vec3<T> {
        self.forward
    }

    /// Get the distance between the eye and the target
    #[inline]
    pub fn target_distance(&self) -> T {
        self.target_distance
    }

    /// Move the eye by a world-space offset, the target stays where it is
    pub fn move_position(&mut self, offset: Vec3<T>) {
        self.position += offset;
        log_verbose!(LOG_CAT, "moved position by {} to {}", offset, self.position);
    }

    /// Move the target by a world-space offset, the eye stays where it is
    pub fn move_target(&mut self, offset: Vec3<T>) {
        self.target += offset;
        log_verbose!(LOG_CAT, "moved target by {} to {}", offset, self.target);
    }

    /// Move the eye and target along the right axis
    pub fn strafe_right(&mut self, distance: T) {
        self.strafe(self.right * distance);
    }

    /// Move the eye and target along the up axis
    pub fn strafe_up(&mut self, distance: T) {
        self.strafe(self.up * distance);
    }

    /// Move the eye and target along the view direction
    pub fn strafe_forward(&mut self, distance: T) {
        self.strafe(self.forward * distance);
    }

    fn strafe(&mut self, offset: Vec3<T>) {
        self.position += offset;
        self.target += offset;
        log_verbose!(LOG_CAT, "strafed by {}, position {}", offset, self.position);
    }

    /// Turn the camera around its up axis, keeping the eye in place
    pub fn tumble_yaw(&mut self, angle: Degrees<T>) {
        self.yaw(angle);
        self.update_target();
        log_verbose!(LOG_CAT, "tumble yaw {}, forward {}", angle, self.forward);
    }

    /// Turn the camera around its right axis, keeping the eye in place
    pub fn tumble_pitch(&mut self, angle: Degrees<T>) {
        self.pitch(angle);
        self.update_target();
        log_verbose!(LOG_CAT, "tumble pitch {}, forward {}", angle, self.forward);
    }

    /// Move the eye around the target, turning around the camera's up axis
    pub fn orbit_yaw(&mut self, angle: Degrees<T>) {
        self.yaw(angle);
        self.update_position();
        log_verbose!(LOG_CAT, "orbit yaw {}, position {}", angle, self.position);
    }

    /// Move the eye around the target, turning around the camera's right axis
    pub fn orbit_pitch(&mut self, angle: Degrees<T>) {
        self.pitch(angle);
        self.update_position();
        log_verbose!(LOG_CAT, "orbit pitch {}, position {}", angle, self.position);
    }

    /// Roll the camera around its view direction
    pub fn roll(&mut self, angle: Degrees<T>) {
        let rot = Self::rotation(self.forward, angle);
        self.up = rot * self.up;
        self.right = rot * self.right;
        self.update_target();
        log_verbose!(LOG_CAT, "roll {}, up {}", angle, self.up);
    }

    /// Get the view matrix for the current frame
    pub fn look_at(&self) -> Mat4<T> {
        Mat4::create_look_at(self.position, self.target, self.up)
    }

    fn rotation(axis: Vec3<T>, angle: Degrees<T>) -> Mat3<T> {
        Quat::from_axis_angle(axis, angle.to_radians()).to_mat3()
    }

    fn yaw(&mut self, angle: Degrees<T>) {
        let rot = Self::rotation(self.up, angle);
        self.right = rot * self.right;
        self.forward = rot * self.forward;
    }

    fn pitch(&mut self, angle: Degrees<T>) {
        let rot = Self::rotation(self.right, angle);
        self.forward = rot * self.forward;
        self.up = rot * self.up;
    }

    fn update_target(&mut self) {
        self.target = self.position + self.forward * self.target_distance;
    }

    fn update_position(&mut self) {
        self.position = self.target - self.forward * self.target_distance;
    }
}

impl<T: Real> Default for Camera<T> {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}
