/// Orientation reported by a BNO055-class IMU, in degrees.
///
/// Roll, pitch and yaw rotate about the Z, X and Y axes respectively.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub const fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Overwrites all three angles. The renderer always reads the most
    /// recent values; updates never combine with earlier ones.
    pub fn set(&mut self, roll: f32, pitch: f32, yaw: f32) {
        self.roll = roll;
        self.pitch = pitch;
        self.yaw = yaw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        assert_eq!(Orientation::default(), Orientation::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn set_overwrites_previous_values() {
        let mut orientation = Orientation::default();
        orientation.set(90.0, 0.0, 0.0);
        orientation.set(0.0, 45.0, 30.0);
        assert_eq!(orientation, Orientation::new(0.0, 45.0, 30.0));
    }
}
