//! Device orientation from the `window.orientation` angle.

/// Physical orientation of a handheld device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Classify an orientation angle in degrees: 0 and 180 are portrait, 90 and
/// -90 landscape. Any other angle is unknown, which is what desktop
/// browsers without orientation support report.
pub fn device_orientation(degrees: i32) -> Option<Orientation> {
    match degrees {
        0 | 180 => Some(Orientation::Portrait),
        90 | -90 => Some(Orientation::Landscape),
        _ => None,
    }
}
