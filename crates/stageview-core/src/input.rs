use crate::geometry::Point;

/// Sign of a wheel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Away from the user: zoom in.
    Up,
    /// Towards the user: zoom out.
    Down,
}

impl WheelDirection {
    /// Positive deltas are `Up`, negative are `Down`; zero (or NaN) is no step.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Up)
        } else if delta < 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// Raw input delivered by the host, in delivery order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel notch. `pointer` is `None` when the pointer is outside the stage.
    Wheel {
        pointer: Option<Point>,
        direction: WheelDirection,
        modifier: bool,
    },
    /// Scroll container moved; `offset` is the stage offset it now reports.
    Scroll { offset: Point },
    /// Reset button or equivalent.
    Reset,
}
