pub const SPEED_MULTIPLIER: f64 = 2.0;
pub const DRAG_SLOP_PX: f64 = 4.0;
pub const PAGE_FRACTION: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging {
        anchor_x: f64,
        anchor_scroll: f64,
        moved: bool,
    },
    // clicks are swallowed until `until_ms`
    Releasing { until_ms: f64 },
}

#[derive(Clone, Debug)]
pub struct DragScroll {
    phase: DragPhase,
    grace_ms: f64,
}

impl DragScroll {
    pub fn new(grace_ms: u32) -> Self {
        Self {
            phase: DragPhase::Idle,
            grace_ms: grace_ms as f64,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn on_gesture_start(&mut self, pointer_x: f64, current_scroll: f64) {
        self.phase = DragPhase::Dragging {
            anchor_x: pointer_x,
            anchor_scroll: current_scroll,
            moved: false,
        };
    }

    pub fn on_gesture_move(&mut self, pointer_x: f64) -> Option<f64> {
        let DragPhase::Dragging {
            anchor_x,
            anchor_scroll,
            moved,
        } = &mut self.phase
        else {
            return None;
        };
        let dx = pointer_x - *anchor_x;
        if dx.abs() > DRAG_SLOP_PX {
            *moved = true;
        }
        Some(*anchor_scroll - dx * SPEED_MULTIPLIER)
    }

    pub fn on_gesture_end(&mut self, now_ms: f64) {
        if let DragPhase::Dragging { moved, .. } = self.phase {
            self.phase = if moved {
                DragPhase::Releasing {
                    until_ms: now_ms + self.grace_ms,
                }
            } else {
                DragPhase::Idle
            };
        }
    }

    pub fn on_gesture_cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn settle(&mut self, now_ms: f64) -> bool {
        match self.phase {
            DragPhase::Releasing { until_ms } if now_ms >= until_ms => {
                self.phase = DragPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn should_activate(&self, now_ms: f64) -> bool {
        match self.phase {
            DragPhase::Idle => true,
            DragPhase::Dragging { moved, .. } => !moved,
            DragPhase::Releasing { until_ms } => now_ms >= until_ms,
        }
    }

    pub fn scroll_by(&self, direction: ScrollDirection, current_scroll: f64, viewport_width: f64) -> f64 {
        page_target(direction, current_scroll, viewport_width)
    }
}

pub fn page_target(direction: ScrollDirection, current_scroll: f64, viewport_width: f64) -> f64 {
    let step = viewport_width.max(0.0) * PAGE_FRACTION;
    match direction {
        ScrollDirection::Left => current_scroll - step,
        ScrollDirection::Right => current_scroll + step,
    }
}
