use crate::config::GraphConfig;
use crate::labels::Labels;
use crate::point::PointId;
use crate::renderer::Renderer;
use crate::state::GraphState;
use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    IncreaseSlope,
    DecreaseSlope,
    IncreaseIntercept,
    DecreaseIntercept,
    Reset,
}

/// Turns pointer and button input into graph mutations, and follows every
/// mutation with a redraw and a label refresh.
///
/// Pointer positions are surface pixels; mapping from screen space happens
/// in the caller.
pub struct InteractionController {
    state: GraphState,
    renderer: Renderer,
    labels: Labels,
    slope_step: f32,
    intercept_step: f32,
}

impl InteractionController {
    pub fn new(config: &GraphConfig) -> Self {
        let state = GraphState::new(config);
        let mut renderer = Renderer::new(config);
        renderer.relayout(&state);
        let labels = Labels::from_state(&state);
        Self {
            state,
            renderer,
            labels,
            slope_step: config.slope_step,
            intercept_step: config.intercept_step,
        }
    }

    pub fn state(&self) -> &GraphState {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Starts a drag when `pos` is over a point. Returns the grabbed point.
    pub fn pointer_down(&mut self, pos: Pos2) -> Option<PointId> {
        let hit = self.state.hit_test(pos);
        if let Some(id) = hit {
            tracing::debug!(?id, x = pos.x, y = pos.y, "drag started");
            self.state.set_dragging(Some(id));
        }
        hit
    }

    /// Moves the dragged point, if any, to `pos`. Returns whether anything moved.
    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        let Some(id) = self.state.dragging() else {
            return false;
        };
        self.state.move_point(id, pos);
        self.refresh(Some(id));
        true
    }

    pub fn pointer_up(&mut self) {
        if let Some(id) = self.state.dragging() {
            tracing::debug!(?id, coordinates = %self.labels.coordinates(id), "drag ended");
        }
        self.state.set_dragging(None);
    }

    pub fn apply(&mut self, control: Control) {
        match control {
            Control::IncreaseSlope | Control::DecreaseSlope => {
                let delta = if control == Control::IncreaseSlope {
                    self.slope_step
                } else {
                    -self.slope_step
                };
                if !self.state.adjust_slope(delta) {
                    tracing::debug!(?control, "slope change ignored for a vertical line");
                    return;
                }
            }
            Control::IncreaseIntercept => self.state.adjust_intercept(self.intercept_step),
            Control::DecreaseIntercept => self.state.adjust_intercept(-self.intercept_step),
            Control::Reset => self.state.reset(),
        }
        self.refresh(None);
        tracing::debug!(
            ?control,
            slope = %self.labels.slope,
            intercept = %self.labels.intercept,
            "control applied"
        );
    }

    /// Redraws everything for a surface of `width` by `height` pixels. Safe to
    /// call repeatedly with the same size.
    pub fn relayout(&mut self, width: f32, height: f32) {
        tracing::debug!(width, height, "relayout");
        self.state.resize(width, height);
        self.renderer.relayout(&self.state);
        self.labels.update(&self.state);
    }

    fn refresh(&mut self, focus: Option<PointId>) {
        self.renderer.render(&self.state, focus);
        self.labels.update(&self.state);
    }
}
