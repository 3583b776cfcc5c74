use crate::dataset::Dataset;
use crate::params::{ParameterStore, Parameters};
use crate::plot::{PlotRenderer, PlotSize, Scene};
use crate::stats::{compute_mse, LinReg};

/// Text shown when there is no metric to report.
pub const NO_METRIC: &str = "n/a";

pub fn format_param(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_mse(mse: Option<f64>) -> String {
    match mse {
        Some(v) => format!("{:.4}", v),
        None => NO_METRIC.to_owned(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Unrendered,
    Rendered,
}

/// One tuning session: data, parameters and everything derived from them.
///
/// Every mutation recomputes the metric and, once a surface is mounted, the
/// scene before returning. Readers never observe values from an older
/// parameter set.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    store: ParameterStore,
    renderer: PlotRenderer,
    least_squares: Option<LinReg>,
    mse: Option<f64>,
    mounted: bool,
    scene: Option<Scene>,
    state: RenderState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Dataset::sample(), PlotRenderer::default())
    }
}

impl Session {
    pub fn new(dataset: Dataset, renderer: PlotRenderer) -> Self {
        let least_squares = LinReg::fit(&dataset);
        let mut session = Self {
            dataset,
            store: ParameterStore::new(),
            renderer,
            least_squares,
            mse: None,
            mounted: false,
            scene: None,
            state: RenderState::Unrendered,
        };
        session.refresh();
        session
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
    pub fn params(&self) -> Parameters {
        self.store.params()
    }
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }
    pub fn metric(&self) -> Option<f64> {
        self.mse
    }
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
    pub fn render_state(&self) -> RenderState {
        self.state
    }
    pub fn renderer(&self) -> &PlotRenderer {
        &self.renderer
    }
    pub fn size(&self) -> Option<PlotSize> {
        self.mounted.then_some(self.renderer.size)
    }
    pub fn least_squares(&self) -> Option<LinReg> {
        self.least_squares
    }

    pub fn set_slope(&mut self, v: f64) -> bool {
        let changed = self.store.set_slope(v);
        self.refresh_if(changed)
    }
    pub fn set_intercept(&mut self, v: f64) -> bool {
        let changed = self.store.set_intercept(v);
        self.refresh_if(changed)
    }
    pub fn nudge_slope(&mut self, steps: i32) -> bool {
        let changed = self.store.nudge_slope(steps);
        self.refresh_if(changed)
    }
    pub fn nudge_intercept(&mut self, steps: i32) -> bool {
        let changed = self.store.nudge_intercept(steps);
        self.refresh_if(changed)
    }
    pub fn reset(&mut self) -> bool {
        let changed = self.store.reset();
        self.refresh_if(changed)
    }

    /// Attach a surface of known pixel size and draw the first scene.
    pub fn mount(&mut self, size: PlotSize) {
        self.renderer = self.renderer.with_size(size);
        self.mounted = true;
        self.refresh();
    }

    /// Re-render for a new surface size; no-op when nothing changed.
    pub fn resize(&mut self, size: PlotSize) -> bool {
        if !self.mounted {
            self.mount(size);
            return true;
        }
        if self.renderer.size == size {
            return false;
        }
        self.renderer = self.renderer.with_size(size);
        self.refresh();
        true
    }

    fn refresh_if(&mut self, changed: bool) -> bool {
        if changed {
            self.refresh();
        }
        changed
    }

    fn refresh(&mut self) {
        let params = self.store.params();
        self.mse = compute_mse(self.dataset.points(), params.slope, params.intercept);
        log::debug!("recomputed mse {:?} for {}", self.mse, params);

        if !self.mounted {
            return;
        }
        self.scene = self.renderer.build_scene(self.dataset.points(), params);
        self.state = RenderState::Rendered;
    }
}
