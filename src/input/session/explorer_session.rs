use crate::config::ExplorerDefaults;
use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::ports::draw_request_port::DrawRequestPort;
use crate::controllers::interactive::ports::presenter_port::FramePresenterPort;
use crate::controllers::interactive::scheduler::ThrottledDrawer;
use crate::controllers::interactive::{ExplorerError, ExplorerViewModel, InteractiveController};
use crate::presenters::surface::SurfacePresenter;
use std::sync::Arc;

/// One canvas: a display surface, its render worker and its draw throttle.
pub struct Canvas {
    presenter: Arc<SurfacePresenter>,
    controller: Arc<InteractiveController>,
    drawer: Arc<ThrottledDrawer<RenderJob>>,
}

impl Canvas {
    fn new(defaults: &ExplorerDefaults) -> Self {
        let presenter = Arc::new(SurfacePresenter::new(defaults.width, defaults.height));
        let controller = Arc::new(InteractiveController::new(
            Arc::clone(&presenter) as Arc<dyn FramePresenterPort>
        ));

        let worker = Arc::clone(&controller);
        let drawer = Arc::new(ThrottledDrawer::new(defaults.draw_interval, move |job| {
            worker.submit_request(Arc::new(job));
        }));

        Self {
            presenter,
            controller,
            drawer,
        }
    }

    #[must_use]
    pub fn presenter(&self) -> &SurfacePresenter {
        &self.presenter
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.controller.current_generation()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.controller.last_completed_generation()
    }
}

/// Wires the view model to a Mandelbrot and a Julia canvas, each with its own
/// throttle and worker.
pub struct ExplorerSession {
    view_model: ExplorerViewModel,
    mandelbrot: Canvas,
    julia: Canvas,
}

impl ExplorerSession {
    pub fn new(defaults: &ExplorerDefaults) -> Result<Self, ExplorerError> {
        let mandelbrot = Canvas::new(defaults);
        let julia = Canvas::new(defaults);

        let view_model = ExplorerViewModel::new(
            defaults,
            Arc::clone(&mandelbrot.drawer) as Arc<dyn DrawRequestPort>,
            Arc::clone(&julia.drawer) as Arc<dyn DrawRequestPort>,
        )?;
        view_model.draw_all();

        Ok(Self {
            view_model,
            mandelbrot,
            julia,
        })
    }

    #[must_use]
    pub fn view_model(&self) -> &ExplorerViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ExplorerViewModel {
        &mut self.view_model
    }

    #[must_use]
    pub fn mandelbrot(&self) -> &Canvas {
        &self.mandelbrot
    }

    #[must_use]
    pub fn julia(&self) -> &Canvas {
        &self.julia
    }
}
