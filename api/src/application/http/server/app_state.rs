use std::sync::Arc;

use mantaray_core::application::MantarayService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MantarayService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MantarayService) -> Self {
        Self { args, service }
    }
}
