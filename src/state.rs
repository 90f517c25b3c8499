use std::sync::Arc;

use crate::generator::Generator;
use crate::provider::ChatProvider;

// app's shared state, read-only after startup
pub struct AppState {
    pub generator: Generator,
}

impl AppState {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            generator: Generator::new(provider),
        }
    }
}
