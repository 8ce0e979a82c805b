use driver::database::InMemoryDatabase;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> Self {
        Self(Arc::new(Handler::init()))
    }
}

impl Default for AppModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
}

impl Handler {
    pub fn init() -> Self {
        let database = InMemoryDatabase::new();
        tracing::debug!("in-memory store ready");
        Self { database }
    }
}
