use std::sync::Arc;

type Factory<S> = Box<dyn Fn() -> Arc<S> + Send + Sync>;

/// Registration extension point for a bus component.
///
/// Plugin crates extend the configurer with free functions (for example
/// `use_msg_pack`) that call [`register`](StandardConfigurer::register) with a
/// factory; the bus resolves the factory once while building its pipeline.
/// Registering twice replaces the earlier factory.
pub struct StandardConfigurer<S: ?Sized> {
    factory: Option<Factory<S>>,
}

impl<S: ?Sized> StandardConfigurer<S> {
    pub fn new() -> Self {
        Self { factory: None }
    }

    pub fn register<F>(&mut self, factory: F)
    where
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.factory = Some(Box::new(factory));
    }

    pub fn is_registered(&self) -> bool {
        self.factory.is_some()
    }

    pub fn resolve(&self) -> Result<Arc<S>, ConfigError> {
        match &self.factory {
            Some(factory) => Ok(factory()),
            None => Err(ConfigError::NothingRegistered),
        }
    }
}

impl<S: ?Sized> Default for StandardConfigurer<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("no implementation has been registered with this configurer")]
    NothingRegistered,
}
