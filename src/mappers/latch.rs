use std::cell::RefCell;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use crate::repositories::{BuiltMappingRepository, MappingUseCase, RepositoryError};

use super::MapperError;

enum LatchState<U: MappingUseCase> {
    Uninitialized,
    Initializing,
    Initialized(Arc<BuiltMappingRepository<U>>),
    Failed(RepositoryError),
}

/// One-shot initialization of a built repository.
///
/// The lock is held while the initializer runs, so concurrent callers wait
/// and then observe the finished repository. The same thread re-entering
/// sees `Initializing` and gets an error instead of running the
/// initializer twice.
pub(super) struct RepositoryLatch<U: MappingUseCase> {
    state: ReentrantMutex<RefCell<LatchState<U>>>,
}

impl<U: MappingUseCase> RepositoryLatch<U> {
    pub fn new() -> Self {
        Self {
            state: ReentrantMutex::new(RefCell::new(LatchState::Uninitialized)),
        }
    }

    pub fn get_or_init(
        &self,
        init: impl FnOnce() -> Result<BuiltMappingRepository<U>, RepositoryError>,
    ) -> Result<Arc<BuiltMappingRepository<U>>, MapperError> {
        let guard = self.state.lock();

        {
            let mut state = guard.borrow_mut();
            match &*state {
                LatchState::Initialized(repository) => return Ok(Arc::clone(repository)),
                LatchState::Failed(error) => {
                    return Err(MapperError::Initialization(error.clone()));
                }
                LatchState::Initializing => return Err(MapperError::ReentrantInitialization),
                LatchState::Uninitialized => {}
            }
            *state = LatchState::Initializing;
        }

        // No RefCell borrow is held here, so a re-entrant call can observe
        // `Initializing`.
        let result = init();

        let mut state = guard.borrow_mut();
        match result {
            Ok(repository) => {
                let repository = Arc::new(repository);
                *state = LatchState::Initialized(Arc::clone(&repository));
                Ok(repository)
            }
            Err(error) => {
                *state = LatchState::Failed(error.clone());
                Err(MapperError::Initialization(error))
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        let guard = self.state.lock();
        let state = guard.borrow();
        matches!(&*state, LatchState::Initialized(_))
    }
}
