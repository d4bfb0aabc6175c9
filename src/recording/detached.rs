use std::fmt;
use std::sync::Arc;

type RecordFn<R, A> = dyn Fn(&mut R, &A) -> bool + Send + Sync;
type CombinedRecordFn<R, V, S> = dyn Fn(&mut R, &V, &S) -> bool + Send + Sync;

/// A recording callback taking one argument, not bound to any record.
///
/// Cheap to clone; clones share the callback.
pub struct DetachedRecorder<R, A: ?Sized> {
    record: Arc<RecordFn<R, A>>,
}

impl<R, A: ?Sized> DetachedRecorder<R, A> {
    pub fn new(record: impl Fn(&mut R, &A) -> bool + Send + Sync + 'static) -> Self {
        Self {
            record: Arc::new(record),
        }
    }

    /// Record `argument` into `record`.
    pub fn try_record(&self, record: &mut R, argument: &A) -> bool {
        (self.record)(record, argument)
    }

    /// Bind this recorder to `record`.
    pub fn attach<'r>(&self, record: &'r mut R) -> AttachedRecorder<'r, R, A> {
        AttachedRecorder {
            recorder: self.clone(),
            record,
        }
    }
}

impl<R, A: ?Sized> Clone for DetachedRecorder<R, A> {
    fn clone(&self) -> Self {
        Self {
            record: Arc::clone(&self.record),
        }
    }
}

impl<R, A: ?Sized> fmt::Debug for DetachedRecorder<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetachedRecorder").finish_non_exhaustive()
    }
}

/// A [`DetachedRecorder`] bound to one record.
pub struct AttachedRecorder<'r, R, A: ?Sized> {
    recorder: DetachedRecorder<R, A>,
    record: &'r mut R,
}

impl<R, A: ?Sized> AttachedRecorder<'_, R, A> {
    pub fn try_record(&mut self, argument: &A) -> bool {
        self.recorder.try_record(self.record, argument)
    }
}

impl<R, A: ?Sized> fmt::Debug for AttachedRecorder<'_, R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedRecorder").finish_non_exhaustive()
    }
}

/// A recording callback taking an argument value and its syntax.
pub struct DetachedCombinedRecorder<R, V: ?Sized, S: ?Sized> {
    record: Arc<CombinedRecordFn<R, V, S>>,
}

impl<R, V: ?Sized, S: ?Sized> DetachedCombinedRecorder<R, V, S> {
    pub fn new(record: impl Fn(&mut R, &V, &S) -> bool + Send + Sync + 'static) -> Self {
        Self {
            record: Arc::new(record),
        }
    }

    pub fn try_record(&self, record: &mut R, argument: &V, syntax: &S) -> bool {
        (self.record)(record, argument, syntax)
    }

    pub fn attach<'r>(&self, record: &'r mut R) -> AttachedCombinedRecorder<'r, R, V, S> {
        AttachedCombinedRecorder {
            recorder: self.clone(),
            record,
        }
    }
}

impl<R, V: ?Sized, S: ?Sized> Clone for DetachedCombinedRecorder<R, V, S> {
    fn clone(&self) -> Self {
        Self {
            record: Arc::clone(&self.record),
        }
    }
}

impl<R, V: ?Sized, S: ?Sized> fmt::Debug for DetachedCombinedRecorder<R, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetachedCombinedRecorder")
            .finish_non_exhaustive()
    }
}

/// A [`DetachedCombinedRecorder`] bound to one record.
pub struct AttachedCombinedRecorder<'r, R, V: ?Sized, S: ?Sized> {
    recorder: DetachedCombinedRecorder<R, V, S>,
    record: &'r mut R,
}

impl<R, V: ?Sized, S: ?Sized> AttachedCombinedRecorder<'_, R, V, S> {
    pub fn try_record(&mut self, argument: &V, syntax: &S) -> bool {
        self.recorder.try_record(self.record, argument, syntax)
    }
}

impl<R, V: ?Sized, S: ?Sized> fmt::Debug for AttachedCombinedRecorder<'_, R, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedCombinedRecorder")
            .finish_non_exhaustive()
    }
}
