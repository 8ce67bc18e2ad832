/// Handle to a live listener. Dropping it runs the cleanup exactly once.
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        (calls, subscription)
    }

    #[test]
    fn drop_runs_cleanup_once() {
        let (calls, subscription) = counting();
        assert_eq!(calls.get(), 0);
        drop(subscription);
        assert_eq!(calls.get(), 1);
    }
}
