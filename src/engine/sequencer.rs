//! Step sequencer - strict one-at-a-time execution of transition actions.
//!
//! A navigation is a queue of deferred actions. Each action is invoked with
//! a completion callback that advances the queue, so a step never begins
//! before the previous step's completion has fired. Hosts may complete
//! synchronously or later; either way the ordering holds.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::types::{Completion, TransitionAction};

pub(crate) struct StepQueue {
    steps: RefCell<VecDeque<TransitionAction>>,
    finished: RefCell<Option<Completion>>,
}

impl StepQueue {
    pub(crate) fn new(steps: Vec<TransitionAction>, finished: Option<Completion>) -> Rc<Self> {
        Rc::new(Self {
            steps: RefCell::new(steps.into()),
            finished: RefCell::new(finished),
        })
    }

    /// Run the next step, or fire the finished callback once the queue is
    /// drained.
    pub(crate) fn run(self: Rc<Self>) {
        let next = self.steps.borrow_mut().pop_front();
        match next {
            Some(action) => {
                log::trace!("running step ({} queued behind it)", self.steps.borrow().len());
                let queue = Rc::clone(&self);
                action(Box::new(move || queue.run()));
            }
            None => {
                if let Some(finished) = self.finished.borrow_mut().take() {
                    finished();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_synchronous_steps_run_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut steps: Vec<TransitionAction> = Vec::new();
        for i in 0..3 {
            let order = Rc::clone(&order);
            steps.push(Box::new(move |done| {
                order.borrow_mut().push(i);
                done();
            }));
        }

        let finished = Rc::new(RefCell::new(false));
        let finished_flag = Rc::clone(&finished);
        StepQueue::new(
            steps,
            Some(Box::new(move || *finished_flag.borrow_mut() = true)),
        )
        .run();

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert!(*finished.borrow());
    }

    #[test]
    fn test_next_step_waits_for_completion() {
        // Steps park their completions instead of firing them, simulating
        // an animating host.
        let pending: Rc<RefCell<Vec<Completion>>> = Rc::new(RefCell::new(Vec::new()));
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut steps: Vec<TransitionAction> = Vec::new();
        for i in 0..2 {
            let pending = Rc::clone(&pending);
            let order = Rc::clone(&order);
            steps.push(Box::new(move |done| {
                order.borrow_mut().push(i);
                pending.borrow_mut().push(done);
            }));
        }

        StepQueue::new(steps, None).run();
        assert_eq!(*order.borrow(), vec![0]);

        let done = pending.borrow_mut().pop().unwrap();
        done();
        assert_eq!(*order.borrow(), vec![0, 1]);

        let done = pending.borrow_mut().pop().unwrap();
        done();
        assert_eq!(*order.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_empty_queue_fires_finished() {
        let finished = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&finished);
        StepQueue::new(Vec::new(), Some(Box::new(move || *flag.borrow_mut() = true))).run();
        assert!(*finished.borrow());
    }
}
