/// LIFO list of undo steps registered while a component is being set up.
///
/// Each step is pushed only after the thing it undoes succeeded, so running
/// the list unwinds a partial setup exactly. Remaining steps run on drop.
#[derive(Default)]
pub struct Teardown {
    steps: Vec<(&'static str, Box<dyn FnOnce()>)>,
}

impl Teardown {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, name: &'static str, step: impl FnOnce() + 'static) {
        self.steps.push((name, Box::new(step)));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(name, _)| *name).collect()
    }

    /// Run every step, newest first. Returns how many ran.
    pub fn run(&mut self) -> usize {
        let mut ran = 0;
        while let Some((name, step)) = self.steps.pop() {
            log::debug!("teardown: {name}");
            step();
            ran += 1;
        }
        ran
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Teardown")
            .field("steps", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Teardown;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_newest_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut td = Teardown::new();
        for name in ["resize", "observer", "frame"] {
            let log = log.clone();
            td.push(name, move || log.borrow_mut().push(name));
        }
        assert_eq!(td.run(), 3);
        assert_eq!(*log.borrow(), vec!["frame", "observer", "resize"]);
        assert!(td.is_empty());
        assert_eq!(td.run(), 0);
    }

    #[test]
    fn drop_runs_remaining_steps() {
        let hits = Rc::new(RefCell::new(0));
        {
            let mut td = Teardown::new();
            let hits = hits.clone();
            td.push("listener", move || *hits.borrow_mut() += 1);
        }
        assert_eq!(*hits.borrow(), 1);
    }
}
