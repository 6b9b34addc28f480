use crate::frame::Frame;
use crate::job::Job;

/// Runs jobs in a fixed order every frame.
///
/// Ordering is `(priority, insertion_order)` and is settled when a job is
/// added, so the per-frame path never sorts. Later jobs composite over
/// earlier ones.
pub struct Scheduler<C: ?Sized> {
    next_order: u64,
    jobs: Vec<(u64, Job<C>)>,
}

impl<C: ?Sized> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            next_order: 0,
            jobs: Vec::new(),
        }
    }

    pub fn add_job(&mut self, job: Job<C>) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.jobs.push((order, job));
        self.jobs.sort_by(|(oa, a), (ob, b)| {
            a.priority.cmp(&b.priority).then_with(|| oa.cmp(ob))
        });
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Job ids in run order.
    pub fn job_ids(&self) -> Vec<&'static str> {
        self.jobs.iter().map(|(_, job)| job.id).collect()
    }

    /// Run every job for the given frame. Returns how many ran.
    pub fn run_frame(&self, frame: &Frame, ctx: &mut C) -> usize {
        for (_order, job) in &self.jobs {
            (job.run)(frame, ctx);
        }
        self.jobs.len()
    }
}
