//! Propiedades de resolución observables desde fuera del crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use batch_core::{Job, LinearTopology, ResolveError, Step, StepContext, StepHandle, StepOutcome,
                 StepResolver};

/// Step que cuenta cuántas veces se consulta su nombre.
#[derive(Debug)]
struct CountingStep {
    name: String,
    name_reads: Arc<AtomicUsize>,
}

impl Step for CountingStep {
    fn name(&self) -> &str {
        self.name_reads.fetch_add(1, Ordering::SeqCst);
        &self.name
    }

    fn execute(&self, _ctx: &StepContext<'_>) -> StepOutcome {
        StepOutcome::Completed
    }
}

fn counting_job(names: &[&str]) -> (Job, Vec<Arc<AtomicUsize>>) {
    let counters: Vec<Arc<AtomicUsize>> = names.iter().map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let steps: Vec<StepHandle> = names.iter()
                                      .zip(counters.iter())
                                      .map(|(n, c)| {
                                          Arc::new(CountingStep { name: n.to_string(),
                                                                  name_reads: c.clone() }) as StepHandle
                                      })
                                      .collect();
    (Job::new("etl", LinearTopology::new(steps)), counters)
}

#[test]
fn linear_topology_is_scanned_once_across_many_resolutions() {
    let (job, counters) = counting_job(&["load", "validate", "export"]);
    let resolver = StepResolver::new(job);

    for _ in 0..5 {
        resolver.resolve("validate").unwrap();
        resolver.resolve("export").unwrap();
        assert!(resolver.resolve("missing").is_err());
    }

    for c in &counters {
        assert_eq!(c.load(Ordering::SeqCst), 1, "each step name must be read exactly once");
    }
}

#[test]
fn absent_name_fails_the_same_way_every_time() {
    let (job, _) = counting_job(&["load"]);
    let resolver = StepResolver::new(job);
    let first = resolver.resolve("nope").unwrap_err();
    for _ in 0..3 {
        assert_eq!(resolver.resolve("nope").unwrap_err(), first);
    }
    assert_eq!(first, ResolveError::StepNotFound { name: "nope".into() });
}

#[test]
fn concurrent_first_calls_build_a_single_index() {
    let (job, counters) = counting_job(&["a", "b", "c", "d"]);
    let resolver = Arc::new(StepResolver::new(job));

    let handles: Vec<_> = (0..8).map(|i| {
                                    let r = resolver.clone();
                                    thread::spawn(move || {
                                        let name = ["a", "b", "c", "d"][i % 4];
                                        r.resolve(name).unwrap()
                                    })
                                })
                                .collect();
    let resolved: Vec<StepHandle> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // los steps con el mismo nombre son el mismo Arc
    for (i, s) in resolved.iter().enumerate() {
        assert!(Arc::ptr_eq(s, &resolved[i % 4]));
    }
    for c in &counters {
        assert_eq!(c.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn each_resolver_indexes_only_its_own_job() {
    let (a, a_counters) = counting_job(&["load"]);
    let (b, _) = counting_job(&["export"]);
    let ra = StepResolver::new(a);
    let rb = StepResolver::new(b);

    ra.resolve("load").unwrap();
    assert_eq!(rb.resolve("export").unwrap().name(), "export");
    assert_eq!(rb.resolve("load").unwrap_err(), ResolveError::StepNotFound { name: "load".into() });
    // el índice de `b` no volvió a recorrer la topología de `a`
    assert_eq!(a_counters[0].load(Ordering::SeqCst), 1);
}
