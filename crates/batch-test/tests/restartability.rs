//! Runner + `InMemoryExecutor`: la identidad de instancia viene de los
//! parámetros, así que los lanzamientos sin parámetros no chocan entre sí.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use batch_core::{BatchStatus, ExecutionError, FixedClock, FnStep, Job, ParameterSet, StepContext, StepOutcome};
use batch_test::{InMemoryExecutor, JobTestRunner, LaunchError};

fn counting_job(counter: Arc<AtomicUsize>) -> Job {
    Job::linear("etl",
                vec![FnStep::new("load", move |_: &StepContext<'_>| {
                         counter.fetch_add(1, Ordering::SeqCst);
                         StepOutcome::Completed
                     }).into_handle(),
                     FnStep::noop("export").into_handle()])
}

#[test]
fn unique_launches_are_distinct_instances() {
    let counter = Arc::new(AtomicUsize::new(0));
    let clock = Arc::new(FixedClock::new(1));
    let runner = JobTestRunner::builder(counting_job(counter.clone()), InMemoryExecutor::new()).clock(clock.clone())
                                                                                               .build()
                                                                                               .unwrap();

    assert!(runner.launch_job().unwrap().is_completed());
    clock.advance(1);
    assert!(runner.launch_job().unwrap().is_completed());

    assert_eq!(counter.load(Ordering::SeqCst), 2);
    assert_eq!(runner.executor().instance_count(), 2);
}

#[test]
fn same_millisecond_relaunch_hits_the_completed_instance() {
    let counter = Arc::new(AtomicUsize::new(0));
    let runner = JobTestRunner::builder(counting_job(counter.clone()), InMemoryExecutor::new())
        .clock(Arc::new(FixedClock::new(5)))
        .build()
        .unwrap();

    runner.launch_job().unwrap();
    let err = runner.launch_job().unwrap_err();
    assert!(matches!(err, ExecutionError::InstanceAlreadyComplete { .. }));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn explicit_params_identify_the_instance() {
    let runner = JobTestRunner::new(counting_job(Arc::new(AtomicUsize::new(0))), InMemoryExecutor::new());
    let params: ParameterSet = std::iter::once(("run", "1")).collect();

    let first = runner.launch_step_with("export", params.clone()).unwrap();
    assert_eq!(first.step_name.as_deref(), Some("export"));
    assert_eq!(first.step_executions.len(), 1);

    let again = runner.launch_step_with("export", params.clone()).unwrap_err();
    assert!(matches!(again, LaunchError::Execution(ExecutionError::InstanceAlreadyComplete { .. })));
    assert_eq!(runner.executor().instance_status("export", &params), Some(BatchStatus::Completed));
}

#[test]
fn failed_step_reports_failed_status() {
    let job = Job::linear("etl",
                          vec![FnStep::new("load", |ctx: &StepContext<'_>| {
                              StepOutcome::failed(format!("cannot read {}", ctx.params.get_string("file").ok().flatten().unwrap_or("?")))
                          }).into_handle()]);
    let runner = JobTestRunner::new(job, InMemoryExecutor::new());
    let params: ParameterSet = std::iter::once(("file", "in.csv")).collect();

    let r = runner.launch_job_with(params).unwrap();
    assert_eq!(r.status, BatchStatus::Failed);
    assert_eq!(r.step_execution("load").map(|s| s.exit_description.as_str()), Some("cannot read in.csv"));
}

#[test]
fn panicking_step_does_not_leave_the_instance_running() {
    let job = Job::linear("etl",
                          vec![FnStep::new("load", |_: &StepContext<'_>| -> StepOutcome { panic!("boom") }).into_handle()]);
    let runner = JobTestRunner::new(job, InMemoryExecutor::new());
    let params: ParameterSet = std::iter::once(("run", "1")).collect();

    assert_eq!(runner.launch_step_with("load", params.clone()).unwrap().status, BatchStatus::Failed);
    let again = runner.launch_step_with("load", params.clone()).unwrap();
    assert_eq!(again.status, BatchStatus::Failed);
    assert_eq!(runner.executor().instance_status("load", &params), Some(BatchStatus::Failed));
}
