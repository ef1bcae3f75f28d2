//! Demo: lanza un job lineal completo y luego un step aislado.

use std::error::Error;

use batchflow_rust::{FnStep, InMemoryExecutor, Job, JobTestRunner, ParametersBuilder, RunnerConfig, StepContext,
                     StepOutcome};
use log::info;

fn demo_job() -> Job {
    let validate = FnStep::new("validate", |ctx: &StepContext<'_>| {
        match ctx.params.get_string("mode") {
            Ok(Some("strict")) => StepOutcome::failed("strict mode rejects the sample rows"),
            Ok(_) => StepOutcome::Completed,
            Err(e) => StepOutcome::failed(e.to_string()),
        }
    });
    Job::linear("etl",
                vec![FnStep::noop("load").into_handle(),
                     validate.into_handle(),
                     FnStep::noop("export").into_handle()])
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = RunnerConfig::from_env()?;
    let runner = JobTestRunner::builder(demo_job(), InMemoryExecutor::new()).config(config)
                                                                            .build()?;
    info!("demo runner ready for job [{}]", runner.job().name());

    // Job completo con parámetros únicos
    let full = runner.launch_job()?;
    println!("[job] status={:?} steps={}", full.status, full.step_executions.len());
    println!("{}", serde_json::to_string_pretty(&full)?);

    // Step aislado con parámetros explícitos
    let params = ParametersBuilder::new().add_string("mode", "strict").build()?;
    let single = runner.launch_step_with("validate", params)?;
    println!("[step] {} -> {:?}: {}",
             single.step_name.as_deref().unwrap_or("?"),
             single.status,
             single.exit_description);

    // Nombre inexistente: error de resolución, el ejecutor no se invoca
    match runner.launch_step("publish") {
        Ok(r) => println!("[step] unexpected result {:?}", r.status),
        Err(e) => println!("[step] {e}"),
    }
    println!("instances recorded: {}", runner.executor().instance_count());
    Ok(())
}
