use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use batch_core::{BatchStatus, ExecutionError, ExecutionResult, Job, JobExecutor, ParameterSet, StepContext,
                 StepExecution, StepHandle, StepOutcome};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{info, warn};

/// Identidad de instancia: nombre del job + clave de los parámetros.
type InstanceKey = (String, String);

/// Ejecutor síncrono en memoria.
///
/// Corre los steps en orden de declaración (en grafos, los estados step en
/// orden de inserción; los nodos de control se ignoran) y se detiene en el
/// primer fallo. Lleva un registro de instancias:
/// - instancia completada: relanzarla falla con `InstanceAlreadyComplete`;
/// - instancia en curso: `AlreadyRunning`;
/// - instancia fallida o detenida: puede relanzarse.
///
/// Un step lanzado aislado se registra como un job de un solo step con su
/// propio nombre.
#[derive(Debug, Default)]
pub struct InMemoryExecutor {
    instances: DashMap<InstanceKey, BatchStatus>,
}

impl InMemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Último estado conocido de la instancia `(job_name, params)`.
    pub fn instance_status(&self, job_name: &str, params: &ParameterSet) -> Option<BatchStatus> {
        self.instances
            .get(&(job_name.to_string(), params.identity_key()))
            .map(|s| *s)
    }

    fn begin(&self, job_name: &str, params: &ParameterSet) -> Result<InstanceKey, ExecutionError> {
        let key = (job_name.to_string(), params.identity_key());
        match self.instances.entry(key.clone()) {
            Entry::Occupied(mut e) => match e.get().to_owned() {
                BatchStatus::Completed => Err(ExecutionError::InstanceAlreadyComplete { job: key.0,
                                                                                       instance: key.1 }),
                BatchStatus::Started => Err(ExecutionError::AlreadyRunning { job: key.0,
                                                                            instance: key.1 }),
                _ => {
                    e.insert(BatchStatus::Started);
                    Ok(key)
                }
            },
            Entry::Vacant(v) => {
                v.insert(BatchStatus::Started);
                Ok(key)
            }
        }
    }

    fn execute(&self, job_name: &str, steps: &[StepHandle], params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        let key = self.begin(job_name, &params)?;
        let started_at = Utc::now();
        info!("job [{job_name}] launched with parameters {}", describe(&params));

        let mut executions = Vec::with_capacity(steps.len());
        let mut status = BatchStatus::Completed;
        let mut exit_description = String::new();
        for step in steps {
            let step_name = step.name();
            let ctx = StepContext { job_name,
                                    step_name,
                                    params: &params };
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| step.execute(&ctx)))
                .unwrap_or_else(|payload| StepOutcome::failed(format!("step panicked: {}", panic_message(&*payload))));
            match outcome {
                StepOutcome::Completed => {
                    info!("step [{step_name}] completed");
                    executions.push(StepExecution { step_name: step_name.to_string(),
                                                    status: BatchStatus::Completed,
                                                    exit_description: String::new() });
                }
                StepOutcome::Failed { message } => {
                    warn!("step [{step_name}] failed: {message}");
                    exit_description = format!("step [{step_name}] failed: {message}");
                    executions.push(StepExecution { step_name: step_name.to_string(),
                                                    status: BatchStatus::Failed,
                                                    exit_description: message });
                    status = BatchStatus::Failed;
                    break;
                }
            }
        }

        self.instances.insert(key, status);
        info!("job [{job_name}] finished with status {status:?}");
        Ok(ExecutionResult::new(job_name, params, status).with_exit_description(exit_description)
                                                         .with_step_executions(executions)
                                                         .with_times(started_at, Utc::now()))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload.downcast_ref::<&str>()
           .copied()
           .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
           .unwrap_or("unknown panic payload")
}

fn describe(params: &ParameterSet) -> String {
    let items: Vec<String> = params.iter().map(|(k, p)| format!("{k}={}", p.value)).collect();
    format!("{{{}}}", items.join(", "))
}

impl JobExecutor for InMemoryExecutor {
    fn run_job(&self, job: &Job, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        let steps = job.executable_steps();
        if steps.is_empty() {
            return Err(ExecutionError::Validation(format!("job [{}] has no executable steps", job.name())));
        }
        self.execute(job.name(), &steps, params)
    }

    fn run_step(&self, step: &StepHandle, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        let name = step.name().to_string();
        let result = self.execute(&name, std::slice::from_ref(step), params)?;
        Ok(result.with_step_name(name))
    }
}
