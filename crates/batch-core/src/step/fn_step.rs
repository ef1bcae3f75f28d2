use std::fmt;
use std::sync::Arc;

use super::{Step, StepContext, StepHandle, StepOutcome};

/// Step construido a partir de un closure.
pub struct FnStep<F> {
    name: String,
    run: F,
}

fn complete(_: &StepContext<'_>) -> StepOutcome {
    StepOutcome::Completed
}

impl<F> FnStep<F>
    where F: Fn(&StepContext<'_>) -> StepOutcome + Send + Sync
{
    pub fn new(name: impl Into<String>, run: F) -> Self {
        Self { name: name.into(), run }
    }

    pub fn into_handle(self) -> StepHandle
        where F: 'static
    {
        Arc::new(self)
    }
}

impl FnStep<fn(&StepContext<'_>) -> StepOutcome> {
    /// Step que siempre termina bien.
    pub fn noop(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               run: complete }
    }
}

impl<F> fmt::Debug for FnStep<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStep").field("name", &self.name).finish()
    }
}

impl<F> Step for FnStep<F>
    where F: Fn(&StepContext<'_>) -> StepOutcome + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, ctx: &StepContext<'_>) -> StepOutcome {
        (self.run)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;

    #[test]
    fn closure_sees_context() {
        let step = FnStep::new("load", |ctx: &StepContext<'_>| {
            if ctx.params.contains_key("fail") {
                StepOutcome::failed(format!("{} asked to fail", ctx.step_name))
            } else {
                StepOutcome::Completed
            }
        });
        let ok = ParameterSet::new();
        let ctx = StepContext { job_name: "j", step_name: "load", params: &ok };
        assert!(step.execute(&ctx).is_completed());

        let bad: ParameterSet = std::iter::once(("fail", "yes")).collect();
        let ctx = StepContext { job_name: "j", step_name: "load", params: &bad };
        assert_eq!(step.execute(&ctx), StepOutcome::failed("load asked to fail"));
    }

    #[test]
    fn noop_handle_keeps_name() {
        let h = FnStep::noop("export").into_handle();
        assert_eq!(h.name(), "export");
        assert!(format!("{h:?}").contains("export"));
    }
}
