use log::debug;

use crate::{keywords::InstructionTable, module::AssemblyJob, pass_zero::ZerothPass};

/// Runs the passes of the assembler over every module of a job.
///
/// Modules are handled one at a time in the order they were supplied and
/// share no state; each gets a fresh zeroth pass. Address assignment and code
/// emission will hang off [`TwoPassAssembler::run`] once they exist.
pub struct TwoPassAssembler<T> {
    table: T,
}

impl<T: InstructionTable> TwoPassAssembler<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn run(&self, job: &mut AssemblyJob) {
        for module in job.modules_mut() {
            debug!("zeroth pass over {}", module.name());
            ZerothPass::new(module, &self.table).run();
        }
    }
}
