//! Opt-in counters of field operations and of the reductions they were forced into.

use serde::{Deserialize, Serialize};

/// Field operations whose forced reductions are tracked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldOp {
    Add,
    Neg,
    Mul,
    Square,
}

/// Receives one call per tracked operation.
pub trait ReductionObserver {
    fn observe(&mut self, op: FieldOp, forced_reduction: bool);
}

impl ReductionObserver for () {
    #[inline(always)]
    fn observe(&mut self, _op: FieldOp, _forced_reduction: bool) {}
}

/// Totals (`t*`) and forced reductions (`r*`) per operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionStats {
    pub tadd: u64,
    pub radd: u64,
    pub tneg: u64,
    pub rneg: u64,
    pub tmul: u64,
    pub rmul: u64,
    pub tsqr: u64,
    pub rsqr: u64,
}

impl ReductionObserver for ReductionStats {
    fn observe(&mut self, op: FieldOp, forced_reduction: bool) {
        let (total, reduced) = match op {
            FieldOp::Add => (&mut self.tadd, &mut self.radd),
            FieldOp::Neg => (&mut self.tneg, &mut self.rneg),
            FieldOp::Mul => (&mut self.tmul, &mut self.rmul),
            FieldOp::Square => (&mut self.tsqr, &mut self.rsqr),
        };
        *total += 1;
        if forced_reduction {
            *reduced += 1;
        }
    }
}
