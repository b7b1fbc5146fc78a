//! Optional instrumentation around a calculator's lifetime.
//!
//! Hooks are invoked explicitly by whoever creates and discards the
//! calculator; the calculator itself never logs.

use log::info;

use crate::calculator::AmortizationCalculator;
use crate::format::fixed2;

pub trait LifecycleHook {
    fn on_create(&self);
    fn on_release(&self, calc: &AmortizationCalculator);
}

/// Logs creation and release at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHook;

impl LifecycleHook for LogHook {
    fn on_create(&self) {
        info!("creating amortization calculator");
    }

    fn on_release(&self, calc: &AmortizationCalculator) {
        info!(
            "releasing amortization calculator (loan amount = {})",
            fixed2(calc.loan_amount())
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl LifecycleHook for NoopHook {
    fn on_create(&self) {}
    fn on_release(&self, _calc: &AmortizationCalculator) {}
}

/// Run `f` against a fresh calculator, firing the hook on either side.
pub fn with_calculator<H, F, R>(hook: &H, f: F) -> R
where
    H: LifecycleHook + ?Sized,
    F: FnOnce(&mut AmortizationCalculator) -> R,
{
    hook.on_create();
    let mut calc = AmortizationCalculator::new();
    let result = f(&mut calc);
    hook.on_release(&calc);
    result
}
