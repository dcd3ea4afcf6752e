/// Accrual and usage calculation over a state snapshot
pub mod ledger;

/// Default-entry reconciliation and suppression
pub mod reconcile;
