//! Running state of one schedule leg during amortization

/// Interest/principal split of a single monthly payment
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentSplit {
    /// Interest accrued this month
    pub interest: f64,

    /// Principal retired this month (includes any extra payment)
    pub principal: f64,
}

/// Balance and accumulated interest of one leg (standard or accelerated)
#[derive(Debug, Clone)]
pub struct LegState {
    /// Outstanding balance after the most recent payment
    pub balance: f64,

    /// Interest paid since month 1
    pub interest_paid: f64,

    /// Month in which the balance was retired, if it has been
    pub payoff_month: Option<u32>,
}

impl LegState {
    /// Start a leg at the full loan principal
    pub fn new(principal: f64) -> Self {
        Self {
            balance: principal,
            interest_paid: 0.0,
            payoff_month: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.payoff_month.is_some()
    }

    /// Apply one monthly payment plus `extra` principal.
    ///
    /// The principal portion is capped at the outstanding balance so the
    /// balance never goes negative on the final payment.
    pub fn apply_payment(&mut self, monthly_rate: f64, payment: f64, extra: f64) -> PaymentSplit {
        let interest = self.balance * monthly_rate;
        let available = (payment - interest) + extra;
        let principal = available.min(self.balance);

        self.interest_paid += interest;
        self.balance -= principal;

        PaymentSplit { interest, principal }
    }

    /// Mark the leg retired if the balance has reached zero
    pub fn check_payoff(&mut self, month: u32) -> bool {
        if self.payoff_month.is_none() && self.balance <= 0.0 {
            self.payoff_month = Some(month);
            return true;
        }
        false
    }

    /// Balance for display, floored at zero
    pub fn display_balance(&self) -> f64 {
        self.balance.max(0.0)
    }
}
