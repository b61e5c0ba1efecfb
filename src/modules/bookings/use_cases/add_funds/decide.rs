use crate::modules::bookings::adapters::outbound::remote_wallet::AddFundsRequest;
use crate::modules::bookings::use_cases::add_funds::command::AddFunds;
use crate::modules::bookings::use_cases::add_funds::decision::{DecideError, Decision};

pub fn decide_add_funds(command: AddFunds) -> Decision {
    if !command.amount.is_finite() || command.amount <= 0.0 {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount,
        };
    }
    let upi_id = command.upi_id.trim();
    if !upi_id.contains('@') {
        return Decision::Rejected {
            reason: DecideError::InvalidUpiId,
        };
    }

    Decision::Accepted {
        request: AddFundsRequest {
            amount: command.amount,
            upi_id: upi_id.to_string(),
        },
    }
}
