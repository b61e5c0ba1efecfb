use crate::modules::bookings::core::booking::{
    BookingOrigin, BookingRecord, BookingStatus, SlotReference,
};
use crate::modules::bookings::core::wallet::{Transaction, TransactionType};
use crate::modules::bookings::use_cases::submit_booking::command::SubmitBooking;
use crate::modules::bookings::use_cases::submit_booking::decision::{DecideError, Decision};
use chrono::Local;

pub fn decide_submit(command: SubmitBooking) -> Decision {
    if command.lot.id.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingLot,
        };
    }
    if command.end_time <= command.start_time {
        return Decision::Rejected {
            reason: DecideError::InvalidInterval,
        };
    }
    if !command.total_amount.is_finite() || command.total_amount < 0.0 {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount,
        };
    }

    let fallback_debit = Transaction {
        id: command.booking_id.clone(),
        kind: TransactionType::Debit,
        title: format!("EV Charging: {}", command.lot.display_name()),
        amount: command.total_amount,
        timestamp_display: command
            .requested_at
            .with_timezone(&Local)
            .format("%-m/%-d/%Y %-I:%M:%S %p")
            .to_string(),
        is_local: true,
        created_at: Some(command.requested_at.timestamp_millis()),
    };
    let booking = BookingRecord {
        id: command.booking_id,
        lot: command.lot,
        slot: SlotReference {
            label: command.slot_label,
        },
        vehicle_tag: command.vehicle_tag,
        start_time: command.start_time,
        end_time: command.end_time,
        total_amount: command.total_amount,
        status: BookingStatus::Confirmed,
        origin: BookingOrigin::Remote,
    };

    Decision::Accepted {
        booking,
        fallback_debit,
    }
}
