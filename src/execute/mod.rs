pub mod make_payment;
pub mod oracle_approval;
pub mod register_payable;
