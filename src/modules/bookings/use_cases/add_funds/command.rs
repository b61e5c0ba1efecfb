#[derive(Debug, Clone, PartialEq)]
pub struct AddFunds {
    pub amount: f64,
    pub upi_id: String,
}
