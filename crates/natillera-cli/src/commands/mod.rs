pub mod contributions;
pub mod loans;
pub mod mora;
pub mod settlement;
