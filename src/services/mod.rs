pub mod codes;
pub mod intake;
pub mod messaging;
pub mod phone;
pub mod reporting;
pub mod sessions;
