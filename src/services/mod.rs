pub mod admin_service;
pub mod transfer_service;

pub use admin_service::{AdminError, AdminService};
pub use transfer_service::{ImportSummary, PortfolioDocument, TransferError, TransferService};
