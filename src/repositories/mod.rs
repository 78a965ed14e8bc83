pub mod audit;

pub use audit::{AuditRepository, AuditRepositoryTrait, NewAudit};
