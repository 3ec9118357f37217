pub mod repository;

pub use repository::OrganizationRepository;
