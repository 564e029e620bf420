//! `SeaORM` entities for the ledger schema.

pub mod classifications;
pub mod coas;
pub mod departments;
pub mod journal_details;
pub mod journals;
pub mod projects;

pub mod prelude {
    //! Entity re-exports.

    pub use super::classifications::Entity as Classifications;
    pub use super::coas::Entity as Coas;
    pub use super::departments::Entity as Departments;
    pub use super::journal_details::Entity as JournalDetails;
    pub use super::journals::Entity as Journals;
    pub use super::projects::Entity as Projects;
}
