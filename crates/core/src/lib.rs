pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod normalize;
pub mod reference;
pub mod report;

pub use domain::packaging::{BoxDimensions, BoxGrade, PackagingResult, WeightCategory};
pub use domain::product::{NormalizedProduct, RawProductInput};
pub use engine::{estimate_with_tables, DeterministicPackagingEngine, PackagingEngine};
pub use errors::NormalizeError;
pub use normalize::normalize;
pub use reference::{
    DiscountSchedule, DiscountTier, FragilityProfile, MaterialCatalog, ReferenceTableError,
    ReferenceTables,
};
pub use report::BriefRenderer;
