//! Slack export conversion
//!
//! Export directory → collections of records → leaf nodes under one
//! container per collection → IntermediateFile with static catalogs.

mod converter;
mod error;
mod export;
mod mapper;
mod records;

pub use converter::{attribute_catalog, convert, supertag_catalog, SlackConverter};
pub use error::{ConvertError, ConvertResult};
pub use export::SlackExport;
pub use mapper::{
    map_collection, map_record, map_user, map_user_collection, Mapped, NameTruncation,
};
pub use records::{CollectionKind, SlackRecord, SlackUser};
