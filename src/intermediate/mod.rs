//! Intermediate document model: node tree, catalogs and summary

mod document;
mod factory;
mod node;


pub use document::{Attribute, IntermediateFile, Summary, Supertag};
pub use factory::{Clock, IdGenerator, NodeFactory, SequentialIdGenerator, UuidIdGenerator};
pub use node::{IntermediateNode, NodeType, NodeUid};
